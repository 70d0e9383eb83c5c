// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Crate-wide error definitions.
//!
//! This module defines a unified `Error` enum used throughout the ecosystem.
//! Every failure the YouTube API can report, as well as every caller-side
//! validation failure, is a variant carrying an [`ErrorRecord`]. Lower level
//! failures (network, JSON decoding, client settings) have their own variants.

use std::fmt;

use serde_json::Value;

/// Payload attached to every API-level error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    message: String,
    status_code: Option<u16>,
    raw_payload: Option<Value>,
}

impl ErrorRecord {
    /// Creates a record carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            raw_payload: None,
        }
    }

    /// Creates a record for a classified provider response.
    pub fn with_response(message: impl Into<String>, status_code: u16, raw_payload: Value) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status_code),
            raw_payload: Some(raw_payload),
        }
    }

    /// Creates a record with an explicit status code and payload.
    pub fn from_parts(
        message: impl Into<String>,
        status_code: Option<u16>,
        raw_payload: Option<Value>,
    ) -> Self {
        Self {
            message: message.into(),
            status_code,
            raw_payload,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// The provider's original document, kept for diagnostics.
    pub fn raw_payload(&self) -> Option<&Value> {
        self.raw_payload.as_ref()
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "code={code} mess={}", self.message),
            None => write!(f, "code=None mess={}", self.message),
        }
    }
}

/// Tag identifying the category of an API-level [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    VariableTypeError,
    VariableValueError,
    WrongApiName,
    ProcessingFailure,
    InvalidApiKey,
    UnknownField,
    InvalidParameterValue,
    InvalidPageToken,
    MissingRequiredParameter,
    UnexpectedParameter,
    NoAuthorized,
    ExceededDailyLimit,
    ChannelClosed,
    ChannelSuspended,
    ForbiddenError,
    ChannelNotExist,
    InvalidOwnerAccount,
    InvalidVideoId,
    InvalidUserName,
    CommentsDisabled,
    InvalidCommentThreadId,
    InvalidChannelId,
    ChannelForbidden,
    PlaylistItemsNotAccessible,
    HistoryNotAccessible,
    WatchLaterNotAccessible,
    InvalidPlaylistId,
    PlaylistForbidden,
}

impl ErrorKind {
    /// Returns `true` for errors detected locally, before any network call.
    pub fn is_validation(self) -> bool {
        matches!(self, Self::VariableTypeError | Self::VariableValueError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    // Caller-side validation
    #[error("Variable type error: {0}")]
    VariableTypeError(ErrorRecord),
    #[error("Variable value error: {0}")]
    VariableValueError(ErrorRecord),

    // Provider-side responses
    #[error("Wrong api name: {0}")]
    WrongApiName(ErrorRecord),
    #[error("Processing failure: {0}")]
    ProcessingFailure(ErrorRecord),
    #[error("Invalid api key: {0}")]
    InvalidApiKey(ErrorRecord),
    #[error("Unknown field: {0}")]
    UnknownField(ErrorRecord),
    #[error("Invalid parameter value: {0}")]
    InvalidParameterValue(ErrorRecord),
    #[error("Invalid page token: {0}")]
    InvalidPageToken(ErrorRecord),
    #[error("Missing required parameter: {0}")]
    MissingRequiredParameter(ErrorRecord),
    #[error("Unexpected parameter: {0}")]
    UnexpectedParameter(ErrorRecord),
    #[error("Not authorized: {0}")]
    NoAuthorized(ErrorRecord),
    #[error("Exceeded daily limit: {0}")]
    ExceededDailyLimit(ErrorRecord),
    #[error("Channel closed: {0}")]
    ChannelClosed(ErrorRecord),
    #[error("Channel suspended: {0}")]
    ChannelSuspended(ErrorRecord),
    #[error("Forbidden: {0}")]
    ForbiddenError(ErrorRecord),
    #[error("Channel does not exist: {0}")]
    ChannelNotExist(ErrorRecord),
    #[error("Invalid owner account: {0}")]
    InvalidOwnerAccount(ErrorRecord),
    #[error("Invalid video id: {0}")]
    InvalidVideoId(ErrorRecord),
    #[error("Invalid user name: {0}")]
    InvalidUserName(ErrorRecord),
    #[error("Comments disabled: {0}")]
    CommentsDisabled(ErrorRecord),
    #[error("Invalid comment thread id: {0}")]
    InvalidCommentThreadId(ErrorRecord),
    #[error("Invalid channel id: {0}")]
    InvalidChannelId(ErrorRecord),
    #[error("Channel forbidden: {0}")]
    ChannelForbidden(ErrorRecord),
    #[error("Playlist items not accessible: {0}")]
    PlaylistItemsNotAccessible(ErrorRecord),
    #[error("History not accessible: {0}")]
    HistoryNotAccessible(ErrorRecord),
    #[error("Watch later not accessible: {0}")]
    WatchLaterNotAccessible(ErrorRecord),
    #[error("Invalid playlist id: {0}")]
    InvalidPlaylistId(ErrorRecord),
    #[error("Playlist forbidden: {0}")]
    PlaylistForbidden(ErrorRecord),

    // Below the API level
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse the response")]
    ParseError(#[from] serde_json::Error),

    #[error("Client settings error: {error}")]
    SettingsError { error: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds the variant matching `kind`.
    pub fn new(kind: ErrorKind, record: ErrorRecord) -> Self {
        match kind {
            ErrorKind::VariableTypeError => Self::VariableTypeError(record),
            ErrorKind::VariableValueError => Self::VariableValueError(record),
            ErrorKind::WrongApiName => Self::WrongApiName(record),
            ErrorKind::ProcessingFailure => Self::ProcessingFailure(record),
            ErrorKind::InvalidApiKey => Self::InvalidApiKey(record),
            ErrorKind::UnknownField => Self::UnknownField(record),
            ErrorKind::InvalidParameterValue => Self::InvalidParameterValue(record),
            ErrorKind::InvalidPageToken => Self::InvalidPageToken(record),
            ErrorKind::MissingRequiredParameter => Self::MissingRequiredParameter(record),
            ErrorKind::UnexpectedParameter => Self::UnexpectedParameter(record),
            ErrorKind::NoAuthorized => Self::NoAuthorized(record),
            ErrorKind::ExceededDailyLimit => Self::ExceededDailyLimit(record),
            ErrorKind::ChannelClosed => Self::ChannelClosed(record),
            ErrorKind::ChannelSuspended => Self::ChannelSuspended(record),
            ErrorKind::ForbiddenError => Self::ForbiddenError(record),
            ErrorKind::ChannelNotExist => Self::ChannelNotExist(record),
            ErrorKind::InvalidOwnerAccount => Self::InvalidOwnerAccount(record),
            ErrorKind::InvalidVideoId => Self::InvalidVideoId(record),
            ErrorKind::InvalidUserName => Self::InvalidUserName(record),
            ErrorKind::CommentsDisabled => Self::CommentsDisabled(record),
            ErrorKind::InvalidCommentThreadId => Self::InvalidCommentThreadId(record),
            ErrorKind::InvalidChannelId => Self::InvalidChannelId(record),
            ErrorKind::ChannelForbidden => Self::ChannelForbidden(record),
            ErrorKind::PlaylistItemsNotAccessible => Self::PlaylistItemsNotAccessible(record),
            ErrorKind::HistoryNotAccessible => Self::HistoryNotAccessible(record),
            ErrorKind::WatchLaterNotAccessible => Self::WatchLaterNotAccessible(record),
            ErrorKind::InvalidPlaylistId => Self::InvalidPlaylistId(record),
            ErrorKind::PlaylistForbidden => Self::PlaylistForbidden(record),
        }
    }

    /// Shorthand for a [`Error::VariableTypeError`] without status or payload.
    pub fn variable_type(message: impl Into<String>) -> Self {
        Self::VariableTypeError(ErrorRecord::new(message))
    }

    /// Shorthand for a [`Error::VariableValueError`] without status or payload.
    pub fn variable_value(message: impl Into<String>) -> Self {
        Self::VariableValueError(ErrorRecord::new(message))
    }

    /// The kind of an API-level error, `None` for transport, parse and settings failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        let kind = match self {
            Self::VariableTypeError(_) => ErrorKind::VariableTypeError,
            Self::VariableValueError(_) => ErrorKind::VariableValueError,
            Self::WrongApiName(_) => ErrorKind::WrongApiName,
            Self::ProcessingFailure(_) => ErrorKind::ProcessingFailure,
            Self::InvalidApiKey(_) => ErrorKind::InvalidApiKey,
            Self::UnknownField(_) => ErrorKind::UnknownField,
            Self::InvalidParameterValue(_) => ErrorKind::InvalidParameterValue,
            Self::InvalidPageToken(_) => ErrorKind::InvalidPageToken,
            Self::MissingRequiredParameter(_) => ErrorKind::MissingRequiredParameter,
            Self::UnexpectedParameter(_) => ErrorKind::UnexpectedParameter,
            Self::NoAuthorized(_) => ErrorKind::NoAuthorized,
            Self::ExceededDailyLimit(_) => ErrorKind::ExceededDailyLimit,
            Self::ChannelClosed(_) => ErrorKind::ChannelClosed,
            Self::ChannelSuspended(_) => ErrorKind::ChannelSuspended,
            Self::ForbiddenError(_) => ErrorKind::ForbiddenError,
            Self::ChannelNotExist(_) => ErrorKind::ChannelNotExist,
            Self::InvalidOwnerAccount(_) => ErrorKind::InvalidOwnerAccount,
            Self::InvalidVideoId(_) => ErrorKind::InvalidVideoId,
            Self::InvalidUserName(_) => ErrorKind::InvalidUserName,
            Self::CommentsDisabled(_) => ErrorKind::CommentsDisabled,
            Self::InvalidCommentThreadId(_) => ErrorKind::InvalidCommentThreadId,
            Self::InvalidChannelId(_) => ErrorKind::InvalidChannelId,
            Self::ChannelForbidden(_) => ErrorKind::ChannelForbidden,
            Self::PlaylistItemsNotAccessible(_) => ErrorKind::PlaylistItemsNotAccessible,
            Self::HistoryNotAccessible(_) => ErrorKind::HistoryNotAccessible,
            Self::WatchLaterNotAccessible(_) => ErrorKind::WatchLaterNotAccessible,
            Self::InvalidPlaylistId(_) => ErrorKind::InvalidPlaylistId,
            Self::PlaylistForbidden(_) => ErrorKind::PlaylistForbidden,
            Self::RequestError(_) | Self::ParseError(_) | Self::SettingsError { .. } => {
                return None;
            }
        };

        Some(kind)
    }

    /// The record of an API-level error.
    pub fn record(&self) -> Option<&ErrorRecord> {
        match self {
            Self::VariableTypeError(record)
            | Self::VariableValueError(record)
            | Self::WrongApiName(record)
            | Self::ProcessingFailure(record)
            | Self::InvalidApiKey(record)
            | Self::UnknownField(record)
            | Self::InvalidParameterValue(record)
            | Self::InvalidPageToken(record)
            | Self::MissingRequiredParameter(record)
            | Self::UnexpectedParameter(record)
            | Self::NoAuthorized(record)
            | Self::ExceededDailyLimit(record)
            | Self::ChannelClosed(record)
            | Self::ChannelSuspended(record)
            | Self::ForbiddenError(record)
            | Self::ChannelNotExist(record)
            | Self::InvalidOwnerAccount(record)
            | Self::InvalidVideoId(record)
            | Self::InvalidUserName(record)
            | Self::CommentsDisabled(record)
            | Self::InvalidCommentThreadId(record)
            | Self::InvalidChannelId(record)
            | Self::ChannelForbidden(record)
            | Self::PlaylistItemsNotAccessible(record)
            | Self::HistoryNotAccessible(record)
            | Self::WatchLaterNotAccessible(record)
            | Self::InvalidPlaylistId(record)
            | Self::PlaylistForbidden(record) => Some(record),
            Self::RequestError(_) | Self::ParseError(_) | Self::SettingsError { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.record().map(ErrorRecord::message)
    }

    pub fn status_code(&self) -> Option<u16> {
        self.record().and_then(ErrorRecord::status_code)
    }

    pub fn raw_payload(&self) -> Option<&Value> {
        self.record().and_then(ErrorRecord::raw_payload)
    }

    /// Returns `true` if the error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        self.kind().is_some_and(ErrorKind::is_validation)
    }

    /// Returns `true` if repeating the request later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ProcessingFailure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_new() {
        let kinds = [
            ErrorKind::VariableTypeError,
            ErrorKind::InvalidApiKey,
            ErrorKind::ChannelNotExist,
            ErrorKind::WatchLaterNotAccessible,
            ErrorKind::PlaylistForbidden,
        ];

        for kind in kinds {
            let err = Error::new(kind, ErrorRecord::new("m"));
            assert_eq!(err.kind(), Some(kind));
        }
    }

    #[test]
    fn test_record_accessors() {
        let payload = serde_json::json!({"error": {"code": 404}});
        let err = Error::new(
            ErrorKind::InvalidVideoId,
            ErrorRecord::with_response("Video x doesn't exist.", 404, payload.clone()),
        );

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.raw_payload(), Some(&payload));
        assert_eq!(err.message(), Some("Video x doesn't exist."));
        assert!(!err.is_validation());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_validation_family() {
        assert!(Error::variable_type("t").is_validation());
        assert!(Error::variable_value("v").is_validation());
        assert_eq!(Error::variable_value("v").status_code(), None);
    }

    #[test]
    fn test_only_processing_failure_is_retryable() {
        let err = Error::new(ErrorKind::ProcessingFailure, ErrorRecord::new("later"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_settings_error_has_no_record() {
        let err = Error::SettingsError {
            error: "bad".into(),
        };
        assert!(err.kind().is_none());
        assert!(err.record().is_none());
        assert_eq!(err.to_string(), "Client settings error: bad");
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = Error::new(
            ErrorKind::InvalidPageToken,
            ErrorRecord::with_response("Passed invalid page token t.", 400, Value::Null),
        );
        assert_eq!(
            err.to_string(),
            "Invalid page token: code=400 mess=Passed invalid page token t."
        );
    }
}
