// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Classification of YouTube API responses into typed errors.
//!
//! A response is turned into an error only when it matches a known
//! `(code, reason)` pair or an endpoint-specific empty-result rule. Anything
//! else, including error envelopes we do not model, is returned untouched.

use serde::Deserialize;
use serde_json::Value;
use ytapi_core::{Error, ErrorKind, ErrorRecord, Result};

use crate::EndpointParams;

/// Caller arguments that error messages refer to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Subject<'a> {
    pub key: Option<&'a str>,
    pub page_token: Option<&'a str>,
    pub channel_id: Option<&'a str>,
    pub video_id: Option<&'a str>,
}

/// A recognised failure, before it is attached to the response payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: ErrorKind,
    pub message: String,
    /// Overrides the envelope code; required for responses without one.
    pub status_code: Option<u16>,
}

impl Classification {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }
}

#[derive(Deserialize)]
struct Envelope {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    code: u16,
    #[serde(default)]
    message: String,
    errors: Vec<ProviderErrorDetail>,
}

#[derive(Deserialize)]
struct ProviderErrorDetail {
    reason: String,
}

pub(crate) fn or_unset(value: Option<&str>) -> &str {
    value.unwrap_or("<unset>")
}

/// Maps the `(code, reason)` pairs every endpoint may receive.
pub fn classify_shared(
    code: u16,
    reason: &str,
    message: &str,
    subject: &Subject<'_>,
) -> Option<Classification> {
    let key = or_unset(subject.key);
    let channel_id = or_unset(subject.channel_id);

    let (kind, message) = match (code, reason) {
        (400, "keyInvalid") => (
            ErrorKind::InvalidApiKey,
            format!("Passed youtube api key:{key} is invalid."),
        ),
        (400, "unknownPart") => (
            ErrorKind::UnknownField,
            format!("Unknown parameter: {message} has been passed."),
        ),
        (400, "invalidParameter") => (
            ErrorKind::InvalidParameterValue,
            format!("One of passed parameters value is not allowed: {message}."),
        ),
        (400, "invalidPageToken") => (
            ErrorKind::InvalidPageToken,
            format!("Passed invalid page token {}.", or_unset(subject.page_token)),
        ),
        (400, "processingFailure") => (
            ErrorKind::ProcessingFailure,
            format!("Api can't process request, try to repeat it later: {message}."),
        ),
        (400, "missingRequiredParameter") => (
            ErrorKind::MissingRequiredParameter,
            format!("Required parameter is missing: {message}."),
        ),
        (400, "unexpectedParameter") => (
            ErrorKind::UnexpectedParameter,
            format!("Unexpected parameter has been passed: {message}."),
        ),
        (401, "authorizationRequired") => (
            ErrorKind::NoAuthorized,
            format!("Request requires OAuth2 authorization: {message}."),
        ),
        (403, "dailyLimitExceededUnreg" | "quotaExceeded") => (
            ErrorKind::ExceededDailyLimit,
            format!("Day request limit for api key {key} was exceeded."),
        ),
        (403, "channelClosed") => (
            ErrorKind::ChannelClosed,
            format!("Channel {channel_id} was closed."),
        ),
        (403, "channelSuspended") => (
            ErrorKind::ChannelSuspended,
            format!("Channel {channel_id} was suspended."),
        ),
        (403, "forbidden") => (
            ErrorKind::ForbiddenError,
            format!("Request is forbidden without OAuth2 authorization: {message}."),
        ),
        (404, "channelNotFound") => (
            ErrorKind::ChannelNotExist,
            format!("Channel {channel_id} doesn't exist."),
        ),
        (404, "contentOwnerAccountNotFound") => (
            ErrorKind::InvalidOwnerAccount,
            format!("Content owner account doesn't exist: {message}."),
        ),
        (404, "videoNotFound") => (
            ErrorKind::InvalidVideoId,
            match subject.video_id {
                Some(video_id) => format!("Video {video_id} doesn't exist."),
                None => format!("Video doesn't exist: {message}."),
            },
        ),
        _ => return None,
    };

    Some(Classification::new(kind, message))
}

/// Classifies a response of the endpoint described by `params`.
///
/// # Errors
///
/// Returns the typed error of a recognised failure, carrying the response as
/// its raw payload.
pub fn classify<P: EndpointParams>(params: &P, json: Value) -> Result<Value> {
    let has_error = json.get("error").is_some_and(|error| !error.is_null());

    let classification = if has_error {
        classify_envelope(params, &json)
    } else {
        params.classify_success(&json)
    };

    match classification {
        Some(Classification {
            kind,
            message,
            status_code,
        }) => Err(Error::new(
            kind,
            ErrorRecord::from_parts(message, status_code, Some(json)),
        )),
        None => Ok(json),
    }
}

fn classify_envelope<P: EndpointParams>(params: &P, json: &Value) -> Option<Classification> {
    let Envelope { error } = Envelope::deserialize(json).ok()?;
    let reason = error.errors.first()?.reason.as_str();

    classify_shared(error.code, reason, &error.message, &params.subject())
        .or_else(|| params.classify_error(error.code, reason, &error.message))
        .map(|classification| {
            let status_code = classification.status_code.unwrap_or(error.code);
            classification.with_status(status_code)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_table_uses_subject() {
        let subject = Subject {
            key: Some("k"),
            page_token: Some("p"),
            channel_id: Some("c"),
            video_id: None,
        };

        let cases = [
            (400, "keyInvalid", ErrorKind::InvalidApiKey, "Passed youtube api key:k is invalid."),
            (400, "invalidPageToken", ErrorKind::InvalidPageToken, "Passed invalid page token p."),
            (403, "quotaExceeded", ErrorKind::ExceededDailyLimit, "Day request limit for api key k was exceeded."),
            (403, "channelClosed", ErrorKind::ChannelClosed, "Channel c was closed."),
            (404, "channelNotFound", ErrorKind::ChannelNotExist, "Channel c doesn't exist."),
            (404, "videoNotFound", ErrorKind::InvalidVideoId, "Video doesn't exist: m."),
        ];

        for (code, reason, kind, message) in cases {
            let classification = classify_shared(code, reason, "m", &subject).unwrap();
            assert_eq!(classification.kind, kind);
            assert_eq!(classification.message, message);
        }
    }

    #[test]
    fn test_shared_table_requires_matching_code() {
        let subject = Subject::default();

        assert!(classify_shared(403, "keyInvalid", "", &subject).is_none());
        assert!(classify_shared(400, "channelNotFound", "", &subject).is_none());
        assert!(classify_shared(404, "commentNotFound", "", &subject).is_none());
    }

    #[test]
    fn test_every_shared_pair_is_recognised() {
        let subject = Subject::default();
        let pairs = [
            (400, "keyInvalid", ErrorKind::InvalidApiKey),
            (400, "unknownPart", ErrorKind::UnknownField),
            (400, "invalidParameter", ErrorKind::InvalidParameterValue),
            (400, "invalidPageToken", ErrorKind::InvalidPageToken),
            (400, "processingFailure", ErrorKind::ProcessingFailure),
            (400, "missingRequiredParameter", ErrorKind::MissingRequiredParameter),
            (400, "unexpectedParameter", ErrorKind::UnexpectedParameter),
            (401, "authorizationRequired", ErrorKind::NoAuthorized),
            (403, "dailyLimitExceededUnreg", ErrorKind::ExceededDailyLimit),
            (403, "quotaExceeded", ErrorKind::ExceededDailyLimit),
            (403, "channelClosed", ErrorKind::ChannelClosed),
            (403, "channelSuspended", ErrorKind::ChannelSuspended),
            (403, "forbidden", ErrorKind::ForbiddenError),
            (404, "channelNotFound", ErrorKind::ChannelNotExist),
            (404, "contentOwnerAccountNotFound", ErrorKind::InvalidOwnerAccount),
            (404, "videoNotFound", ErrorKind::InvalidVideoId),
        ];

        for (code, reason, kind) in pairs {
            assert_eq!(
                classify_shared(code, reason, "", &subject).map(|c| c.kind),
                Some(kind),
                "({code}, {reason})"
            );
        }
    }
}
