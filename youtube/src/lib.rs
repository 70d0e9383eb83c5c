// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! This crate implements a requester for the YouTube Data API, with argument
//! validation before any request is sent and classification of provider
//! failures into typed errors.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};

mod classify;
mod endpoint;
mod params;
mod time;
mod validation;

pub use classify::{Classification, Subject, classify, classify_shared};
pub use endpoint::*;
pub use params::*;
pub use time::*;
pub use validation::*;
pub use ytapi_core::{
    BoxFuture, Error, ErrorKind, ErrorRecord, QueryParams, Result, Transport, TransportError,
};

const DEFAULT_API_VERSION: u32 = 3;
const YOUTUBE_API_KEY: &str = "YOUTUBE_API_KEY";

fn api_url(version: u32) -> String {
    format!("https://www.googleapis.com/youtube/v{version}/")
}

/// Errors that can occur when building an [`Api`] handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YoutubeError {
    /// Returned when no transport is provided
    MissingTransportError,
    /// Returned when the API version is 0
    InvalidVersionError,
}

impl std::fmt::Display for YoutubeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YoutubeError::MissingTransportError => write!(f, "HTTP transport is required"),
            YoutubeError::InvalidVersionError => write!(f, "API version must be at least 1"),
        }
    }
}

impl std::error::Error for YoutubeError {}

impl From<YoutubeError> for Error {
    fn from(value: YoutubeError) -> Self {
        Error::SettingsError {
            error: value.to_string(),
        }
    }
}

/// Builder for constructing an [`Api`] handle
pub struct ApiBuilder<T = reqwest::Client> {
    transport: Option<T>,
    version: u32,
    api_key: Option<SecretString>,
}

impl Default for ApiBuilder {
    fn default() -> Self {
        Self {
            transport: None,
            version: DEFAULT_API_VERSION,
            api_key: None,
        }
    }
}

impl ApiBuilder {
    /// Create a new builder instance with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Transport> ApiBuilder<T> {
    /// Sets a custom HTTP client
    pub fn client(self, client: reqwest::Client) -> ApiBuilder<reqwest::Client> {
        self.transport(client)
    }

    /// Sets any [`Transport`] implementation in place of an HTTP client
    pub fn transport<U: Transport>(self, transport: U) -> ApiBuilder<U> {
        ApiBuilder {
            transport: Some(transport),
            version: self.version,
            api_key: self.api_key,
        }
    }

    /// Sets the API version used in the base url
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Sets the key used by calls that do not pass their own
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Loads the default key from the `YOUTUBE_API_KEY` environment variable
    pub fn api_key_from_env(mut self) -> std::result::Result<Self, std::env::VarError> {
        let api_key = std::env::var(YOUTUBE_API_KEY)?;

        self.api_key = Some(SecretString::from(api_key));
        Ok(self)
    }

    /// Constructs an [`Api`] handle
    ///
    /// # Errors
    /// Returns an error if the transport is missing or the version is 0
    pub fn build(self) -> Result<Api<T>> {
        let transport = self.transport.ok_or(YoutubeError::MissingTransportError)?;
        if self.version == 0 {
            return Err(YoutubeError::InvalidVersionError.into());
        }

        Ok(Api {
            transport,
            api_url: api_url(self.version),
            api_version: self.version,
            api_key: self.api_key.map(Arc::new),
        })
    }
}

/// A handle to the YouTube Data API.
///
/// The handle holds no per-call state: every call is independent and any
/// number of calls may run concurrently on a shared handle.
pub struct Api<T = reqwest::Client> {
    transport: T,
    api_url: String,
    api_version: u32,
    api_key: Option<Arc<SecretString>>,
}

impl Api {
    /// Creates a handle for API v3 over a default HTTP client.
    pub fn new() -> Self {
        Self {
            transport: reqwest::Client::new(),
            api_url: api_url(DEFAULT_API_VERSION),
            api_version: DEFAULT_API_VERSION,
            api_key: None,
        }
    }

    pub fn builder() -> ApiBuilder {
        ApiBuilder::new()
    }
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for Api<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Youtube Api v{} requester.", self.api_version)
    }
}

impl<T> std::fmt::Debug for Api<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("api_version", &self.api_version)
            .field("api_url", &self.api_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Api<T> {
    /// Creates a handle that sends requests below a custom base URL.
    ///
    /// This constructor is intended exclusively for testing and mocking scenarios
    /// and should **never** be used in production code.
    ///
    /// # Feature
    /// Requires the `test-utils` feature flag.
    #[cfg(feature = "test-utils")]
    pub fn new_with_base_url(
        transport: T,
        base_url: reqwest::Url,
        api_key: Option<SecretString>,
    ) -> Self {
        let mut api_url = base_url.to_string();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }

        Self {
            transport,
            api_url,
            api_version: DEFAULT_API_VERSION,
            api_key: api_key.map(Arc::new),
        }
    }

    /// The versioned url every endpoint path is appended to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// Searches videos, channels or playlists.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any request is sent, or the typed
    /// error of a recognised provider failure.
    pub async fn search(&self, params: SearchParams) -> Result<Value> {
        self.request(&params).await
    }

    /// Lists the comment threads of a video.
    ///
    /// # Errors
    ///
    /// See [`Api::search`].
    pub async fn comment_threads(&self, params: CommentThreadsParams) -> Result<Value> {
        self.request(&params).await
    }

    /// Lists the replies of a comment thread.
    ///
    /// # Errors
    ///
    /// See [`Api::search`].
    pub async fn comments(&self, params: CommentsParams) -> Result<Value> {
        self.request(&params).await
    }

    /// Looks up a channel by id or by the name of its owner.
    ///
    /// # Errors
    ///
    /// See [`Api::search`]. An empty result is reported as
    /// [`Error::InvalidUserName`] or [`Error::ChannelNotExist`].
    pub async fn channels(&self, params: ChannelsParams) -> Result<Value> {
        self.request(&params).await
    }

    /// Lists the items of a playlist.
    ///
    /// # Errors
    ///
    /// See [`Api::search`].
    pub async fn playlist_items(&self, params: PlaylistItemsParams) -> Result<Value> {
        self.request(&params).await
    }

    /// Lists the playlists of a channel.
    ///
    /// # Errors
    ///
    /// See [`Api::search`].
    pub async fn playlists(&self, params: PlaylistsParams) -> Result<Value> {
        self.request(&params).await
    }

    /// Looks up videos by id.
    ///
    /// # Errors
    ///
    /// See [`Api::search`].
    pub async fn videos(&self, params: VideosParams) -> Result<Value> {
        self.request(&params).await
    }

    /// Validates `params`, sends the request and classifies the response.
    ///
    /// # Errors
    ///
    /// See [`Api::search`].
    pub async fn request<P: EndpointParams>(&self, params: &P) -> Result<Value> {
        validate(params)?;
        self.execute(params).await
    }

    /// Calls `endpoint` with untyped arguments named like the fields of its
    /// params struct.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VariableTypeError`] or [`Error::VariableValueError`]
    /// naming the offending argument, or any error of [`Api::request`].
    pub async fn call(&self, endpoint: Endpoint, args: Map<String, Value>) -> Result<Value> {
        match endpoint {
            Endpoint::Search => self.call_as::<SearchParams>(args).await,
            Endpoint::CommentThreads => self.call_as::<CommentThreadsParams>(args).await,
            Endpoint::Comments => self.call_as::<CommentsParams>(args).await,
            Endpoint::Channels => self.call_as::<ChannelsParams>(args).await,
            Endpoint::PlaylistItems => self.call_as::<PlaylistItemsParams>(args).await,
            Endpoint::Playlists => self.call_as::<PlaylistsParams>(args).await,
            Endpoint::Videos => self.call_as::<VideosParams>(args).await,
        }
    }

    async fn call_as<P: EndpointParams>(&self, args: Map<String, Value>) -> Result<Value> {
        validate_args(P::RULES, P::EXACTLY_ONE_OF, &args)?;

        let params: P = serde_json::from_value(Value::Object(args)).map_err(|error| {
            Error::variable_value(format!("Invalid arguments of \"{}\": {error}.", P::ENDPOINT))
        })?;

        self.execute(&params).await
    }

    async fn execute<P: EndpointParams>(&self, params: &P) -> Result<Value> {
        let mut request = params.build()?;

        match &self.api_key {
            Some(api_key) if !request.query.contains_key("key") => {
                request.insert("key", api_key.expose_secret());
            }
            _ => {}
        }

        let url = format!("{}{}", self.api_url, request.endpoint);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            endpoint = %request.endpoint,
            params = ?request.query.keys().collect::<Vec<_>>(),
            "sending request"
        );

        let json = self
            .transport
            .send_get(&url, &request.query)
            .await
            .map_err(from_transport)?;

        let result = classify(params, json);

        #[cfg(feature = "tracing")]
        match &result {
            Ok(_) => tracing::trace!(endpoint = %request.endpoint, "response passed through"),
            Err(error) => tracing::warn!(endpoint = %request.endpoint, %error, "provider error"),
        }

        result
    }
}

fn from_transport(error: TransportError) -> Error {
    match error {
        TransportError::NotJson { url } => {
            let segment = url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .unwrap_or_default();

            Error::new(
                ErrorKind::WrongApiName,
                ErrorRecord::new(format!(
                    "Wrong api name \"{segment}\" has been passed into request url."
                )),
            )
        }
        TransportError::Request(error) => Error::RequestError(error),
        TransportError::Parse(error) => Error::ParseError(error),
    }
}
