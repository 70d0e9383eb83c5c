// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use ytapi_core::{QueryParams, Result};
use ytapi_macros::ApiValue;

use crate::{
    classify::{Classification, Subject},
    validation::ValidationRule,
};

/// The supported YouTube Data API operations.
///
/// The wire value of each variant is the path of the endpoint relative to the
/// versioned API url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ApiValue)]
pub enum Endpoint {
    #[value(id = "search")]
    Search,
    #[value(id = "commentThreads")]
    CommentThreads,
    #[value(id = "comments")]
    Comments,
    #[value(id = "channels")]
    Channels,
    #[value(id = "playlistItems")]
    PlaylistItems,
    #[value(id = "playlists")]
    Playlists,
    #[value(id = "videos")]
    Videos,
}

/// A fully built request for one endpoint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
    pub endpoint: Endpoint,
    pub query: QueryParams,
}

impl EndpointRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            query: QueryParams::new(),
        }
    }

    /// Sets a query parameter, replacing any previous value.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.query.insert(name.to_owned(), value.into());
    }

    /// Sets a query parameter only when a value was supplied.
    pub fn insert_opt(&mut self, name: &str, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// Joins list arguments the way the API expects them: comma separated.
pub(crate) fn join<T: AsRef<str>>(items: &[T]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parameters of a single endpoint.
///
/// Implementors describe every stage of a call: the validation table, the
/// mapping to query parameters and the endpoint-specific classification of
/// the response.
pub trait EndpointParams: Serialize + DeserializeOwned + Send + Sync {
    const ENDPOINT: Endpoint;

    /// Checked top to bottom; the first violated rule is reported.
    const RULES: &'static [ValidationRule];

    /// Arguments of which exactly one must be supplied.
    const EXACTLY_ONE_OF: &'static [&'static str] = &[];

    /// Maps the parameters to the provider's query vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be converted, such as an
    /// unrepresentable timestamp.
    fn build(&self) -> Result<EndpointRequest>;

    /// Caller arguments quoted by error messages.
    fn subject(&self) -> Subject<'_>;

    /// Endpoint-specific mapping of an error envelope.
    fn classify_error(&self, _code: u16, _reason: &str, _message: &str) -> Option<Classification> {
        None
    }

    /// Endpoint-specific failure hidden in a response without an error envelope.
    fn classify_success(&self, _json: &Value) -> Option<Classification> {
        None
    }
}
