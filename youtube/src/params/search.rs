// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use ytapi_core::Result;
use ytapi_macros::ApiValue;

use super::max_results_50;
use crate::{
    Endpoint, EndpointParams, EndpointRequest, Subject,
    time::{UNIX_TIME_RANGE, to_provider_timestamp},
    validation::ValidationRule,
};

/// Sorting of search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ApiValue)]
pub enum SearchOrder {
    /// Reverse chronological order of creation.
    #[default]
    #[value(id = "date")]
    Date,
    #[value(id = "rating")]
    Rating,
    #[value(id = "relevance")]
    Relevance,
    #[value(id = "title")]
    Title,
    /// Channels by descending number of uploaded videos.
    #[value(id = "videoCount")]
    VideoCount,
    #[value(id = "viewCount")]
    ViewCount,
}

/// Kind of resource a search returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ApiValue)]
pub enum SearchType {
    #[default]
    #[value(id = "video")]
    Video,
    #[value(id = "channel")]
    Channel,
    #[value(id = "playlist")]
    Playlist,
}

/// Parameters of the `search` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Text to search for.
    pub text: String,
    /// From 1 to 50.
    #[serde(default = "max_results_50")]
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(default)]
    pub order: SearchOrder,
    /// Unix time; only items created at or after it are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_after: Option<i64>,
    /// Unix time; only items created at or before it are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_before: Option<i64>,
    #[serde(default)]
    pub search_by: SearchType,
}

impl SearchParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
            max_results: max_results_50(),
            page_token: None,
            order: SearchOrder::default(),
            published_after: None,
            published_before: None,
            search_by: SearchType::default(),
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }

    pub fn order(mut self, order: SearchOrder) -> Self {
        self.order = order;
        self
    }

    pub fn published_after(mut self, unix_time: i64) -> Self {
        self.published_after = Some(unix_time);
        self
    }

    pub fn published_before(mut self, unix_time: i64) -> Self {
        self.published_before = Some(unix_time);
        self
    }

    pub fn search_by(mut self, search_by: SearchType) -> Self {
        self.search_by = search_by;
        self
    }
}

impl EndpointParams for SearchParams {
    const ENDPOINT: Endpoint = Endpoint::Search;

    const RULES: &'static [ValidationRule] = &[
        ValidationRule::string("key"),
        ValidationRule::string("text"),
        ValidationRule::integer("max_results").range(1, 50),
        ValidationRule::string("page_token"),
        ValidationRule::string("order").one_of(SearchOrder::VALUES),
        ValidationRule::integer("published_after").range(UNIX_TIME_RANGE.0, UNIX_TIME_RANGE.1),
        ValidationRule::integer("published_before").range(UNIX_TIME_RANGE.0, UNIX_TIME_RANGE.1),
        ValidationRule::string("search_by").one_of(SearchType::VALUES),
    ];

    fn build(&self) -> Result<EndpointRequest> {
        let mut request = EndpointRequest::new(Self::ENDPOINT);
        request.insert_opt("key", self.key.as_deref());
        request.insert("part", "snippet");
        request.insert("q", &self.text);
        request.insert("maxResults", self.max_results.to_string());
        request.insert("order", self.order.as_str());
        request.insert("type", self.search_by.as_str());
        request.insert_opt("pageToken", self.page_token.as_deref());

        if let Some(unix_time) = self.published_after {
            request.insert("publishedAfter", to_provider_timestamp(unix_time)?);
        }
        if let Some(unix_time) = self.published_before {
            request.insert("publishedBefore", to_provider_timestamp(unix_time)?);
        }

        Ok(request)
    }

    fn subject(&self) -> Subject<'_> {
        Subject {
            key: self.key.as_deref(),
            page_token: self.page_token.as_deref(),
            ..Subject::default()
        }
    }
}
