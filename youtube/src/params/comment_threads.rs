// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use ytapi_core::{ErrorKind, Result};
use ytapi_macros::ApiValue;

use super::{TextFormat, max_results_100};
use crate::{
    Classification, Endpoint, EndpointParams, EndpointRequest, Subject, endpoint::join,
    validation::ValidationRule,
};

/// Sections of a comment thread resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ApiValue)]
pub enum CommentThreadPart {
    #[value(id = "id")]
    Id,
    #[value(id = "replies")]
    Replies,
    #[value(id = "snippet")]
    Snippet,
}

/// Sorting of comment threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ApiValue)]
pub enum CommentOrder {
    #[default]
    #[value(id = "time")]
    Time,
    #[value(id = "relevance")]
    Relevance,
}

/// Parameters of the `commentThreads` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentThreadsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub part: Vec<CommentThreadPart>,
    pub video_id: String,
    /// From 1 to 100.
    #[serde(default = "max_results_100")]
    pub max_results: u32,
    #[serde(default)]
    pub order: CommentOrder,
    #[serde(default)]
    pub text_format: TextFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    /// Only threads containing this text are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
}

impl CommentThreadsParams {
    pub fn new(part: Vec<CommentThreadPart>, video_id: impl Into<String>) -> Self {
        Self {
            key: None,
            part,
            video_id: video_id.into(),
            max_results: max_results_100(),
            order: CommentOrder::default(),
            text_format: TextFormat::default(),
            page_token: None,
            search_text: None,
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

    pub fn order(mut self, order: CommentOrder) -> Self {
        self.order = order;
        self
    }

    pub fn text_format(mut self, text_format: TextFormat) -> Self {
        self.text_format = text_format;
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }

    pub fn search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = Some(search_text.into());
        self
    }
}

impl EndpointParams for CommentThreadsParams {
    const ENDPOINT: Endpoint = Endpoint::CommentThreads;

    const RULES: &'static [ValidationRule] = &[
        ValidationRule::string("key"),
        ValidationRule::list("part").one_of(CommentThreadPart::VALUES),
        ValidationRule::string("video_id"),
        ValidationRule::integer("max_results").range(1, 100),
        ValidationRule::string("order").one_of(CommentOrder::VALUES),
        ValidationRule::string("text_format").one_of(TextFormat::VALUES),
        ValidationRule::string("page_token"),
        ValidationRule::string("search_text"),
    ];

    fn build(&self) -> Result<EndpointRequest> {
        let mut request = EndpointRequest::new(Self::ENDPOINT);
        request.insert_opt("key", self.key.as_deref());
        request.insert("part", join(&self.part));
        request.insert("videoId", &self.video_id);
        request.insert("maxResults", self.max_results.to_string());
        request.insert("order", self.order.as_str());
        request.insert("textFormat", self.text_format.as_str());
        request.insert_opt("searchTerms", self.search_text.as_deref());
        request.insert_opt("pageToken", self.page_token.as_deref());

        Ok(request)
    }

    fn subject(&self) -> Subject<'_> {
        Subject {
            key: self.key.as_deref(),
            page_token: self.page_token.as_deref(),
            video_id: Some(&self.video_id),
            ..Subject::default()
        }
    }

    fn classify_error(&self, code: u16, reason: &str, _message: &str) -> Option<Classification> {
        match (code, reason) {
            (403, "commentsDisabled") => Some(Classification::new(
                ErrorKind::CommentsDisabled,
                format!("Comments of video {} are disabled.", self.video_id),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let request = CommentThreadsParams::new(
            vec![CommentThreadPart::Id, CommentThreadPart::Snippet],
            "vid",
        )
        .search_text("hello")
        .text_format(TextFormat::Html)
        .build()
        .unwrap();

        assert_eq!(request.get("part"), Some("id,snippet"));
        assert_eq!(request.get("videoId"), Some("vid"));
        assert_eq!(request.get("maxResults"), Some("100"));
        assert_eq!(request.get("order"), Some("time"));
        assert_eq!(request.get("textFormat"), Some("html"));
        assert_eq!(request.get("searchTerms"), Some("hello"));
        assert_eq!(request.get("pageToken"), None);
        assert_eq!(request.get("key"), None);
    }

    #[test]
    fn test_comments_disabled() {
        let params = CommentThreadsParams::new(vec![CommentThreadPart::Id], "vid");
        let classification = params.classify_error(403, "commentsDisabled", "").unwrap();

        assert_eq!(classification.kind, ErrorKind::CommentsDisabled);
        assert_eq!(classification.message, "Comments of video vid are disabled.");
        assert!(params.classify_error(404, "commentsDisabled", "").is_none());
    }
}
