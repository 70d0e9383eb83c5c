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

/// Sections of a comment resource.
///
/// Replies are fetched through this endpoint itself, so unlike comment threads
/// there is no `replies` section; the API reference for `comments.list`
/// (<https://developers.google.com/youtube/v3/docs/comments/list>) accepts only
/// `id` and `snippet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ApiValue)]
pub enum CommentPart {
    #[value(id = "id")]
    Id,
    #[value(id = "snippet")]
    Snippet,
}

/// Parameters of the `comments` endpoint: replies of a comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub part: Vec<CommentPart>,
    /// Id of the parent comment thread.
    pub parent_id: String,
    /// From 1 to 100.
    #[serde(default = "max_results_100")]
    pub max_results: u32,
    #[serde(default)]
    pub text_format: TextFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl CommentsParams {
    pub fn new(part: Vec<CommentPart>, parent_id: impl Into<String>) -> Self {
        Self {
            key: None,
            part,
            parent_id: parent_id.into(),
            max_results: max_results_100(),
            text_format: TextFormat::default(),
            page_token: None,
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

    pub fn text_format(mut self, text_format: TextFormat) -> Self {
        self.text_format = text_format;
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }
}

impl EndpointParams for CommentsParams {
    const ENDPOINT: Endpoint = Endpoint::Comments;

    const RULES: &'static [ValidationRule] = &[
        ValidationRule::string("key"),
        ValidationRule::list("part").one_of(CommentPart::VALUES),
        ValidationRule::string("parent_id"),
        ValidationRule::integer("max_results").range(1, 100),
        ValidationRule::string("text_format").one_of(TextFormat::VALUES),
        ValidationRule::string("page_token"),
    ];

    fn build(&self) -> Result<EndpointRequest> {
        let mut request = EndpointRequest::new(Self::ENDPOINT);
        request.insert_opt("key", self.key.as_deref());
        request.insert("part", join(&self.part));
        request.insert("parentId", &self.parent_id);
        request.insert("maxResults", self.max_results.to_string());
        request.insert("textFormat", self.text_format.as_str());
        request.insert_opt("pageToken", self.page_token.as_deref());

        Ok(request)
    }

    fn subject(&self) -> Subject<'_> {
        Subject {
            key: self.key.as_deref(),
            page_token: self.page_token.as_deref(),
            ..Subject::default()
        }
    }

    fn classify_error(&self, code: u16, reason: &str, _message: &str) -> Option<Classification> {
        match (code, reason) {
            (404, "commentNotFound") => Some(Classification::new(
                ErrorKind::InvalidCommentThreadId,
                format!("Comment thread {} doesn't exist.", self.parent_id),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_args;
    use serde_json::json;

    #[test]
    fn test_build() {
        let request = CommentsParams::new(vec![CommentPart::Snippet], "thread")
            .page_token("next")
            .build()
            .unwrap();

        assert_eq!(request.get("part"), Some("snippet"));
        assert_eq!(request.get("parentId"), Some("thread"));
        assert_eq!(request.get("maxResults"), Some("100"));
        assert_eq!(request.get("textFormat"), Some("plainText"));
        assert_eq!(request.get("pageToken"), Some("next"));
    }

    #[test]
    fn test_only_comment_not_found_is_specific() {
        let params = CommentsParams::new(vec![CommentPart::Id], "thread");

        let classification = params.classify_error(404, "commentNotFound", "").unwrap();
        assert_eq!(classification.kind, ErrorKind::InvalidCommentThreadId);
        assert!(params.classify_error(403, "commentsDisabled", "").is_none());
    }

    #[test]
    fn test_replies_is_not_a_comment_part() {
        assert_eq!(CommentPart::VALUES, &["id", "snippet"]);

        let args = json!({"part": ["snippet", "replies"]});
        let err = validate_args(CommentsParams::RULES, &[], args.as_object().unwrap()).unwrap_err();

        assert_eq!(err.kind(), Some(ErrorKind::VariableValueError));
        assert_eq!(
            err.message(),
            Some("Acceptable values for argument \"part\" are (id, snippet), current value is replies.")
        );
    }
}
