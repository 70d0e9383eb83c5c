// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use ytapi_core::Result;
use ytapi_macros::ApiValue;

use super::max_results_50;
use crate::{
    Endpoint, EndpointParams, EndpointRequest, Subject, endpoint::join, validation::ValidationRule,
};

/// Sections of a video resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ApiValue)]
pub enum VideoPart {
    #[value(id = "contentDetails")]
    ContentDetails,
    #[value(id = "id")]
    Id,
    #[value(id = "liveStreamingDetails")]
    LiveStreamingDetails,
    #[value(id = "localizations")]
    Localizations,
    #[value(id = "player")]
    Player,
    #[value(id = "recordingDetails")]
    RecordingDetails,
    #[value(id = "snippet")]
    Snippet,
    #[value(id = "statistics")]
    Statistics,
    #[value(id = "status")]
    Status,
    #[value(id = "topicDetails")]
    TopicDetails,
}

/// Parameters of the `videos` endpoint: videos looked up by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideosParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub part: Vec<VideoPart>,
    pub video_ids: Vec<String>,
    /// From 1 to 50.
    #[serde(default = "max_results_50")]
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl VideosParams {
    pub fn new<I, S>(part: Vec<VideoPart>, video_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: None,
            part,
            video_ids: video_ids.into_iter().map(Into::into).collect(),
            max_results: max_results_50(),
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

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }
}

impl EndpointParams for VideosParams {
    const ENDPOINT: Endpoint = Endpoint::Videos;

    const RULES: &'static [ValidationRule] = &[
        ValidationRule::string("key"),
        ValidationRule::list("part").one_of(VideoPart::VALUES),
        ValidationRule::list("video_ids"),
        ValidationRule::integer("max_results").range(1, 50),
        ValidationRule::string("page_token"),
    ];

    fn build(&self) -> Result<EndpointRequest> {
        let mut request = EndpointRequest::new(Self::ENDPOINT);
        request.insert_opt("key", self.key.as_deref());
        request.insert("part", join(&self.part));
        request.insert("id", join(&self.video_ids));
        request.insert("maxResults", self.max_results.to_string());
        request.insert_opt("pageToken", self.page_token.as_deref());

        Ok(request)
    }

    // Several ids may be requested at once, so none is quoted.
    fn subject(&self) -> Subject<'_> {
        Subject {
            key: self.key.as_deref(),
            page_token: self.page_token.as_deref(),
            ..Subject::default()
        }
    }
}
