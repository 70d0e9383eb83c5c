// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use ytapi_core::{ErrorKind, Result};
use ytapi_macros::ApiValue;

use super::max_results_50;
use crate::{
    Classification, Endpoint, EndpointParams, EndpointRequest, Subject, endpoint::join,
    validation::ValidationRule,
};

/// Sections of a playlist resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ApiValue)]
pub enum PlaylistPart {
    #[value(id = "contentDetails")]
    ContentDetails,
    #[value(id = "id")]
    Id,
    #[value(id = "localizations")]
    Localizations,
    #[value(id = "player")]
    Player,
    #[value(id = "snippet")]
    Snippet,
    #[value(id = "status")]
    Status,
}

/// Parameters of the `playlists` endpoint: playlists of a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaylistsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub part: Vec<PlaylistPart>,
    pub channel_id: String,
    /// From 1 to 50.
    #[serde(default = "max_results_50")]
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl PlaylistsParams {
    pub fn new(part: Vec<PlaylistPart>, channel_id: impl Into<String>) -> Self {
        Self {
            key: None,
            part,
            channel_id: channel_id.into(),
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

impl EndpointParams for PlaylistsParams {
    const ENDPOINT: Endpoint = Endpoint::Playlists;

    const RULES: &'static [ValidationRule] = &[
        ValidationRule::string("key"),
        ValidationRule::list("part").one_of(PlaylistPart::VALUES),
        ValidationRule::string("channel_id"),
        ValidationRule::integer("max_results").range(1, 50),
        ValidationRule::string("page_token"),
    ];

    fn build(&self) -> Result<EndpointRequest> {
        let mut request = EndpointRequest::new(Self::ENDPOINT);
        request.insert_opt("key", self.key.as_deref());
        request.insert("part", join(&self.part));
        request.insert("channelId", &self.channel_id);
        request.insert("maxResults", self.max_results.to_string());
        request.insert_opt("pageToken", self.page_token.as_deref());

        Ok(request)
    }

    fn subject(&self) -> Subject<'_> {
        Subject {
            key: self.key.as_deref(),
            page_token: self.page_token.as_deref(),
            channel_id: Some(&self.channel_id),
            ..Subject::default()
        }
    }

    fn classify_error(&self, code: u16, reason: &str, _message: &str) -> Option<Classification> {
        match (code, reason) {
            (403, "playlistForbidden") => Some(Classification::new(
                ErrorKind::PlaylistForbidden,
                format!(
                    "Playlists of channel {} don't support the request or require OAuth2 authorization.",
                    self.channel_id
                ),
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
        let request = PlaylistsParams::new(vec![PlaylistPart::Snippet, PlaylistPart::Player], "UC1")
            .key("k")
            .page_token("p")
            .build()
            .unwrap();

        assert_eq!(request.get("part"), Some("snippet,player"));
        assert_eq!(request.get("channelId"), Some("UC1"));
        assert_eq!(request.get("maxResults"), Some("50"));
        assert_eq!(request.get("pageToken"), Some("p"));
        assert_eq!(request.get("key"), Some("k"));
    }

    #[test]
    fn test_playlist_forbidden() {
        let params = PlaylistsParams::new(vec![PlaylistPart::Id], "UC1");
        let classification = params.classify_error(403, "playlistForbidden", "").unwrap();

        assert_eq!(classification.kind, ErrorKind::PlaylistForbidden);
        assert!(classification.message.contains("UC1"));
    }

    #[test]
    fn test_subject_names_channel() {
        let params = PlaylistsParams::new(vec![PlaylistPart::Id], "UC1");
        assert_eq!(params.subject().channel_id, Some("UC1"));
    }
}
