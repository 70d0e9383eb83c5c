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

/// Sections of a playlist item resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ApiValue)]
pub enum PlaylistItemPart {
    #[value(id = "contentDetails")]
    ContentDetails,
    #[value(id = "id")]
    Id,
    #[value(id = "snippet")]
    Snippet,
    #[value(id = "status")]
    Status,
}

/// Parameters of the `playlistItems` endpoint: videos of a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaylistItemsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub part: Vec<PlaylistItemPart>,
    pub playlist_id: String,
    /// From 1 to 50.
    #[serde(default = "max_results_50")]
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl PlaylistItemsParams {
    pub fn new(part: Vec<PlaylistItemPart>, playlist_id: impl Into<String>) -> Self {
        Self {
            key: None,
            part,
            playlist_id: playlist_id.into(),
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

impl EndpointParams for PlaylistItemsParams {
    const ENDPOINT: Endpoint = Endpoint::PlaylistItems;

    const RULES: &'static [ValidationRule] = &[
        ValidationRule::string("key"),
        ValidationRule::list("part").one_of(PlaylistItemPart::VALUES),
        ValidationRule::string("playlist_id"),
        ValidationRule::integer("max_results").range(1, 50),
        ValidationRule::string("page_token"),
    ];

    fn build(&self) -> Result<EndpointRequest> {
        let mut request = EndpointRequest::new(Self::ENDPOINT);
        request.insert_opt("key", self.key.as_deref());
        request.insert("part", join(&self.part));
        request.insert("playlistId", &self.playlist_id);
        request.insert("maxResults", self.max_results.to_string());
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
        let playlist_id = &self.playlist_id;

        let (kind, message) = match (code, reason) {
            (403, "playlistItemsNotAccessible") => (
                ErrorKind::PlaylistItemsNotAccessible,
                format!("Items of playlist {playlist_id} require OAuth2 authorization."),
            ),
            (403, "watchHistoryNotAccessible") => (
                ErrorKind::HistoryNotAccessible,
                "Items of the watch history playlist can't be retrieved through the api."
                    .to_owned(),
            ),
            (403, "watchLaterNotAccessible") => (
                ErrorKind::WatchLaterNotAccessible,
                "Items of the watch later playlist can't be retrieved through the api."
                    .to_owned(),
            ),
            (404, "playlistNotFound") => (
                ErrorKind::InvalidPlaylistId,
                format!("Playlist {playlist_id} doesn't exist."),
            ),
            _ => return None,
        };

        Some(Classification::new(kind, message))
    }
}
