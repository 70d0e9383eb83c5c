// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ytapi_core::{ErrorKind, Result};
use ytapi_macros::ApiValue;

use super::max_results_50;
use crate::{
    Classification, Endpoint, EndpointParams, EndpointRequest, Subject, classify::or_unset,
    endpoint::join, validation::ValidationRule,
};

/// Sections of a channel resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ApiValue)]
pub enum ChannelPart {
    #[value(id = "brandingSettings")]
    BrandingSettings,
    #[value(id = "contentDetails")]
    ContentDetails,
    #[value(id = "contentOwnerDetails")]
    ContentOwnerDetails,
    #[value(id = "id")]
    Id,
    #[value(id = "localizations")]
    Localizations,
    #[value(id = "snippet")]
    Snippet,
    #[value(id = "statistics")]
    Statistics,
    #[value(id = "status")]
    Status,
    #[value(id = "topicDetails")]
    TopicDetails,
}

/// Parameters of the `channels` endpoint.
///
/// A channel is identified either by its id (`./channel/<id>` urls) or by the
/// name of its owner (`./user/<name>` urls); exactly one must be supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub part: Vec<ChannelPart>,
    /// From 1 to 50.
    #[serde(default = "max_results_50")]
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl ChannelsParams {
    pub fn by_id(part: Vec<ChannelPart>, channel_id: impl Into<String>) -> Self {
        Self {
            key: None,
            part,
            max_results: max_results_50(),
            channel_id: Some(channel_id.into()),
            user_name: None,
        }
    }

    pub fn by_user_name(part: Vec<ChannelPart>, user_name: impl Into<String>) -> Self {
        Self {
            key: None,
            part,
            max_results: max_results_50(),
            channel_id: None,
            user_name: Some(user_name.into()),
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
}

impl EndpointParams for ChannelsParams {
    const ENDPOINT: Endpoint = Endpoint::Channels;

    const RULES: &'static [ValidationRule] = &[
        ValidationRule::string("key"),
        ValidationRule::list("part").one_of(ChannelPart::VALUES),
        ValidationRule::integer("max_results").range(1, 50),
        ValidationRule::string("channel_id"),
        ValidationRule::string("user_name"),
    ];

    const EXACTLY_ONE_OF: &'static [&'static str] = &["channel_id", "user_name"];

    fn build(&self) -> Result<EndpointRequest> {
        let mut request = EndpointRequest::new(Self::ENDPOINT);
        request.insert_opt("key", self.key.as_deref());
        request.insert("part", join(&self.part));
        request.insert("maxResults", self.max_results.to_string());
        request.insert_opt("forUsername", self.user_name.as_deref());
        request.insert_opt("id", self.channel_id.as_deref());

        Ok(request)
    }

    fn subject(&self) -> Subject<'_> {
        Subject {
            key: self.key.as_deref(),
            channel_id: self.channel_id.as_deref(),
            ..Subject::default()
        }
    }

    fn classify_error(&self, code: u16, reason: &str, _message: &str) -> Option<Classification> {
        let channel_id = or_unset(self.channel_id.as_deref());

        match (code, reason) {
            (400, "invalidChannelId") => Some(Classification::new(
                ErrorKind::InvalidChannelId,
                format!("Passed channel id {channel_id} is invalid."),
            )),
            (403, "channelForbidden") => Some(Classification::new(
                ErrorKind::ChannelForbidden,
                format!("Channel {channel_id} doesn't support the request."),
            )),
            _ => None,
        }
    }

    /// The API answers lookups of unknown channels with an empty result set.
    fn classify_success(&self, json: &Value) -> Option<Classification> {
        let is_empty = json
            .get("items")
            .and_then(Value::as_array)
            .is_none_or(Vec::is_empty);

        if !is_empty {
            return None;
        }

        match &self.user_name {
            Some(user_name) => Some(Classification::new(
                ErrorKind::InvalidUserName,
                format!("Channel of user {user_name} doesn't exist."),
            )),
            None => Some(
                Classification::new(
                    ErrorKind::ChannelNotExist,
                    format!(
                        "Channel {} doesn't exist.",
                        or_unset(self.channel_id.as_deref())
                    ),
                )
                .with_status(404),
            ),
        }
    }
}
