// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Per-endpoint parameters, validation tables and request builders.

mod channels;
mod comment_threads;
mod comments;
mod playlist_items;
mod playlists;
mod search;
mod videos;

pub use channels::*;
pub use comment_threads::*;
pub use comments::*;
pub use playlist_items::*;
pub use playlists::*;
pub use search::*;
pub use videos::*;

use ytapi_macros::ApiValue;

/// Format of comment texts in responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ApiValue)]
pub enum TextFormat {
    #[default]
    #[value(id = "plainText")]
    PlainText,
    #[value(id = "html")]
    Html,
}

const fn max_results_50() -> u32 {
    50
}

const fn max_results_100() -> u32 {
    100
}
