// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # ytapi
//!
//! ytapi is an asynchronous requester for the YouTube Data API.
//! This crate serves as the main entrypoint, re-exporting the error taxonomy,
//! the transport seam and, with the `youtube` feature, the endpoint handle.
//!
//! ```no_run
//! # async fn run() -> ytapi::Result<()> {
//! use ytapi::youtube::{Api, SearchParams};
//!
//! let api = Api::new();
//! let response = api.search(SearchParams::new("rust").key("<api key>")).await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

pub use ytapi_core::*;

#[cfg(feature = "youtube")]
pub use ytapi_youtube as youtube;
