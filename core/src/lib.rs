// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # ytapi Core
//!
//! Core traits and types for the ytapi ecosystem.
//!
//! This crate provides the error taxonomy shared by every endpoint and the
//! [`Transport`] seam through which requests reach the network.

pub mod error;
pub use error::*;

use futures::FutureExt;
use reqwest::{Url, header::CONTENT_TYPE};
use serde_json::Value;
use std::{collections::BTreeMap, future::Future, pin::Pin, sync::Arc};

/// A `Future` type used by the `Transport` trait.
///
/// This type alias represents a boxed, pinned future that is `Send`,
/// which allows to be returned from async traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Flat query parameters of a single request.
pub type QueryParams = BTreeMap<String, String>;

/// Failures raised by a [`Transport`] before a JSON document is available.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The server answered with something other than JSON, which is what
    /// Google returns for paths that do not name an API.
    #[error("Response from {url} is not JSON")]
    NotJson { url: Url },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse the response")]
    Parse(#[from] serde_json::Error),
}

/// A capability that performs HTTP GET requests and yields parsed JSON.
///
/// Implementations must return the JSON body regardless of the HTTP status:
/// error envelopes are interpreted by the caller, not by the transport.
///
/// Blanket implementations are provided for `&T`, `Box<T>` and `Arc<T>`
/// where `T: Transport`.
pub trait Transport: Send + Sync {
    /// Sends `GET url?query` and returns the decoded body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the request cannot be sent, the response
    /// is not JSON, or the body cannot be parsed.
    fn send_get<'a>(
        &'a self,
        url: &'a str,
        query: &'a QueryParams,
    ) -> BoxFuture<'a, std::result::Result<Value, TransportError>>;
}

impl Transport for reqwest::Client {
    fn send_get<'a>(
        &'a self,
        url: &'a str,
        query: &'a QueryParams,
    ) -> BoxFuture<'a, std::result::Result<Value, TransportError>> {
        get_json(self, url, query).boxed()
    }
}

async fn get_json(
    client: &reqwest::Client,
    url: &str,
    query: &QueryParams,
) -> std::result::Result<Value, TransportError> {
    let response = client.get(url).query(query).send().await?;

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("json"));

    if !is_json {
        return Err(TransportError::NotJson {
            url: response.url().clone(),
        });
    }

    let bytes = response.bytes().await?;

    Ok(serde_json::from_slice(&bytes)?)
}

impl<T> Transport for &T
where
    T: Transport + ?Sized,
{
    fn send_get<'a>(
        &'a self,
        url: &'a str,
        query: &'a QueryParams,
    ) -> BoxFuture<'a, std::result::Result<Value, TransportError>> {
        (**self).send_get(url, query)
    }
}

impl<T> Transport for Box<T>
where
    T: Transport + ?Sized,
{
    fn send_get<'a>(
        &'a self,
        url: &'a str,
        query: &'a QueryParams,
    ) -> BoxFuture<'a, std::result::Result<Value, TransportError>> {
        (**self).send_get(url, query)
    }
}

impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    fn send_get<'a>(
        &'a self,
        url: &'a str,
        query: &'a QueryParams,
    ) -> BoxFuture<'a, std::result::Result<Value, TransportError>> {
        (**self).send_get(url, query)
    }
}
