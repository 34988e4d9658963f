//! HTTP round-trip contract

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};

use crate::error::Result;

pub mod http;
#[cfg(test)]
pub mod mock;

pub use self::http::HttpTransport;

/// Takes a request, returns a response or the transport's error.
///
/// Implemented by real transports and by anything layered over one, so a
/// layer can stand in wherever a direct transport is expected.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one round trip
    async fn round_trip(&self, request: reqwest::Request) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn round_trip(&self, request: reqwest::Request) -> Result<Response> {
        (**self).round_trip(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn round_trip(&self, request: reqwest::Request) -> Result<Response> {
        (**self).round_trip(request).await
    }
}

/// A fully buffered HTTP response.
///
/// The body is read to completion by the transport, so a clone can be
/// served any number of times. Clones share the body buffer.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode, headers: HeaderMap, url: Url, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            url,
            body: body.into(),
        }
    }

    /// Buffer a `reqwest::Response` by reading its whole body
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.bytes().await?;
        Ok(Self::new(status, headers, url, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL of the exchange (after any redirects the transport followed)
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body decoded as UTF-8, with invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
