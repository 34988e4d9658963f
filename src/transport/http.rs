//! Network transport backed by reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::{Response, Transport};
use crate::error::{Result, TransportError};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport that sends requests over the network.
///
/// Timeouts, redirects and connection pooling are all reqwest's; this type
/// only buffers the response body so it can be reused.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Create a transport with the default 30 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self { http })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(http: HttpClient) -> Self {
        Self { http }
    }

    /// The underlying client, for building requests
    pub fn client(&self) -> &HttpClient {
        &self.http
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn round_trip(&self, request: reqwest::Request) -> Result<Response> {
        log::trace!("{} {}", request.method(), request.url());
        let response = self.http.execute(request).await?;
        Response::from_reqwest(response).await
    }
}
