//! Mock transport for testing
//!
//! Scripted responses with call tracking, so cache behaviour can be verified
//! without a network.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{Response, Transport};
use crate::error::{Result, TransportError};

/// Mock transport for testing.
///
/// By default every request succeeds with `200` and a body of
/// `"response <n>"`, where `n` counts calls from 1. This makes a fresh
/// fetch distinguishable from a cached one.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new().with_status("http://example.com/r", StatusCode::NOT_FOUND);
/// let response = mock.round_trip(get("http://example.com/r")).await?;
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// ```
#[derive(Default)]
pub struct MockTransport {
    /// Status overrides keyed by URL string
    statuses: Arc<Mutex<HashMap<String, StatusCode>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<TransportError>>>,
    /// Number of round trips performed
    calls: Arc<Mutex<usize>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// A captured request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub method: Method,
    pub url: String,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `url` with `status` instead of 200
    pub fn with_status(self, url: &str, status: StatusCode) -> Self {
        if let Ok(mut statuses) = self.statuses.try_lock() {
            statuses.insert(url.to_string(), status);
        }
        self
    }

    /// Fail the next round trip with `error`
    pub async fn fail_next(&self, error: TransportError) {
        *self.error.lock().await = Some(error);
    }

    /// Number of round trips that reached this transport
    pub async fn call_count(&self) -> usize {
        *self.calls.lock().await
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn round_trip(&self, request: reqwest::Request) -> Result<Response> {
        let n = {
            let mut calls = self.calls.lock().await;
            *calls += 1;
            *calls
        };

        self.captured_requests.lock().await.push(CapturedRequest {
            method: request.method().clone(),
            url: request.url().to_string(),
        });

        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }

        let status = self
            .statuses
            .lock()
            .await
            .get(request.url().as_str())
            .copied()
            .unwrap_or(StatusCode::OK);

        Ok(Response::new(
            status,
            HeaderMap::new(),
            request.url().clone(),
            format!("response {}", n),
        ))
    }
}

/// Build a bodiless request for tests
pub fn request(method: Method, url: &str) -> reqwest::Request {
    reqwest::Request::new(method, Url::parse(url).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_default_responses_are_numbered() {
        let mock = MockTransport::new();
        let first = mock
            .round_trip(request(Method::GET, "http://example.com/a"))
            .await
            .unwrap();
        let second = mock
            .round_trip(request(Method::GET, "http://example.com/a"))
            .await
            .unwrap();

        assert_eq!(first.text(), "response 1");
        assert_eq!(second.text(), "response 2");
        assert_eq!(mock.call_count().await, 2);
    }

    #[tokio::test]
    async fn test_error_consumed_on_first_use() {
        let mock = MockTransport::new();
        mock.fail_next(TransportError::Timeout).await;

        let err = mock
            .round_trip(request(Method::GET, "http://example.com/a"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Timeout)));

        let ok = mock
            .round_trip(request(Method::GET, "http://example.com/a"))
            .await;
        assert!(ok.is_ok());
    }

    #[tokio::test]
    async fn test_status_override_and_capture() {
        let mock = MockTransport::new().with_status("http://example.com/gone", StatusCode::GONE);
        let response = mock
            .round_trip(request(Method::POST, "http://example.com/gone"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::GONE);
        assert_eq!(
            mock.captured_requests().await,
            vec![CapturedRequest {
                method: Method::POST,
                url: "http://example.com/gone".to_string(),
            }]
        );
    }
}
