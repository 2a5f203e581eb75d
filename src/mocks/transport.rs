//! Mock HTTP transport.

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

use crate::errors::{CelcoinError, CelcoinResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Transport that replays queued responses in FIFO order and records every
/// request it receives.
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<CelcoinResult<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response.
    pub fn queue_response(&self, status: u16, body: impl Into<Bytes>) -> &Self {
        self.responses.lock().push_back(Ok(HttpResponse {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }));
        self
    }

    /// Queues a JSON response.
    pub fn queue_json_response<T: serde::Serialize>(&self, status: u16, body: &T) -> &Self {
        let body = serde_json::to_vec(body).unwrap_or_default();
        self.responses.lock().push_back(Ok(HttpResponse {
            status,
            headers: [("content-type".to_string(), "application/json".to_string())]
                .into_iter()
                .collect(),
            body: Bytes::from(body),
        }));
        self
    }

    /// Queues a successful login response.
    pub fn queue_login(&self, access_token: &str, expires_in: u64) -> &Self {
        self.queue_json_response(
            200,
            &serde_json::json!({
                "access_token": access_token,
                "expires_in": expires_in,
                "token_type": "bearer",
            }),
        )
    }

    /// Queues a transport failure.
    pub fn queue_error(&self, error: CelcoinError) -> &Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    /// Returns recorded requests.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Returns the last recorded request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of requests whose URL contains `fragment`.
    pub fn count_requests_to(&self, fragment: &str) -> usize {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.url.contains(fragment))
            .count()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> CelcoinResult<HttpResponse> {
        self.requests.lock().push(request);

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| {
                Err(CelcoinError::Connection {
                    message: "No mock response available".to_string(),
                })
            })
    }
}
