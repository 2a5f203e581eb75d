//! Logging decorator for HTTP transports.

use async_trait::async_trait;
use std::time::Instant;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::errors::CelcoinResult;
use crate::observability::{redact_sensitive, truncate_body};

/// Default cap on logged body size.
pub const DEFAULT_MAX_BODY_LENGTH: usize = 1024;

/// Wraps a transport and records each request/response pair as `tracing`
/// events. It never alters the request or the outcome.
pub struct LoggingTransport<T> {
    inner: T,
    log_bodies: bool,
    max_body_length: usize,
}

impl<T: HttpTransport> LoggingTransport<T> {
    /// Wraps a transport, logging metadata only.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            log_bodies: false,
            max_body_length: DEFAULT_MAX_BODY_LENGTH,
        }
    }

    /// Also logs (redacted, truncated) bodies.
    pub fn with_bodies(mut self, max_body_length: usize) -> Self {
        self.log_bodies = true;
        self.max_body_length = max_body_length;
        self
    }

    /// Returns the wrapped transport.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    fn render_body(&self, body: Option<&[u8]>) -> Option<String> {
        if !self.log_bodies {
            return None;
        }
        body.map(|b| {
            let text = String::from_utf8_lossy(b);
            truncate_body(&redact_sensitive(&text), self.max_body_length).to_string()
        })
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for LoggingTransport<T> {
    async fn send(&self, request: HttpRequest) -> CelcoinResult<HttpResponse> {
        let method = request.method.as_str();
        let url = request.url.clone();

        match self.render_body(request.body.as_deref()) {
            Some(body) => tracing::debug!(method, url = %url, body = %body, "Outgoing request"),
            None => tracing::debug!(method, url = %url, "Outgoing request"),
        }

        let started = Instant::now();
        let result = self.inner.send(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => match self.render_body(Some(&response.body)) {
                Some(body) => tracing::debug!(
                    method,
                    url = %url,
                    status = response.status,
                    elapsed_ms,
                    body = %body,
                    "Incoming response"
                ),
                None => tracing::debug!(
                    method,
                    url = %url,
                    status = response.status,
                    elapsed_ms,
                    "Incoming response"
                ),
            },
            Err(error) => tracing::warn!(
                method,
                url = %url,
                elapsed_ms,
                error = %error,
                "Request failed"
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockHttpTransport;

    #[tokio::test]
    async fn test_decorator_passes_through() {
        let transport = LoggingTransport::new(MockHttpTransport::new()).with_bodies(64);
        transport
            .inner()
            .queue_json_response(200, &serde_json::json!({"access_token": "abc"}));

        let response = transport
            .send(HttpRequest::post("https://example.com/v5/token").with_body("client_secret=x"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.text().contains("abc"));
        assert_eq!(transport.inner().get_requests().len(), 1);
    }

    #[test]
    fn test_body_rendering_is_redacted_and_truncated() {
        let transport = LoggingTransport::new(MockHttpTransport::new()).with_bodies(40);
        let rendered = transport
            .render_body(Some(b"client_id=abc&client_secret=hunter2&scope=very-long-scope-value"))
            .unwrap();

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.len() <= 45);
    }

    #[test]
    fn test_truncation_never_exposes_token_prefix() {
        let transport = LoggingTransport::new(MockHttpTransport::new()).with_bodies(40);
        let body = serde_json::to_vec(&serde_json::json!({
            "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9",
            "expires_in": 2400,
            "token_type": "bearer"
        }))
        .unwrap();

        let rendered = transport.render_body(Some(&body)).unwrap();

        assert!(!rendered.contains("eyJhbGci"));
        assert!(rendered.starts_with(r#"{"access_token":"[REDACTED]""#));
        assert!(rendered.len() <= 40);
    }

    #[test]
    fn test_bodies_off_by_default() {
        let transport = LoggingTransport::new(MockHttpTransport::new());
        assert!(transport.render_body(Some(b"secret")).is_none());
    }
}
