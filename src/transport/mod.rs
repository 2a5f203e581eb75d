//! HTTP transport module for the Celcoin client.
//!
//! The transport only moves bytes: it returns every HTTP status to the
//! caller and fails only when no response was obtained. Status handling
//! lives in the login exchange and in the session.

mod http_transport;
mod logging;

pub use http_transport::ReqwestTransport;
pub use logging::LoggingTransport;

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::CelcoinResult;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// DELETE request.
    Delete,
}

impl Method {
    /// Method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Outbound HTTP request with an absolute URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL, query string included.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Option<Bytes>,
    /// Per-request timeout override.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a request without headers or body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Creates a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// Creates a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Creates a PUT request.
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    /// Creates a DELETE request.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Sets a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, names lowercased.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as lossy UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// Trait for HTTP transport implementations.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns the response whatever its status.
    async fn send(&self, request: HttpRequest) -> CelcoinResult<HttpResponse>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> CelcoinResult<HttpResponse> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(Method::Post), reqwest::Method::POST);
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
        assert_eq!(reqwest::Method::from(Method::Delete), reqwest::Method::DELETE);
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_request_builder() {
        let request = HttpRequest::post("https://example.com/v5/token")
            .with_header("content-type", "application/x-www-form-urlencoded")
            .with_body("grant_type=client_credentials")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(
            request.body.as_deref(),
            Some(&b"grant_type=client_credentials"[..])
        );
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
    }
}
