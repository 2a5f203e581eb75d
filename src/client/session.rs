//! Authorised requester shared by every service.

use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::TokenSource;
use crate::config::CelcoinConfig;
use crate::errors::{CelcoinError, CelcoinResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::types::common::{ApiEnvelope, ResponseStatus};

/// Characters left as-is in path segments and query values.
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes one path segment or query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_SET).to_string()
}

/// Configuration, transport and token source bundled together. Cloning is
/// cheap and every clone shares the same token cache.
#[derive(Clone)]
pub struct Session {
    config: Arc<CelcoinConfig>,
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<dyn TokenSource>,
}

impl Session {
    /// Creates a session.
    pub fn new(
        config: Arc<CelcoinConfig>,
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenSource>,
    ) -> Self {
        Self {
            config,
            transport,
            tokens,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &CelcoinConfig {
        &self.config
    }

    /// The token source.
    pub fn tokens(&self) -> &Arc<dyn TokenSource> {
        &self.tokens
    }

    /// Absolute URL for `path` with an encoded query string.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = self.config.endpoint_url(path);
        let mut separator = '?';
        for (name, value) in query {
            url.push(separator);
            url.push_str(name);
            url.push('=');
            url.push_str(&encode_component(value));
            separator = '&';
        }
        url
    }

    /// GET returning the decoded envelope.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> CelcoinResult<ApiEnvelope<T>> {
        let response = self
            .send(Method::Get, self.url(path, query), None, "application/json")
            .await?;
        Self::decode(&response)
    }

    /// POST with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> CelcoinResult<ApiEnvelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Bytes::from(serde_json::to_vec(body)?);
        let response = self
            .send(Method::Post, self.url(path, &[]), Some(body), "application/json")
            .await?;
        Self::decode(&response)
    }

    /// PUT with a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> CelcoinResult<ApiEnvelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Bytes::from(serde_json::to_vec(body)?);
        let response = self
            .send(Method::Put, self.url(path, &[]), Some(body), "application/json")
            .await?;
        Self::decode(&response)
    }

    /// DELETE returning the decoded envelope.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> CelcoinResult<ApiEnvelope<T>> {
        let response = self
            .send(Method::Delete, self.url(path, query), None, "application/json")
            .await?;
        Self::decode(&response)
    }

    /// GET returning the raw body, for binary downloads.
    pub async fn get_bytes(&self, path: &str, query: &[(&str, String)]) -> CelcoinResult<Bytes> {
        let response = self
            .send(Method::Get, self.url(path, query), None, "*/*")
            .await?;
        Ok(response.body)
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<Bytes>,
        accept: &str,
    ) -> CelcoinResult<HttpResponse> {
        let token = self.tokens.get_token().await?;

        let mut request = HttpRequest::new(method, url).with_timeout(self.config.timeout);
        for (name, value) in &self.config.custom_headers {
            request = request.with_header(name.to_lowercase(), value.clone());
        }
        request = request
            .with_header("authorization", token)
            .with_header("accept", accept);
        if let Some(body) = body {
            request = request
                .with_header("content-type", "application/json")
                .with_body(body);
        }

        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let error = CelcoinError::from_response(response.status, &response.body, &response.headers);
        if response.status == 401 {
            tracing::warn!("API rejected the bearer token, invalidating cache");
            self.tokens.invalidate();
            let message = match error {
                CelcoinError::Api { message, .. } | CelcoinError::Authentication { message } => {
                    message
                }
                other => other.to_string(),
            };
            return Err(CelcoinError::Authentication { message });
        }

        Err(error)
    }

    fn decode<T: DeserializeOwned>(response: &HttpResponse) -> CelcoinResult<ApiEnvelope<T>> {
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiEnvelope {
                version: None,
                status: ResponseStatus::Success,
                body: None,
                error: None,
            });
        }

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&response.body)
            .map_err(|e| CelcoinError::deserialization(e, &response.body))?;

        if envelope.status == ResponseStatus::Error || envelope.error.is_some() {
            let (code, message) = match envelope.error {
                Some(detail) => (detail.error_code, detail.message),
                None => (String::new(), None),
            };
            return Err(CelcoinError::api(response.status, code, message));
        }

        Ok(envelope)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
