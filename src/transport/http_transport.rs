//! HTTP transport implementation using reqwest.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::config::{CelcoinConfig, CredentialStrategy};
use crate::errors::{CelcoinError, CelcoinResult};

/// Reqwest-based HTTP transport implementation.
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport for a configuration, applying its credential
    /// strategy to the TLS setup.
    pub fn from_config(config: &CelcoinConfig) -> CelcoinResult<Self> {
        Self::new(&config.strategy, config.timeout)
    }

    /// Creates a transport for a credential strategy.
    pub fn new(strategy: &CredentialStrategy, timeout: Duration) -> CelcoinResult<Self> {
        let builder = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10);
        #[cfg(feature = "rustls")]
        let builder = builder.use_rustls_tls();

        let client = strategy
            .configure_transport(builder)?
            .build()
            .map_err(|e| CelcoinError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, timeout })
    }

    /// Creates a transport around an existing client.
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn extract_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|val| (k.as_str().to_lowercase(), val.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> CelcoinResult<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.url)
            .timeout(request.timeout.unwrap_or(self.timeout));

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("timeout", &self.timeout)
            .finish()
    }
}
