//! Bearer-token provider backed by the expiring cache.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::cache::{TokenCache, TOKEN_CACHE_KEY};
use super::login::LoginExchange;
use super::TokenSource;
use crate::config::CelcoinConfig;
use crate::errors::{CelcoinError, CelcoinResult};
use crate::transport::HttpTransport;

/// Produces `Authorization` header values, logging in only on cache miss.
///
/// Concurrent callers on a cold cache may each perform a login; the last
/// write wins and every fetched token stays valid until its own expiry.
pub struct TokenProvider {
    exchange: LoginExchange,
    cache: Arc<TokenCache>,
    safety_margin: Duration,
}

impl TokenProvider {
    /// Creates a provider that stores tokens in `cache`.
    pub fn new(
        config: Arc<CelcoinConfig>,
        transport: Arc<dyn HttpTransport>,
        cache: Arc<TokenCache>,
    ) -> Self {
        let safety_margin = config.token_safety_margin;
        Self {
            exchange: LoginExchange::new(config, transport),
            cache,
            safety_margin,
        }
    }

    /// Returns `"Bearer <token>"`, from cache when possible.
    pub async fn get_token(&self) -> CelcoinResult<String> {
        if let Some(token) = self.cache.get(TOKEN_CACHE_KEY) {
            tracing::debug!("Token cache hit");
            return Ok(token);
        }

        tracing::debug!("Token cache miss, logging in");
        let login = self.exchange.exchange().await.map_err(|error| {
            tracing::warn!(error = %error, code = error.error_code(), "Login failed");
            error
        })?;

        let bearer = format!("Bearer {}", login.access_token);
        let ttl = self.ttl_for(login.expires_in);
        self.cache.set(TOKEN_CACHE_KEY, bearer.clone(), ttl);

        tracing::info!(
            expires_in = login.expires_in,
            cached_for_secs = ttl.as_secs(),
            "Obtained access token"
        );

        Ok(bearer)
    }

    /// Like [`get_token`](Self::get_token), but gives up with
    /// [`CelcoinError::Cancelled`] as soon as `cancel` fires. An aborted
    /// login caches nothing.
    pub async fn get_token_with_cancel(
        &self,
        cancel: &CancellationToken,
    ) -> CelcoinResult<String> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(CelcoinError::Cancelled),
            result = self.get_token() => result,
        }
    }

    /// Drops the cached token so the next call logs in again.
    pub fn invalidate(&self) {
        if self.cache.remove(TOKEN_CACHE_KEY) {
            tracing::debug!("Cached token invalidated");
        }
    }

    /// The cache this provider writes to.
    pub fn cache(&self) -> &Arc<TokenCache> {
        &self.cache
    }

    /// The login exchange used on cache miss.
    pub fn exchange(&self) -> &LoginExchange {
        &self.exchange
    }

    fn ttl_for(&self, expires_in: u64) -> Duration {
        Duration::from_secs(expires_in).saturating_sub(self.safety_margin)
    }
}

#[async_trait]
impl TokenSource for TokenProvider {
    async fn get_token(&self) -> CelcoinResult<String> {
        TokenProvider::get_token(self).await
    }

    fn invalidate(&self) {
        TokenProvider::invalidate(self)
    }
}
