//! Authentication: token cache, login exchange and token provider.

mod cache;
mod login;
mod provider;

pub use cache::{TokenCache, TOKEN_CACHE_KEY};
pub use login::{LoginExchange, LoginResponse};
pub use provider::TokenProvider;

use async_trait::async_trait;

use crate::errors::CelcoinResult;

/// Source of `Authorization` header values.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Returns a header value of the form `"Bearer <token>"`.
    async fn get_token(&self) -> CelcoinResult<String>;

    /// Forgets any cached token.
    fn invalidate(&self);
}

/// Token source that always hands out the same value. Useful when the
/// caller manages tokens itself.
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    value: String,
}

impl StaticTokenSource {
    /// Wraps a raw access token, adding the `Bearer` prefix when missing.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let value = if token.starts_with("Bearer ") {
            token
        } else {
            format!("Bearer {}", token)
        };
        Self { value }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn get_token(&self) -> CelcoinResult<String> {
        Ok(self.value.clone())
    }

    fn invalidate(&self) {}
}
