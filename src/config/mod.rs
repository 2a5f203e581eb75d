//! Configuration module for the Celcoin client.
//!
//! Holds the credentials and endpoints a session is built from. A
//! [`CelcoinConfig`] is validated once by its builder and never mutated
//! afterwards.

use secrecy::{ExposeSecret, SecretString, SecretVec};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::{CelcoinError, CelcoinResult};

/// Sandbox base URL, used for both login and API calls.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.openfinance.celcoin.dev";

/// Production base URL, used for both login and API calls.
pub const PRODUCTION_BASE_URL: &str = "https://openfinance.celcoin.com.br";

/// Relative login path for client-secret authentication.
pub const CLIENT_SECRET_LOGIN_PATH: &str = "v5/token";

/// Relative login path for mutual-TLS authentication.
pub const MTLS_LOGIN_PATH: &str = "v5/token";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default margin subtracted from the provider's `expires_in`.
pub const DEFAULT_TOKEN_SAFETY_MARGIN: Duration = Duration::from_secs(10);

/// Target environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Celcoin sandbox.
    #[default]
    Sandbox,
    /// Celcoin production.
    Production,
}

impl Environment {
    /// Default base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = CelcoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" | "sbx" => Ok(Self::Sandbox),
            "production" | "prod" => Ok(Self::Production),
            other => Err(CelcoinError::Configuration {
                message: format!("Unknown environment: {}", other),
            }),
        }
    }
}

/// How the client proves its identity to the login endpoint.
#[derive(Clone)]
pub enum CredentialStrategy {
    /// Shared secret sent in the login form.
    ClientSecret {
        /// The client secret.
        client_secret: SecretString,
    },
    /// Client certificate presented at the TLS layer; no secret is sent.
    MutualTls {
        /// PEM bundle with the client certificate and private key.
        identity_pem: Arc<SecretVec<u8>>,
    },
}

impl CredentialStrategy {
    /// Creates a client-secret strategy.
    pub fn client_secret(secret: impl Into<String>) -> Self {
        Self::ClientSecret {
            client_secret: SecretString::new(secret.into()),
        }
    }

    /// Creates a mutual-TLS strategy from a PEM bundle.
    pub fn mutual_tls(identity_pem: impl Into<Vec<u8>>) -> Self {
        Self::MutualTls {
            identity_pem: Arc::new(SecretVec::new(identity_pem.into())),
        }
    }

    /// Login path relative to the login endpoint.
    pub fn login_path(&self) -> &'static str {
        match self {
            Self::ClientSecret { .. } => CLIENT_SECRET_LOGIN_PATH,
            Self::MutualTls { .. } => MTLS_LOGIN_PATH,
        }
    }

    /// Returns true for the mutual-TLS variant.
    pub fn is_mtls(&self) -> bool {
        matches!(self, Self::MutualTls { .. })
    }

    /// Adds the strategy's credential fields to a login form.
    pub fn append_login_form(&self, form: &mut Vec<(&'static str, String)>) {
        match self {
            Self::ClientSecret { client_secret } => {
                form.push(("client_secret", client_secret.expose_secret().to_string()));
            }
            // the certificate authenticates the client
            Self::MutualTls { .. } => {}
        }
    }

    /// Applies the strategy's TLS requirements to an HTTP client builder.
    pub fn configure_transport(
        &self,
        builder: reqwest::ClientBuilder,
    ) -> CelcoinResult<reqwest::ClientBuilder> {
        match self {
            Self::ClientSecret { .. } => Ok(builder),
            Self::MutualTls { identity_pem } => with_identity(builder, identity_pem.expose_secret()),
        }
    }

    fn validate(&self) -> CelcoinResult<()> {
        match self {
            Self::ClientSecret { client_secret } if client_secret.expose_secret().is_empty() => {
                Err(CelcoinError::Configuration {
                    message: "Client secret cannot be empty".to_string(),
                })
            }
            Self::MutualTls { identity_pem } if identity_pem.expose_secret().is_empty() => {
                Err(CelcoinError::Configuration {
                    message: "mTLS identity cannot be empty".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(any(feature = "rustls", feature = "native-tls"))]
fn with_identity(
    builder: reqwest::ClientBuilder,
    pem: &[u8],
) -> CelcoinResult<reqwest::ClientBuilder> {
    #[cfg(feature = "rustls")]
    let identity = reqwest::Identity::from_pem(pem);
    // the bundle holds both the certificate chain and the PKCS#8 key
    #[cfg(not(feature = "rustls"))]
    let identity = reqwest::Identity::from_pkcs8_pem(pem, pem);

    let identity = identity.map_err(|e| CelcoinError::Configuration {
        message: format!("Invalid mTLS identity: {}", e),
    })?;
    Ok(builder.identity(identity))
}

#[cfg(not(any(feature = "rustls", feature = "native-tls")))]
fn with_identity(
    _builder: reqwest::ClientBuilder,
    _pem: &[u8],
) -> CelcoinResult<reqwest::ClientBuilder> {
    Err(CelcoinError::Configuration {
        message: "mTLS requires the `rustls` or `native-tls` feature".to_string(),
    })
}

impl std::fmt::Debug for CredentialStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClientSecret { .. } => f
                .debug_struct("ClientSecret")
                .field("client_secret", &"[REDACTED]")
                .finish(),
            Self::MutualTls { .. } => f
                .debug_struct("MutualTls")
                .field("identity_pem", &"[REDACTED]")
                .finish(),
        }
    }
}

/// Configuration for the Celcoin client.
#[derive(Clone)]
pub struct CelcoinConfig {
    /// OAuth2 client identifier.
    pub client_id: String,
    /// Credential strategy for the login exchange.
    pub strategy: CredentialStrategy,
    /// Base URL of the login service.
    pub login_endpoint: String,
    /// Base URL of the banking API.
    pub api_endpoint: String,
    /// Scopes requested at login.
    pub scopes: Vec<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Subtracted from `expires_in` when caching a token.
    pub token_safety_margin: Duration,
    /// Extra headers sent on every API call.
    pub custom_headers: Vec<(String, String)>,
}

impl CelcoinConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> CelcoinConfigBuilder {
        CelcoinConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CELCOIN_CLIENT_ID` (required)
    /// - `CELCOIN_CLIENT_SECRET` or `CELCOIN_MTLS_IDENTITY_PATH` (one required)
    /// - `CELCOIN_ENVIRONMENT` (`sandbox` or `production`)
    /// - `CELCOIN_LOGIN_ENDPOINT`, `CELCOIN_API_ENDPOINT`
    /// - `CELCOIN_SCOPES` (space separated)
    /// - `CELCOIN_TIMEOUT` (seconds)
    pub fn from_env() -> CelcoinResult<Self> {
        let client_id =
            std::env::var("CELCOIN_CLIENT_ID").map_err(|_| CelcoinError::Configuration {
                message: "CELCOIN_CLIENT_ID environment variable not set".to_string(),
            })?;

        let mut builder = CelcoinConfigBuilder::new().client_id(client_id);

        if let Ok(path) = std::env::var("CELCOIN_MTLS_IDENTITY_PATH") {
            let pem = std::fs::read(&path).map_err(|e| CelcoinError::Configuration {
                message: format!("Cannot read mTLS identity {}: {}", path, e),
            })?;
            builder = builder.mtls_identity(pem);
        }

        if let Ok(secret) = std::env::var("CELCOIN_CLIENT_SECRET") {
            builder = builder.client_secret(secret);
        }

        if let Ok(env) = std::env::var("CELCOIN_ENVIRONMENT") {
            builder = builder.environment(env.parse()?);
        }

        if let Ok(url) = std::env::var("CELCOIN_LOGIN_ENDPOINT") {
            builder = builder.login_endpoint(url);
        }

        if let Ok(url) = std::env::var("CELCOIN_API_ENDPOINT") {
            builder = builder.api_endpoint(url);
        }

        if let Ok(scopes) = std::env::var("CELCOIN_SCOPES") {
            for scope in scopes.split_whitespace() {
                builder = builder.scope(scope);
            }
        }

        if let Ok(timeout_str) = std::env::var("CELCOIN_TIMEOUT") {
            if let Ok(timeout_secs) = timeout_str.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(timeout_secs));
            }
        }

        builder.build()
    }

    /// Full login URL for the configured strategy.
    pub fn login_url(&self) -> String {
        format!("{}/{}", self.login_endpoint, self.strategy.login_path())
    }

    /// Full URL for an API path.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_endpoint, path.trim_start_matches('/'))
    }
}

impl std::fmt::Debug for CelcoinConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CelcoinConfig")
            .field("client_id", &self.client_id)
            .field("strategy", &self.strategy)
            .field("login_endpoint", &self.login_endpoint)
            .field("api_endpoint", &self.api_endpoint)
            .field("scopes", &self.scopes)
            .field("timeout", &self.timeout)
            .field("token_safety_margin", &self.token_safety_margin)
            .finish()
    }
}

/// Builder for `CelcoinConfig`.
#[derive(Default)]
pub struct CelcoinConfigBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    mtls_identity: Option<Vec<u8>>,
    environment: Environment,
    login_endpoint: Option<String>,
    api_endpoint: Option<String>,
    scopes: Vec<String>,
    timeout: Option<Duration>,
    token_safety_margin: Option<Duration>,
    custom_headers: Vec<(String, String)>,
}

impl CelcoinConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client id.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Authenticates with a client secret.
    pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Authenticates with a client certificate (PEM with certificate and key).
    pub fn mtls_identity(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.mtls_identity = Some(pem.into());
        self
    }

    /// Selects default endpoints for an environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the login endpoint.
    pub fn login_endpoint(mut self, url: impl Into<String>) -> Self {
        self.login_endpoint = Some(url.into());
        self
    }

    /// Overrides the API endpoint.
    pub fn api_endpoint(mut self, url: impl Into<String>) -> Self {
        self.api_endpoint = Some(url.into());
        self
    }

    /// Points both login and API at one base URL.
    pub fn base_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.login_endpoint(url.clone()).api_endpoint(url)
    }

    /// Adds a scope to request at login.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the margin subtracted from token lifetimes.
    pub fn token_safety_margin(mut self, margin: Duration) -> Self {
        self.token_safety_margin = Some(margin);
        self
    }

    /// Adds a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> CelcoinResult<CelcoinConfig> {
        let client_id = self
            .client_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| CelcoinError::Configuration {
                message: "Client id is required".to_string(),
            })?;

        let strategy = match (self.client_secret, self.mtls_identity) {
            (Some(_), Some(_)) => {
                return Err(CelcoinError::Configuration {
                    message: "Configure either a client secret or an mTLS identity, not both"
                        .to_string(),
                })
            }
            (Some(secret), None) => CredentialStrategy::client_secret(secret),
            (None, Some(pem)) => CredentialStrategy::mutual_tls(pem),
            (None, None) => {
                return Err(CelcoinError::Configuration {
                    message: "Client secret or mTLS identity is required".to_string(),
                })
            }
        };
        strategy.validate()?;

        let default_url = self.environment.base_url();
        let login_endpoint = normalize_url(self.login_endpoint, default_url)?;
        let api_endpoint = normalize_url(self.api_endpoint, default_url)?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(CelcoinError::Configuration {
                message: "Timeout must be greater than zero".to_string(),
            });
        }

        Ok(CelcoinConfig {
            client_id,
            strategy,
            login_endpoint,
            api_endpoint,
            scopes: self.scopes,
            timeout,
            token_safety_margin: self
                .token_safety_margin
                .unwrap_or(DEFAULT_TOKEN_SAFETY_MARGIN),
            custom_headers: self.custom_headers,
        })
    }
}

fn normalize_url(url: Option<String>, default: &str) -> CelcoinResult<String> {
    let url = url
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CelcoinError::Configuration {
            message: format!("Endpoint must start with http:// or https://: {}", url),
        });
    }

    Ok(url)
}
