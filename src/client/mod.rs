//! Celcoin API client.

mod session;

pub use session::{encode_component, Session};

use std::sync::Arc;

use crate::auth::{TokenCache, TokenProvider, TokenSource};
use crate::config::CelcoinConfig;
use crate::errors::{CelcoinError, CelcoinResult};
use crate::services::{
    BalanceService, BoletosService, BusinessService, CustomersService, IncomeReportService,
    PaymentsService, PixService, StatementsService, TransfersService, WebhooksService,
};
use crate::transport::{HttpTransport, LoggingTransport, ReqwestTransport};

/// The main Celcoin client.
///
/// Every service handle shares one [`Session`], hence one token cache.
#[derive(Clone, Debug)]
pub struct CelcoinClient {
    session: Session,
}

impl CelcoinClient {
    /// Creates a client with the default transport.
    pub fn new(config: CelcoinConfig) -> CelcoinResult<Self> {
        Self::builder().config(config).build()
    }

    /// Creates a new client builder.
    pub fn builder() -> CelcoinClientBuilder {
        CelcoinClientBuilder::new()
    }

    /// Creates a client from the environment.
    pub fn from_env() -> CelcoinResult<Self> {
        Self::new(CelcoinConfig::from_env()?)
    }

    /// Returns a bearer header value, logging in if needed.
    pub async fn token(&self) -> CelcoinResult<String> {
        self.session.tokens().get_token().await
    }

    /// The shared session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The client configuration.
    pub fn config(&self) -> &CelcoinConfig {
        self.session.config()
    }

    /// Wallet balance.
    pub fn balance(&self) -> BalanceService {
        BalanceService::new(self.session.clone())
    }

    /// Natural-person onboarding and accounts.
    pub fn customers(&self) -> CustomersService {
        CustomersService::new(self.session.clone())
    }

    /// Legal-person onboarding and accounts.
    pub fn business(&self) -> BusinessService {
        BusinessService::new(self.session.clone())
    }

    /// Boleto charges.
    pub fn boletos(&self) -> BoletosService {
        BoletosService::new(self.session.clone())
    }

    /// PIX keys and transfers.
    pub fn pix(&self) -> PixService {
        PixService::new(self.session.clone())
    }

    /// TED and internal transfers.
    pub fn transfers(&self) -> TransfersService {
        TransfersService::new(self.session.clone())
    }

    /// Bill payments.
    pub fn payments(&self) -> PaymentsService {
        PaymentsService::new(self.session.clone())
    }

    /// Account statements.
    pub fn statements(&self) -> StatementsService {
        StatementsService::new(self.session.clone())
    }

    /// Webhook subscriptions.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.session.clone())
    }

    /// Annual income reports.
    pub fn income_report(&self) -> IncomeReportService {
        IncomeReportService::new(self.session.clone())
    }
}

/// Builder for [`CelcoinClient`].
#[derive(Default)]
pub struct CelcoinClientBuilder {
    config: Option<CelcoinConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    token_cache: Option<Arc<TokenCache>>,
    token_source: Option<Arc<dyn TokenSource>>,
    log_requests: bool,
    log_bodies: Option<usize>,
}

impl CelcoinClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn config(mut self, config: CelcoinConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replaces the HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Uses an existing token cache, e.g. one shared between clients.
    pub fn token_cache(mut self, cache: Arc<TokenCache>) -> Self {
        self.token_cache = Some(cache);
        self
    }

    /// Replaces the login-backed token provider.
    pub fn token_source(mut self, source: Arc<dyn TokenSource>) -> Self {
        self.token_source = Some(source);
        self
    }

    /// Emits a `tracing` event per request and response.
    pub fn log_requests(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Also logs redacted bodies up to `max_length` bytes.
    pub fn log_bodies(mut self, max_length: usize) -> Self {
        self.log_requests = true;
        self.log_bodies = Some(max_length);
        self
    }

    /// Builds the client.
    pub fn build(self) -> CelcoinResult<CelcoinClient> {
        let config = self.config.ok_or_else(|| CelcoinError::Configuration {
            message: "Client configuration not provided".to_string(),
        })?;
        let config = Arc::new(config);

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::from_config(&config)?),
        };

        let transport: Arc<dyn HttpTransport> = if self.log_requests {
            let logging = LoggingTransport::new(transport);
            match self.log_bodies {
                Some(max) => Arc::new(logging.with_bodies(max)),
                None => Arc::new(logging),
            }
        } else {
            transport
        };

        let tokens: Arc<dyn TokenSource> = match self.token_source {
            Some(source) => source,
            None => Arc::new(TokenProvider::new(
                Arc::clone(&config),
                Arc::clone(&transport),
                self.token_cache.unwrap_or_default(),
            )),
        };

        tracing::debug!(
            api_endpoint = %config.api_endpoint,
            mtls = config.strategy.is_mtls(),
            "Celcoin client created"
        );

        Ok(CelcoinClient {
            session: Session::new(config, transport, tokens),
        })
    }
}
