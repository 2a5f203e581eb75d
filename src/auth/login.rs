//! OAuth2 client-credentials login exchange.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::CelcoinConfig;
use crate::errors::{CelcoinError, CelcoinResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Successful login body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The access token.
    pub access_token: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
    /// Token type, normally `bearer`.
    #[serde(default)]
    pub token_type: String,
}

#[derive(Debug, Deserialize)]
struct LoginErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Performs the `client_credentials` POST against the login endpoint.
pub struct LoginExchange {
    config: Arc<CelcoinConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl LoginExchange {
    /// Creates a login exchange.
    pub fn new(config: Arc<CelcoinConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Form fields sent to the login endpoint.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("grant_type", "client_credentials".to_string()),
            ("client_id", self.config.client_id.clone()),
        ];

        self.config.strategy.append_login_form(&mut form);

        if !self.config.scopes.is_empty() {
            form.push(("scope", self.config.scopes.join(" ")));
        }

        form
    }

    /// Builds the login request.
    pub fn build_request(&self) -> CelcoinResult<HttpRequest> {
        let body = serde_urlencoded::to_string(self.form_fields())?;

        Ok(HttpRequest::post(self.config.login_url())
            .with_header("content-type", "application/x-www-form-urlencoded")
            .with_header("accept", "application/json")
            .with_body(body)
            .with_timeout(self.config.timeout))
    }

    /// Exchanges the client credentials for an access token.
    pub async fn exchange(&self) -> CelcoinResult<LoginResponse> {
        let request = self.build_request()?;
        let response = self.transport.send(request).await?;
        Self::parse_response(response)
    }

    fn parse_response(response: HttpResponse) -> CelcoinResult<LoginResponse> {
        match response.status {
            200 => serde_json::from_slice(&response.body)
                .map_err(|e| CelcoinError::deserialization(e, &response.body)),
            400 => {
                let body: LoginErrorBody = serde_json::from_slice(&response.body)
                    .map_err(|e| CelcoinError::deserialization(e, &response.body))?;
                let message = match body.error_description {
                    Some(description) if !description.is_empty() => {
                        format!("{}: {}", body.error, description)
                    }
                    _ => body.error,
                };
                Err(CelcoinError::BadLogin { message })
            }
            status => Err(CelcoinError::Login { status }),
        }
    }
}
