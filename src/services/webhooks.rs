//! Webhook subscription service.

use tracing::instrument;

use super::require;
use crate::client::Session;
use crate::errors::{CelcoinError, CelcoinResult};
use crate::types::common::Acknowledgement;
use crate::types::webhooks::{WebhookEntity, WebhookList, WebhookSubscription, WebhookUpdate};

const SUBSCRIPTION_PATH: &str = "baas-webhookmanager/v1/webhook/subscription";

/// Webhook subscription management.
#[derive(Debug, Clone)]
pub struct WebhooksService {
    session: Session,
}

impl WebhooksService {
    /// Creates a new webhooks service.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Subscribes a callback URL to an event family.
    #[instrument(skip(self, subscription), fields(entity = %subscription.entity))]
    pub async fn subscribe(&self, subscription: &WebhookSubscription) -> CelcoinResult<Acknowledgement> {
        validate_url(&subscription.webhook_url)?;

        self.session.post(SUBSCRIPTION_PATH, subscription).await
    }

    /// Registered subscriptions, optionally for one event family.
    #[instrument(skip(self))]
    pub async fn list(&self, entity: Option<WebhookEntity>) -> CelcoinResult<WebhookList> {
        let query: Vec<(&str, String)> = entity
            .map(|e| vec![("Entity", e.as_str().to_string())])
            .unwrap_or_default();

        self.session
            .get(SUBSCRIPTION_PATH, &query)
            .await?
            .into_body()
    }

    /// Changes the subscription of an event family.
    #[instrument(skip(self, update))]
    pub async fn update(&self, entity: WebhookEntity, update: &WebhookUpdate) -> CelcoinResult<Acknowledgement> {
        if update.is_empty() {
            return Err(CelcoinError::Validation {
                message: "update has no changes".to_string(),
            });
        }
        if let Some(url) = &update.webhook_url {
            validate_url(url)?;
        }

        let path = format!("{}/{}", SUBSCRIPTION_PATH, entity.as_str());
        self.session.put(&path, update).await
    }

    /// Removes the subscription of an event family.
    #[instrument(skip(self))]
    pub async fn delete(&self, entity: WebhookEntity) -> CelcoinResult<Acknowledgement> {
        let path = format!("{}/{}", SUBSCRIPTION_PATH, entity.as_str());
        self.session.delete(&path, &[]).await
    }
}

fn validate_url(url: &str) -> CelcoinResult<()> {
    require(url, "webhook_url")?;
    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(CelcoinError::Validation {
            message: format!("webhook_url must be an http(s) URL, got {}", url),
        });
    }
    Ok(())
}
