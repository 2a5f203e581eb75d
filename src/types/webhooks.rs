//! Webhook subscription types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event family a webhook listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WebhookEntity {
    /// Outgoing PIX payment.
    PixPaymentOut,
    /// Incoming PIX payment.
    PixPaymentIn,
    /// Outgoing PIX reversal.
    PixReversalOut,
    /// Incoming PIX reversal.
    PixReversalIn,
    /// Outgoing TED.
    SpbTransferOutTed,
    /// Incoming TED.
    SpbTransferInTed,
    /// Internal transfer.
    InternalTransfer,
    /// Boleto charge paid.
    ChargeIn,
    /// Bill payment settled.
    BillPayment,
    /// Natural-person onboarding.
    OnboardingCreate,
    /// Legal-person onboarding.
    OnboardingCreateBusiness,
}

impl WebhookEntity {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PixPaymentOut => "pix-payment-out",
            Self::PixPaymentIn => "pix-payment-in",
            Self::PixReversalOut => "pix-reversal-out",
            Self::PixReversalIn => "pix-reversal-in",
            Self::SpbTransferOutTed => "spb-transfer-out-ted",
            Self::SpbTransferInTed => "spb-transfer-in-ted",
            Self::InternalTransfer => "internal-transfer",
            Self::ChargeIn => "charge-in",
            Self::BillPayment => "bill-payment",
            Self::OnboardingCreate => "onboarding-create",
            Self::OnboardingCreateBusiness => "onboarding-create-business",
        }
    }
}

impl fmt::Display for WebhookEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic credentials the provider sends when calling the webhook.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookAuth {
    /// Login.
    pub login: String,
    /// Password.
    pub pwd: String,
    /// Auth type, normally `basic`.
    #[serde(rename = "type")]
    pub auth_type: String,
}

impl WebhookAuth {
    /// HTTP basic credentials.
    pub fn basic(login: impl Into<String>, pwd: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            pwd: pwd.into(),
            auth_type: "basic".to_string(),
        }
    }
}

impl fmt::Debug for WebhookAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookAuth")
            .field("login", &self.login)
            .field("pwd", &"[REDACTED]")
            .field("auth_type", &self.auth_type)
            .finish()
    }
}

/// New webhook subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscription {
    /// Event family.
    pub entity: WebhookEntity,
    /// Callback URL.
    pub webhook_url: String,
    /// Credentials for the callback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<WebhookAuth>,
}

/// Changes to an existing subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookUpdate {
    /// New callback URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// New credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<WebhookAuth>,
    /// Enables or disables delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl WebhookUpdate {
    /// True when nothing would change.
    pub fn is_empty(&self) -> bool {
        self.webhook_url.is_none() && self.auth.is_none() && self.active.is_none()
    }
}

/// Registered webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Subscription id.
    #[serde(default)]
    pub subscription_id: String,
    /// Event family.
    pub entity: WebhookEntity,
    /// Callback URL.
    pub webhook_url: String,
    /// Delivery enabled.
    #[serde(default)]
    pub active: bool,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Registered webhooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookList {
    /// Subscriptions.
    #[serde(default)]
    pub subscriptions: Vec<Webhook>,
}
