//! Provider error-code table.
//!
//! Celcoin reports failures as an `errorCode` string inside the response
//! envelope. The table below folds those codes into a small set of kinds the
//! caller can branch on.

use serde::Serialize;

/// Local classification of a provider error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorKind {
    /// Malformed or missing request parameter.
    InvalidRequest,
    /// CPF/CNPJ failed validation.
    InvalidDocument,
    /// The referenced account does not exist.
    AccountNotFound,
    /// The account exists but is blocked or closed.
    AccountBlocked,
    /// Not enough available balance.
    InsufficientFunds,
    /// Same client code was already processed.
    DuplicateRequest,
    /// Daily or per-transaction limit exceeded.
    LimitExceeded,
    /// DICT entry not found.
    PixKeyNotFound,
    /// DICT entry already registered for another account.
    PixKeyAlreadyRegistered,
    /// Barcode or digitable line could not be read.
    InvalidBarcode,
    /// Boleto charge not found.
    ChargeNotFound,
    /// Payment rejected by the settlement network.
    PaymentRejected,
    /// A webhook is already registered for the entity.
    WebhookAlreadyRegistered,
    /// Code not present in the table.
    Unknown,
}

impl ProviderErrorKind {
    /// Message used when the provider does not send one.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid request parameters",
            Self::InvalidDocument => "invalid document number",
            Self::AccountNotFound => "account not found",
            Self::AccountBlocked => "account is blocked or closed",
            Self::InsufficientFunds => "insufficient funds",
            Self::DuplicateRequest => "request already processed",
            Self::LimitExceeded => "transaction limit exceeded",
            Self::PixKeyNotFound => "pix key not found",
            Self::PixKeyAlreadyRegistered => "pix key already registered",
            Self::InvalidBarcode => "invalid barcode",
            Self::ChargeNotFound => "charge not found",
            Self::PaymentRejected => "payment rejected",
            Self::WebhookAlreadyRegistered => "webhook already registered",
            Self::Unknown => "unknown provider error",
        }
    }

    /// Whether the same request may succeed if sent again later.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::LimitExceeded)
    }
}

const CODE_TABLE: &[(&str, ProviderErrorKind)] = &[
    // onboarding / account manager
    ("CBE001", ProviderErrorKind::InvalidRequest),
    ("CBE002", ProviderErrorKind::InvalidDocument),
    ("CBE003", ProviderErrorKind::AccountNotFound),
    ("CBE004", ProviderErrorKind::AccountBlocked),
    ("CBE005", ProviderErrorKind::DuplicateRequest),
    ("OBE001", ProviderErrorKind::InvalidRequest),
    ("OBE002", ProviderErrorKind::InvalidDocument),
    ("OBE003", ProviderErrorKind::DuplicateRequest),
    // wallet transactions
    ("CBE020", ProviderErrorKind::InsufficientFunds),
    ("CBE021", ProviderErrorKind::LimitExceeded),
    ("CBE022", ProviderErrorKind::DuplicateRequest),
    ("CBE023", ProviderErrorKind::PaymentRejected),
    // pix dict
    ("PBE001", ProviderErrorKind::PixKeyNotFound),
    ("PBE002", ProviderErrorKind::PixKeyAlreadyRegistered),
    ("PBE003", ProviderErrorKind::InvalidRequest),
    ("PBE004", ProviderErrorKind::LimitExceeded),
    // charges and bill payments
    ("CBE040", ProviderErrorKind::ChargeNotFound),
    ("CBE041", ProviderErrorKind::InvalidBarcode),
    ("CBE042", ProviderErrorKind::PaymentRejected),
    ("CBE043", ProviderErrorKind::DuplicateRequest),
    // webhooks
    ("WBE001", ProviderErrorKind::WebhookAlreadyRegistered),
    ("WBE002", ProviderErrorKind::InvalidRequest),
];

/// Classifies a provider error code. Lookup ignores ASCII case.
pub fn classify(code: &str) -> ProviderErrorKind {
    CODE_TABLE
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code.trim()))
        .map(|(_, kind)| *kind)
        .unwrap_or(ProviderErrorKind::Unknown)
}
