//! PIX key (DICT) and PIX transfer types.

use serde::{Deserialize, Serialize};

use super::common::AccountType;

/// Kind of PIX key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PixKeyType {
    /// Holder CPF.
    Cpf,
    /// Holder CNPJ.
    Cnpj,
    /// E-mail address.
    Email,
    /// Phone number.
    Phone,
    /// Random key generated by the DICT.
    Evp,
}

/// Request to register a PIX key for an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePixKeyRequest {
    /// Account that owns the key.
    pub account: String,
    /// Key kind.
    pub key_type: PixKeyType,
    /// Key value. Omitted for `EVP`, which the DICT generates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl CreatePixKeyRequest {
    /// Requests a random (EVP) key.
    pub fn random(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            key_type: PixKeyType::Evp,
            key: None,
        }
    }

    /// Requests a key with an explicit value.
    pub fn new(account: impl Into<String>, key_type: PixKeyType, key: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            key_type,
            key: Some(key.into()),
        }
    }
}

/// Registered PIX key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixKey {
    /// Key kind.
    pub key_type: PixKeyType,
    /// Key value.
    pub key: String,
    /// Account the key points to.
    pub account: PixKeyAccount,
    /// Key holder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<PixKeyOwner>,
}

/// Account a PIX key points to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixKeyAccount {
    /// ISPB of the holding institution.
    #[serde(default)]
    pub participant: String,
    /// Branch.
    #[serde(default)]
    pub branch: String,
    /// Account number.
    pub account: String,
    /// Account type.
    #[serde(default)]
    pub account_type: AccountType,
    /// Registration timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
}

/// PIX key holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixKeyOwner {
    /// Holder kind.
    #[serde(default, rename = "type")]
    pub owner_type: String,
    /// CPF or CNPJ.
    pub document_number: String,
    /// Name.
    pub name: String,
}

/// Keys registered for an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixKeyList {
    /// Keys.
    #[serde(default)]
    pub list_keys: Vec<PixKey>,
}

/// How a PIX payment was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PixInitiationType {
    /// Account data typed by the payer.
    Manual,
    /// Key resolved through the DICT.
    Dict,
    /// Static QR code.
    StaticQrcode,
    /// Dynamic QR code.
    DynamicQrcode,
}

/// One side of a PIX transfer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixParty {
    /// Account number.
    pub account: String,
    /// Branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// ISPB of the institution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    /// PIX key, for DICT-initiated transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// CPF or CNPJ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Holder name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account type.
    #[serde(default)]
    pub account_type: AccountType,
}

/// Request to send a PIX payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixTransferRequest {
    /// Amount in BRL.
    pub amount: f64,
    /// Caller reference; generated when blank.
    pub client_code: String,
    /// End-to-end id obtained from a DICT lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_to_end_id: Option<String>,
    /// Initiation type.
    pub initiation_type: PixInitiationType,
    /// Payment type, `IMMEDIATE` for transfers.
    pub payment_type: String,
    /// Urgency.
    pub urgency: String,
    /// Transaction type.
    pub transaction_type: String,
    /// Paying account.
    pub debit_party: PixParty,
    /// Receiving account.
    pub credit_party: PixParty,
    /// Free text shown to the receiver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remittance_information: Option<String>,
}

impl PixTransferRequest {
    /// Creates an immediate transfer with a blank client code.
    pub fn new(
        amount: f64,
        initiation_type: PixInitiationType,
        debit_party: PixParty,
        credit_party: PixParty,
    ) -> Self {
        Self {
            amount,
            client_code: String::new(),
            end_to_end_id: None,
            initiation_type,
            payment_type: "IMMEDIATE".to_string(),
            urgency: "HIGH".to_string(),
            transaction_type: "TRANSFER".to_string(),
            debit_party,
            credit_party,
            remittance_information: None,
        }
    }

    /// Sets the client code.
    pub fn with_client_code(mut self, client_code: impl Into<String>) -> Self {
        self.client_code = client_code.into();
        self
    }

    /// Sets the end-to-end id.
    pub fn with_end_to_end_id(mut self, end_to_end_id: impl Into<String>) -> Self {
        self.end_to_end_id = Some(end_to_end_id.into());
        self
    }
}

/// Status of a PIX payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixTransferStatus {
    /// Provider transaction id.
    pub id: String,
    /// Amount.
    pub amount: f64,
    /// Caller reference.
    #[serde(default)]
    pub client_code: String,
    /// End-to-end id.
    #[serde(default)]
    pub end_to_end_id: String,
    /// Status.
    pub status: String,
    /// Paying account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit_party: Option<PixParty>,
    /// Receiving account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_party: Option<PixParty>,
}
