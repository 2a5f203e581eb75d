//! TED and internal transfer types.

use serde::{Deserialize, Serialize};

use super::common::{AccountType, PersonType};

/// Debit side of a transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitParty {
    /// Paying account.
    pub account: String,
}

/// Credit side of a TED.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TedCreditParty {
    /// Bank code (COMPE or ISPB).
    pub bank: String,
    /// Account number.
    pub account: String,
    /// Branch.
    pub branch: String,
    /// CPF or CNPJ.
    pub tax_id: String,
    /// Holder name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Holder kind.
    pub person_type: PersonType,
}

/// Purpose code of a TED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientFinality {
    /// Tax payment.
    #[serde(rename = "01")]
    TaxPayment,
    /// Dividends.
    #[serde(rename = "04")]
    Dividends,
    /// Salary.
    #[serde(rename = "05")]
    Salary,
    /// Supplier payment.
    #[serde(rename = "07")]
    SupplierPayment,
    /// Transfer between accounts of the same holder.
    #[serde(rename = "10")]
    SameHolder,
    /// Other purposes.
    #[serde(rename = "99999")]
    Other,
}

/// Request to send a TED.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TedTransferRequest {
    /// Amount in BRL.
    pub amount: f64,
    /// Caller reference; generated when blank.
    pub client_code: String,
    /// Paying account.
    pub debit_party: DebitParty,
    /// Receiving account.
    pub credit_party: TedCreditParty,
    /// Purpose code.
    pub client_finality: ClientFinality,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TedTransferRequest {
    /// Creates a TED with a blank client code.
    pub fn new(amount: f64, debit_account: impl Into<String>, credit_party: TedCreditParty) -> Self {
        Self {
            amount,
            client_code: String::new(),
            debit_party: DebitParty {
                account: debit_account.into(),
            },
            credit_party,
            client_finality: ClientFinality::Other,
            description: None,
        }
    }

    /// Sets the client code.
    pub fn with_client_code(mut self, client_code: impl Into<String>) -> Self {
        self.client_code = client_code.into();
        self
    }
}

/// Request to move funds between two accounts of the same institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTransferRequest {
    /// Amount in BRL.
    pub amount: f64,
    /// Caller reference; generated when blank.
    pub client_code: String,
    /// Paying account.
    pub debit_party: DebitParty,
    /// Receiving account.
    pub credit_party: DebitParty,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InternalTransferRequest {
    /// Creates an internal transfer with a blank client code.
    pub fn new(amount: f64, from_account: impl Into<String>, to_account: impl Into<String>) -> Self {
        Self {
            amount,
            client_code: String::new(),
            debit_party: DebitParty {
                account: from_account.into(),
            },
            credit_party: DebitParty {
                account: to_account.into(),
            },
            description: None,
        }
    }

    /// Sets the client code.
    pub fn with_client_code(mut self, client_code: impl Into<String>) -> Self {
        self.client_code = client_code.into();
        self
    }
}

/// Status of a TED or internal transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferStatus {
    /// Provider transaction id.
    pub id: String,
    /// Amount.
    pub amount: f64,
    /// Caller reference.
    #[serde(default)]
    pub client_code: String,
    /// Status.
    pub status: String,
    /// End-to-end id, for SPB transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_to_end_id: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
