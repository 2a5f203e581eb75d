//! Boleto (charge) types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to issue a boleto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoletoRequest {
    /// Caller reference; generated when blank.
    pub external_id: String,
    /// Days the boleto stays payable after the due date.
    pub expiration_after_payment: u32,
    /// Due date (`yyyy-MM-dd`).
    pub due_date: NaiveDate,
    /// Amount in BRL.
    pub amount: f64,
    /// Key that receives the embedded PIX payment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Payer.
    pub debtor: Debtor,
    /// Beneficiary account.
    pub receiver: Receiver,
    /// Fine, interest and discount rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<ChargeInstructions>,
}

impl CreateBoletoRequest {
    /// Creates a request with a blank external id.
    pub fn new(amount: f64, due_date: NaiveDate, debtor: Debtor, receiver: Receiver) -> Self {
        Self {
            external_id: String::new(),
            expiration_after_payment: 1,
            due_date,
            amount,
            key: None,
            debtor,
            receiver,
            instructions: None,
        }
    }

    /// Sets the external id.
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Sets charge instructions.
    pub fn with_instructions(mut self, instructions: ChargeInstructions) -> Self {
        self.instructions = Some(instructions);
        self
    }
}

/// Boleto payer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debtor {
    /// Name.
    pub name: String,
    /// CPF or CNPJ.
    pub document: String,
    /// CEP.
    pub postal_code: String,
    /// Street.
    pub public_area: String,
    /// Number.
    pub number: String,
    /// Complement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    /// Neighborhood.
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
}

/// Boleto beneficiary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receiver {
    /// CPF or CNPJ of the account holder.
    pub document: String,
    /// Account that receives the payment.
    pub account: String,
}

/// Fine, interest and discount rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeInstructions {
    /// Fine percentage after due date.
    #[serde(default)]
    pub fine: f64,
    /// Monthly interest percentage.
    #[serde(default)]
    pub interest: f64,
    /// Early payment discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

/// Early payment discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    /// Amount or percentage, depending on `modality`.
    pub amount: f64,
    /// `fixed` or `percent`.
    pub modality: String,
    /// Discount valid until.
    pub limit_date: NaiveDate,
}

/// Response to a boleto issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletoReceipt {
    /// Provider transaction id.
    pub transaction_id: String,
    /// Status.
    #[serde(default)]
    pub status: String,
}

/// Issued boleto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boleto {
    /// Provider transaction id.
    pub transaction_id: String,
    /// Caller reference.
    #[serde(default)]
    pub external_id: String,
    /// Amount.
    pub amount: f64,
    /// Due date.
    pub due_date: NaiveDate,
    /// Charge status.
    pub status: String,
    /// Bank slip details, present once registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boleto: Option<BoletoSlip>,
    /// Embedded PIX charge, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix: Option<BoletoPix>,
}

/// Bank slip registration data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletoSlip {
    /// Registration status.
    #[serde(default)]
    pub status: String,
    /// Barcode.
    #[serde(default)]
    pub bar_code: String,
    /// Typeable line.
    #[serde(default)]
    pub digitable_line: String,
    /// Issuing bank number.
    #[serde(default)]
    pub bank_number: String,
    /// Issuing bank branch.
    #[serde(default)]
    pub bank_agency: String,
    /// Issuing bank account.
    #[serde(default)]
    pub bank_account: String,
}

/// PIX charge embedded in a boleto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletoPix {
    /// Transaction id.
    #[serde(default)]
    pub transaction_id: String,
    /// Status.
    #[serde(default)]
    pub status: String,
    /// EMV copy-and-paste payload.
    #[serde(default)]
    pub emv: String,
}
