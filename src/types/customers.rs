//! Natural-person onboarding and account types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{br_date, AccountNumber, Address};

/// Onboarding channel. Accounts opened through this client are always `BAAS`.
pub const ONBOARD_TYPE_BAAS: &str = "BAAS";

/// Request to open a natural-person account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    /// Caller reference; generated when blank.
    pub client_code: String,
    /// CPF, digits only.
    pub document_number: String,
    /// Phone in `+55DDNNNNNNNNN` form.
    pub phone_number: String,
    /// E-mail.
    pub email: String,
    /// Mother's full name.
    pub mother_name: String,
    /// Full name.
    pub full_name: String,
    /// Social name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_name: Option<String>,
    /// Birth date.
    #[serde(with = "br_date")]
    pub birth_date: NaiveDate,
    /// Residential address.
    pub address: Address,
    /// Politically exposed person flag.
    pub is_politically_exposed_person: bool,
    /// Onboarding channel.
    pub on_board_type: String,
}

impl CreateCustomerRequest {
    /// Creates a request with a blank client code and the `BAAS` channel.
    pub fn new(
        document_number: impl Into<String>,
        full_name: impl Into<String>,
        birth_date: NaiveDate,
        address: Address,
    ) -> Self {
        Self {
            client_code: String::new(),
            document_number: document_number.into(),
            phone_number: String::new(),
            email: String::new(),
            mother_name: String::new(),
            full_name: full_name.into(),
            social_name: None,
            birth_date,
            address,
            is_politically_exposed_person: false,
            on_board_type: ONBOARD_TYPE_BAAS.to_string(),
        }
    }

    /// Sets the client code.
    pub fn with_client_code(mut self, client_code: impl Into<String>) -> Self {
        self.client_code = client_code.into();
        self
    }

    /// Sets phone and e-mail.
    pub fn with_contact(mut self, phone_number: impl Into<String>, email: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self.email = email.into();
        self
    }

    /// Sets the mother's name.
    pub fn with_mother_name(mut self, mother_name: impl Into<String>) -> Self {
        self.mother_name = mother_name.into();
        self
    }
}

/// Response to an onboarding submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingReceipt {
    /// Proposal id used to follow the onboarding.
    pub proposal_id: String,
    /// Caller reference.
    #[serde(default)]
    pub client_code: String,
    /// Document number.
    #[serde(default)]
    pub document_number: String,
}

/// Onboarding proposal lookup result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProposals {
    /// Matching proposals.
    #[serde(default)]
    pub proposal: Vec<OnboardingProposal>,
}

/// One onboarding proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProposal {
    /// Proposal id.
    pub proposal_id: String,
    /// Caller reference.
    #[serde(default)]
    pub client_code: String,
    /// Document number.
    #[serde(default)]
    pub document_number: String,
    /// Proposal status.
    pub status: ProposalStatus,
    /// Proposal type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposal_type: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Onboarding proposal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProposalStatus {
    /// Submitted.
    Created,
    /// Under analysis.
    Pending,
    /// Awaiting documents.
    #[serde(rename = "PENDING_DOCUMENTSCOPY")]
    PendingDocuments,
    /// Processing.
    Processing,
    /// Approved; the account exists.
    Approved,
    /// Rejected.
    Reproved,
    /// Any status this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Account state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountStatus {
    /// Operating normally.
    Active,
    /// Blocked.
    Blocked,
    /// Closed.
    Closed,
    /// Any status this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Natural-person account details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccount {
    /// Account state.
    pub status: AccountStatus,
    /// Branch and account.
    pub account: AccountNumber,
    /// CPF.
    pub document_number: String,
    /// Full name.
    pub full_name: String,
    /// Phone.
    #[serde(default)]
    pub phone_number: String,
    /// E-mail.
    #[serde(default)]
    pub email: String,
    /// Mother's name.
    #[serde(default)]
    pub mother_name: String,
    /// Social name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_name: Option<String>,
    /// Birth date as sent by the provider.
    #[serde(default)]
    pub birth_date: String,
    /// Address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Politically exposed person flag.
    #[serde(default)]
    pub is_politically_exposed_person: bool,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
}

/// Request to change an account's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountStatusRequest {
    /// Account number.
    pub account: String,
    /// Holder document.
    pub document_number: String,
    /// Target state.
    pub status: AccountStatus,
    /// Reason recorded by the provider.
    pub reason: String,
}

/// Reason for closing an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CloseReason {
    /// Requested by the holder.
    ClientRequest,
    /// Suspected fraud.
    Fraud,
    /// Holder deceased.
    Death,
    /// Account was opened by mistake.
    Error,
}

impl CloseReason {
    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientRequest => "ClientRequest",
            Self::Fraud => "Fraud",
            Self::Death => "Death",
            Self::Error => "Error",
        }
    }
}
