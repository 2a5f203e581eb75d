//! Legal-person onboarding and account types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{br_date, AccountNumber, Address};
use super::customers::{AccountStatus, ONBOARD_TYPE_BAAS};

/// Company legal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompanyType {
    /// Individual micro-entrepreneur.
    Mei,
    /// Limited company.
    Ltda,
    /// Sole proprietorship.
    Me,
    /// Corporation.
    Sa,
}

/// Person holding an ownership stake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOwner {
    /// Owner type, normally `SOCIO`.
    pub owner_type: String,
    /// CPF.
    pub document_number: String,
    /// Full name.
    pub full_name: String,
    /// Phone.
    pub phone_number: String,
    /// E-mail.
    pub email: String,
    /// Mother's name.
    pub mother_name: String,
    /// Birth date.
    #[serde(with = "br_date")]
    pub birth_date: NaiveDate,
    /// Address.
    pub address: Address,
    /// Politically exposed person flag.
    pub is_politically_exposed_person: bool,
}

/// Request to open a legal-person account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessRequest {
    /// Caller reference; generated when blank.
    pub client_code: String,
    /// CNPJ, digits only.
    pub document_number: String,
    /// Company phone.
    pub contact_number: String,
    /// Company e-mail.
    pub business_email: String,
    /// Registered name.
    pub business_name: String,
    /// Trading name.
    pub trading_name: String,
    /// Legal form.
    pub company_type: CompanyType,
    /// Owners.
    pub owners: Vec<BusinessOwner>,
    /// Company address.
    pub business_address: Address,
    /// Onboarding channel.
    pub on_board_type: String,
}

impl CreateBusinessRequest {
    /// Creates a request with a blank client code and no owners.
    pub fn new(
        document_number: impl Into<String>,
        business_name: impl Into<String>,
        company_type: CompanyType,
        business_address: Address,
    ) -> Self {
        let business_name = business_name.into();
        Self {
            client_code: String::new(),
            document_number: document_number.into(),
            contact_number: String::new(),
            business_email: String::new(),
            trading_name: business_name.clone(),
            business_name,
            company_type,
            owners: Vec::new(),
            business_address,
            on_board_type: ONBOARD_TYPE_BAAS.to_string(),
        }
    }

    /// Adds an owner.
    pub fn with_owner(mut self, owner: BusinessOwner) -> Self {
        self.owners.push(owner);
        self
    }
}

/// Legal-person account details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAccount {
    /// Account state.
    pub status: AccountStatus,
    /// Branch and account.
    pub account: AccountNumber,
    /// CNPJ.
    pub document_number: String,
    /// Registered name.
    pub business_name: String,
    /// Trading name.
    #[serde(default)]
    pub trading_name: String,
    /// Company e-mail.
    #[serde(default)]
    pub business_email: String,
    /// Company phone.
    #[serde(default)]
    pub contact_number: String,
    /// Owners.
    #[serde(default)]
    pub owners: Vec<serde_json::Value>,
    /// Company address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_address: Option<Address>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
}
