//! Income report types.

use serde::{Deserialize, Serialize};

use super::common::AccountNumber;

/// Annual income report of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeReport {
    /// Paying institution.
    pub payer_source: ReportParty,
    /// Account holder.
    pub owner: ReportParty,
    /// Reported account.
    pub account: AccountNumber,
    /// Balances at the end of each reported year.
    #[serde(default)]
    pub balances: Vec<YearBalance>,
    /// Income entries.
    #[serde(default)]
    pub incomes: Vec<IncomeEntry>,
    /// Base64 PDF of the report, when generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_file: Option<String>,
}

/// Named party in a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportParty {
    /// CPF or CNPJ.
    pub document_number: String,
    /// Name.
    pub name: String,
    /// Party type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub party_type: Option<String>,
}

/// Balance at the end of a calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBalance {
    /// Calendar year.
    pub calendar_year: String,
    /// Amount.
    pub amount: f64,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
    /// Balance type.
    #[serde(default, rename = "type")]
    pub balance_type: String,
}

/// Income received during the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEntry {
    /// Income type.
    #[serde(rename = "type")]
    pub income_type: String,
    /// Amount.
    pub amount: f64,
    /// Tax withheld.
    #[serde(default)]
    pub tax: f64,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
}
