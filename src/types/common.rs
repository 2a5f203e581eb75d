//! Common types shared across API areas.

use serde::{Deserialize, Serialize};

use crate::errors::{ApiErrorDetail, CelcoinError, CelcoinResult};

/// Processing status reported in every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    /// The request completed.
    #[default]
    Success,
    /// Accepted for asynchronous processing.
    Processing,
    /// The request failed; see the envelope's `error`.
    Error,
    /// Pending confirmation.
    Pending,
    /// Any status this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Envelope wrapping every API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// API version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Processing status.
    #[serde(default)]
    pub status: ResponseStatus,
    /// Payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<T>,
    /// Provider error, present when `status` is `ERROR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorDetail>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload.
    pub fn into_body(self) -> CelcoinResult<T> {
        self.body.ok_or_else(|| CelcoinError::Deserialization {
            message: "response envelope has no body".to_string(),
            body: String::new(),
        })
    }
}

/// Envelope for operations whose payload is irrelevant to the caller.
pub type Acknowledgement = ApiEnvelope<serde_json::Value>;

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// CEP, digits only.
    pub postal_code: String,
    /// Street.
    pub street: String,
    /// Number.
    pub number: String,
    /// Complement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_complement: Option<String>,
    /// Neighborhood.
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    /// Latitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
}

/// Branch and account number pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountNumber {
    /// Branch.
    pub branch: String,
    /// Account number.
    pub account: String,
}

/// Account type used in transfer parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccountType {
    /// Checking account.
    #[default]
    #[serde(rename = "CACC")]
    Checking,
    /// Salary account.
    #[serde(rename = "SLRY")]
    Salary,
    /// Savings account.
    #[serde(rename = "SVGS")]
    Savings,
    /// Prepaid payment account.
    #[serde(rename = "TRAN")]
    Payment,
}

/// Natural or legal person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonType {
    /// Natural person (CPF).
    Natural,
    /// Legal person (CNPJ).
    Legal,
}

/// Receipt returned when a transaction is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Provider transaction id.
    pub id: String,
    /// Transaction status.
    #[serde(default)]
    pub status: String,
    /// Caller reference echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_code: Option<String>,
    /// End-to-end id for PIX and SPB transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_to_end_id: Option<String>,
}

/// Fills `client_code` with a fresh UUID v4 when the caller left it blank.
pub fn ensure_client_code(client_code: &mut String) {
    if client_code.trim().is_empty() {
        *client_code = uuid::Uuid::new_v4().to_string();
    }
}

/// Serde helpers for `dd-MM-yyyy` dates.
pub mod br_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d-%m-%Y";

    /// Serializes a date as `dd-MM-yyyy`.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    /// Deserializes a `dd-MM-yyyy` date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_envelope_with_body() {
        let envelope: ApiEnvelope<TransactionReceipt> = serde_json::from_str(
            r#"{"version":"1.0.0","status":"PROCESSING","body":{"id":"tx-1","status":"PROCESSING","clientCode":"abc"}}"#,
        )
        .unwrap();

        assert_eq!(envelope.status, ResponseStatus::Processing);
        let receipt = envelope.into_body().unwrap();
        assert_eq!(receipt.id, "tx-1");
        assert_eq!(receipt.client_code.as_deref(), Some("abc"));
    }

    #[test]
    fn test_unknown_status_and_missing_body() {
        let envelope: Acknowledgement =
            serde_json::from_str(r#"{"status":"SCHEDULED"}"#).unwrap();

        assert_eq!(envelope.status, ResponseStatus::Unknown);
        assert!(matches!(
            envelope.into_body(),
            Err(CelcoinError::Deserialization { .. })
        ));
    }

    fn decode<T: serde::de::DeserializeOwned>(raw: &str) -> ApiEnvelope<T> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_envelope_decodes_for_any_payload_type() {
        #[derive(Debug, Deserialize)]
        struct Payload {
            id: String,
        }

        let missing: ApiEnvelope<Payload> = decode(r#"{"status":"SUCCESS"}"#);
        assert!(missing.body.is_none());

        let present: ApiEnvelope<Payload> = decode(r#"{"status":"SUCCESS","body":{"id":"p-1"}}"#);
        assert_eq!(present.into_body().unwrap().id, "p-1");
    }

    #[test]
    fn test_ensure_client_code() {
        let mut blank = String::new();
        ensure_client_code(&mut blank);
        assert!(uuid::Uuid::parse_str(&blank).is_ok());

        let mut given = "order-42".to_string();
        ensure_client_code(&mut given);
        assert_eq!(given, "order-42");
    }

    #[test]
    fn test_br_date() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            #[serde(with = "br_date")]
            date: NaiveDate,
        }

        let holder: Holder = serde_json::from_str(r#"{"date":"31-01-1990"}"#).unwrap();
        assert_eq!(holder.date, NaiveDate::from_ymd_opt(1990, 1, 31).unwrap());
        assert_eq!(
            serde_json::to_string(&holder).unwrap(),
            r#"{"date":"31-01-1990"}"#
        );
    }
}
