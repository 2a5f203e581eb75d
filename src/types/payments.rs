//! Bill payment types.

use serde::{Deserialize, Serialize};

/// Barcode of a bill, in either representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barcode {
    /// Bill kind: `1` for concessionaires, `2` for bank slips.
    #[serde(rename = "type")]
    pub barcode_type: u8,
    /// Typeable line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digitable: Option<String>,
    /// Raw barcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

impl Barcode {
    /// Builds a barcode from a typeable line, inferring the bill kind from
    /// its length (48 digits for concessionaires, 47 for bank slips).
    pub fn from_digitable(line: &str) -> Self {
        let digits: String = line.chars().filter(char::is_ascii_digit).collect();
        let barcode_type = if digits.len() == 48 { 1 } else { 2 };
        Self {
            barcode_type,
            digitable: Some(digits),
            barcode: None,
        }
    }

    /// True when neither representation is present.
    pub fn is_empty(&self) -> bool {
        self.digitable.as_deref().map_or(true, str::is_empty)
            && self.barcode.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthorizeRequest<'a> {
    pub barcode: &'a Barcode,
}

/// Bill data returned by authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillAuthorization {
    /// Id to reference when paying.
    pub transaction_id: String,
    /// Beneficiary name.
    #[serde(default)]
    pub assignor: String,
    /// Nominal value.
    pub value: f64,
    /// Due date as sent by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Last accepted payment time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_hour: Option<String>,
    /// Fine and interest breakdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_data: Option<RegistrationData>,
}

/// Registered bill data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    /// Payer document.
    #[serde(default)]
    pub document_payer: String,
    /// Beneficiary document.
    #[serde(default)]
    pub document_recipient: String,
    /// Amount with fine and interest.
    #[serde(default)]
    pub total_updated: f64,
    /// Fine.
    #[serde(default)]
    pub fine_value_calculated: f64,
    /// Interest.
    #[serde(default)]
    pub interest_value_calculated: f64,
    /// Discount.
    #[serde(default)]
    pub discount_value: f64,
}

/// Request to pay an authorized bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentRequest {
    /// Caller reference; generated when blank.
    #[serde(rename = "clientRequestId")]
    pub client_code: String,
    /// Amount to pay.
    pub amount: f64,
    /// Paying account.
    pub account: String,
    /// Id from [`BillAuthorization::transaction_id`].
    pub transaction_id_authorize: String,
    /// Bill barcode.
    pub barcode_info: Barcode,
    /// Free tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<PaymentTag>,
}

impl BillPaymentRequest {
    /// Creates a payment for a previously authorized bill.
    pub fn new(account: impl Into<String>, authorization: &BillAuthorization, barcode: Barcode) -> Self {
        let amount = authorization
            .registration_data
            .as_ref()
            .map(|data| data.total_updated)
            .filter(|total| *total > 0.0)
            .unwrap_or(authorization.value);
        Self {
            client_code: String::new(),
            amount,
            account: account.into(),
            transaction_id_authorize: authorization.transaction_id.clone(),
            barcode_info: barcode,
            tags: Vec::new(),
        }
    }
}

/// Key/value tag attached to a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTag {
    /// Key.
    pub key: String,
    /// Value.
    pub value: String,
}

/// Status of a bill payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentStatus {
    /// Provider transaction id.
    pub id: String,
    /// Caller reference.
    #[serde(default, rename = "clientRequestId")]
    pub client_code: String,
    /// Amount paid.
    pub amount: f64,
    /// Status.
    pub status: String,
    /// Payment timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barcode_type_from_length() {
        let slip = Barcode::from_digitable("23793.38128 60000.000003 00000.000400 1 84340000010000");
        assert_eq!(slip.barcode_type, 2);
        assert_eq!(slip.digitable.as_deref().map(str::len), Some(47));

        let utility = Barcode::from_digitable(&"8".repeat(48));
        assert_eq!(utility.barcode_type, 1);

        assert!(Barcode::default().is_empty());
    }

    #[test]
    fn test_payment_uses_updated_total() {
        let authorization = BillAuthorization {
            transaction_id: "auth-1".to_string(),
            assignor: "ACME".to_string(),
            value: 100.0,
            due_date: None,
            end_hour: None,
            registration_data: Some(RegistrationData {
                total_updated: 102.5,
                ..Default::default()
            }),
        };

        let request = BillPaymentRequest::new("300541976902", &authorization, Barcode::default());
        assert_eq!(request.amount, 102.5);
        assert_eq!(request.transaction_id_authorize, "auth-1");

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("clientRequestId").is_some());
        assert!(json.get("tags").is_none());
    }
}
