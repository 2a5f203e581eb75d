//! Balance types.

use serde::{Deserialize, Serialize};

/// Wallet balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Available amount.
    pub amount: f64,
    /// Amount blocked by judicial or operational holds.
    #[serde(default)]
    pub blocked_amount: f64,
}
