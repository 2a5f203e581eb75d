//! Service implementations, one per API area.

mod balance;
mod boletos;
mod business;
mod customers;
mod income_report;
mod payments;
mod pix;
mod statements;
mod transfers;
mod webhooks;

pub use balance::BalanceService;
pub use boletos::BoletosService;
pub use business::BusinessService;
pub use customers::CustomersService;
pub use income_report::IncomeReportService;
pub use payments::PaymentsService;
pub use pix::PixService;
pub use statements::StatementsService;
pub use transfers::TransfersService;
pub use webhooks::WebhooksService;

use crate::errors::{CelcoinError, CelcoinResult};

/// Rejects blank required fields before any request is made.
pub(crate) fn require(value: &str, field: &str) -> CelcoinResult<()> {
    if value.trim().is_empty() {
        return Err(CelcoinError::Validation {
            message: format!("{} is required", field),
        });
    }
    Ok(())
}

/// Rejects non-positive or non-finite amounts.
pub(crate) fn require_amount(amount: f64) -> CelcoinResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CelcoinError::Validation {
            message: format!("amount must be positive, got {}", amount),
        });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("123", "account").is_ok());
        let err = require("  ", "account").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: account is required");
    }

    #[test]
    fn test_require_amount() {
        assert!(require_amount(0.01).is_ok());
        assert!(require_amount(0.0).is_err());
        assert!(require_amount(-5.0).is_err());
        assert!(require_amount(f64::NAN).is_err());
    }
}
