//! Income report service.

use chrono::Datelike;
use tracing::instrument;

use super::require;
use crate::client::Session;
use crate::errors::{CelcoinError, CelcoinResult};
use crate::types::income_report::IncomeReport;

const INCOME_REPORT_PATH: &str = "baas-accountmanager/v1/account/income-report";

/// First calendar year the provider reports on.
const FIRST_REPORT_YEAR: i32 = 2020;

/// Annual income reports.
#[derive(Debug, Clone)]
pub struct IncomeReportService {
    session: Session,
}

impl IncomeReportService {
    /// Creates a new income report service.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Income report of `account` for a past calendar year.
    #[instrument(skip(self))]
    pub async fn get(&self, account: &str, calendar_year: i32) -> CelcoinResult<IncomeReport> {
        require(account, "account")?;

        let current_year = chrono::Utc::now().year();
        if calendar_year < FIRST_REPORT_YEAR || calendar_year >= current_year {
            return Err(CelcoinError::Validation {
                message: format!(
                    "calendar_year must be between {} and {}, got {}",
                    FIRST_REPORT_YEAR,
                    current_year - 1,
                    calendar_year
                ),
            });
        }

        self.session
            .get(
                INCOME_REPORT_PATH,
                &[
                    ("Account", account.to_string()),
                    ("CalendarYear", calendar_year.to_string()),
                ],
            )
            .await?
            .into_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{session, success};

    #[tokio::test]
    async fn test_get_report() {
        let (session, transport) = session();
        transport.queue_json_response(
            200,
            &success(serde_json::json!({
                "payerSource": {"documentNumber": "13935893000109", "name": "Celcoin"},
                "owner": {"documentNumber": "12345678909", "name": "Maria Silva"},
                "account": {"branch": "0001", "account": "300541976902"},
                "balances": [{"calendarYear": "2022", "amount": 10.5, "currency": "BRL", "type": "SALDO"}]
            })),
        );

        let report = IncomeReportService::new(session)
            .get("300541976902", 2022)
            .await
            .unwrap();

        assert_eq!(report.owner.name, "Maria Silva");
        assert_eq!(report.balances[0].amount, 10.5);
        assert!(transport
            .last_request()
            .unwrap()
            .url
            .ends_with("/income-report?Account=300541976902&CalendarYear=2022"));
    }

    #[tokio::test]
    async fn test_current_year_is_rejected() {
        let (session, transport) = session();
        let year = chrono::Utc::now().year();

        let result = IncomeReportService::new(session).get("300541976902", year).await;

        assert!(matches!(result, Err(CelcoinError::Validation { .. })));
        assert!(transport.get_requests().is_empty());
    }
}
