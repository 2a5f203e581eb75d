//! Account statement service.

use tracing::instrument;

use super::require;
use crate::client::Session;
use crate::errors::{CelcoinError, CelcoinResult};
use crate::types::statements::{Statement, StatementQuery, MAX_STATEMENT_RANGE_DAYS};

const MOVEMENT_PATH: &str = "baas-walletreports/v1/wallet/movement";

/// Account movements.
#[derive(Debug, Clone)]
pub struct StatementsService {
    session: Session,
}

impl StatementsService {
    /// Creates a new statements service.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// One page of movements in a date range.
    #[instrument(skip(self, query), fields(account = %query.account, from = %query.date_from, to = %query.date_to))]
    pub async fn list(&self, query: &StatementQuery) -> CelcoinResult<Statement> {
        require(&query.account, "account")?;
        require(&query.document_number, "document_number")?;

        let days = (query.date_to - query.date_from).num_days();
        if days < 0 {
            return Err(CelcoinError::Validation {
                message: "date_from must not be after date_to".to_string(),
            });
        }
        if days > MAX_STATEMENT_RANGE_DAYS {
            return Err(CelcoinError::Validation {
                message: format!("date range must not exceed {} days", MAX_STATEMENT_RANGE_DAYS),
            });
        }

        self.session
            .get(MOVEMENT_PATH, &query.to_query())
            .await?
            .into_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{session, success};
    use crate::types::statements::BalanceType;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[tokio::test]
    async fn test_list_movements() {
        let (session, transport) = session();
        transport.queue_json_response(
            200,
            &success(serde_json::json!({
                "totalItems": 1,
                "currentPage": 1,
                "totalPages": 1,
                "movements": [{
                    "id": "m-1",
                    "createdAt": "2024-03-02T10:00:00",
                    "amount": 25.0,
                    "balanceType": "CREDIT",
                    "movementType": "PIXPAYMENTIN"
                }]
            })),
        );

        let statement = StatementsService::new(session)
            .list(&StatementQuery::new("300541976902", "12345678909", date(1), date(31)))
            .await
            .unwrap();

        assert_eq!(statement.movements[0].balance_type, BalanceType::Credit);
        assert!(transport.last_request().unwrap().url.ends_with(
            "/wallet/movement?Account=300541976902&DocumentNumber=12345678909&DateFrom=2024-03-01&DateTo=2024-03-31"
        ));
    }

    #[tokio::test]
    async fn test_inverted_range_is_rejected() {
        let (session, transport) = session();

        let result = StatementsService::new(session)
            .list(&StatementQuery::new("300541976902", "12345678909", date(10), date(1)))
            .await;

        assert!(matches!(result, Err(CelcoinError::Validation { .. })));
        assert!(transport.get_requests().is_empty());
    }
}
