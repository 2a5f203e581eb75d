//! Account statement types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Longest date range the statement endpoint accepts, in days.
pub const MAX_STATEMENT_RANGE_DAYS: i64 = 90;

/// Filter for [`StatementsService::list`](crate::services::StatementsService::list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementQuery {
    /// Account number.
    pub account: String,
    /// Holder document.
    pub document_number: String,
    /// First day, inclusive.
    pub date_from: NaiveDate,
    /// Last day, inclusive.
    pub date_to: NaiveDate,
    /// Page number, starting at 1.
    pub page: Option<u32>,
    /// Page size.
    pub limit_per_page: Option<u32>,
}

impl StatementQuery {
    /// Creates a query for a date range.
    pub fn new(
        account: impl Into<String>,
        document_number: impl Into<String>,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Self {
        Self {
            account: account.into(),
            document_number: document_number.into(),
            date_from,
            date_to,
            page: None,
            limit_per_page: None,
        }
    }

    /// Selects a page.
    pub fn page(mut self, page: u32, limit_per_page: u32) -> Self {
        self.page = Some(page);
        self.limit_per_page = Some(limit_per_page);
        self
    }

    /// Query-string pairs in wire order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("Account", self.account.clone()),
            ("DocumentNumber", self.document_number.clone()),
            ("DateFrom", self.date_from.format("%Y-%m-%d").to_string()),
            ("DateTo", self.date_to.format("%Y-%m-%d").to_string()),
        ];
        if let Some(page) = self.page {
            query.push(("Page", page.to_string()));
        }
        if let Some(limit) = self.limit_per_page {
            query.push(("LimitPerPage", limit.to_string()));
        }
        query
    }
}

/// Page of account movements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    /// Total movements in range.
    #[serde(default)]
    pub total_items: u32,
    /// Current page.
    #[serde(default)]
    pub current_page: u32,
    /// Page count.
    #[serde(default)]
    pub total_pages: u32,
    /// Range start as sent by the provider.
    #[serde(default)]
    pub date_from: String,
    /// Range end as sent by the provider.
    #[serde(default)]
    pub date_to: String,
    /// Movements on this page.
    #[serde(default)]
    pub movements: Vec<Movement>,
}

/// Credit or debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BalanceType {
    /// Money in.
    Credit,
    /// Money out.
    Debit,
}

/// One account movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    /// Movement id.
    pub id: String,
    /// Caller reference of the originating transaction.
    #[serde(default)]
    pub client_code: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Timestamp as sent by the provider.
    pub created_at: String,
    /// Amount.
    pub amount: f64,
    /// Status.
    #[serde(default)]
    pub status: String,
    /// Credit or debit.
    pub balance_type: BalanceType,
    /// Movement kind, e.g. `PIXPAYMENTIN`.
    #[serde(default)]
    pub movement_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_pairs() {
        let query = StatementQuery::new(
            "300541976902",
            "12345678909",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .page(2, 50);

        assert_eq!(
            query.to_query(),
            vec![
                ("Account", "300541976902".to_string()),
                ("DocumentNumber", "12345678909".to_string()),
                ("DateFrom", "2024-01-01".to_string()),
                ("DateTo", "2024-01-31".to_string()),
                ("Page", "2".to_string()),
                ("LimitPerPage", "50".to_string()),
            ]
        );
    }
}
