//! Balance service.

use tracing::instrument;

use super::require;
use crate::client::Session;
use crate::errors::CelcoinResult;
use crate::types::balance::Balance;

const BALANCE_PATH: &str = "baas-walletreports/v1/wallet/balance";

/// Wallet balance queries.
#[derive(Debug, Clone)]
pub struct BalanceService {
    session: Session,
}

impl BalanceService {
    /// Creates a new balance service.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Current balance of an account.
    #[instrument(skip(self))]
    pub async fn get(&self, account: &str, document_number: &str) -> CelcoinResult<Balance> {
        require(account, "account")?;
        require(document_number, "document_number")?;

        self.session
            .get(
                BALANCE_PATH,
                &[
                    ("Account", account.to_string()),
                    ("DocumentNumber", document_number.to_string()),
                ],
            )
            .await?
            .into_body()
    }
}
