//! TED and internal transfer service.

use tracing::instrument;

use super::{require, require_amount};
use crate::client::Session;
use crate::errors::{CelcoinError, CelcoinResult};
use crate::types::common::{ensure_client_code, TransactionReceipt};
use crate::types::transfers::{InternalTransferRequest, TedTransferRequest, TransferStatus};

const TED_PATH: &str = "baas-wallet-transactions-webservice/v1/spb/transfer";
const TED_STATUS_PATH: &str = "baas-wallet-transactions-webservice/v1/spb/transfer/status";
const INTERNAL_PATH: &str = "baas-wallet-transactions-webservice/v1/wallet/internal/transfer";
const INTERNAL_STATUS_PATH: &str =
    "baas-wallet-transactions-webservice/v1/wallet/internal/transfer/status";

/// TED and same-institution transfers.
#[derive(Debug, Clone)]
pub struct TransfersService {
    session: Session,
}

impl TransfersService {
    /// Creates a new transfers service.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Sends a TED.
    #[instrument(skip(self, request), fields(client_code, amount = request.amount))]
    pub async fn ted(&self, mut request: TedTransferRequest) -> CelcoinResult<TransactionReceipt> {
        require_amount(request.amount)?;
        require(&request.debit_party.account, "debit_party.account")?;
        require(&request.credit_party.bank, "credit_party.bank")?;
        require(&request.credit_party.account, "credit_party.account")?;
        require(&request.credit_party.tax_id, "credit_party.tax_id")?;
        ensure_client_code(&mut request.client_code);
        tracing::Span::current().record("client_code", request.client_code.as_str());

        self.session.post(TED_PATH, &request).await?.into_body()
    }

    /// Status of a TED.
    #[instrument(skip(self))]
    pub async fn ted_status(&self, id: &str) -> CelcoinResult<TransferStatus> {
        require(id, "id")?;

        self.session
            .get(TED_STATUS_PATH, &[("id", id.to_string())])
            .await?
            .into_body()
    }

    /// Moves funds between two accounts of the same institution.
    #[instrument(skip(self, request), fields(client_code, amount = request.amount))]
    pub async fn internal(
        &self,
        mut request: InternalTransferRequest,
    ) -> CelcoinResult<TransactionReceipt> {
        require_amount(request.amount)?;
        require(&request.debit_party.account, "debit_party.account")?;
        require(&request.credit_party.account, "credit_party.account")?;
        if request.debit_party.account == request.credit_party.account {
            return Err(CelcoinError::Validation {
                message: "debit and credit accounts must differ".to_string(),
            });
        }
        ensure_client_code(&mut request.client_code);
        tracing::Span::current().record("client_code", request.client_code.as_str());

        self.session.post(INTERNAL_PATH, &request).await?.into_body()
    }

    /// Status of an internal transfer.
    #[instrument(skip(self))]
    pub async fn internal_status(&self, id: &str) -> CelcoinResult<TransferStatus> {
        require(id, "id")?;

        self.session
            .get(INTERNAL_STATUS_PATH, &[("id", id.to_string())])
            .await?
            .into_body()
    }
}
