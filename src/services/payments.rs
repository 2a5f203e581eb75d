//! Bill payment service.

use tracing::instrument;

use super::{require, require_amount};
use crate::client::Session;
use crate::errors::{CelcoinError, CelcoinResult};
use crate::types::common::{ensure_client_code, TransactionReceipt};
use crate::types::payments::{
    AuthorizeRequest, Barcode, BillAuthorization, BillPaymentRequest, BillPaymentStatus,
};

const AUTHORIZE_PATH: &str = "baas/v2/billpayment/authorize";
const PAYMENT_PATH: &str = "baas/v2/billpayment";
const PAYMENT_STATUS_PATH: &str = "baas/v2/billpayment/status";

/// Bill authorization and payment.
#[derive(Debug, Clone)]
pub struct PaymentsService {
    session: Session,
}

impl PaymentsService {
    /// Creates a new payments service.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Validates a bill and returns its current amount.
    #[instrument(skip(self, barcode))]
    pub async fn authorize(&self, barcode: &Barcode) -> CelcoinResult<BillAuthorization> {
        if barcode.is_empty() {
            return Err(CelcoinError::Validation {
                message: "barcode or digitable line is required".to_string(),
            });
        }

        self.session
            .post(AUTHORIZE_PATH, &AuthorizeRequest { barcode })
            .await?
            .into_body()
    }

    /// Pays an authorized bill.
    #[instrument(skip(self, request), fields(client_code, amount = request.amount))]
    pub async fn pay(&self, mut request: BillPaymentRequest) -> CelcoinResult<TransactionReceipt> {
        require_amount(request.amount)?;
        require(&request.account, "account")?;
        require(&request.transaction_id_authorize, "transaction_id_authorize")?;
        ensure_client_code(&mut request.client_code);
        tracing::Span::current().record("client_code", request.client_code.as_str());

        self.session.post(PAYMENT_PATH, &request).await?.into_body()
    }

    /// Status of a bill payment.
    #[instrument(skip(self))]
    pub async fn status(&self, id: &str) -> CelcoinResult<BillPaymentStatus> {
        require(id, "id")?;

        self.session
            .get(PAYMENT_STATUS_PATH, &[("id", id.to_string())])
            .await?
            .into_body()
    }
}
