//! Boleto (charge) service.

use bytes::Bytes;
use tracing::instrument;

use super::{require, require_amount};
use crate::client::{encode_component, Session};
use crate::errors::CelcoinResult;
use crate::types::boletos::{Boleto, BoletoReceipt, CreateBoletoRequest};
use crate::types::common::{ensure_client_code, Acknowledgement};

const CHARGE_PATH: &str = "api-integration-baas-webservice/v1/charge";

/// Boleto issue, lookup, cancellation and PDF download.
#[derive(Debug, Clone)]
pub struct BoletosService {
    session: Session,
}

impl BoletosService {
    /// Creates a new boletos service.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Issues a boleto.
    #[instrument(skip(self, request), fields(external_id, amount = request.amount))]
    pub async fn create(&self, mut request: CreateBoletoRequest) -> CelcoinResult<BoletoReceipt> {
        require_amount(request.amount)?;
        require(&request.receiver.account, "receiver.account")?;
        require(&request.receiver.document, "receiver.document")?;
        require(&request.debtor.document, "debtor.document")?;
        ensure_client_code(&mut request.external_id);
        tracing::Span::current().record("external_id", request.external_id.as_str());

        self.session.post(CHARGE_PATH, &request).await?.into_body()
    }

    /// Looks up a boleto by transaction id.
    #[instrument(skip(self))]
    pub async fn get(&self, transaction_id: &str) -> CelcoinResult<Boleto> {
        require(transaction_id, "transaction_id")?;

        self.session
            .get(CHARGE_PATH, &[("TransactionId", transaction_id.to_string())])
            .await?
            .into_body()
    }

    /// Cancels an unpaid boleto.
    #[instrument(skip(self))]
    pub async fn cancel(&self, transaction_id: &str, reason: &str) -> CelcoinResult<Acknowledgement> {
        require(transaction_id, "transaction_id")?;
        require(reason, "reason")?;

        let path = format!("{}/{}", CHARGE_PATH, encode_component(transaction_id));
        self.session
            .delete(&path, &[("Reason", reason.to_string())])
            .await
    }

    /// Downloads the boleto PDF.
    #[instrument(skip(self))]
    pub async fn pdf(&self, transaction_id: &str) -> CelcoinResult<Bytes> {
        require(transaction_id, "transaction_id")?;

        let path = format!("{}/pdf/{}", CHARGE_PATH, encode_component(transaction_id));
        self.session.get_bytes(&path, &[]).await
    }
}
