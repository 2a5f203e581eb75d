//! PIX key (DICT) and PIX transfer service.

use tracing::instrument;

use super::{require, require_amount};
use crate::client::{encode_component, Session};
use crate::errors::{CelcoinError, CelcoinResult};
use crate::types::common::{ensure_client_code, Acknowledgement, TransactionReceipt};
use crate::types::pix::{
    CreatePixKeyRequest, PixKey, PixKeyList, PixKeyType, PixTransferRequest, PixTransferStatus,
};

const DICT_ENTRY_PATH: &str = "celcoin-baas-pix-dict-webservice/v1/pix/dict/entry";
const PIX_PAYMENT_PATH: &str = "baas-wallet-transactions-webservice/v1/pix/payment";
const PIX_PAYMENT_STATUS_PATH: &str = "baas-wallet-transactions-webservice/v1/pix/payment/status";

/// PIX key management and PIX payments.
#[derive(Debug, Clone)]
pub struct PixService {
    session: Session,
}

impl PixService {
    /// Creates a new PIX service.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Registers a key for an account.
    #[instrument(skip(self, request), fields(account = %request.account, key_type = ?request.key_type))]
    pub async fn create_key(&self, request: CreatePixKeyRequest) -> CelcoinResult<PixKey> {
        require(&request.account, "account")?;
        match (&request.key_type, request.key.as_deref()) {
            (PixKeyType::Evp, _) => {}
            (_, Some(key)) if !key.trim().is_empty() => {}
            _ => {
                return Err(CelcoinError::Validation {
                    message: "key is required unless key_type is EVP".to_string(),
                })
            }
        }

        self.session
            .post(DICT_ENTRY_PATH, &request)
            .await?
            .into_body()
    }

    /// Keys registered for an account.
    #[instrument(skip(self))]
    pub async fn list_keys(&self, account: &str) -> CelcoinResult<PixKeyList> {
        require(account, "account")?;

        let path = format!("{}/{}", DICT_ENTRY_PATH, encode_component(account));
        self.session.get(&path, &[]).await?.into_body()
    }

    /// Removes a key from an account.
    #[instrument(skip(self))]
    pub async fn delete_key(&self, account: &str, key: &str) -> CelcoinResult<Acknowledgement> {
        require(account, "account")?;
        require(key, "key")?;

        let path = format!("{}/{}", DICT_ENTRY_PATH, encode_component(key));
        self.session
            .delete(&path, &[("account", account.to_string())])
            .await
    }

    /// Resolves a key held at any institution, on behalf of `account`.
    #[instrument(skip(self))]
    pub async fn lookup_key(&self, account: &str, key: &str) -> CelcoinResult<PixKey> {
        require(account, "account")?;
        require(key, "key")?;

        let path = format!("{}/external/{}", DICT_ENTRY_PATH, encode_component(account));
        self.session
            .get(&path, &[("key", key.to_string())])
            .await?
            .into_body()
    }

    /// Sends a PIX payment.
    #[instrument(skip(self, request), fields(client_code, amount = request.amount))]
    pub async fn transfer(&self, mut request: PixTransferRequest) -> CelcoinResult<TransactionReceipt> {
        require_amount(request.amount)?;
        require(&request.debit_party.account, "debit_party.account")?;
        ensure_client_code(&mut request.client_code);
        tracing::Span::current().record("client_code", request.client_code.as_str());

        self.session
            .post(PIX_PAYMENT_PATH, &request)
            .await?
            .into_body()
    }

    /// Status of a PIX payment.
    #[instrument(skip(self))]
    pub async fn transfer_status(&self, id: &str) -> CelcoinResult<PixTransferStatus> {
        require(id, "id")?;

        self.session
            .get(PIX_PAYMENT_STATUS_PATH, &[("id", id.to_string())])
            .await?
            .into_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{session, success};
    use crate::types::pix::{PixInitiationType, PixParty};

    #[tokio::test]
    async fn test_key_without_value_is_rejected() {
        let (session, transport) = session();
        let request = CreatePixKeyRequest {
            account: "300541976902".to_string(),
            key_type: PixKeyType::Email,
            key: None,
        };

        let result = PixService::new(session).create_key(request).await;

        assert!(matches!(result, Err(CelcoinError::Validation { .. })));
        assert!(transport.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_key_encodes_segment() {
        let (session, transport) = session();
        transport.queue_json_response(200, &serde_json::json!({"status": "SUCCESS"}));

        PixService::new(session)
            .delete_key("300541976902", "maria@example.com")
            .await
            .unwrap();

        assert!(transport
            .last_request()
            .unwrap()
            .url
            .ends_with("/v1/pix/dict/entry/maria%40example.com?account=300541976902"));
    }

    #[tokio::test]
    async fn test_transfer_keeps_given_client_code() {
        let (session, transport) = session();
        transport.queue_json_response(
            200,
            &success(serde_json::json!({"id": "tx-9", "status": "PROCESSING", "clientCode": "pay-1"})),
        );

        let request = PixTransferRequest::new(
            10.0,
            PixInitiationType::Dict,
            PixParty {
                account: "300541976902".to_string(),
                ..Default::default()
            },
            PixParty {
                account: "12345".to_string(),
                key: Some("maria@example.com".to_string()),
                ..Default::default()
            },
        )
        .with_client_code("pay-1");

        let receipt = PixService::new(session).transfer(request).await.unwrap();

        assert_eq!(receipt.id, "tx-9");
        let sent = transport.last_request().unwrap();
        let body: serde_json::Value = serde_json::from_slice(sent.body.as_ref().unwrap()).unwrap();
        assert_eq!(body["clientCode"], "pay-1");
        assert_eq!(body["initiationType"], "DICT");
    }
}
