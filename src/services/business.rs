//! Legal-person onboarding and account service.

use tracing::instrument;

use super::require;
use crate::client::Session;
use crate::errors::{CelcoinError, CelcoinResult};
use crate::types::business::{BusinessAccount, CreateBusinessRequest};
use crate::types::common::ensure_client_code;
use crate::types::customers::OnboardingReceipt;

const LEGAL_PERSON_PATH: &str = "onboarding/v1/onboarding-proposal/legal-person";
const FETCH_BUSINESS_PATH: &str = "baas-accountmanager/v1/account/fetch-business";

/// Legal-person onboarding and account queries.
#[derive(Debug, Clone)]
pub struct BusinessService {
    session: Session,
}

impl BusinessService {
    /// Creates a new business service.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Submits a legal-person onboarding proposal.
    #[instrument(skip(self, request), fields(client_code))]
    pub async fn create(&self, mut request: CreateBusinessRequest) -> CelcoinResult<OnboardingReceipt> {
        require(&request.document_number, "document_number")?;
        require(&request.business_name, "business_name")?;
        if request.owners.is_empty() {
            return Err(CelcoinError::Validation {
                message: "at least one owner is required".to_string(),
            });
        }
        ensure_client_code(&mut request.client_code);
        tracing::Span::current().record("client_code", request.client_code.as_str());

        self.session
            .post(LEGAL_PERSON_PATH, &request)
            .await?
            .into_body()
    }

    /// Business account details.
    #[instrument(skip(self))]
    pub async fn account(&self, account: &str, document_number: &str) -> CelcoinResult<BusinessAccount> {
        require(account, "account")?;
        require(document_number, "document_number")?;

        self.session
            .get(
                FETCH_BUSINESS_PATH,
                &[
                    ("Account", account.to_string()),
                    ("DocumentNumber", document_number.to_string()),
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
    use crate::types::business::CompanyType;
    use crate::types::common::Address;

    #[tokio::test]
    async fn test_create_requires_owner() {
        let (session, transport) = session();
        let request = CreateBusinessRequest::new(
            "13935893000109",
            "ACME LTDA",
            CompanyType::Ltda,
            Address::default(),
        );

        let result = BusinessService::new(session).create(request).await;

        assert!(matches!(result, Err(CelcoinError::Validation { .. })));
        assert!(transport.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_business_account() {
        let (session, transport) = session();
        transport.queue_json_response(
            200,
            &success(serde_json::json!({
                "status": "ACTIVE",
                "account": {"branch": "0001", "account": "300541976902"},
                "documentNumber": "13935893000109",
                "businessName": "ACME LTDA"
            })),
        );

        let account = BusinessService::new(session)
            .account("300541976902", "13935893000109")
            .await
            .unwrap();

        assert_eq!(account.business_name, "ACME LTDA");
        assert!(transport
            .last_request()
            .unwrap()
            .url
            .ends_with("/account/fetch-business?Account=300541976902&DocumentNumber=13935893000109"));
    }
}
