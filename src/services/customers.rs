//! Natural-person onboarding and account service.

use tracing::instrument;

use super::require;
use crate::client::Session;
use crate::errors::CelcoinResult;
use crate::types::common::{ensure_client_code, Acknowledgement};
use crate::types::customers::{
    CloseReason, CreateCustomerRequest, CustomerAccount, OnboardingProposals, OnboardingReceipt,
    UpdateAccountStatusRequest,
};

const NATURAL_PERSON_PATH: &str = "onboarding/v1/onboarding-proposal/natural-person";
const PROPOSAL_PATH: &str = "onboarding/v1/onboarding-proposal";
const FETCH_ACCOUNT_PATH: &str = "baas-accountmanager/v1/account/fetch";
const ACCOUNT_STATUS_PATH: &str = "baas-accountmanager/v1/account/status";
const CLOSE_ACCOUNT_PATH: &str = "baas-accountmanager/v1/account/close";

/// Natural-person onboarding and account management.
#[derive(Debug, Clone)]
pub struct CustomersService {
    session: Session,
}

impl CustomersService {
    /// Creates a new customers service.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Submits an onboarding proposal. The account exists once the proposal
    /// is approved.
    #[instrument(skip(self, request), fields(client_code))]
    pub async fn create(&self, mut request: CreateCustomerRequest) -> CelcoinResult<OnboardingReceipt> {
        require(&request.document_number, "document_number")?;
        require(&request.full_name, "full_name")?;
        ensure_client_code(&mut request.client_code);
        tracing::Span::current().record("client_code", request.client_code.as_str());

        self.session
            .post(NATURAL_PERSON_PATH, &request)
            .await?
            .into_body()
    }

    /// Looks up an onboarding proposal.
    #[instrument(skip(self))]
    pub async fn proposal(&self, proposal_id: &str) -> CelcoinResult<OnboardingProposals> {
        require(proposal_id, "proposal_id")?;

        self.session
            .get(PROPOSAL_PATH, &[("proposalId", proposal_id.to_string())])
            .await?
            .into_body()
    }

    /// Account details.
    #[instrument(skip(self))]
    pub async fn account(&self, account: &str, document_number: &str) -> CelcoinResult<CustomerAccount> {
        require(account, "account")?;
        require(document_number, "document_number")?;

        self.session
            .get(
                FETCH_ACCOUNT_PATH,
                &[
                    ("Account", account.to_string()),
                    ("DocumentNumber", document_number.to_string()),
                ],
            )
            .await?
            .into_body()
    }

    /// Blocks or reactivates an account.
    #[instrument(skip(self, request), fields(account = %request.account, status = ?request.status))]
    pub async fn update_status(&self, request: UpdateAccountStatusRequest) -> CelcoinResult<Acknowledgement> {
        require(&request.account, "account")?;
        require(&request.document_number, "document_number")?;
        require(&request.reason, "reason")?;

        self.session.put(ACCOUNT_STATUS_PATH, &request).await
    }

    /// Closes an account.
    #[instrument(skip(self))]
    pub async fn close(
        &self,
        account: &str,
        document_number: &str,
        reason: CloseReason,
    ) -> CelcoinResult<Acknowledgement> {
        require(account, "account")?;
        require(document_number, "document_number")?;

        self.session
            .delete(
                CLOSE_ACCOUNT_PATH,
                &[
                    ("Account", account.to_string()),
                    ("DocumentNumber", document_number.to_string()),
                    ("Reason", reason.as_str().to_string()),
                ],
            )
            .await
    }
}
