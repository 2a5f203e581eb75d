//! Every service endpoint against a live HTTP server.

mod common;

use celcoin_client::types::boletos::{CreateBoletoRequest, Debtor, Receiver};
use celcoin_client::types::business::{BusinessOwner, CompanyType, CreateBusinessRequest};
use celcoin_client::types::common::{AccountType, Address, PersonType};
use celcoin_client::types::customers::{
    AccountStatus, CloseReason, CreateCustomerRequest, UpdateAccountStatusRequest,
};
use celcoin_client::types::payments::{Barcode, BillPaymentRequest};
use celcoin_client::types::pix::{
    CreatePixKeyRequest, PixInitiationType, PixKeyType, PixParty, PixTransferRequest,
};
use celcoin_client::types::statements::StatementQuery;
use celcoin_client::types::transfers::{InternalTransferRequest, TedCreditParty, TedTransferRequest};
use celcoin_client::types::webhooks::{WebhookEntity, WebhookSubscription, WebhookUpdate};
use chrono::NaiveDate;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

const ACCOUNT: &str = "300541976902";
const CPF: &str = "12345678909";
const CNPJ: &str = "13935893000109";

async fn server() -> MockServer {
    let server = MockServer::start().await;
    mount_login(&server, "svc-token", 3600, 1).await;
    server
}

/// Mounts an authorised endpoint that must be hit once.
async fn expect(server: &MockServer, mock: MockBuilder, body: Value) {
    mock.and(header("authorization", "Bearer svc-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_balance() {
    let server = server().await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/baas-walletreports/v1/wallet/balance"))
            .and(query_param("Account", ACCOUNT))
            .and(query_param("DocumentNumber", CPF)),
        success(json!({"amount": 250.0})),
    )
    .await;

    let balance = client(&server).balance().get(ACCOUNT, CPF).await.unwrap();
    assert_eq!(balance.amount, 250.0);
}

#[tokio::test]
async fn test_customers_endpoints() {
    let server = server().await;
    expect(
        &server,
        Mock::given(method("POST"))
            .and(path("/onboarding/v1/onboarding-proposal/natural-person"))
            .and(body_partial_json(json!({"documentNumber": CPF, "onBoardType": "BAAS"}))),
        success(json!({"proposalId": "p-1", "clientCode": "c-1", "documentNumber": CPF})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/onboarding/v1/onboarding-proposal"))
            .and(query_param("proposalId", "p-1")),
        success(json!({"proposal": [{"proposalId": "p-1", "status": "PENDING"}]})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/baas-accountmanager/v1/account/fetch"))
            .and(query_param("Account", ACCOUNT))
            .and(query_param("DocumentNumber", CPF)),
        success(json!({
            "status": "ACTIVE",
            "account": {"branch": "0001", "account": ACCOUNT},
            "documentNumber": CPF,
            "fullName": "Maria Silva"
        })),
    )
    .await;
    expect(
        &server,
        Mock::given(method("PUT"))
            .and(path("/baas-accountmanager/v1/account/status"))
            .and(body_partial_json(json!({"status": "BLOCKED"}))),
        ack(),
    )
    .await;
    expect(
        &server,
        Mock::given(method("DELETE"))
            .and(path("/baas-accountmanager/v1/account/close"))
            .and(query_param("Reason", "Fraud")),
        ack(),
    )
    .await;

    let customers = client(&server).customers();
    let receipt = customers
        .create(
            CreateCustomerRequest::new(CPF, "Maria Silva", date(1990, 1, 31), Address::default())
                .with_client_code("c-1"),
        )
        .await
        .unwrap();
    assert_eq!(receipt.proposal_id, "p-1");

    let proposals = customers.proposal("p-1").await.unwrap();
    assert_eq!(proposals.proposal.len(), 1);

    let account = customers.account(ACCOUNT, CPF).await.unwrap();
    assert_eq!(account.status, AccountStatus::Active);
    assert_eq!(account.account.branch, "0001");

    customers
        .update_status(UpdateAccountStatusRequest {
            account: ACCOUNT.to_string(),
            document_number: CPF.to_string(),
            status: AccountStatus::Blocked,
            reason: "requested by compliance".to_string(),
        })
        .await
        .unwrap();
    customers.close(ACCOUNT, CPF, CloseReason::Fraud).await.unwrap();
}

#[tokio::test]
async fn test_business_endpoints() {
    let server = server().await;
    expect(
        &server,
        Mock::given(method("POST"))
            .and(path("/onboarding/v1/onboarding-proposal/legal-person"))
            .and(body_partial_json(json!({"documentNumber": CNPJ, "companyType": "LTDA"}))),
        success(json!({"proposalId": "p-2"})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/baas-accountmanager/v1/account/fetch-business"))
            .and(query_param("DocumentNumber", CNPJ)),
        success(json!({
            "status": "ACTIVE",
            "account": {"branch": "0001", "account": ACCOUNT},
            "documentNumber": CNPJ,
            "businessName": "ACME LTDA"
        })),
    )
    .await;

    let business = client(&server).business();
    let owner = BusinessOwner {
        owner_type: "SOCIO".to_string(),
        document_number: CPF.to_string(),
        full_name: "Maria Silva".to_string(),
        phone_number: "+5511999990000".to_string(),
        email: "maria@example.com".to_string(),
        mother_name: "Ana Silva".to_string(),
        birth_date: date(1990, 1, 31),
        address: Address::default(),
        is_politically_exposed_person: false,
    };
    let receipt = business
        .create(
            CreateBusinessRequest::new(CNPJ, "ACME LTDA", CompanyType::Ltda, Address::default())
                .with_owner(owner),
        )
        .await
        .unwrap();
    assert_eq!(receipt.proposal_id, "p-2");

    let account = business.account(ACCOUNT, CNPJ).await.unwrap();
    assert_eq!(account.business_name, "ACME LTDA");
}

#[tokio::test]
async fn test_boleto_endpoints() {
    let server = server().await;
    expect(
        &server,
        Mock::given(method("POST"))
            .and(path("/api-integration-baas-webservice/v1/charge"))
            .and(body_partial_json(json!({"amount": 99.9, "dueDate": "2024-12-20"}))),
        success(json!({"transactionId": "b-1", "status": "PROCESSING"})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/api-integration-baas-webservice/v1/charge"))
            .and(query_param("TransactionId", "b-1")),
        success(json!({
            "transactionId": "b-1",
            "amount": 99.9,
            "dueDate": "2024-12-20",
            "status": "ACTIVE",
            "boleto": {"status": "REGISTERED", "digitableLine": "23793381286000000000300000000400184340000010000"}
        })),
    )
    .await;
    expect(
        &server,
        Mock::given(method("DELETE"))
            .and(path("/api-integration-baas-webservice/v1/charge/b-1"))
            .and(query_param("Reason", "customer gave up")),
        ack(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api-integration-baas-webservice/v1/charge/pdf/b-1"))
        .and(header("authorization", "Bearer svc-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(b"%PDF-1.4 fake".to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let boletos = client(&server).boletos();
    let receipt = boletos
        .create(CreateBoletoRequest::new(
            99.9,
            date(2024, 12, 20),
            Debtor {
                document: CPF.to_string(),
                name: "Maria Silva".to_string(),
                ..Default::default()
            },
            Receiver {
                document: CNPJ.to_string(),
                account: ACCOUNT.to_string(),
            },
        ))
        .await
        .unwrap();
    assert_eq!(receipt.transaction_id, "b-1");

    let boleto = boletos.get("b-1").await.unwrap();
    assert_eq!(boleto.boleto.unwrap().status, "REGISTERED");

    boletos.cancel("b-1", "customer gave up").await.unwrap();

    let pdf = boletos.pdf("b-1").await.unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_pix_endpoints() {
    let server = server().await;
    let key = json!({
        "keyType": "EMAIL",
        "key": "maria@example.com",
        "account": {"participant": "13935893", "branch": "0001", "account": ACCOUNT, "accountType": "CACC"},
        "owner": {"type": "NATURAL_PERSON", "documentNumber": CPF, "name": "Maria Silva"}
    });
    expect(
        &server,
        Mock::given(method("POST"))
            .and(path("/celcoin-baas-pix-dict-webservice/v1/pix/dict/entry"))
            .and(body_partial_json(json!({"keyType": "EMAIL", "key": "maria@example.com"}))),
        success(key.clone()),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET")).and(path(format!(
            "/celcoin-baas-pix-dict-webservice/v1/pix/dict/entry/{}",
            ACCOUNT
        ))),
        success(json!({"listKeys": [key.clone()]})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path(format!(
                "/celcoin-baas-pix-dict-webservice/v1/pix/dict/entry/external/{}",
                ACCOUNT
            )))
            .and(query_param("key", "maria@example.com")),
        success(key),
    )
    .await;
    expect(
        &server,
        Mock::given(method("DELETE"))
            .and(path("/celcoin-baas-pix-dict-webservice/v1/pix/dict/entry/6b8c1a3e"))
            .and(query_param("account", ACCOUNT)),
        ack(),
    )
    .await;
    expect(
        &server,
        Mock::given(method("POST"))
            .and(path("/baas-wallet-transactions-webservice/v1/pix/payment"))
            .and(body_partial_json(json!({"clientCode": "pix-1", "initiationType": "DICT"}))),
        success(json!({"id": "tx-1", "status": "PROCESSING", "clientCode": "pix-1"})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/baas-wallet-transactions-webservice/v1/pix/payment/status"))
            .and(query_param("id", "tx-1")),
        success(json!({"id": "tx-1", "amount": 10.0, "status": "CONFIRMED", "endToEndId": "E1393589320240101"})),
    )
    .await;

    let pix = client(&server).pix();
    let created = pix
        .create_key(CreatePixKeyRequest::new(ACCOUNT, PixKeyType::Email, "maria@example.com"))
        .await
        .unwrap();
    assert_eq!(created.account.account_type, AccountType::Checking);

    assert_eq!(pix.list_keys(ACCOUNT).await.unwrap().list_keys.len(), 1);

    let found = pix.lookup_key(ACCOUNT, "maria@example.com").await.unwrap();
    assert_eq!(found.owner.unwrap().name, "Maria Silva");

    pix.delete_key(ACCOUNT, "6b8c1a3e").await.unwrap();

    let receipt = pix
        .transfer(
            PixTransferRequest::new(
                10.0,
                PixInitiationType::Dict,
                PixParty {
                    account: ACCOUNT.to_string(),
                    ..Default::default()
                },
                PixParty {
                    account: "98765".to_string(),
                    key: Some("joao@example.com".to_string()),
                    ..Default::default()
                },
            )
            .with_client_code("pix-1"),
        )
        .await
        .unwrap();
    assert_eq!(receipt.id, "tx-1");

    let status = pix.transfer_status("tx-1").await.unwrap();
    assert_eq!(status.status, "CONFIRMED");
}

#[tokio::test]
async fn test_transfer_endpoints() {
    let server = server().await;
    expect(
        &server,
        Mock::given(method("POST"))
            .and(path("/baas-wallet-transactions-webservice/v1/spb/transfer"))
            .and(body_partial_json(json!({"clientFinality": "99999", "creditParty": {"personType": "NATURAL"}}))),
        success(json!({"id": "ted-1", "status": "PROCESSING"})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/baas-wallet-transactions-webservice/v1/spb/transfer/status"))
            .and(query_param("id", "ted-1")),
        success(json!({"id": "ted-1", "amount": 500.0, "status": "CONFIRMED"})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("POST"))
            .and(path("/baas-wallet-transactions-webservice/v1/wallet/internal/transfer")),
        success(json!({"id": "int-1", "status": "CONFIRMED"})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/baas-wallet-transactions-webservice/v1/wallet/internal/transfer/status"))
            .and(query_param("id", "int-1")),
        success(json!({"id": "int-1", "amount": 5.0, "status": "CONFIRMED"})),
    )
    .await;

    let transfers = client(&server).transfers();
    let ted = transfers
        .ted(TedTransferRequest::new(
            500.0,
            ACCOUNT,
            TedCreditParty {
                bank: "341".to_string(),
                account: "12345".to_string(),
                branch: "0001".to_string(),
                tax_id: CPF.to_string(),
                name: "Joao Souza".to_string(),
                account_type: AccountType::Checking,
                person_type: PersonType::Natural,
            },
        ))
        .await
        .unwrap();
    assert_eq!(transfers.ted_status(&ted.id).await.unwrap().amount, 500.0);

    let internal = transfers
        .internal(InternalTransferRequest::new(5.0, ACCOUNT, "300541976903"))
        .await
        .unwrap();
    assert_eq!(
        transfers.internal_status(&internal.id).await.unwrap().status,
        "CONFIRMED"
    );
}

#[tokio::test]
async fn test_payment_endpoints() {
    let server = server().await;
    expect(
        &server,
        Mock::given(method("POST"))
            .and(path("/baas/v2/billpayment/authorize"))
            .and(body_partial_json(json!({"barcode": {"type": 2}}))),
        success(json!({"transactionId": "auth-1", "assignor": "ACME", "value": 100.0})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("POST"))
            .and(path("/baas/v2/billpayment"))
            .and(body_partial_json(json!({"transactionIdAuthorize": "auth-1", "amount": 100.0}))),
        success(json!({"id": "bp-1", "status": "PROCESSING"})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/baas/v2/billpayment/status"))
            .and(query_param("id", "bp-1")),
        success(json!({"id": "bp-1", "amount": 100.0, "status": "CONFIRMED"})),
    )
    .await;

    let payments = client(&server).payments();
    let barcode = Barcode::from_digitable("23793.38128 60000.000003 00000.000400 1 84340000010000");
    let authorization = payments.authorize(&barcode).await.unwrap();
    let receipt = payments
        .pay(BillPaymentRequest::new(ACCOUNT, &authorization, barcode))
        .await
        .unwrap();
    assert_eq!(payments.status(&receipt.id).await.unwrap().status, "CONFIRMED");
}

#[tokio::test]
async fn test_statement_endpoint() {
    let server = server().await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/baas-walletreports/v1/wallet/movement"))
            .and(query_param("Account", ACCOUNT))
            .and(query_param("DocumentNumber", CPF))
            .and(query_param("DateFrom", "2024-01-01"))
            .and(query_param("DateTo", "2024-01-31"))
            .and(query_param("Page", "1"))
            .and(query_param("LimitPerPage", "20")),
        success(json!({"totalItems": 0, "currentPage": 1, "totalPages": 0, "movements": []})),
    )
    .await;

    let statement = client(&server)
        .statements()
        .list(&StatementQuery::new(ACCOUNT, CPF, date(2024, 1, 1), date(2024, 1, 31)).page(1, 20))
        .await
        .unwrap();
    assert!(statement.movements.is_empty());
}

#[tokio::test]
async fn test_webhook_endpoints() {
    let server = server().await;
    expect(
        &server,
        Mock::given(method("POST"))
            .and(path("/baas-webhookmanager/v1/webhook/subscription"))
            .and(body_partial_json(json!({"entity": "charge-in", "webhookUrl": "https://hooks.example.com/charge"}))),
        ack(),
    )
    .await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/baas-webhookmanager/v1/webhook/subscription"))
            .and(query_param("Entity", "charge-in")),
        success(json!({"subscriptions": [{"entity": "charge-in", "webhookUrl": "https://hooks.example.com/charge", "active": true}]})),
    )
    .await;
    expect(
        &server,
        Mock::given(method("PUT"))
            .and(path("/baas-webhookmanager/v1/webhook/subscription/charge-in"))
            .and(body_partial_json(json!({"webhookUrl": "https://hooks.example.com/v2"}))),
        ack(),
    )
    .await;
    expect(
        &server,
        Mock::given(method("DELETE"))
            .and(path("/baas-webhookmanager/v1/webhook/subscription/charge-in")),
        ack(),
    )
    .await;

    let webhooks = client(&server).webhooks();
    webhooks
        .subscribe(&WebhookSubscription {
            entity: WebhookEntity::ChargeIn,
            webhook_url: "https://hooks.example.com/charge".to_string(),
            auth: None,
        })
        .await
        .unwrap();
    let list = webhooks.list(Some(WebhookEntity::ChargeIn)).await.unwrap();
    assert_eq!(list.subscriptions[0].entity, WebhookEntity::ChargeIn);
    webhooks
        .update(
            WebhookEntity::ChargeIn,
            &WebhookUpdate {
                webhook_url: Some("https://hooks.example.com/v2".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    webhooks.delete(WebhookEntity::ChargeIn).await.unwrap();
}

#[tokio::test]
async fn test_income_report_endpoint() {
    let server = server().await;
    expect(
        &server,
        Mock::given(method("GET"))
            .and(path("/baas-accountmanager/v1/account/income-report"))
            .and(query_param("Account", ACCOUNT))
            .and(query_param("CalendarYear", "2023")),
        success(json!({
            "payerSource": {"documentNumber": CNPJ, "name": "Celcoin"},
            "owner": {"documentNumber": CPF, "name": "Maria Silva"},
            "account": {"branch": "0001", "account": ACCOUNT},
            "balances": []
        })),
    )
    .await;

    let report = client(&server)
        .income_report()
        .get(ACCOUNT, 2023)
        .await
        .unwrap();
    assert_eq!(report.payer_source.name, "Celcoin");
}
