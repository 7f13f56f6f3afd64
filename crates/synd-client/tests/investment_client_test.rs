//! Contract tests for InvestmentClient and PaymentClient against a
//! wiremock server.

use synd_client::{PlatformClient, PlatformConfig};
use synd_core::{InvestmentId, SpvId};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> PlatformClient {
    let config = PlatformConfig {
        base_url: mock_server.uri().parse().unwrap(),
        api_token: Some(zeroize::Zeroizing::new("test-token".into())),
        timeout_secs: 5,
    };
    PlatformClient::new(config).unwrap()
}

// ── POST /spv/{id}/investments/ ──────────────────────────────────────

#[tokio::test]
async fn create_request_posts_amount_string() {
    let mock_server = MockServer::start().await;
    let spv_id = SpvId::from_uuid("770e8400-e29b-41d4-a716-446655440000".parse().unwrap());

    Mock::given(method("POST"))
        .and(path(format!("/spv/{spv_id}/investments/")))
        .and(body_json(serde_json::json!({"amount": "25000.00"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "880e8400-e29b-41d4-a716-446655440000",
            "spvId": spv_id.to_string(),
            "amount": "25000.00",
            "status": "PENDING"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let record = client
        .investments()
        .create_request(spv_id, "25000.00")
        .await
        .unwrap();
    assert_eq!(record.amount.as_deref(), Some("25000.00"));
    assert_eq!(
        record.status,
        Some(synd_client::types::InvestmentStatus::Pending)
    );
}

// ── GET /investments/{id}/ ───────────────────────────────────────────

#[tokio::test]
async fn status_refresh_reflects_approval() {
    let mock_server = MockServer::start().await;
    let id = InvestmentId::from_uuid("880e8400-e29b-41d4-a716-446655440000".parse().unwrap());

    Mock::given(method("GET"))
        .and(path(format!("/investments/{id}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": id.to_string(),
            "amount": "25000.00",
            "status": "APPROVED"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let record = client.investments().get_status(id).await.unwrap().unwrap();
    assert_eq!(
        record.status,
        Some(synd_client::types::InvestmentStatus::Approved)
    );
}

#[tokio::test]
async fn status_refresh_returns_none_when_gone() {
    let mock_server = MockServer::start().await;
    let id = InvestmentId::from_uuid("880e8400-e29b-41d4-a716-446655440000".parse().unwrap());

    Mock::given(method("GET"))
        .and(path(format!("/investments/{id}/")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.investments().get_status(id).await.unwrap().is_none());
}

// ── GET /spv/{id}/investments/ ───────────────────────────────────────

#[tokio::test]
async fn list_returns_requests_for_spv() {
    let mock_server = MockServer::start().await;
    let spv_id = SpvId::from_uuid("770e8400-e29b-41d4-a716-446655440000".parse().unwrap());

    Mock::given(method("GET"))
        .and(path(format!("/spv/{spv_id}/investments/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "880e8400-e29b-41d4-a716-446655440000", "amount": "25000.00", "status": "PENDING"},
            {"id": "880e8400-e29b-41d4-a716-446655440001", "amount": "10000.00", "status": "FUNDED"}
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let records = client.investments().list(spv_id).await.unwrap();
    assert_eq!(records.len(), 2);
}

// ── POST /payments/{intent}/confirm/ ─────────────────────────────────

#[tokio::test]
async fn payment_confirm_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/payments/pi_123/confirm/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "succeeded",
            "intentId": "pi_123"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let confirmation = client.payments().confirm("pi_123").await.unwrap();
    assert_eq!(confirmation.status.as_deref(), Some("succeeded"));
}

#[tokio::test]
async fn payment_decline_relays_processor_message_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/payments/pi_123/confirm/"))
        .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
            "processorMessage": "Your card was declined."
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.payments().confirm("pi_123").await.unwrap_err();
    match err {
        synd_client::ApiError::Processor { message, .. } => {
            assert_eq!(message, "Your card was declined.");
        }
        other => panic!("expected Processor, got: {other:?}"),
    }
}
