//! Contract tests for SpvClient against a wiremock server.

use synd_client::{FileUpload, PlatformClient, PlatformConfig};
use synd_core::SpvId;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> PlatformClient {
    let config = PlatformConfig {
        base_url: mock_server.uri().parse().unwrap(),
        api_token: Some(zeroize::Zeroizing::new("test-token".into())),
        timeout_secs: 5,
    };
    PlatformClient::new(config).unwrap()
}

struct IsMultipart;

impl Match for IsMultipart {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("multipart/form-data"))
            .unwrap_or(false)
    }
}

fn fields(pairs: &[(&str, &str)]) -> synd_client::DraftFields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
        .collect()
}

// ── GET /spv/{id}/ ───────────────────────────────────────────────────

#[tokio::test]
async fn get_returns_none_when_not_found() {
    let mock_server = MockServer::start().await;
    let id = SpvId::from_uuid("770e8400-e29b-41d4-a716-446655440000".parse().unwrap());

    Mock::given(method("GET"))
        .and(path(format!("/spv/{id}/")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let spv = client.spv().get(id).await.unwrap();
    assert!(spv.is_none());
}

#[tokio::test]
async fn get_returns_draft_for_resume() {
    let mock_server = MockServer::start().await;
    let id = SpvId::from_uuid("770e8400-e29b-41d4-a716-446655440000".parse().unwrap());

    Mock::given(method("GET"))
        .and(path(format!("/spv/{id}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": id.to_string(),
            "status": "DRAFT",
            "dealName": "Series A — Example Co",
            "targetRaise": "500000.00"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let spv = client.spv().get(id).await.unwrap().unwrap();
    assert_eq!(
        spv.fields.get("dealName").and_then(|v| v.as_str()),
        Some("Series A — Example Co")
    );
}

// ── POST /spv/ ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_assigned_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/spv/"))
        .and(body_json(serde_json::json!({"dealName": "Series A — Example Co"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "770e8400-e29b-41d4-a716-446655440000",
            "status": "DRAFT",
            "dealName": "Series A — Example Co"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let record = client
        .spv()
        .create(&fields(&[("dealName", "Series A — Example Co")]), None)
        .await
        .unwrap();
    assert_eq!(record.id.to_string(), "770e8400-e29b-41d4-a716-446655440000");
}

// ── POST /spv/{id}/update_step{n}/ ───────────────────────────────────

#[tokio::test]
async fn update_step_posts_json_without_file() {
    let mock_server = MockServer::start().await;
    let id = SpvId::from_uuid("770e8400-e29b-41d4-a716-446655440000".parse().unwrap());

    Mock::given(method("POST"))
        .and(path(format!("/spv/{id}/update_step2/")))
        .and(body_json(serde_json::json!({
            "carryPercent": "20",
            "minimumTicket": "5000.00"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": id.to_string(),
            "status": "DRAFT",
            "carryPercent": "20",
            "minimumTicket": "5000.00"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .spv()
        .update_step(
            id,
            2,
            &fields(&[("carryPercent", "20"), ("minimumTicket", "5000.00")]),
            None,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn update_step_with_logo_goes_multipart() {
    let mock_server = MockServer::start().await;
    let id = SpvId::from_uuid("770e8400-e29b-41d4-a716-446655440000".parse().unwrap());

    Mock::given(method("POST"))
        .and(path(format!("/spv/{id}/update_step3/")))
        .and(IsMultipart)
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": id.to_string(),
            "status": "DRAFT",
            "logo": "https://cdn.example.com/logos/orbit.png"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let upload = FileUpload::new("logo", "orbit.png", vec![0x89, 0x50, 0x4e, 0x47]);
    let record = client
        .spv()
        .update_step(id, 3, &fields(&[]), Some(&upload))
        .await
        .unwrap();
    assert_eq!(
        record.fields.get("logo").and_then(|v| v.as_str()),
        Some("https://cdn.example.com/logos/orbit.png")
    );
}

// ── GET /spv/ ────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_spvs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spv/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "770e8400-e29b-41d4-a716-446655440000", "status": "RAISING"},
            {"id": "770e8400-e29b-41d4-a716-446655440001", "status": "DRAFT"}
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let spvs = client.spv().list().await.unwrap();
    assert_eq!(spvs.len(), 2);
    assert_eq!(spvs[0].status, Some(synd_client::types::SpvStatus::Raising));
}
