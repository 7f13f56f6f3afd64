//! Contract tests for SyndicateClient against a wiremock server.
//!
//! Syndicate steps have no id path segment: the first submission POSTs,
//! later submissions PATCH the same path with the id in the body.

use synd_client::{PlatformClient, PlatformConfig};
use synd_core::SyndicateId;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> PlatformClient {
    let config = PlatformConfig {
        base_url: mock_server.uri().parse().unwrap(),
        api_token: Some(zeroize::Zeroizing::new("test-token".into())),
        timeout_secs: 5,
    };
    PlatformClient::new(config).unwrap()
}

fn fields(pairs: &[(&str, &str)]) -> synd_client::DraftFields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
        .collect()
}

// ── GET /syndicate/draft/ ────────────────────────────────────────────

#[tokio::test]
async fn get_draft_returns_none_on_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/syndicate/draft/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let draft = client.syndicates().get_draft().await.unwrap();
    assert!(draft.is_none());
}

#[tokio::test]
async fn get_draft_returns_record_when_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/syndicate/draft/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "660e8400-e29b-41d4-a716-446655440000",
            "status": "DRAFT",
            "entityName": "Orbit Ventures LLC"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let draft = client.syndicates().get_draft().await.unwrap().unwrap();
    assert_eq!(
        draft.fields.get("entityName").and_then(|v| v.as_str()),
        Some("Orbit Ventures LLC")
    );
}

// ── POST /syndicate/step{n}/ ─────────────────────────────────────────

#[tokio::test]
async fn submit_step_creates_and_returns_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/syndicate/step1/"))
        .and(body_json(serde_json::json!({
            "entityName": "Orbit Ventures LLC",
            "jurisdiction": "DE"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "660e8400-e29b-41d4-a716-446655440000",
            "status": "DRAFT",
            "entityName": "Orbit Ventures LLC",
            "jurisdiction": "DE"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let record = client
        .syndicates()
        .submit_step(
            1,
            &fields(&[("entityName", "Orbit Ventures LLC"), ("jurisdiction", "DE")]),
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        record.id.to_string(),
        "660e8400-e29b-41d4-a716-446655440000"
    );
}

// ── PATCH /syndicate/step{n}/ ────────────────────────────────────────

#[tokio::test]
async fn update_step_carries_id_in_body() {
    let mock_server = MockServer::start().await;
    let id = SyndicateId::from_uuid("660e8400-e29b-41d4-a716-446655440000".parse().unwrap());

    Mock::given(method("PATCH"))
        .and(path("/syndicate/step2/"))
        .and(body_partial_json(serde_json::json!({
            "id": "660e8400-e29b-41d4-a716-446655440000",
            "leadBio": "Ten years of seed investing."
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "660e8400-e29b-41d4-a716-446655440000",
            "status": "DRAFT",
            "leadBio": "Ten years of seed investing."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let record = client
        .syndicates()
        .update_step(
            id,
            2,
            &fields(&[("leadBio", "Ten years of seed investing.")]),
            None,
        )
        .await
        .unwrap();
    assert_eq!(record.id, id);
}

#[tokio::test]
async fn update_step_maps_401_to_auth_required() {
    let mock_server = MockServer::start().await;
    let id = SyndicateId::from_uuid("660e8400-e29b-41d4-a716-446655440000".parse().unwrap());

    Mock::given(method("PATCH"))
        .and(path("/syndicate/step2/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .syndicates()
        .update_step(id, 2, &fields(&[("leadBio", "...")]), None)
        .await
        .unwrap_err();
    assert!(err.is_auth());
}
