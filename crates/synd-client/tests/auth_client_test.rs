//! Contract tests for AuthClient against a wiremock server.
//!
//! Every path and request shape matches the platform auth contract. The
//! OTP verification test pins the exact `{email, otp}` body and asserts
//! exactly one request reaches the wire.

use synd_client::{PlatformClient, PlatformConfig};
use synd_core::{AccountRole, Email, OtpCode};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a PlatformClient pointed at a wiremock server.
fn test_client(mock_server: &MockServer) -> PlatformClient {
    let config = PlatformConfig {
        base_url: mock_server.uri().parse().unwrap(),
        api_token: Some(zeroize::Zeroizing::new("test-token".into())),
        timeout_secs: 5,
    };
    PlatformClient::new(config).unwrap()
}

/// Build an unauthenticated PlatformClient, as the password-reset flow does.
fn anonymous_client(mock_server: &MockServer) -> PlatformClient {
    let config = PlatformConfig::anonymous(mock_server.uri().parse().unwrap());
    PlatformClient::new(config).unwrap()
}

// ── POST /auth/login/ ────────────────────────────────────────────────

#[tokio::test]
async fn login_returns_token_pair() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(body_json(serde_json::json!({
            "email": "ada@example.com",
            "password": "correct horse"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "acc-123",
            "refresh": "ref-456"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let email = Email::new("ada@example.com").unwrap();
    let tokens = client.auth().login(&email, "correct horse").await.unwrap();
    assert_eq!(tokens.access, "acc-123");
    assert_eq!(tokens.refresh, "ref-456");
}

#[tokio::test]
async fn login_maps_401_to_auth_required() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"detail":"bad credentials"}"#))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let email = Email::new("ada@example.com").unwrap();
    let err = client.auth().login(&email, "wrong").await.unwrap_err();
    assert!(err.is_auth());
}

// ── POST /auth/signup/ ───────────────────────────────────────────────

#[tokio::test]
async fn signup_sends_selected_role() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signup/"))
        .and(body_json(serde_json::json!({
            "role": "lead",
            "email": "lead@example.com",
            "password": "longenough"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "access": "acc",
            "refresh": "ref"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let email = Email::new("lead@example.com").unwrap();
    let tokens = client
        .auth()
        .signup(AccountRole::Lead, &email, "longenough")
        .await
        .unwrap();
    assert_eq!(tokens.access, "acc");
}

#[tokio::test]
async fn signup_surfaces_field_level_validation_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signup/"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "email": ["An account with this email already exists."]
        })))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let email = Email::new("taken@example.com").unwrap();
    let err = client
        .auth()
        .signup(AccountRole::Investor, &email, "longenough")
        .await
        .unwrap_err();

    match err {
        synd_client::ApiError::Validation { violations, .. } => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "email");
            assert!(violations[0].message.contains("already exists"));
        }
        other => panic!("expected Validation, got: {other:?}"),
    }
}

// ── POST /auth/verify_otp/ ───────────────────────────────────────────

#[tokio::test]
async fn verify_otp_sends_exactly_one_call_with_email_and_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/verify_otp/"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "otp": "1234"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "detail": "verified"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let email = Email::new("a@b.com").unwrap();
    let otp = OtpCode::new("1234").unwrap();
    client.auth().verify_otp(&email, &otp).await.unwrap();
}

#[tokio::test]
async fn verify_otp_rejection_surfaces_as_validation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/verify_otp/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "otp": ["Incorrect or expired code."]
        })))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let email = Email::new("a@b.com").unwrap();
    let otp = OtpCode::new("9999").unwrap();
    let err = client.auth().verify_otp(&email, &otp).await.unwrap_err();

    match err {
        synd_client::ApiError::Validation { violations, .. } => {
            assert_eq!(violations[0].field, "otp");
        }
        other => panic!("expected Validation, got: {other:?}"),
    }
}

// ── POST /auth/forgot_password/ + /auth/reset_password/ ──────────────

#[tokio::test]
async fn forgot_password_posts_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/forgot_password/"))
        .and(body_json(serde_json::json!({"email": "a@b.com"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let email = Email::new("a@b.com").unwrap();
    client.auth().forgot_password(&email).await.unwrap();
}

#[tokio::test]
async fn reset_password_sends_verified_pair_and_new_password() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/reset_password/"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "otp": "1234",
            "newPassword": "longenough"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let email = Email::new("a@b.com").unwrap();
    let otp = OtpCode::new("1234").unwrap();
    client
        .auth()
        .reset_password(&email, &otp, "longenough")
        .await
        .unwrap();
}

// ── Bearer header installation ───────────────────────────────────────

#[tokio::test]
async fn authenticated_client_sends_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout/"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.auth().logout().await.unwrap();
}
