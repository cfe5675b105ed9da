//! Web API Referral Tests
//!
//! Integration tests for the referral and health endpoints, driving the real
//! router with a recording mailer double in place of the SMTP transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::DateTime;
use paywifibill_backend::api;
use paywifibill_backend::mail::{MailError, Mailer, OutboundEmail};
use paywifibill_backend::state::AppState;
use paywifibill_backend::Config;
use serde_json::{json, Value};

/// Mailer test double that records every send attempt.
struct MockMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl MockMailer {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());

        if self.fail {
            return Err(MailError::Smtp("connection refused".to_string()));
        }

        Ok(())
    }
}

/// Create a test configuration.
fn create_test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        smtp_host: "localhost".to_string(),
        smtp_port: 2525,
        smtp_secure: false,
        email_user: "referrals@paywifibill.test".to_string(),
        email_pass: "secret".to_string(),
        org_email: "org@paywifibill.test".to_string(),
        brand_name: "PayWifiBill".to_string(),
    }
}

/// Create a test server around the given mailer double.
fn create_test_server(mailer: Arc<MockMailer>) -> TestServer {
    let state = AppState::new(create_test_config(), mailer);
    TestServer::new(api::create_router(state)).expect("Failed to create test server")
}

fn valid_payload() -> Value {
    json!({
        "refererName": "Alice",
        "refererEmail": "a@x.com",
        "refererPhone": "555-0000",
        "friendName": "Bob",
        "friendPhone": "555-1234"
    })
}

// ============================================================================
// POST /api/refer-friend
// ============================================================================

#[tokio::test]
async fn test_refer_friend_success() {
    let mailer = Arc::new(MockMailer::new());
    let server = create_test_server(mailer.clone());

    let response = server.post("/api/refer-friend").json(&valid_payload()).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["message"],
        "Referral submitted successfully! We will contact your friend soon."
    );

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, "PayWifiBill Referral <referrals@paywifibill.test>");
    assert_eq!(sent[0].to, "org@paywifibill.test");
    assert_eq!(sent[0].reply_to.as_deref(), Some("a@x.com"));
    assert_eq!(sent[0].subject, "🎉 New Referral from Alice");
    assert!(sent[0].html.contains("Alice"));
    assert!(sent[0].html.contains("a@x.com"));
    assert!(sent[0].html.contains("555-0000"));
    assert!(sent[0].html.contains("Bob"));
    assert!(sent[0].html.contains("555-1234"));
}

#[tokio::test]
async fn test_refer_friend_without_phone_uses_placeholder() {
    let mailer = Arc::new(MockMailer::new());
    let server = create_test_server(mailer.clone());

    let response = server
        .post("/api/refer-friend")
        .json(&json!({
            "refererName": "Alice",
            "refererEmail": "a@x.com",
            "friendName": "Bob",
            "friendPhone": "555-1234"
        }))
        .await;

    response.assert_status_ok();

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to.as_deref(), Some("a@x.com"));
    assert!(sent[0].html.contains("Alice"));
    assert!(sent[0].html.contains("Bob"));
    assert!(sent[0].html.contains("555-1234"));
    assert!(sent[0].html.contains("Not provided"));
}

#[tokio::test]
async fn test_refer_friend_missing_required_field_rejected() {
    for field in ["refererName", "refererEmail", "friendName", "friendPhone"] {
        let mailer = Arc::new(MockMailer::new());
        let server = create_test_server(mailer.clone());

        let mut payload = valid_payload();
        payload
            .as_object_mut()
            .expect("Payload should be an object")
            .remove(field);

        let response = server.post("/api/refer-friend").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Missing required fields");
        assert!(
            mailer.sent().is_empty(),
            "transport must not be invoked when {} is missing",
            field
        );
    }
}

#[tokio::test]
async fn test_refer_friend_empty_required_field_rejected() {
    let mailer = Arc::new(MockMailer::new());
    let server = create_test_server(mailer.clone());

    let mut payload = valid_payload();
    payload["refererEmail"] = json!("");

    let response = server.post("/api/refer-friend").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Missing required fields");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_refer_friend_name_only_rejected() {
    let mailer = Arc::new(MockMailer::new());
    let server = create_test_server(mailer.clone());

    let response = server
        .post("/api/refer-friend")
        .json(&json!({ "refererName": "Alice" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Missing required fields");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_refer_friend_transport_failure() {
    let mailer = Arc::new(MockMailer::failing());
    let server = create_test_server(mailer.clone());

    let response = server.post("/api/refer-friend").json(&valid_payload()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(
        body["message"],
        "Failed to send referral. Please try again later."
    );
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_refer_friend_escapes_markup_in_fields() {
    let mailer = Arc::new(MockMailer::new());
    let server = create_test_server(mailer.clone());

    let mut payload = valid_payload();
    payload["refererName"] = json!("<script>alert(1)</script>");

    let response = server.post("/api/refer-friend").json(&payload).await;

    response.assert_status_ok();

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(!sent[0].html.contains("<script>"));
    assert!(sent[0].html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_resubmission_sends_another_email() {
    let mailer = Arc::new(MockMailer::new());
    let server = create_test_server(mailer.clone());

    for _ in 0..2 {
        let response = server.post("/api/refer-friend").json(&valid_payload()).await;
        response.assert_status_ok();
    }

    // No dedup: every accepted submission produces one more notification
    assert_eq!(mailer.sent().len(), 2);
}

// ============================================================================
// GET /health
// ============================================================================

#[tokio::test]
async fn test_health_returns_ok_with_timestamp() {
    let server = create_test_server(Arc::new(MockMailer::new()));

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");

    let timestamp = body["timestamp"].as_str().expect("Timestamp should be a string");
    DateTime::parse_from_rfc3339(timestamp).expect("Timestamp should be RFC 3339");
}
