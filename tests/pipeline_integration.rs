//! Integration tests for the HTTP pipeline.
//!
//! Every test runs against a local mock server and exercises the full
//! pipeline: rate gate → bearer injection → payload encryption → transmit →
//! payload decryption → 401 refresh-and-retry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use mockito::{Matcher, Server, ServerGuard};

use focusflow_sdk::crypto::PayloadCipher;
use focusflow_sdk::prelude::*;

const KEY: [u8; 32] = [42u8; 32];

fn cipher() -> PayloadCipher {
    PayloadCipher::new(EncryptionKey::from_bytes(KEY))
}

/// Encrypt a JSON value the way the server would: ciphertext as a JSON
/// string body.
fn encrypted_body(value: &serde_json::Value) -> String {
    let ciphertext = cipher()
        .encrypt(&serde_json::to_vec(value).unwrap())
        .unwrap();
    serde_json::to_string(&serde_json::Value::String(ciphertext)).unwrap()
}

fn seeded_store(auth: &str, refresh: &str) -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore::with_tokens(SessionTokens::new(
        auth, refresh,
    )))
}

fn client_for(server: &ServerGuard, store: Arc<MemorySessionStore>) -> FocusFlowClient {
    FocusFlowClient::builder()
        .base_url(&server.url())
        .encryption_key(EncryptionKey::from_bytes(KEY))
        .session_store(store)
        .rate_limit(50, Duration::from_secs(1))
        .build()
        .expect("client should build")
}

/// Regex for a JSON string body: the transmitted payload must be opaque
/// ciphertext, never plaintext JSON.
fn ciphertext_matcher() -> Matcher {
    Matcher::Regex(r#"^"[A-Za-z0-9+/]+=*"$"#.to_string())
}

// ─── Encryption round trip ───────────────────────────────────────────────────

#[tokio::test]
async fn put_task_encrypts_body_and_decrypts_response() {
    let mut server = Server::new_async().await;
    let store = seeded_store("auth-1", "refresh-1");
    let client = client_for(&server, store);

    // The server decrypts the request and echoes the fields back encrypted.
    // The returned task carrying the request's title proves the request
    // payload really was the ciphertext of the caller's body.
    let server_cipher = cipher();
    let mock = server
        .mock("PUT", "/tasks/42")
        .match_header("authorization", "Bearer auth-1")
        .match_body(ciphertext_matcher())
        .with_status(200)
        .with_body_from_request(move |req| {
            let wire: String =
                serde_json::from_slice(req.body().expect("request body")).unwrap();
            let plaintext = server_cipher.decrypt(&wire).expect("request decrypts");
            let update: serde_json::Value = serde_json::from_slice(&plaintext).unwrap();

            let response = serde_json::json!({
                "id": 42,
                "title": update["title"],
                "status": update["status"],
            });
            let ciphertext = server_cipher
                .encrypt(&serde_json::to_vec(&response).unwrap())
                .unwrap();
            serde_json::to_vec(&serde_json::Value::String(ciphertext)).unwrap()
        })
        .create_async()
        .await;

    let request = UpdateTaskRequest {
        title: Some("Buy milk".into()),
        status: Some(TaskStatus::Completed),
        ..Default::default()
    };
    let task = client.tasks().update(42, &request).await.unwrap();

    assert_eq!(task.id, 42);
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.status, TaskStatus::Completed);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_tasks_decrypts_ciphertext_response() {
    let mut server = Server::new_async().await;
    let client = client_for(&server, seeded_store("auth-1", "refresh-1"));

    let payload = serde_json::json!([
        { "id": 1, "title": "Plan week", "status": "Pending" },
        { "id": 2, "title": "Buy milk", "status": "Completed" },
    ]);
    let mock = server
        .mock("GET", "/tasks")
        .match_header("authorization", "Bearer auth-1")
        .with_status(200)
        .with_body(encrypted_body(&payload))
        .create_async()
        .await;

    let tasks = client.tasks().list().await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "Plan week");
    assert_eq!(tasks[1].status, TaskStatus::Completed);
    mock.assert_async().await;
}

// ─── Login surface ───────────────────────────────────────────────────────────

#[tokio::test]
async fn login_sends_plaintext_without_bearer_and_stores_tokens() {
    let mut server = Server::new_async().await;
    let store = Arc::new(MemorySessionStore::new());
    let client = client_for(&server, store.clone());

    let mock = server
        .mock("POST", "/auth/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(serde_json::json!({
            "email": "sam@example.com",
            "password": "hunter2",
        })))
        .with_status(200)
        .with_body(
            serde_json::json!({
                "token": "auth-1",
                "refreshToken": "refresh-1",
                "user": { "id": "u-1", "name": "Sam", "email": "sam@example.com" },
            })
            .to_string(),
        )
        .create_async()
        .await;

    let user = client.auth().login("sam@example.com", "hunter2").await.unwrap();

    assert_eq!(user.unwrap().name, "Sam");
    let tokens = store.tokens().unwrap();
    assert_eq!(tokens.auth_token, "auth-1");
    assert_eq!(tokens.refresh_token, "refresh-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn logout_clears_session_even_when_server_errors() {
    let mut server = Server::new_async().await;
    let store = seeded_store("auth-1", "refresh-1");
    let client = client_for(&server, store.clone());

    let _mock = server
        .mock("POST", "/auth/logout")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let result = client.auth().logout().await;
    assert!(result.is_err());
    assert!(store.tokens().is_none());
}

// ─── 401 refresh-and-retry ───────────────────────────────────────────────────

#[tokio::test]
async fn expired_token_triggers_one_refresh_and_one_resend() {
    let mut server = Server::new_async().await;
    let store = seeded_store("expired", "refresh-1");
    let client = client_for(&server, store.clone());

    let first = server
        .mock("GET", "/tasks")
        .match_header("authorization", "Bearer expired")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let refresh = server
        .mock("POST", "/auth/refresh")
        .match_body(Matcher::Json(serde_json::json!({ "refreshToken": "refresh-1" })))
        .with_status(200)
        .with_body(r#"{"token":"auth-2"}"#)
        .expect(1)
        .create_async()
        .await;

    let retried = server
        .mock("GET", "/tasks")
        .match_header("authorization", "Bearer auth-2")
        .with_status(200)
        .with_body(encrypted_body(&serde_json::json!([])))
        .expect(1)
        .create_async()
        .await;

    let tasks = client.tasks().list().await.unwrap();
    assert!(tasks.is_empty());

    // New auth token persisted; refresh token kept (no rotation).
    let tokens = store.tokens().unwrap();
    assert_eq!(tokens.auth_token, "auth-2");
    assert_eq!(tokens.refresh_token, "refresh-1");

    first.assert_async().await;
    refresh.assert_async().await;
    retried.assert_async().await;
}

#[tokio::test]
async fn second_401_after_refresh_propagates_without_looping() {
    let mut server = Server::new_async().await;
    let store = seeded_store("expired", "refresh-1");
    let client = client_for(&server, store.clone());

    let first = server
        .mock("GET", "/tasks")
        .match_header("authorization", "Bearer expired")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_body(r#"{"token":"auth-2"}"#)
        .expect(1)
        .create_async()
        .await;

    let retried = server
        .mock("GET", "/tasks")
        .match_header("authorization", "Bearer auth-2")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let err = client.tasks().list().await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::AuthRequired)));
    assert!(store.tokens().is_none());

    first.assert_async().await;
    refresh.assert_async().await;
    retried.assert_async().await;
}

#[tokio::test]
async fn refresh_failure_clears_session_and_surfaces_auth_required() {
    let mut server = Server::new_async().await;
    let store = seeded_store("expired", "refresh-bad");
    let client = client_for(&server, store.clone());

    let first = server
        .mock("GET", "/tasks")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(401)
        .with_body(r#"{"message":"refresh token revoked"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = client.tasks().list().await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::AuthRequired)));
    assert!(store.tokens().is_none());

    first.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn missing_refresh_token_skips_refresh_and_clears_session() {
    let mut server = Server::new_async().await;
    let store = seeded_store("expired", "");
    let client = client_for(&server, store.clone());

    let first = server
        .mock("GET", "/tasks")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let refresh = server
        .mock("POST", "/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let err = client.tasks().list().await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::AuthRequired)));
    assert!(store.tokens().is_none());

    first.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn concurrent_401s_coalesce_into_a_single_refresh() {
    let mut server = Server::new_async().await;
    let store = seeded_store("expired", "refresh-1");
    let client = client_for(&server, store.clone());

    let _stale = server
        .mock("GET", "/tasks")
        .match_header("authorization", "Bearer expired")
        .with_status(401)
        .expect_at_least(1)
        .create_async()
        .await;

    // The property under test: one refresh call, no matter how many
    // requests hit the 401 at the same time.
    let refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_body(r#"{"token":"auth-2"}"#)
        .expect(1)
        .create_async()
        .await;

    let fresh = server
        .mock("GET", "/tasks")
        .match_header("authorization", "Bearer auth-2")
        .with_status(200)
        .with_body(encrypted_body(&serde_json::json!([])))
        .expect(2)
        .create_async()
        .await;

    let (a, b) = tokio::join!(
        {
            let client = client.clone();
            async move { client.tasks().list().await }
        },
        {
            let client = client.clone();
            async move { client.tasks().list().await }
        },
    );
    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(store.tokens().unwrap().auth_token, "auth-2");

    refresh.assert_async().await;
    fresh.assert_async().await;
}

// ─── Error taxonomy ──────────────────────────────────────────────────────────

#[tokio::test]
async fn non_401_errors_propagate_without_retry() {
    let mut server = Server::new_async().await;
    let store = seeded_store("auth-1", "refresh-1");
    let client = client_for(&server, store.clone());

    let mock = server
        .mock("GET", "/tasks")
        .with_status(422)
        .with_body(r#"{"message":"malformed filter"}"#)
        .expect(1)
        .create_async()
        .await;

    let refresh = server
        .mock("POST", "/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let err = client.tasks().list().await.unwrap_err();
    match err {
        SdkError::Http(HttpError::Api { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "malformed filter");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    // Session survives non-auth failures.
    assert!(store.tokens().is_some());

    mock.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn unreachable_server_surfaces_network_error() {
    // Port 9 (discard) refuses connections.
    let client = FocusFlowClient::builder()
        .base_url("http://127.0.0.1:9/api")
        .encryption_key(EncryptionKey::from_bytes(KEY))
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.tasks().list().await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::Network(_))));
}

// ─── Rate gate ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn rate_gate_delays_excess_requests_instead_of_dropping() {
    let mut server = Server::new_async().await;
    let store = seeded_store("auth-1", "refresh-1");

    let client = FocusFlowClient::builder()
        .base_url(&server.url())
        .encryption_key(EncryptionKey::from_bytes(KEY))
        .session_store(store)
        .rate_limit(2, Duration::from_millis(300))
        .build()
        .unwrap();

    let mock = server
        .mock("GET", "/tasks")
        .with_status(200)
        .with_body(encrypted_body(&serde_json::json!([])))
        .expect(4)
        .create_async()
        .await;

    let start = Instant::now();
    let mut handles = Vec::new();
    for _ in 0..4 {
        let client = client.clone();
        handles.push(tokio::spawn(async move { client.tasks().list().await }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    // Two fit in the first window; the other two wait it out.
    assert!(start.elapsed() >= Duration::from_millis(250));
    mock.assert_async().await;
}

// ─── Remaining endpoint surface ──────────────────────────────────────────────

#[tokio::test]
async fn graph_query_posts_cypher_and_params() {
    let mut server = Server::new_async().await;
    let client = client_for(&server, seeded_store("auth-1", "refresh-1"));

    let payload = serde_json::json!({
        "records": [ { "result": 1 } ],
    });
    let mock = server
        .mock("POST", "/neo4j/query")
        .match_body(ciphertext_matcher())
        .with_status(200)
        .with_body(encrypted_body(&payload))
        .create_async()
        .await;

    let resp = client
        .graph()
        .query("RETURN 1 AS result", serde_json::json!({}))
        .await
        .unwrap();
    assert_eq!(resp.records.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn recommendations_parse_relevance_scores() {
    let mut server = Server::new_async().await;
    let client = client_for(&server, seeded_store("auth-1", "refresh-1"));

    let payload = serde_json::json!([
        { "id": "r-1", "title": "Review inbox", "relevanceScore": 4.0 },
        { "id": "r-2", "title": "Plan sprint", "relevanceScore": 2.5 },
    ]);
    let _mock = server
        .mock("GET", "/ai/recommendations")
        .with_status(200)
        .with_body(encrypted_body(&payload))
        .create_async()
        .await;

    let recs = client.ai().recommendations().await.unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].relevance_score, 4.0);
}

#[tokio::test]
async fn delete_task_accepts_empty_response_body() {
    let mut server = Server::new_async().await;
    let client = client_for(&server, seeded_store("auth-1", "refresh-1"));

    let mock = server
        .mock("DELETE", "/tasks/7")
        .match_header("authorization", "Bearer auth-1")
        .with_status(200)
        .create_async()
        .await;

    client.tasks().delete(7).await.unwrap();
    mock.assert_async().await;
}
