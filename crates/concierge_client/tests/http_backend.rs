use concierge_client::{Backend, BackendError, HttpBackend};
use concierge_core::{BackendReply, Provider};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> HttpBackend {
    HttpBackend::new(&server.uri()).expect("valid base url")
}

#[tokio::test]
async fn query_parses_results_with_items() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_json(json!({ "query": "emails from bob" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "results",
            "content": "Found one.",
            "data": [
                { "sender": "bob@example.com", "subject": "Hi", "message_id": "m1" }
            ]
        })))
        .mount(&server)
        .await;

    let reply = backend_for(&server)
        .query("emails from bob")
        .await
        .expect("query ok");

    match reply {
        BackendReply::Results { content, items } => {
            assert_eq!(content, "Found one.");
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].sender.as_deref(), Some("bob@example.com"));
            assert_eq!(items[0].message_id.as_deref(), Some("m1"));
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[tokio::test]
async fn non_results_reply_is_a_plain_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "chat",
            "content": "Hi there."
        })))
        .mount(&server)
        .await;

    let reply = backend_for(&server).query("hello").await.expect("query ok");

    assert_eq!(
        reply,
        BackendReply::Message {
            content: "Hi there.".to_string(),
        }
    );
}

#[tokio::test]
async fn error_status_with_a_json_body_still_renders_its_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "type": "error",
            "content": "Backend Error: boom"
        })))
        .mount(&server)
        .await;

    let reply = backend_for(&server).query("hello").await.expect("query ok");

    assert_eq!(
        reply,
        BackendReply::Message {
            content: "Backend Error: boom".to_string(),
        }
    );
}

#[tokio::test]
async fn results_without_data_degrade_to_a_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "results",
            "content": "Nothing matched."
        })))
        .mount(&server)
        .await;

    let reply = backend_for(&server).query("hello").await.expect("query ok");

    assert_eq!(
        reply,
        BackendReply::Message {
            content: "Nothing matched.".to_string(),
        }
    );
}

#[tokio::test]
async fn malformed_body_is_a_malformed_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let err = backend_for(&server).query("hello").await.unwrap_err();

    assert!(matches!(err, BackendError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let server = MockServer::start().await;
    let backend = backend_for(&server);
    // Free the port so the connection is refused.
    drop(server);

    let err = backend.query("hello").await.unwrap_err();

    assert!(matches!(err, BackendError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn probe_sends_the_ping_sentinel_and_reports_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_json(json!({ "query": "PING" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ignored"))
        .expect(1)
        .mount(&server)
        .await;

    assert!(backend_for(&server).probe().await);
}

#[tokio::test]
async fn probe_treats_error_status_and_transport_failure_as_down() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    assert!(!backend.probe().await);

    drop(server);
    assert!(!backend.probe().await);
}

#[tokio::test]
async fn restart_ignores_the_response_entirely() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/restart"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    backend_for(&server).restart().await.expect("best effort");
}

#[tokio::test]
async fn index_status_parses_the_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Indexing",
            "percent": 40
        })))
        .mount(&server)
        .await;

    let snapshot = backend_for(&server).index_status().await.expect("status ok");

    assert_eq!(snapshot.status, "Indexing");
    assert_eq!(snapshot.percent, 40);
    assert!(snapshot.is_busy());
}

#[tokio::test]
async fn index_status_error_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index-status"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = backend_for(&server).index_status().await.unwrap_err();

    assert!(matches!(err, BackendError::Status(500)), "got {err:?}");
}

#[tokio::test]
async fn open_posts_the_id_and_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/open"))
        .and(body_json(json!({ "id": "m2", "provider": "OUTLOOK" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    backend_for(&server)
        .open_item("m2", Provider::Outlook)
        .await
        .expect("open ok");
}

#[tokio::test]
async fn open_keeps_windows_paths_intact() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/open"))
        .and(body_json(json!({ "id": "C:\\docs\\f.txt", "provider": "FILES" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    backend_for(&server)
        .open_item("C:\\docs\\f.txt", Provider::Files)
        .await
        .expect("open ok");
}
