//! Issue repository tests against a real HTTP server using wiremock.
//!
//! These verify the wire contract of `HttpIssueRepository` over
//! `ReqwestHttpClient`: paths, methods, JSON bodies and status handling.

use std::time::Duration;

use bugboard::adapters::ReqwestHttpClient;
use bugboard::error::TransportError;
use bugboard::models::{IssueDraft, IssueId, IssuePriority, IssueStatus};
use bugboard::repository::{HttpIssueRepository, IssueRepository};
use bugboard::state::IssueStore;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Repository rooted at `<server>/api`.
fn repository(server: &MockServer) -> HttpIssueRepository<ReqwestHttpClient> {
    HttpIssueRepository::new(format!("{}/api", server.uri()), ReqwestHttpClient::new())
}

fn issue_body(id: i64, title: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "status": status,
        "priority": "Medium",
        "createdAt": "2024-03-01T09:00:00Z",
        "updatedAt": null
    })
}

#[tokio::test]
async fn test_list_decodes_backend_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Issues"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            issue_body(2, "Second", "In Progress"),
            issue_body(1, "First", "Resolved"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let issues = repository(&server).list().await.unwrap();

    // Server order is kept
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].id, IssueId::Number(2));
    assert_eq!(issues[0].status, IssueStatus::InProgress);
    assert_eq!(issues[1].status, IssueStatus::Resolved);
    assert_eq!(issues[0].description, "");
    assert!(issues[0].updated_at.is_none());
}

#[tokio::test]
async fn test_create_posts_draft_labels() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Issues"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "title": "Crash on save",
            "status": "Open",
            "priority": "High"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "title": "Crash on save",
            "description": "",
            "status": "Open",
            "priority": "High",
            "createdAt": "2024-03-02T10:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = IssueDraft {
        title: "Crash on save".to_string(),
        priority: IssuePriority::High,
        ..IssueDraft::default()
    };
    let created = repository(&server).create(&draft).await.unwrap();

    assert_eq!(created.id, IssueId::Number(7));
    assert_eq!(created.priority, IssuePriority::High);
}

#[tokio::test]
async fn test_update_with_empty_body_applies_submitted_issue() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            issue_body(1, "Login fails", "Open"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/Issues/1"))
        .and(body_partial_json(json!({"id": 1, "status": "Resolved"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let repo = repository(&server);
    let mut store = IssueStore::default();
    store.load_all(&repo).await.unwrap();

    store.begin_edit(&IssueId::Number(1)).unwrap();
    store
        .update_selection_field(bugboard::models::IssueField::Status, "Resolved")
        .unwrap();
    store.commit_edit(&repo).await.unwrap();

    assert_eq!(store.issues()[0].status, IssueStatus::Resolved);
    assert!(store.selection().is_none());
}

#[tokio::test]
async fn test_delete_not_found_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/Issues/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = repository(&server)
        .delete(&IssueId::Number(42))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err,
        TransportError::Status {
            status: 404,
            message: "Not Found".to_string()
        }
    );
}

#[tokio::test]
async fn test_text_ids_are_path_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/Issues/abc%20def"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let result = repository(&server)
        .delete(&IssueId::Text("abc def".to_string()))
        .await;
    assert!(result.is_ok(), "Expected Ok, got {:?}", result);
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Issues"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = repository(&server).list().await.unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Issues"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::with_timeout(Duration::from_millis(100)).unwrap();
    let repo = HttpIssueRepository::new(format!("{}/api", server.uri()), client);

    let err = repo.list().await.unwrap_err();
    assert!(matches!(err, TransportError::Timeout(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_backend_is_connection_error() {
    // Nothing listens on port 9 of localhost in the test environment
    let repo = HttpIssueRepository::new("http://127.0.0.1:9/api", ReqwestHttpClient::new());

    let err = repo.list().await.unwrap_err();
    assert!(
        matches!(err, TransportError::Connection(_) | TransportError::Request(_)),
        "got {:?}",
        err
    );
}
