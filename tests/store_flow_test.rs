//! End-to-end flows through the view-state store and the HTTP repository,
//! with the transport replaced by `MockHttpClient`.

mod common;

use bugboard::error::{PendingTarget, StoreError};
use bugboard::models::{IssueDraft, IssueField, IssueId, IssuePriority, IssueStatus};
use bugboard::state::{IssueStore, LoadOutcome, NotificationKind, MSG_ADDED, MSG_UPDATED};
use chrono::{TimeZone, Utc};
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_load_all_replaces_collection() {
    let http = MockHttpConfig::new()
        .with_json_response("GET", &issues_url(), 200, &issue_list_json(&sample_issues()))
        .build();
    let repo = test_repository(http);
    let mut store = IssueStore::default().with_issues(vec![test_issue(9, "Old", IssueStatus::Open)]);

    let count = store.load_all(&repo).await.unwrap();

    assert_eq!(count, 3);
    assert_eq!(store.issues(), sample_issues().as_slice());
    assert!(store.notification().is_none());
}

#[tokio::test]
async fn test_failed_load_keeps_previous_collection() {
    let http = MockHttpConfig::new()
        .with_error("GET", &issues_url(), HttpError::ConnectionFailed("refused".into()))
        .build();
    let repo = test_repository(http);
    let mut store = IssueStore::default().with_issues(sample_issues());

    let result = store.load_all(&repo).await;

    assert!(matches!(result, Err(StoreError::Transport(_))));
    assert_eq!(store.issues().len(), 3);
    assert_eq!(
        store.notification().map(|n| n.kind),
        Some(NotificationKind::Error)
    );
    assert!(!store.is_busy());
}

#[tokio::test]
async fn test_search_scenario() {
    let mut store = IssueStore::default().with_issues(vec![test_issue(1, "Login bug", IssueStatus::Open)]);

    store.set_search("login");
    let filtered = store.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, IssueId::Number(1));

    store.set_search("xyz");
    assert!(store.filtered().is_empty());
}

#[tokio::test]
async fn test_add_issue_scenario() {
    let created_at = Utc.with_ymd_and_hms(2024, 3, 2, 10, 30, 0).unwrap();
    let returned = json!({
        "id": 2,
        "title": "Crash on save",
        "description": "",
        "status": "Open",
        "priority": "High",
        "createdAt": created_at.to_rfc3339(),
    });
    let http = MockHttpConfig::new()
        .with_json_response("POST", &issues_url(), 201, &returned)
        .build();
    let repo = test_repository(http.clone());
    let mut store = IssueStore::default().with_issues(vec![test_issue(1, "Login bug", IssueStatus::Open)]);

    store.set_draft(IssueDraft {
        title: "Crash on save".to_string(),
        priority: IssuePriority::High,
        status: IssueStatus::Open,
        ..IssueDraft::default()
    });
    store.add_issue(&repo).await.unwrap();

    assert_eq!(store.issues().len(), 2);
    let added = &store.issues()[1];
    assert_eq!(added.id, IssueId::Number(2));
    assert_eq!(added.priority, IssuePriority::High);
    assert_eq!(added.created_at, created_at);
    assert_eq!(store.draft(), &IssueDraft::default());
    assert_eq!(store.notification().map(|n| n.message.as_str()), Some(MSG_ADDED));

    let requests = http.get_requests();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["title"], "Crash on save");
    assert_eq!(body["priority"], "High");
}

#[tokio::test]
async fn test_blank_title_never_reaches_backend() {
    let http = MockHttpConfig::new().build();
    let repo = test_repository(http.clone());
    let mut store = IssueStore::default().with_issues(sample_issues());
    store.update_draft_field(IssueField::Title, "  \t ").unwrap();

    let result = store.add_issue(&repo).await;

    assert!(matches!(result, Err(StoreError::EmptyTitle)));
    assert_eq!(http.request_count(), 0);
    assert_eq!(store.issues().len(), 3);
}

#[tokio::test]
async fn test_failed_add_keeps_draft() {
    let http = MockHttpConfig::new()
        .with_json_response("POST", &issues_url(), 500, &json!({"error": "boom"}))
        .build();
    let repo = test_repository(http);
    let mut store = IssueStore::default();
    store.update_draft_field(IssueField::Title, "Keep me").unwrap();

    assert!(store.add_issue(&repo).await.is_err());
    assert_eq!(store.draft().title, "Keep me");
    assert!(store.issues().is_empty());
    assert_ne!(store.notification().map(|n| n.kind), Some(NotificationKind::Success));
}

#[tokio::test]
async fn test_commit_edit_replaces_matching_issue() {
    let http = MockHttpConfig::new().with_status("PUT", &issue_url(2), 204).build();
    let repo = test_repository(http.clone());
    let mut store = IssueStore::default().with_issues(sample_issues());

    store.begin_edit(&IssueId::Number(2)).unwrap();
    store.update_selection_field(IssueField::Status, "Resolved").unwrap();
    store.update_selection_field(IssueField::Title, "Crash on save (fixed)").unwrap();
    let submitted = store.selection().cloned().unwrap();

    store.commit_edit(&repo).await.unwrap();

    let matching: Vec<_> = store.issues().iter().filter(|i| i.id == IssueId::Number(2)).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0], &submitted);
    assert!(store.selection().is_none());
    assert_eq!(store.notification().map(|n| n.message.as_str()), Some(MSG_UPDATED));
    assert_eq!(http.get_requests()[0].method, "PUT");
}

#[tokio::test]
async fn test_failed_update_scenario() {
    let http = MockHttpConfig::new()
        .with_error("PUT", &issue_url(1), HttpError::Timeout("deadline elapsed".into()))
        .build();
    let repo = test_repository(http);
    let mut store = IssueStore::default().with_issues(sample_issues());

    store.begin_edit(&IssueId::Number(1)).unwrap();
    store.update_selection_field(IssueField::Title, "Attempted").unwrap();

    assert!(store.commit_edit(&repo).await.is_err());

    assert_eq!(store.issues(), sample_issues().as_slice());
    assert_eq!(store.selection().map(|s| s.title.as_str()), Some("Attempted"));
    assert_eq!(
        store.notification().map(|n| n.kind),
        Some(NotificationKind::Error)
    );
}

#[tokio::test]
async fn test_remove_issue_clears_matching_selection() {
    let http = MockHttpConfig::new().with_status("DELETE", &issue_url(3), 200).build();
    let repo = test_repository(http);
    let mut store = IssueStore::default().with_issues(sample_issues());
    store.begin_edit(&IssueId::Number(3)).unwrap();

    store.remove_issue(&repo, &IssueId::Number(3)).await.unwrap();

    assert!(store.issue(&IssueId::Number(3)).is_none());
    assert!(store.selection().is_none());
    assert_eq!(store.status_counts().total(), 2);
}

#[tokio::test]
async fn test_delete_not_found_drops_stale_entry() {
    let http = MockHttpConfig::new().with_status("DELETE", &issue_url(1), 404).build();
    let repo = test_repository(http);
    let mut store = IssueStore::default().with_issues(sample_issues());

    let result = store.remove_issue(&repo, &IssueId::Number(1)).await;

    assert!(result.is_err());
    assert!(store.issue(&IssueId::Number(1)).is_none());
    assert_eq!(
        store.notification().map(|n| n.kind),
        Some(NotificationKind::Error)
    );
}

#[tokio::test]
async fn test_double_delete_is_ignored_while_pending() {
    let mut store = IssueStore::default().with_issues(sample_issues());
    let id = IssueId::Number(2);

    store.begin_remove(&id).unwrap();
    assert!(store.is_pending(&PendingTarget::Issue(id.clone())));
    assert!(matches!(
        store.begin_remove(&id),
        Err(StoreError::AlreadyPending(PendingTarget::Issue(_)))
    ));

    store.apply_remove(&id, Ok(())).unwrap();
    assert!(!store.is_busy());
    assert_eq!(store.issues().len(), 2);
}

#[tokio::test]
async fn test_listing_that_races_a_mutation_is_stale() {
    let mut store = IssueStore::default().with_issues(sample_issues());

    let ticket = store.begin_load().unwrap();
    let id = store.begin_remove(&IssueId::Number(1)).unwrap();
    store.apply_remove(&id, Ok(())).unwrap();

    // The listing was taken before the delete committed
    let outcome = store.apply_load(ticket, Ok(sample_issues())).unwrap();
    assert_eq!(outcome, LoadOutcome::Stale);
    assert_eq!(store.issues().len(), 2);
}

#[tokio::test]
async fn test_status_counts_track_collection() {
    let mut issues = sample_issues();
    issues.push(test_issue(4, "Another open one", IssueStatus::Open));
    let store = IssueStore::default().with_issues(issues);

    let counts = store.status_counts();
    assert_eq!(counts.open, 2);
    assert_eq!(counts.in_progress, 1);
    assert_eq!(counts.resolved, 1);
    assert_eq!(counts.total(), store.issues().len());
}
