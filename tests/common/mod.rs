//! Common test utilities for integration tests.
//!
//! Fixtures for issues and backend payloads, plus builders for a store or
//! app wired to a [`MockHttpClient`].
//!
//! # Example
//!
//! ```ignore
//! let http = MockHttpConfig::new()
//!     .with_json_response("GET", &issues_url(), 200, &issue_list_json())
//!     .build();
//! let repo = test_repository(http);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use bugboard::app::App;
use bugboard::config::Config;
use bugboard::models::{Issue, IssueDraft, IssueId, IssuePriority, IssueStatus};
use bugboard::repository::HttpIssueRepository;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

/// Base URL the mock repository is rooted at
pub const TEST_BASE_URL: &str = "http://bugboard.test/api";

pub fn issues_url() -> String {
    format!("{}/Issues", TEST_BASE_URL)
}

pub fn issue_url(id: i64) -> String {
    format!("{}/Issues/{}", TEST_BASE_URL, id)
}

/// Issue as the backend would return it.
pub fn test_issue(id: i64, title: &str, status: IssueStatus) -> Issue {
    let draft = IssueDraft {
        title: title.to_string(),
        description: format!("Details for {}", title),
        status,
        priority: IssuePriority::Medium,
        assigned_to: None,
    };
    let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    Issue::from_draft(IssueId::Number(id), &draft, created_at)
}

/// Three issues: one per status.
pub fn sample_issues() -> Vec<Issue> {
    vec![
        test_issue(1, "Login fails", IssueStatus::Open),
        test_issue(2, "Crash on save", IssueStatus::InProgress),
        test_issue(3, "Typo in footer", IssueStatus::Resolved),
    ]
}

pub fn issue_json(issue: &Issue) -> Value {
    serde_json::to_value(issue).expect("issue serializes")
}

pub fn issue_list_json(issues: &[Issue]) -> Value {
    json!(issues.iter().map(issue_json).collect::<Vec<_>>())
}

pub fn test_repository(client: MockHttpClient) -> HttpIssueRepository<MockHttpClient> {
    HttpIssueRepository::new(TEST_BASE_URL, client)
}

/// Config with no splash and a short notification lifetime.
pub fn test_config() -> Config {
    Config {
        api_url: TEST_BASE_URL.to_string(),
        splash_delay: Duration::ZERO,
        notification_ttl: Duration::from_millis(3000),
        log_file: None,
        ..Config::default()
    }
}

/// App backed by `client`, without a splash screen.
pub fn test_app(client: MockHttpClient) -> App {
    App::new(Arc::new(test_repository(client)), &test_config())
}
