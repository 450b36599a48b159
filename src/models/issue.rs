//! Issue records as exchanged with the `/Issues` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::timestamp;

/// Server-assigned issue identifier.
///
/// The backend owns identity, so the client never mints one. Numeric and
/// string identifiers are both accepted and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssueId {
    Number(i64),
    Text(String),
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueId::Number(n) => write!(f, "{}", n),
            IssueId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for IssueId {
    fn from(n: i64) -> Self {
        IssueId::Number(n)
    }
}

impl From<&str> for IssueId {
    fn from(s: &str) -> Self {
        IssueId::Text(s.to_string())
    }
}

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssueStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    Resolved,
}

impl IssueStatus {
    /// All statuses in display order.
    pub const ALL: [IssueStatus; 3] = [
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
    ];

    /// Wire and display label.
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }

    /// Parse a label, ignoring case and the space in "In Progress".
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "open" => Some(IssueStatus::Open),
            "inprogress" => Some(IssueStatus::InProgress),
            "resolved" => Some(IssueStatus::Resolved),
            _ => None,
        }
    }

    /// Next status in display order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            IssueStatus::Open => IssueStatus::InProgress,
            IssueStatus::InProgress => IssueStatus::Resolved,
            IssueStatus::Resolved => IssueStatus::Open,
        }
    }

    /// Previous status in display order, wrapping around.
    pub fn prev(&self) -> Self {
        match self {
            IssueStatus::Open => IssueStatus::Resolved,
            IssueStatus::InProgress => IssueStatus::Open,
            IssueStatus::Resolved => IssueStatus::InProgress,
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Triage priority of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssuePriority {
    Low,
    #[default]
    Medium,
    High,
}

impl IssuePriority {
    pub const ALL: [IssuePriority; 3] = [
        IssuePriority::Low,
        IssuePriority::Medium,
        IssuePriority::High,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IssuePriority::Low => "Low",
            IssuePriority::Medium => "Medium",
            IssuePriority::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" => Some(IssuePriority::Low),
            "medium" => Some(IssuePriority::Medium),
            "high" => Some(IssuePriority::High),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            IssuePriority::Low => IssuePriority::Medium,
            IssuePriority::Medium => IssuePriority::High,
            IssuePriority::High => IssuePriority::Low,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            IssuePriority::Low => IssuePriority::High,
            IssuePriority::Medium => IssuePriority::Low,
            IssuePriority::High => IssuePriority::Medium,
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An issue owned by the remote resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    /// Free text; `null` or a missing field decodes as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default)]
    pub priority: IssuePriority,
    /// Sent as `null` when cleared so a PUT unassigns the issue
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    /// Absent until the issue is first updated
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "timestamp::deserialize_opt"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    /// Backend fields this client does not model, echoed back on update
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Issue {
    /// Build the issue a backend would return for `draft`.
    pub fn from_draft(id: impl Into<IssueId>, draft: &IssueDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: draft.priority,
            assigned_to: draft.assigned_to.clone(),
            created_at,
            updated_at: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Form state for an issue that has not been created yet.
///
/// `Default` yields the add-form defaults: empty text, `Open`, `Medium`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl IssueDraft {
    /// Preset for the quick-add form, which starts at `Low` priority.
    pub fn quick() -> Self {
        Self {
            priority: IssuePriority::Low,
            ..Self::default()
        }
    }

    /// Copy of this draft as it is sent to the backend: the title is
    /// trimmed and a blank assignee is dropped.
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            assigned_to: self
                .assigned_to
                .as_ref()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
        }
    }

    /// True when the title has at least one non-whitespace character.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
