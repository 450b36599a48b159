//! Rejections raised by the view-state store.

use std::fmt;
use thiserror::Error;

use super::transport::TransportError;
use crate::models::{InvalidFieldValue, IssueField, IssueId};

/// What an in-flight request is operating on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PendingTarget {
    /// The whole collection (a listing)
    Collection,
    /// The new-issue draft
    NewIssue,
    /// An existing issue
    Issue(IssueId),
}

impl fmt::Display for PendingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingTarget::Collection => f.write_str("the issue list"),
            PendingTarget::NewIssue => f.write_str("the new issue"),
            PendingTarget::Issue(id) => write!(f, "issue {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("issue {0} not found")]
    NotFound(IssueId),

    #[error("no issue is selected for editing")]
    NoSelection,

    #[error("a request for {0} is already in flight")]
    AlreadyPending(PendingTarget),

    #[error("invalid value '{value}' for {field}")]
    InvalidFieldValue { field: IssueField, value: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl StoreError {
    /// Message suitable for a notification.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::EmptyTitle => "Title is required.".to_string(),
            StoreError::NotFound(id) => format!("Issue {} was not found.", id),
            StoreError::NoSelection => "No issue is being edited.".to_string(),
            StoreError::AlreadyPending(target) => format!("Still saving {}.", target),
            StoreError::InvalidFieldValue { field, value } => {
                format!("'{}' is not a valid {}.", value, field.label().to_lowercase())
            }
            StoreError::Transport(err) => err.user_message(),
        }
    }
}

impl From<InvalidFieldValue> for StoreError {
    fn from(err: InvalidFieldValue) -> Self {
        StoreError::InvalidFieldValue {
            field: err.field,
            value: err.value,
        }
    }
}
