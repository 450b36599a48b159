//! Data model for issues and issue drafts.

pub mod fields;
pub mod issue;
pub mod timestamp;

pub use fields::{EditableFields, InvalidFieldValue, IssueField};
pub use issue::{Issue, IssueDraft, IssueId, IssuePriority, IssueStatus};
