//! Field-level editing shared by the add form and the edit form.

use std::fmt;

use super::issue::{Issue, IssueDraft, IssuePriority, IssueStatus};

/// A user-editable issue field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueField {
    Title,
    Description,
    Status,
    Priority,
    AssignedTo,
}

impl IssueField {
    /// Form order.
    pub const ALL: [IssueField; 5] = [
        IssueField::Title,
        IssueField::Description,
        IssueField::Status,
        IssueField::Priority,
        IssueField::AssignedTo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IssueField::Title => "Title",
            IssueField::Description => "Description",
            IssueField::Status => "Status",
            IssueField::Priority => "Priority",
            IssueField::AssignedTo => "Assigned to",
        }
    }

    /// Whether the field takes one of a fixed set of values.
    pub fn is_choice(&self) -> bool {
        matches!(self, IssueField::Status | IssueField::Priority)
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Label of the neighbouring choice for a choice field, `None` for text fields.
    pub fn cycle(&self, current: &str, forward: bool) -> Option<String> {
        match self {
            IssueField::Status => {
                let status = IssueStatus::from_label(current).unwrap_or_default();
                let next = if forward { status.next() } else { status.prev() };
                Some(next.label().to_string())
            }
            IssueField::Priority => {
                let priority = IssuePriority::from_label(current).unwrap_or_default();
                let next = if forward { priority.next() } else { priority.prev() };
                Some(next.label().to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Display for IssueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected assignment of a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFieldValue {
    pub field: IssueField,
    pub value: String,
}

/// Read and write issue fields by name.
pub trait EditableFields {
    fn field_value(&self, field: IssueField) -> String;

    fn set_field(&mut self, field: IssueField, value: &str) -> Result<(), InvalidFieldValue>;
}

fn parse_status(value: &str) -> Result<IssueStatus, InvalidFieldValue> {
    IssueStatus::from_label(value).ok_or_else(|| InvalidFieldValue {
        field: IssueField::Status,
        value: value.to_string(),
    })
}

fn parse_priority(value: &str) -> Result<IssuePriority, InvalidFieldValue> {
    IssuePriority::from_label(value).ok_or_else(|| InvalidFieldValue {
        field: IssueField::Priority,
        value: value.to_string(),
    })
}

fn assignee(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl EditableFields for IssueDraft {
    fn field_value(&self, field: IssueField) -> String {
        match field {
            IssueField::Title => self.title.clone(),
            IssueField::Description => self.description.clone(),
            IssueField::Status => self.status.label().to_string(),
            IssueField::Priority => self.priority.label().to_string(),
            IssueField::AssignedTo => self.assigned_to.clone().unwrap_or_default(),
        }
    }

    fn set_field(&mut self, field: IssueField, value: &str) -> Result<(), InvalidFieldValue> {
        match field {
            IssueField::Title => self.title = value.to_string(),
            IssueField::Description => self.description = value.to_string(),
            IssueField::Status => self.status = parse_status(value)?,
            IssueField::Priority => self.priority = parse_priority(value)?,
            IssueField::AssignedTo => self.assigned_to = assignee(value),
        }
        Ok(())
    }
}

impl EditableFields for Issue {
    fn field_value(&self, field: IssueField) -> String {
        match field {
            IssueField::Title => self.title.clone(),
            IssueField::Description => self.description.clone(),
            IssueField::Status => self.status.label().to_string(),
            IssueField::Priority => self.priority.label().to_string(),
            IssueField::AssignedTo => self.assigned_to.clone().unwrap_or_default(),
        }
    }

    fn set_field(&mut self, field: IssueField, value: &str) -> Result<(), InvalidFieldValue> {
        match field {
            IssueField::Title => self.title = value.to_string(),
            IssueField::Description => self.description = value.to_string(),
            IssueField::Status => self.status = parse_status(value)?,
            IssueField::Priority => self.priority = parse_priority(value)?,
            IssueField::AssignedTo => self.assigned_to = assignee(value),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_wraps() {
        assert_eq!(IssueField::Title.next(), IssueField::Description);
        assert_eq!(IssueField::AssignedTo.next(), IssueField::Title);
        assert_eq!(IssueField::Title.prev(), IssueField::AssignedTo);
    }

    #[test]
    fn test_cycle_choice_fields() {
        assert_eq!(IssueField::Status.cycle("Open", true).as_deref(), Some("In Progress"));
        assert_eq!(IssueField::Priority.cycle("Low", false).as_deref(), Some("High"));
        assert_eq!(IssueField::Title.cycle("x", true), None);
    }

    #[test]
    fn test_set_field_on_draft() {
        let mut draft = IssueDraft::default();
        draft.set_field(IssueField::Title, "Crash").unwrap();
        draft.set_field(IssueField::Status, "Resolved").unwrap();
        draft.set_field(IssueField::AssignedTo, "sam").unwrap();
        assert_eq!(draft.title, "Crash");
        assert_eq!(draft.status, IssueStatus::Resolved);
        assert_eq!(draft.field_value(IssueField::AssignedTo), "sam");

        draft.set_field(IssueField::AssignedTo, "").unwrap();
        assert!(draft.assigned_to.is_none());
    }

    #[test]
    fn test_set_field_rejects_unknown_choice() {
        let mut draft = IssueDraft::default();
        let err = draft.set_field(IssueField::Priority, "Urgent").unwrap_err();
        assert_eq!(err.field, IssueField::Priority);
        assert_eq!(err.value, "Urgent");
        assert_eq!(draft.priority, IssuePriority::Medium);
    }
}
