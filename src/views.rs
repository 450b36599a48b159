//! Derived views: pure projections of the issue collection.

use crate::models::{Issue, IssueStatus};

/// Issues whose title contains `term`, ignoring case, in collection order.
///
/// An empty term matches everything.
pub fn filtered_issues<'a>(issues: &'a [Issue], term: &str) -> Vec<&'a Issue> {
    let needle = term.to_lowercase();
    issues
        .iter()
        .filter(|issue| needle.is_empty() || issue.title.to_lowercase().contains(&needle))
        .collect()
}

/// Number of issues per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn get(&self, status: IssueStatus) -> usize {
        match status {
            IssueStatus::Open => self.open,
            IssueStatus::InProgress => self.in_progress,
            IssueStatus::Resolved => self.resolved,
        }
    }

    pub fn total(&self) -> usize {
        self.open + self.in_progress + self.resolved
    }

    /// Fraction of all issues with `status`, 0.0 for an empty collection.
    pub fn share(&self, status: IssueStatus) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(status) as f64 / total as f64
        }
    }

    /// `(status, count)` pairs in display order.
    pub fn entries(&self) -> [(IssueStatus, usize); 3] {
        IssueStatus::ALL.map(|status| (status, self.get(status)))
    }
}

/// Count issues per status; every status is present, zero-filled.
pub fn status_counts(issues: &[Issue]) -> StatusCounts {
    issues
        .iter()
        .fold(StatusCounts::default(), |mut counts, issue| {
            match issue.status {
                IssueStatus::Open => counts.open += 1,
                IssueStatus::InProgress => counts.in_progress += 1,
                IssueStatus::Resolved => counts.resolved += 1,
            }
            counts
        })
}
