//! The view-state store.
//!
//! [`IssueStore`] is the only place UI state lives and its methods are the
//! only way to change it. Remote operations come in two halves so the UI can
//! run the round-trip on a background task:
//!
//! 1. `begin_*` validates, marks the target pending and returns what to send.
//! 2. `apply_*` folds the outcome back in and clears the pending mark.
//!
//! Local state changes only in the `apply_*` half and only when the
//! round-trip succeeded. The `async` methods (`load_all`, `add_issue`,
//! `commit_edit`, `remove_issue`) run both halves against a repository.

use std::collections::HashSet;
use std::time::Duration;

use crate::error::{PendingTarget, StoreError, StoreResult, TransportError};
use crate::models::{EditableFields, Issue, IssueDraft, IssueField, IssueId};
use crate::repository::IssueRepository;
use crate::views::{self, StatusCounts};

use super::notification::{
    ExpiryCallback, Notification, Notifier, DEFAULT_NOTIFICATION_TTL,
};

pub const MSG_ADDED: &str = "Issue added successfully!";
pub const MSG_UPDATED: &str = "Issue updated successfully!";
pub const MSG_DELETED: &str = "Issue deleted successfully!";

/// Proof that a listing was started, carried back into [`IssueStore::apply_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

/// What a completed listing did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection was replaced with this many issues
    Replaced(usize),
    /// A mutation committed while the listing was in flight, so the
    /// listing may predate it and was discarded
    Stale,
}

#[derive(Debug)]
pub struct IssueStore {
    issues: Vec<Issue>,
    draft: IssueDraft,
    selection: Option<Issue>,
    search: String,
    notifier: Notifier,
    pending: HashSet<PendingTarget>,
    /// Bumped on every committed mutation
    epoch: u64,
}

impl IssueStore {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            issues: Vec::new(),
            draft: IssueDraft::default(),
            selection: None,
            search: String::new(),
            notifier: Notifier::new(notification_ttl),
            pending: HashSet::new(),
            epoch: 0,
        }
    }

    /// Route notification auto-clear timers through `callback`.
    pub fn with_expiry_callback(mut self, callback: ExpiryCallback) -> Self {
        self.notifier.set_expiry_callback(callback);
        self
    }

    /// Seed the collection, for tests and fixtures.
    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.replace_all(issues);
        self
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn issue(&self, id: &IssueId) -> Option<&Issue> {
        self.issues.iter().find(|issue| &issue.id == id)
    }

    pub fn draft(&self) -> &IssueDraft {
        &self.draft
    }

    pub fn selection(&self) -> Option<&Issue> {
        self.selection.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    pub fn is_pending(&self, target: &PendingTarget) -> bool {
        self.pending.contains(target)
    }

    /// True while any request is in flight.
    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Issues matching the current search term.
    pub fn filtered(&self) -> Vec<&Issue> {
        views::filtered_issues(&self.issues, &self.search)
    }

    pub fn status_counts(&self) -> StatusCounts {
        views::status_counts(&self.issues)
    }

    // ------------------------------------------------------------------
    // Local mutations
    // ------------------------------------------------------------------

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_draft(&mut self, draft: IssueDraft) {
        self.draft = draft;
    }

    pub fn update_draft_field(&mut self, field: IssueField, value: &str) -> StoreResult<()> {
        self.draft.set_field(field, value)?;
        Ok(())
    }

    pub fn reset_draft(&mut self) {
        self.draft = IssueDraft::default();
    }

    /// Open issue `id` for editing as a working copy.
    pub fn begin_edit(&mut self, id: &IssueId) -> StoreResult<&Issue> {
        let issue = self
            .issue(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        tracing::debug!("Editing issue {}", id);
        let selection: &Issue = self.selection.insert(issue);
        Ok(selection)
    }

    /// Change a field of the working copy. The collection is untouched.
    pub fn update_selection_field(&mut self, field: IssueField, value: &str) -> StoreResult<()> {
        let selection = self.selection.as_mut().ok_or(StoreError::NoSelection)?;
        selection.set_field(field, value)?;
        Ok(())
    }

    pub fn discard_edit(&mut self) {
        if let Some(selection) = self.selection.take() {
            tracing::debug!("Discarded edit of issue {}", selection.id);
        }
    }

    pub fn notify_success(&mut self, message: impl Into<String>) -> u64 {
        self.notifier.success(message)
    }

    pub fn notify_error(&mut self, message: impl Into<String>) -> u64 {
        self.notifier.error(message)
    }

    /// Clear the notification raised as `generation`, if it is still shown.
    pub fn expire_notification(&mut self, generation: u64) -> bool {
        self.notifier.expire(generation)
    }

    pub fn dismiss_notification(&mut self) {
        self.notifier.dismiss();
    }

    // ------------------------------------------------------------------
    // Remote operations: begin / apply
    // ------------------------------------------------------------------

    fn mark_pending(&mut self, target: PendingTarget) -> StoreResult<()> {
        if !self.pending.insert(target.clone()) {
            tracing::debug!("Ignoring request for {}: already in flight", target);
            return Err(StoreError::AlreadyPending(target));
        }
        Ok(())
    }

    fn report_failure(&mut self, operation: &str, err: &TransportError) {
        tracing::warn!(
            code = err.error_code(),
            "{} failed: {}",
            operation,
            err
        );
        self.notifier.error(err.user_message());
    }

    /// Replace the collection, keeping the first of any duplicate ids.
    fn replace_all(&mut self, issues: Vec<Issue>) -> usize {
        let mut seen = HashSet::new();
        let before = issues.len();
        self.issues = issues
            .into_iter()
            .filter(|issue| seen.insert(issue.id.clone()))
            .collect();
        if self.issues.len() != before {
            tracing::warn!(
                "Listing contained {} duplicate ids; kept first occurrences",
                before - self.issues.len()
            );
        }
        self.issues.len()
    }

    fn remove_local(&mut self, id: &IssueId) {
        self.issues.retain(|issue| &issue.id != id);
        if self.selection.as_ref().is_some_and(|s| &s.id == id) {
            self.selection = None;
        }
    }

    pub fn begin_load(&mut self) -> StoreResult<LoadTicket> {
        self.mark_pending(PendingTarget::Collection)?;
        Ok(LoadTicket { epoch: self.epoch })
    }

    /// Fold a listing back in. On failure the previous collection stays.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Issue>, TransportError>,
    ) -> StoreResult<LoadOutcome> {
        self.pending.remove(&PendingTarget::Collection);
        match result {
            Ok(_) if ticket.epoch != self.epoch => {
                tracing::debug!("Discarding listing that raced a committed mutation");
                Ok(LoadOutcome::Stale)
            }
            Ok(issues) => {
                let count = self.replace_all(issues);
                tracing::info!("Loaded {} issues", count);
                Ok(LoadOutcome::Replaced(count))
            }
            Err(err) => {
                self.report_failure("Loading issues", &err);
                Err(err.into())
            }
        }
    }

    /// Validate the draft and return the normalized copy to submit.
    ///
    /// A blank title is rejected without marking anything pending.
    pub fn begin_add(&mut self) -> StoreResult<IssueDraft> {
        if !self.draft.has_title() {
            return Err(StoreError::EmptyTitle);
        }
        self.mark_pending(PendingTarget::NewIssue)?;
        Ok(self.draft.normalized())
    }

    pub fn apply_add(&mut self, result: Result<Issue, TransportError>) -> StoreResult<()> {
        self.pending.remove(&PendingTarget::NewIssue);
        match result {
            Ok(issue) => {
                tracing::info!("Added issue {}", issue.id);
                match self.issues.iter_mut().find(|i| i.id == issue.id) {
                    Some(existing) => *existing = issue,
                    None => self.issues.push(issue),
                }
                self.epoch += 1;
                self.reset_draft();
                self.notifier.success(MSG_ADDED);
                Ok(())
            }
            Err(err) => {
                self.report_failure("Adding issue", &err);
                Err(err.into())
            }
        }
    }

    /// Return the working copy to submit for the open edit.
    pub fn begin_commit(&mut self) -> StoreResult<Issue> {
        let selection = self.selection.clone().ok_or(StoreError::NoSelection)?;
        self.mark_pending(PendingTarget::Issue(selection.id.clone()))?;
        Ok(selection)
    }

    /// Fold an update back in.
    ///
    /// `submitted` is what was sent; it is applied when the backend returns
    /// no body. A 404 drops the stale local entry.
    pub fn apply_commit(
        &mut self,
        submitted: Issue,
        result: Result<Option<Issue>, TransportError>,
    ) -> StoreResult<()> {
        let id = submitted.id.clone();
        self.pending.remove(&PendingTarget::Issue(id.clone()));
        match result {
            Ok(returned) => {
                let updated = returned.unwrap_or(submitted);
                match self.issues.iter_mut().find(|i| i.id == id) {
                    Some(existing) => *existing = updated,
                    None => tracing::warn!("Updated issue {} is no longer listed locally", id),
                }
                if self.selection.as_ref().is_some_and(|s| s.id == id) {
                    self.selection = None;
                }
                self.epoch += 1;
                tracing::info!("Updated issue {}", id);
                self.notifier.success(MSG_UPDATED);
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                self.remove_local(&id);
                self.epoch += 1;
                self.report_failure("Updating issue", &err);
                Err(err.into())
            }
            Err(err) => {
                self.report_failure("Updating issue", &err);
                Err(err.into())
            }
        }
    }

    pub fn begin_remove(&mut self, id: &IssueId) -> StoreResult<IssueId> {
        if self.issue(id).is_none() {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.mark_pending(PendingTarget::Issue(id.clone()))?;
        Ok(id.clone())
    }

    /// Fold a deletion back in. A 404 also drops the local entry, since the
    /// issue is gone either way.
    pub fn apply_remove(&mut self, id: &IssueId, result: Result<(), TransportError>) -> StoreResult<()> {
        self.pending.remove(&PendingTarget::Issue(id.clone()));
        match result {
            Ok(()) => {
                self.remove_local(id);
                self.epoch += 1;
                tracing::info!("Deleted issue {}", id);
                self.notifier.success(MSG_DELETED);
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                self.remove_local(id);
                self.epoch += 1;
                self.report_failure("Deleting issue", &err);
                Err(err.into())
            }
            Err(err) => {
                self.report_failure("Deleting issue", &err);
                Err(err.into())
            }
        }
    }

    // ------------------------------------------------------------------
    // Remote operations: full round-trips
    // ------------------------------------------------------------------

    /// Replace the collection with the backend's listing.
    pub async fn load_all<R>(&mut self, repo: &R) -> StoreResult<usize>
    where
        R: IssueRepository + ?Sized,
    {
        let ticket = self.begin_load()?;
        let result = repo.list().await;
        match self.apply_load(ticket, result)? {
            LoadOutcome::Replaced(count) => Ok(count),
            LoadOutcome::Stale => Ok(self.issues.len()),
        }
    }

    /// Submit the current draft.
    pub async fn add_issue<R>(&mut self, repo: &R) -> StoreResult<()>
    where
        R: IssueRepository + ?Sized,
    {
        let draft = self.begin_add()?;
        let result = repo.create(&draft).await;
        self.apply_add(result)
    }

    /// Submit the working copy of the open edit.
    pub async fn commit_edit<R>(&mut self, repo: &R) -> StoreResult<()>
    where
        R: IssueRepository + ?Sized,
    {
        let submitted = self.begin_commit()?;
        let result = repo.update(&submitted.id, &submitted).await;
        self.apply_commit(submitted, result)
    }

    pub async fn remove_issue<R>(&mut self, repo: &R, id: &IssueId) -> StoreResult<()>
    where
        R: IssueRepository + ?Sized,
    {
        let id = self.begin_remove(id)?;
        let result = repo.delete(&id).await;
        self.apply_remove(&id, result)
    }
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}
