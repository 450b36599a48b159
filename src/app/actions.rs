//! Remote actions: start a round-trip on a background task and report the
//! outcome back through the message channel.

use std::sync::Arc;

use crate::error::StoreError;
use crate::models::IssueId;

use super::{App, AppMessage};

impl App {
    /// Reload the collection from the backend.
    pub fn request_load(&mut self) {
        match self.store.begin_load() {
            Ok(ticket) => {
                let repo = Arc::clone(&self.repo);
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let result = repo.list().await;
                    let _ = tx.send(AppMessage::IssuesLoaded { ticket, result });
                });
            }
            Err(err) => self.report_rejection(err),
        }
        self.mark_dirty();
    }

    /// Submit the add form.
    pub fn request_add(&mut self) {
        match self.store.begin_add() {
            Ok(draft) => {
                let repo = Arc::clone(&self.repo);
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let result = repo.create(&draft).await;
                    let _ = tx.send(AppMessage::IssueCreated { result });
                });
            }
            Err(err) => self.report_rejection(err),
        }
        self.mark_dirty();
    }

    /// Submit the edit dialog.
    pub fn request_commit(&mut self) {
        match self.store.begin_commit() {
            Ok(submitted) => {
                let repo = Arc::clone(&self.repo);
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let result = repo.update(&submitted.id, &submitted).await;
                    let _ = tx.send(AppMessage::IssueUpdated { submitted, result });
                });
            }
            Err(err) => self.report_rejection(err),
        }
        self.mark_dirty();
    }

    pub fn request_remove(&mut self, id: &IssueId) {
        match self.store.begin_remove(id) {
            Ok(id) => {
                let repo = Arc::clone(&self.repo);
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let result = repo.delete(&id).await;
                    let _ = tx.send(AppMessage::IssueDeleted { id, result });
                });
            }
            Err(err) => self.report_rejection(err),
        }
        self.mark_dirty();
    }

    /// Surface a locally rejected request. Duplicate submits are dropped quietly.
    pub(crate) fn report_rejection(&mut self, err: StoreError) {
        match err {
            StoreError::AlreadyPending(target) => {
                tracing::debug!("Ignored duplicate request for {}", target);
            }
            other => {
                tracing::debug!("Request rejected: {}", other);
                self.store.notify_error(other.user_message());
            }
        }
    }
}
