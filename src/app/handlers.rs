//! Message handling for the App.

use crate::state::LoadOutcome;

use super::{App, AppMessage, Focus};

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::IssuesLoaded { ticket, result } => {
                match self.store.apply_load(ticket, result) {
                    Ok(LoadOutcome::Stale) => self.request_load(),
                    Ok(LoadOutcome::Replaced(_)) => {}
                    Err(err) => tracing::debug!("Load not applied: {}", err),
                }
            }
            AppMessage::IssueCreated { result } => {
                if let Err(err) = self.store.apply_add(result) {
                    tracing::debug!("Add not applied: {}", err);
                }
            }
            AppMessage::IssueUpdated { submitted, result } => {
                if let Err(err) = self.store.apply_commit(submitted, result) {
                    tracing::debug!("Update not applied: {}", err);
                }
                if self.focus == Focus::EditForm && self.store.selection().is_none() {
                    self.focus = Focus::Table;
                }
            }
            AppMessage::IssueDeleted { id, result } => {
                if let Err(err) = self.store.apply_remove(&id, result) {
                    tracing::debug!("Delete not applied: {}", err);
                }
                if self.delete_armed.as_ref() == Some(&id) {
                    self.delete_armed = None;
                }
                if self.focus == Focus::EditForm && self.store.selection().is_none() {
                    self.focus = Focus::Table;
                }
            }
            AppMessage::NotificationExpired(generation) => {
                self.store.expire_notification(generation);
            }
            AppMessage::SplashElapsed => {
                self.splash_visible = false;
            }
        }
        self.clamp_selected_row();
        self.mark_dirty();
    }
}
