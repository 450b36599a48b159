//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which UI component has focus
//! - [`AppMessage`] - Messages for async communication
//!
//! Remote calls run on spawned tasks and report back through
//! [`AppMessage`], so the event loop never blocks on the network.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, FormTarget};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::models::{IssueField, IssueId};
use crate::repository::IssueRepository;
use crate::state::{IssueStore, Timer};
use crate::ui::theme::ThemeMode;

/// Main application state.
pub struct App {
    /// Issues, forms, search term and notifications
    pub store: IssueStore,
    repo: Arc<dyn IssueRepository>,
    /// Sender handed to background tasks and timers
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop at startup
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub focus: Focus,
    /// Row cursor into the filtered table
    pub selected_row: usize,
    /// Focused field of the add form
    pub add_field: IssueField,
    /// Focused field of the edit dialog
    pub edit_field: IssueField,
    pub theme: ThemeMode,
    pub splash_visible: bool,
    splash_timer: Timer,
    splash_delay: Duration,
    /// Issue awaiting a second `d` press
    pub delete_armed: Option<IssueId>,
    /// Base URL shown in the footer
    pub api_url: String,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(repo: Arc<dyn IssueRepository>, config: &Config) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let expiry_tx = message_tx.clone();
        let store = IssueStore::new(config.notification_ttl).with_expiry_callback(Arc::new(
            move |generation| {
                let _ = expiry_tx.send(AppMessage::NotificationExpired(generation));
            },
        ));

        Self {
            store,
            repo,
            message_tx,
            message_rx: Some(message_rx),
            focus: Focus::default(),
            selected_row: 0,
            add_field: IssueField::Title,
            edit_field: IssueField::Title,
            theme: config.theme,
            splash_visible: !config.splash_delay.is_zero(),
            splash_timer: Timer::new(),
            splash_delay: config.splash_delay,
            delete_armed: None,
            api_url: config.api_url.clone(),
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Kick off the initial load and the splash timer.
    ///
    /// Must run inside a tokio runtime.
    pub fn start(&mut self) {
        self.request_load();
        if self.splash_visible {
            let tx = self.message_tx.clone();
            let scheduled = self.splash_timer.schedule(self.splash_delay, move || {
                let _ = tx.send(AppMessage::SplashElapsed);
            });
            if !scheduled {
                self.splash_visible = false;
            }
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    pub fn dismiss_splash(&mut self) {
        self.splash_timer.cancel();
        self.splash_visible = false;
        self.mark_dirty();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!("Theme switched to {:?}", self.theme);
        self.mark_dirty();
    }

    /// Id of the issue under the table cursor.
    pub fn selected_issue_id(&self) -> Option<IssueId> {
        self.store
            .filtered()
            .get(self.selected_row)
            .map(|issue| issue.id.clone())
    }

    pub fn move_selection_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let len = self.store.filtered().len();
        if self.selected_row + 1 < len {
            self.selected_row += 1;
        }
    }

    /// Keep the cursor inside the filtered rows after the collection changes.
    pub fn clamp_selected_row(&mut self) {
        let len = self.store.filtered().len();
        self.selected_row = self.selected_row.min(len.saturating_sub(1));
    }
}
