//! Transient notifications with auto-clear.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::timer::Timer;

/// How long a notification stays up unless superseded.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Invoked with a notification's generation once its lifetime elapses.
///
/// The receiver is expected to hand the generation back to
/// [`Notifier::expire`] on the thread that owns the store.
pub type ExpiryCallback = Arc<dyn Fn(u64) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Increases with every raised notification
    pub generation: u64,
}

/// Holds at most one notification and its auto-clear timer.
pub struct Notifier {
    current: Option<Notification>,
    generation: u64,
    ttl: Duration,
    on_expiry: Option<ExpiryCallback>,
    timer: Timer,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: None,
            generation: 0,
            ttl,
            on_expiry: None,
            timer: Timer::new(),
        }
    }

    /// Install the callback that auto-clear timers fire into.
    ///
    /// Without one, notifications stay until replaced or dismissed.
    pub fn set_expiry_callback(&mut self, callback: ExpiryCallback) {
        self.on_expiry = Some(callback);
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replace the current notification and restart the auto-clear timer.
    ///
    /// Returns the generation of the new notification.
    pub fn raise(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let message = message.into();
        tracing::debug!(generation, ?kind, "Notification: {}", message);

        self.current = Some(Notification {
            message,
            kind,
            generation,
        });

        match self.on_expiry.clone() {
            Some(callback) => {
                self.timer
                    .schedule(self.ttl, move || callback(generation));
            }
            None => self.timer.cancel(),
        }
        generation
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.raise(NotificationKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.raise(NotificationKind::Error, message)
    }

    /// Clear the notification if `generation` is still the one shown.
    ///
    /// Returns `true` when something was cleared. A stale generation is
    /// ignored so a late timer can never wipe a newer message.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(current) if current.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.timer.cancel();
        self.current = None;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("current", &self.current)
            .field("generation", &self.generation)
            .field("ttl", &self.ttl)
            .field("has_expiry_callback", &self.on_expiry.is_some())
            .finish()
    }
}
