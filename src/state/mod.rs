//! View-state: the issue collection, forms, search term and notifications.

pub mod notification;
pub mod store;
pub mod timer;

pub use notification::{
    ExpiryCallback, Notification, NotificationKind, Notifier, DEFAULT_NOTIFICATION_TTL,
};
pub use store::{IssueStore, LoadOutcome, LoadTicket, MSG_ADDED, MSG_DELETED, MSG_UPDATED};
pub use timer::Timer;
