//! Messages delivered to the event loop by background tasks and timers.

use crate::error::TransportError;
use crate::models::{Issue, IssueId};
use crate::state::LoadTicket;

/// Outcome of work that finished off the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A listing round-trip finished
    IssuesLoaded {
        ticket: LoadTicket,
        result: Result<Vec<Issue>, TransportError>,
    },
    /// A create round-trip finished
    IssueCreated { result: Result<Issue, TransportError> },
    /// An update round-trip finished for `submitted`
    IssueUpdated {
        submitted: Issue,
        result: Result<Option<Issue>, TransportError>,
    },
    /// A delete round-trip finished
    IssueDeleted {
        id: IssueId,
        result: Result<(), TransportError>,
    },
    /// The auto-clear timer of a notification fired
    NotificationExpired(u64),
    /// The startup splash delay elapsed
    SplashElapsed,
}
