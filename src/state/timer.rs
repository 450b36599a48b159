//! Cancellable delayed callbacks.

use std::time::Duration;
use tokio::task::JoinHandle;

/// A single delayed callback that can be cancelled or replaced.
///
/// Scheduling a new callback cancels the previous one. Dropping the timer
/// cancels whatever is still pending.
#[derive(Debug, Default)]
pub struct Timer {
    handle: Option<JoinHandle<()>>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` after `delay` on the current tokio runtime.
    ///
    /// Returns `false` (and schedules nothing) when called outside a runtime.
    pub fn schedule<F>(&mut self, delay: Duration, callback: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No tokio runtime; timer not scheduled");
            return false;
        };
        self.handle = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));
        true
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True while a callback is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel();
    }
}
