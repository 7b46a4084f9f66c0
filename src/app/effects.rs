//! Delayed one-shot effects.
//!
//! Commands such as `book` reply immediately and act later. The delay runs
//! as a spawned sleep that completes through the application event channel,
//! and the returned handle aborts the task on drop, so replacing or
//! discarding a pending effect is the same as cancelling it.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::input::AppEvent;

/// A pending delayed event. Dropping the handle cancels delivery.
pub struct ScheduledEffect {
    handle: JoinHandle<()>,
}

impl ScheduledEffect {
    /// Deliver `event` on `tx` after `delay`.
    pub fn schedule(tx: UnboundedSender<AppEvent>, delay: Duration, event: AppEvent) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        });
        Self { handle }
    }

    /// Cancel explicitly. Equivalent to dropping the handle.
    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for ScheduledEffect {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
