//! Deferred serve after a goal
//!
//! The pause runs on the driver's clock, not on accumulated step deltas. Each
//! pending serve remembers the match epoch it was scheduled in; a restart bumps
//! the epoch, so a serve that survives a restart is dropped when polled.

use serde::{Deserialize, Serialize};

use super::state::Side;

/// A serve waiting for its pause to elapse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingServe {
    /// Driver clock (ms) at which the serve fires
    pub due_ms: f64,
    /// Direction of the serve
    pub toward: Side,
    /// Match epoch at scheduling time
    pub epoch: u64,
}

/// Single-slot, cancellable serve timer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResetTimer {
    pending: Option<PendingServe>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the timer, replacing any serve already pending
    pub fn schedule(&mut self, due_ms: f64, toward: Side, epoch: u64) {
        if let Some(old) = self.pending.replace(PendingServe {
            due_ms,
            toward,
            epoch,
        }) {
            log::debug!("Replacing pending serve due at {:.0}ms", old.due_ms);
        }
    }

    /// Drop the pending serve, if any
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("Pending serve cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingServe> {
        self.pending.as_ref()
    }

    /// Fire the serve if it is due.
    ///
    /// Returns the serve direction at most once per schedule. A due serve from
    /// another epoch is discarded and yields `None`.
    pub fn poll(&mut self, now_ms: f64, current_epoch: u64) -> Option<Side> {
        let due = self.pending.is_some_and(|p| now_ms >= p.due_ms);
        if !due {
            return None;
        }

        let serve = self.pending.take()?;
        if serve.epoch != current_epoch {
            log::warn!(
                "Discarding stale serve from epoch {} (current {})",
                serve.epoch,
                current_epoch
            );
            return None;
        }
        Some(serve.toward)
    }
}
