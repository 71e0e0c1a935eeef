//! Activation epochs for cancellable recurring timers.
//!
//! Each activation of the controller advances a shared epoch counter and
//! hands every task it spawns an [`EpochTicket`] pinned to the new value.
//! Tasks re-check their ticket after every wait: a callback that fires after
//! its activation was superseded or torn down sees a stale ticket and becomes
//! an inert no-op. This avoids any need to chase down queued callbacks at
//! cancellation time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared epoch counter owned by the controller.
#[derive(Debug, Default)]
pub struct ActivationEpoch {
    current: Arc<AtomicU64>,
}

impl ActivationEpoch {
    /// Create a new epoch counter at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate all outstanding tickets and start a new generation.
    pub fn advance(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Issue a ticket pinned to the current generation.
    pub fn ticket(&self) -> EpochTicket {
        EpochTicket {
            epoch: Arc::clone(&self.current),
            issued: self.current.load(Ordering::SeqCst),
        }
    }
}

/// A task's handle on the generation it was spawned in.
#[derive(Debug, Clone)]
pub struct EpochTicket {
    epoch: Arc<AtomicU64>,
    issued: u64,
}

impl EpochTicket {
    /// Whether the issuing generation is still the current one.
    pub fn is_live(&self) -> bool {
        self.epoch.load(Ordering::SeqCst) == self.issued
    }
}
