// src/cancellation.rs
//! Cooperative cancellation for orchestrated operations
//!
//! A token is shared between whoever may cancel and the orchestrator that
//! polls it at fixed checkpoints. Cancelling never interrupts a cipher pass
//! already running; the result is discarded at the next checkpoint.
//!
//! A cancel may carry `key → value` data describing why. The consumer turns
//! that data into a JSON failure body.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    data: Arc<Mutex<BTreeMap<String, String>>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation without any causal data
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Request cancellation and record why
    pub fn cancel_with_data<I, K, V>(&self, data: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        {
            let mut slot = self.data.lock().unwrap_or_else(PoisonError::into_inner);
            slot.extend(data.into_iter().map(|(k, v)| (k.into(), v.into())));
        }
        self.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Snapshot of the data recorded with the cancel request
    pub fn data(&self) -> BTreeMap<String, String> {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
