//! Bounded admission for solver processes.
//!
//! DESIGN
//! ======
//! A counting semaphore caps how many solver children run at once. Requests
//! beyond the cap queue on the semaphore (FIFO, tokio's fairness guarantee)
//! for at most `queue_timeout`, after which they are rejected so a burst
//! cannot pile up unbounded waiters.
//!
//! On shutdown the semaphore is closed: queued and future waiters fail with
//! [`SlotError::Closed`] while running children finish.
//!
//! TRADE-OFFS
//! ==========
//! The cap is process-wide, not per client. A single noisy client can occupy
//! every slot; the queue timeout keeps the damage to latency, not memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("all {capacity} solver slots busy for {waited_secs}s")]
    QueueTimeout { capacity: usize, waited_secs: u64 },
    #[error("server is shutting down")]
    Closed,
}

// =============================================================================
// SOLVER SLOTS
// =============================================================================

#[derive(Clone)]
pub struct SolverSlots {
    semaphore: Arc<Semaphore>,
    capacity: usize,
    queue_timeout: Duration,
}

impl SolverSlots {
    #[must_use]
    pub fn new(capacity: usize, queue_timeout: Duration) -> Self {
        let capacity = capacity.max(1);
        Self { semaphore: Arc::new(Semaphore::new(capacity)), capacity, queue_timeout }
    }

    /// Wait for a free slot. The slot is released when the permit drops.
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit, SlotError> {
        let waiting = Arc::clone(&self.semaphore).acquire_owned();
        match tokio::time::timeout(self.queue_timeout, waiting).await {
            Ok(Ok(permit)) => Ok(permit),
            Ok(Err(_)) => Err(SlotError::Closed),
            Err(_) => Err(SlotError::QueueTimeout {
                capacity: self.capacity,
                waited_secs: self.queue_timeout.as_secs(),
            }),
        }
    }

    /// Refuse all further admissions. Permits already held stay valid.
    pub fn close(&self) {
        self.semaphore.close();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots not currently held by a running solver.
    #[must_use]
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "limiter_test.rs"]
mod tests;
