//! Per-run animation session.
//!
//! One session is created for each solve request and shared between the
//! controller (which may cancel it) and the running animation (which checks
//! it at every suspend point). Everything runs on the browser's single
//! thread, so the flags are plain `Cell`s behind an `Rc`.

use std::cell::Cell;
use std::rc::Rc;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Debug, Default)]
struct SessionFlags {
    cancelled: Cell<bool>,
    finished: Cell<bool>,
}

/// Shared handle to one animation run. Clones observe the same flags.
#[derive(Debug, Clone, Default)]
pub struct AnimationSession {
    flags: Rc<SessionFlags>,
}

impl AnimationSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the run to stop at its next suspend point.
    pub fn cancel(&self) {
        self.flags.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flags.cancelled.get()
    }

    /// Called by the run itself once it has returned, for any reason.
    pub fn finish(&self) {
        self.flags.finished.set(true);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.flags.finished.get()
    }

    /// Still drawing and not asked to stop.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_finished() && !self.is_cancelled()
    }

    /// Whether two handles refer to the same run.
    #[must_use]
    pub fn same_run(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.flags, &other.flags)
    }
}
