//! Start/end selection state machine.
//!
//! ```text
//! Empty --point--> HasStart --point--> HasBoth --point--> HasStart
//!   ^                                     |                  (cleared, new start)
//!   +---------------- reset --------------+
//! ```
//!
//! A point chosen while both ends are set clears the pair and becomes the new
//! start in the same step. There is no terminal state.

use protocol::{Algorithm, Point, SolverRequest};

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// Observable state of a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    HasStart,
    HasBoth,
}

/// What a transition asks the host to do, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEffect {
    /// Both points were dropped; the view and any running animation must reset.
    Cleared,
    StartChosen(Point),
    EndChosen(Point),
}

/// Selected endpoints. `end` is never set while `start` is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    start: Option<Point>,
    end: Option<Point>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        match (self.start, self.end) {
            (None, _) => SelectionState::Empty,
            (Some(_), None) => SelectionState::HasStart,
            (Some(_), Some(_)) => SelectionState::HasBoth,
        }
    }

    /// Feed one chosen point through the machine.
    pub fn choose(&mut self, point: Point) -> Vec<SelectionEffect> {
        match self.state() {
            SelectionState::Empty => {
                self.start = Some(point);
                vec![SelectionEffect::StartChosen(point)]
            }
            SelectionState::HasStart => {
                self.end = Some(point);
                vec![SelectionEffect::EndChosen(point)]
            }
            SelectionState::HasBoth => {
                self.clear();
                self.start = Some(point);
                vec![SelectionEffect::Cleared, SelectionEffect::StartChosen(point)]
            }
        }
    }

    /// Drop both points regardless of state.
    pub fn reset(&mut self) -> SelectionEffect {
        self.clear();
        SelectionEffect::Cleared
    }

    /// A solve request, available only once both points are chosen.
    #[must_use]
    pub fn request(&self, algorithm: Algorithm) -> Option<SolverRequest> {
        Some(SolverRequest::new(self.start?, self.end?, algorithm))
    }

    fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}
