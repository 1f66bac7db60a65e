//! Drawing surface abstraction.
//!
//! Everything that puts pixels on the map goes through [`Surface`]. The
//! browser implementation lives in `web`; tests use a recording fake. Draw
//! calls are synchronous and never suspend, so cancellation can only land
//! between them.

use protocol::{Algorithm, Point};

use crate::consts::{ASTAR_EXPLORED_COLOR, DIJKSTRA_EXPLORED_COLOR, END_COLOR, START_COLOR};

/// Error surfaced by a drawing backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct RenderError(pub String);

/// Which endpoint a marker represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Start,
    End,
}

impl MarkerRole {
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Start => START_COLOR,
            Self::End => END_COLOR,
        }
    }
}

/// Translucent fill for an explored cell, by algorithm.
#[must_use]
pub fn explored_color(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::AStar => ASTAR_EXPLORED_COLOR,
        Algorithm::Dijkstra => DIJKSTRA_EXPLORED_COLOR,
    }
}

/// A 2D target the viewer draws on.
pub trait Surface {
    /// Repaint the base map, discarding everything drawn on top.
    fn restore_base(&mut self) -> Result<(), RenderError>;
    fn draw_marker(&mut self, at: Point, role: MarkerRole) -> Result<(), RenderError>;
    fn draw_overlay_point(&mut self, at: Point) -> Result<(), RenderError>;
    fn draw_explored(&mut self, at: Point, algorithm: Algorithm) -> Result<(), RenderError>;
    fn draw_segment(&mut self, from: Point, to: Point) -> Result<(), RenderError>;
}

/// Immediate draw instructions produced by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RestoreBase,
    DrawOverlay,
    DrawMarker(Point, MarkerRole),
}
