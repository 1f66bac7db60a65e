//! Shared constants for the canvas crate.

use std::time::Duration;

// ── Markers ─────────────────────────────────────────────────────

/// Fill for the start marker ring.
pub const START_COLOR: &str = "#48bb78";

/// Fill for the end marker ring.
pub const END_COLOR: &str = "#f56565";

/// Inner dot of both markers.
pub const MARKER_CORE_COLOR: &str = "#ffffff";

pub const MARKER_RADIUS: f64 = 8.0;
pub const MARKER_CORE_RADIUS: f64 = 4.0;

// ── Exploration trace ───────────────────────────────────────────

pub const ASTAR_EXPLORED_COLOR: &str = "rgba(255, 0, 0, 0.2)";
pub const DIJKSTRA_EXPLORED_COLOR: &str = "rgba(59, 130, 246, 0.2)";
pub const EXPLORED_RADIUS: f64 = 3.0;

/// Explored markers drawn between suspend points.
pub const EXPLORE_BATCH: usize = 3;

// ── Route ───────────────────────────────────────────────────────

pub const PATH_COLOR: &str = "#FFD700";
pub const PATH_GLOW_COLOR: &str = "rgba(255, 215, 0, 0.5)";
pub const PATH_WIDTH: f64 = 3.0;
pub const PATH_GLOW_BLUR: f64 = 10.0;

// ── Overlay ─────────────────────────────────────────────────────

pub const OVERLAY_COLOR: &str = "rgba(255, 255, 255, 0.35)";
pub const OVERLAY_RADIUS: f64 = 1.5;

/// Background when the base image is not available.
pub const FALLBACK_BACKGROUND: &str = "#2d3748";

// ── Timing ──────────────────────────────────────────────────────

/// Pause at every suspend point.
pub const STEP_DELAY: Duration = Duration::from_millis(10);
