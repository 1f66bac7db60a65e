//! Shared request model and solver text protocol.
//!
//! This crate owns the types exchanged between the browser client, the HTTP
//! server and the external solver process. The server uses it to validate
//! `/path` queries and build solver argv; the client uses it to build the
//! query string and decode the solver's line-oriented response.

pub mod parse;

pub use parse::{ParsedResult, ProtocolEvent, parse_events, parse_response};

use std::fmt;

use serde::Deserialize;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Marker line that ends the exploration trace.
pub const PATH_START: &str = "PATH_START";

/// Prefix token for exploration trace lines.
pub const VISITED: &str = "VISITED";

// =============================================================================
// POINT
// =============================================================================

/// A grid coordinate. Always grid-space once it leaves the client mapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parse one coordinate component.
///
/// Accepts integers and finite decimals; decimals are rounded to the nearest
/// integer, ties away from zero. Values outside `i32` are rejected.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_coord(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i32>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    if !v.is_finite() {
        return None;
    }
    let rounded = v.round();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return None;
    }
    Some(rounded as i32)
}

/// Parse an `x,y` pair. Both halves must be numeric.
#[must_use]
pub fn parse_pair(raw: &str) -> Option<Point> {
    let (x, y) = raw.split_once(',')?;
    Some(Point::new(parse_coord(x)?, parse_coord(y)?))
}

// =============================================================================
// ALGORITHM
// =============================================================================

/// Search strategy requested from the solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    AStar,
    #[default]
    Dijkstra,
}

impl Algorithm {
    /// Interpret a query value. Only the exact string `"astar"` selects A*.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("astar") => Self::AStar,
            _ => Self::Dijkstra,
        }
    }

    /// Whether `raw` names an algorithm explicitly rather than falling back.
    #[must_use]
    pub fn is_known(raw: &str) -> bool {
        matches!(raw, "astar" | "dijkstra")
    }

    /// Query-string spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
        }
    }

    /// Positional argv code understood by the solver.
    #[must_use]
    pub fn solver_code(self) -> &'static str {
        match self {
            Self::AStar => "0",
            Self::Dijkstra => "1",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// REQUEST
// =============================================================================

/// A fully specified solve request. Only built once both points exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverRequest {
    pub start: Point,
    pub end: Point,
    pub algorithm: Algorithm,
}

impl SolverRequest {
    #[must_use]
    pub fn new(start: Point, end: Point, algorithm: Algorithm) -> Self {
        Self { start, end, algorithm }
    }

    /// Solver argv: `startX startY endX endY algorithmCode`.
    #[must_use]
    pub fn solver_args(&self) -> [String; 5] {
        [
            self.start.x.to_string(),
            self.start.y.to_string(),
            self.end.x.to_string(),
            self.end.y.to_string(),
            self.algorithm.solver_code().to_owned(),
        ]
    }

    /// Query string for `GET /path` (without the leading `?`).
    #[must_use]
    pub fn query_string(&self) -> String {
        format!(
            "startX={}&startY={}&endX={}&endY={}&algorithm={}",
            self.start.x, self.start.y, self.end.x, self.end.y, self.algorithm
        )
    }
}

/// Error returned by [`PathQuery::to_request`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("missing query parameter `{0}`")]
    Missing(&'static str),
    #[error("query parameter `{field}` is not numeric: {value:?}")]
    NotNumeric { field: &'static str, value: String },
}

/// Raw `/path` query values as received over HTTP.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PathQuery {
    #[serde(rename = "startX")]
    pub start_x: Option<String>,
    #[serde(rename = "startY")]
    pub start_y: Option<String>,
    #[serde(rename = "endX")]
    pub end_x: Option<String>,
    #[serde(rename = "endY")]
    pub end_y: Option<String>,
    pub algorithm: Option<String>,
}

impl PathQuery {
    /// Validate the four coordinates and build a request.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Missing`] for an absent or empty coordinate and
    /// [`QueryError::NotNumeric`] for one that does not parse as a number.
    pub fn to_request(&self) -> Result<SolverRequest, QueryError> {
        let start = Point::new(
            required_coord("startX", self.start_x.as_deref())?,
            required_coord("startY", self.start_y.as_deref())?,
        );
        let end = Point::new(
            required_coord("endX", self.end_x.as_deref())?,
            required_coord("endY", self.end_y.as_deref())?,
        );
        Ok(SolverRequest::new(start, end, Algorithm::from_query(self.algorithm.as_deref())))
    }
}

fn required_coord(field: &'static str, raw: Option<&str>) -> Result<i32, QueryError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).ok_or(QueryError::Missing(field))?;
    parse_coord(raw).ok_or_else(|| QueryError::NotNumeric { field, value: raw.to_owned() })
}
