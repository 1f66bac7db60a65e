//! Decoder for the solver's line-oriented output.
//!
//! GRAMMAR
//! =======
//! ```text
//! VISITED <x>,<y>     zero or more, discovery order
//! PATH_START          at most one, ends the exploration trace
//! <x>,<y>             zero or more, path order, only after PATH_START
//! ```
//!
//! Blank lines are ignored and lines that fail to parse are dropped. Nothing
//! in a response body is fatal to the decoder.
//!
//! Coordinates on protocol lines are integers. A decimal component is
//! truncated toward zero (`1.9` reads as `1`), unlike query values, which
//! are rounded.

use std::fmt::Write;

use crate::{PATH_START, Point, VISITED};

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

/// One decoded protocol line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtocolEvent {
    Visited(Point),
    PathStart,
    PathPoint(Point),
}

/// Exploration trace and final route decoded from one response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedResult {
    pub visited: Vec<Point>,
    pub path: Vec<Point>,
}

impl ParsedResult {
    /// Collect events in stream order.
    #[must_use]
    pub fn from_events(events: impl IntoIterator<Item = ProtocolEvent>) -> Self {
        let mut out = Self::default();
        for event in events {
            match event {
                ProtocolEvent::Visited(p) => out.visited.push(p),
                ProtocolEvent::PathPoint(p) => out.path.push(p),
                ProtocolEvent::PathStart => {}
            }
        }
        out
    }

    /// An empty path means the solver found no route.
    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Serialize back into protocol text.
    #[must_use]
    pub fn to_protocol_text(&self) -> String {
        let mut out = String::new();
        for p in &self.visited {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{VISITED} {p}");
        }
        out.push_str(PATH_START);
        out.push('\n');
        for p in &self.path {
            let _ = writeln!(out, "{p}");
        }
        out
    }
}

/// Decode a full response body into events, in stream order.
#[must_use]
pub fn parse_events(body: &str) -> Vec<ProtocolEvent> {
    let mut events = Vec::new();
    let mut in_path = false;

    for line in body.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(rest) = line.strip_prefix(VISITED) {
            if let Some(p) = line_pair(rest) {
                events.push(ProtocolEvent::Visited(p));
            }
        } else if line == PATH_START {
            in_path = true;
            events.push(ProtocolEvent::PathStart);
        } else if in_path && line.contains(',') {
            if let Some(p) = line_pair(line) {
                events.push(ProtocolEvent::PathPoint(p));
            }
        }
    }

    events
}

fn line_pair(raw: &str) -> Option<Point> {
    let (x, y) = raw.split_once(',')?;
    Some(Point::new(line_coord(x)?, line_coord(y)?))
}

#[allow(clippy::cast_possible_truncation)]
fn line_coord(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i32>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?.trunc();
    if !v.is_finite() || v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
        return None;
    }
    Some(v as i32)
}

/// Decode a full response body.
#[must_use]
pub fn parse_response(body: &str) -> ParsedResult {
    ParsedResult::from_events(parse_events(body))
}
