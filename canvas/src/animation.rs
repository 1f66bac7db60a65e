//! Two-phase cooperative playback of a solver result.
//!
//! 1. Exploration: one translucent dot per visited cell, suspending after
//!    every [`EXPLORE_BATCH`] dots.
//! 2. Route: one stroked segment per consecutive point pair, suspending after
//!    each segment.
//!
//! Every suspend point checks the session; a cancelled session stops the
//! whole run there, drawing nothing further. A completed run redraws the
//! start/end markers on top. A cancelled one leaves the canvas to whoever
//! cancelled it.

use std::future::Future;
use std::time::Duration;

use protocol::{Algorithm, ParsedResult, Point};

use crate::consts::{EXPLORE_BATCH, STEP_DELAY};
use crate::render::{MarkerRole, RenderError, Surface};
use crate::session::AnimationSession;

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// Cooperative suspension. Implementations yield to the event loop for
/// roughly `delay` and then resume.
pub trait Pause {
    fn pause(&self, delay: Duration) -> impl Future<Output = ()>;
}

/// What to play back.
#[derive(Debug, Clone, Copy)]
pub struct AnimationPlan<'a> {
    pub result: &'a ParsedResult,
    pub algorithm: Algorithm,
    pub start: Point,
    pub end: Point,
}

/// How far a run got.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub explored: usize,
    pub segments: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    Completed(Progress),
    Cancelled(Progress),
}

/// Play `plan` onto `surface`, yielding through `pause`.
///
/// # Errors
///
/// Returns the first [`RenderError`] raised by the surface.
pub async fn animate<S: Surface, P: Pause>(
    surface: &mut S,
    pause: &P,
    session: &AnimationSession,
    plan: &AnimationPlan<'_>,
) -> Result<AnimationOutcome, RenderError> {
    let mut progress = Progress::default();

    for &cell in &plan.result.visited {
        surface.draw_explored(cell, plan.algorithm)?;
        progress.explored += 1;
        if progress.explored % EXPLORE_BATCH == 0 && !suspend(pause, session).await {
            return Ok(AnimationOutcome::Cancelled(progress));
        }
    }

    // Flush a trailing partial batch before the route starts.
    if progress.explored % EXPLORE_BATCH != 0 && !suspend(pause, session).await {
        return Ok(AnimationOutcome::Cancelled(progress));
    }

    for pair in plan.result.path.windows(2) {
        surface.draw_segment(pair[0], pair[1])?;
        progress.segments += 1;
        if !suspend(pause, session).await {
            return Ok(AnimationOutcome::Cancelled(progress));
        }
    }

    surface.draw_marker(plan.start, MarkerRole::Start)?;
    surface.draw_marker(plan.end, MarkerRole::End)?;
    Ok(AnimationOutcome::Completed(progress))
}

/// Suspend once; `false` means the session was cancelled meanwhile.
async fn suspend<P: Pause>(pause: &P, session: &AnimationSession) -> bool {
    pause.pause(STEP_DELAY).await;
    !session.is_cancelled()
}
