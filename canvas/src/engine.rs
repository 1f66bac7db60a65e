//! Viewer controller and the find-path pipeline.
//!
//! [`ViewerCore`] owns every piece of mutable client state: the selection,
//! the current [`AnimationSession`] and the overlay points. Input handlers
//! return [`Action`]s for the host to draw immediately; [`find_path`] runs
//! the request → parse → animate sequence against injected collaborators so
//! it can be exercised without a browser.

use std::cell::RefCell;
use std::future::Future;

use protocol::{Algorithm, Point, SolverRequest, parse_response};

use crate::animation::{AnimationOutcome, AnimationPlan, Pause, Progress, animate};
use crate::coords::{CanvasRect, Resolution, ScreenPoint, to_grid};
use crate::overlay::parse_overlay_csv;
use crate::render::{Action, MarkerRole, RenderError, Surface};
use crate::selection::{Selection, SelectionEffect};
use crate::session::AnimationSession;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// User-facing failures of the find-path flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewerError {
    /// Start or end missing; no request is sent.
    #[error("Please select both start and end points first.")]
    InputIncomplete,
    /// Network failure or non-2xx response.
    #[error("Path request failed: {0}")]
    Transport(String),
    /// The solver answered but produced no route.
    #[error("No path found between the selected points.")]
    NoPathFound,
    #[error("Drawing failed: {0}")]
    Render(#[from] RenderError),
}

/// Where solver output comes from. The browser implementation calls `GET /path`.
pub trait PathSource {
    fn fetch(&self, request: &SolverRequest) -> impl Future<Output = Result<String, ViewerError>>;
}

/// Result of one [`find_path`] call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Another animation is still running; the request was dropped.
    Ignored,
    /// A newer selection or reset superseded this run.
    Cancelled,
    Completed(Progress),
}

impl SolveOutcome {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Cancelled => "cancelled",
            Self::Completed(_) => "completed",
        }
    }
}

// =============================================================
// Controller
// =============================================================

/// Client state, owned by a single controller for the page's lifetime.
#[derive(Debug, Default)]
pub struct ViewerCore {
    selection: Selection,
    session: Option<AnimationSession>,
    overlay: Vec<Point>,
    overlay_visible: bool,
}

impl ViewerCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Input events ---

    /// A point was chosen on the map, already in grid space.
    pub fn on_point(&mut self, point: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        for effect in self.selection.choose(point) {
            match effect {
                SelectionEffect::Cleared => {
                    self.cancel_animation();
                    self.push_base(&mut actions);
                }
                SelectionEffect::StartChosen(p) => actions.push(Action::DrawMarker(p, MarkerRole::Start)),
                SelectionEffect::EndChosen(p) => actions.push(Action::DrawMarker(p, MarkerRole::End)),
            }
        }
        actions
    }

    /// A pointer click in viewport coordinates.
    pub fn on_pointer(&mut self, pointer: ScreenPoint, rect: CanvasRect, resolution: Resolution) -> Vec<Action> {
        self.on_point(to_grid(pointer, rect, resolution))
    }

    /// Clear the selection and stop any running animation.
    pub fn reset(&mut self) -> Vec<Action> {
        self.selection.reset();
        self.cancel_animation();
        let mut actions = Vec::new();
        self.push_base(&mut actions);
        actions
    }

    // --- Overlay ---

    /// Replace the overlay points from CSV text. Returns how many were kept.
    pub fn load_overlay(&mut self, csv: &str) -> usize {
        self.overlay = parse_overlay_csv(csv);
        self.overlay.len()
    }

    /// Show or hide the overlay. Returns the actions to repaint the view;
    /// empty while an animation is drawing, which repaints on its own.
    pub fn set_overlay_visible(&mut self, visible: bool) -> Vec<Action> {
        self.overlay_visible = visible;
        if self.is_animating() { Vec::new() } else { self.restore_view() }
    }

    // --- Solve lifecycle ---

    /// Start a solve run.
    ///
    /// Returns `Ok(None)` while another animation is active; the caller must
    /// drop the request rather than overlap draws.
    ///
    /// # Errors
    ///
    /// [`ViewerError::InputIncomplete`] unless both points are selected.
    pub fn begin_solve(&mut self, algorithm: Algorithm) -> Result<Option<(SolverRequest, AnimationSession)>, ViewerError> {
        let request = self.selection.request(algorithm).ok_or(ViewerError::InputIncomplete)?;
        if self.is_animating() {
            return Ok(None);
        }
        let session = AnimationSession::new();
        self.session = Some(session.clone());
        Ok(Some((request, session)))
    }

    /// Whether a run is still drawing and has not been cancelled.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.session.as_ref().is_some_and(AnimationSession::is_active)
    }

    /// Invalidate the current session, if any.
    pub fn cancel_animation(&mut self) {
        if let Some(session) = &self.session {
            session.cancel();
        }
    }

    // --- Drawing ---

    /// Base image, overlay when visible, and the current markers.
    #[must_use]
    pub fn restore_view(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.push_base(&mut actions);
        if let Some(start) = self.selection.start() {
            actions.push(Action::DrawMarker(start, MarkerRole::Start));
        }
        if let Some(end) = self.selection.end() {
            actions.push(Action::DrawMarker(end, MarkerRole::End));
        }
        actions
    }

    /// Execute actions against a surface.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the surface.
    pub fn apply<S: Surface>(&self, surface: &mut S, actions: &[Action]) -> Result<(), RenderError> {
        for action in actions {
            match *action {
                Action::RestoreBase => surface.restore_base()?,
                Action::DrawOverlay => {
                    for &p in &self.overlay {
                        surface.draw_overlay_point(p)?;
                    }
                }
                Action::DrawMarker(at, role) => surface.draw_marker(at, role)?,
            }
        }
        Ok(())
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    fn push_base(&self, actions: &mut Vec<Action>) {
        actions.push(Action::RestoreBase);
        if self.overlay_visible && !self.overlay.is_empty() {
            actions.push(Action::DrawOverlay);
        }
    }
}

// =============================================================
// Pipeline
// =============================================================

/// Request a route for the current selection and animate it.
///
/// `core` is borrowed only between suspension points, so input handlers may
/// mutate it (and cancel this run) while the request or animation is pending.
/// On any failure other than cancellation the session is cancelled and the
/// base view is restored with markers intact.
///
/// # Errors
///
/// [`ViewerError::InputIncomplete`] before any request is sent;
/// [`ViewerError::Transport`] / [`ViewerError::NoPathFound`] /
/// [`ViewerError::Render`] afterwards.
pub async fn find_path<T, S, P>(
    core: &RefCell<ViewerCore>,
    source: &T,
    surface: &mut S,
    pause: &P,
    algorithm: Algorithm,
) -> Result<SolveOutcome, ViewerError>
where
    T: PathSource,
    S: Surface,
    P: Pause,
{
    let Some((request, session)) = core.borrow_mut().begin_solve(algorithm)? else {
        log::info!("find-path ignored: animation already running");
        return Ok(SolveOutcome::Ignored);
    };

    let result = run_session(core, source, surface, pause, &request, &session).await;
    session.finish();

    match result {
        Err(_) if session.is_cancelled() => Ok(SolveOutcome::Cancelled),
        Err(err) => {
            log::warn!("find-path failed: {err}");
            session.cancel();
            let core = core.borrow();
            if let Err(render) = core.apply(surface, &core.restore_view()) {
                log::error!("failed to restore view: {render}");
            }
            Err(err)
        }
        ok => ok,
    }
}

async fn run_session<T: PathSource, S: Surface, P: Pause>(
    core: &RefCell<ViewerCore>,
    source: &T,
    surface: &mut S,
    pause: &P,
    request: &SolverRequest,
    session: &AnimationSession,
) -> Result<SolveOutcome, ViewerError> {
    log::info!(
        "requesting path {} -> {} ({})",
        request.start,
        request.end,
        request.algorithm
    );
    let body = source.fetch(request).await?;
    if session.is_cancelled() {
        return Ok(SolveOutcome::Cancelled);
    }

    let parsed = parse_response(&body);
    if !parsed.has_path() {
        return Err(ViewerError::NoPathFound);
    }
    log::info!("path received: {} visited, {} points", parsed.visited.len(), parsed.path.len());

    {
        let core = core.borrow();
        core.apply(surface, &core.restore_view())?;
    }

    let plan = AnimationPlan { result: &parsed, algorithm: request.algorithm, start: request.start, end: request.end };
    match animate(surface, pause, session, &plan).await? {
        AnimationOutcome::Completed(progress) => Ok(SolveOutcome::Completed(progress)),
        AnimationOutcome::Cancelled(_) => Ok(SolveOutcome::Cancelled),
    }
}
