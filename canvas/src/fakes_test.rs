//! Recording fakes shared by the canvas unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::{Future, ready};
use std::time::Duration;

use protocol::{Algorithm, Point, SolverRequest};

use crate::animation::Pause;
use crate::engine::{PathSource, ViewerError};
use crate::render::{MarkerRole, RenderError, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Base,
    Overlay(Point),
    Marker(Point, MarkerRole),
    Explored(Point, Algorithm),
    Segment(Point, Point),
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
    pub fail_segments: bool,
}

impl Recorder {
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Segment(a, b) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    pub fn explored(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Explored(..))).count()
    }

    pub fn markers(&self) -> Vec<(Point, MarkerRole)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Marker(p, r) => Some((*p, *r)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn restore_base(&mut self) -> Result<(), RenderError> {
        self.ops.push(Op::Base);
        Ok(())
    }

    fn draw_marker(&mut self, at: Point, role: MarkerRole) -> Result<(), RenderError> {
        self.ops.push(Op::Marker(at, role));
        Ok(())
    }

    fn draw_overlay_point(&mut self, at: Point) -> Result<(), RenderError> {
        self.ops.push(Op::Overlay(at));
        Ok(())
    }

    fn draw_explored(&mut self, at: Point, algorithm: Algorithm) -> Result<(), RenderError> {
        self.ops.push(Op::Explored(at, algorithm));
        Ok(())
    }

    fn draw_segment(&mut self, from: Point, to: Point) -> Result<(), RenderError> {
        if self.fail_segments {
            return Err(RenderError("context lost".into()));
        }
        self.ops.push(Op::Segment(from, to));
        Ok(())
    }
}

/// Resolves immediately and runs a hook at the n-th pause (1-based).
pub struct HookPause<'a> {
    pub count: Cell<usize>,
    pub delays: RefCell<Vec<Duration>>,
    hook_at: Option<usize>,
    hook: Box<dyn Fn() + 'a>,
}

impl<'a> HookPause<'a> {
    pub fn instant() -> Self {
        Self { count: Cell::new(0), delays: RefCell::new(Vec::new()), hook_at: None, hook: Box::new(|| {}) }
    }

    pub fn at(n: usize, hook: impl Fn() + 'a) -> Self {
        Self { count: Cell::new(0), delays: RefCell::new(Vec::new()), hook_at: Some(n), hook: Box::new(hook) }
    }
}

impl Pause for HookPause<'_> {
    fn pause(&self, delay: Duration) -> impl Future<Output = ()> {
        let n = self.count.get() + 1;
        self.count.set(n);
        self.delays.borrow_mut().push(delay);
        if self.hook_at == Some(n) {
            (self.hook)();
        }
        ready(())
    }
}

/// Replays canned responses and records requests.
#[derive(Default)]
pub struct ScriptedSource {
    pub responses: RefCell<VecDeque<Result<String, ViewerError>>>,
    pub requests: RefCell<Vec<SolverRequest>>,
}

impl ScriptedSource {
    pub fn replying(body: &str) -> Self {
        let source = Self::default();
        source.responses.borrow_mut().push_back(Ok(body.to_owned()));
        source
    }

    pub fn failing(err: ViewerError) -> Self {
        let source = Self::default();
        source.responses.borrow_mut().push_back(Err(err));
        source
    }
}

impl PathSource for ScriptedSource {
    fn fetch(&self, request: &SolverRequest) -> impl Future<Output = Result<String, ViewerError>> {
        self.requests.borrow_mut().push(*request);
        let next = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ViewerError::Transport("no scripted response".into())));
        ready(next)
    }
}
