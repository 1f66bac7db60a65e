//! Browser bindings.
//!
//! [`Viewer`] is the handle the page script holds. It wires the canvas,
//! `fetch` and `setTimeout` into the platform-free [`ViewerCore`] and
//! [`find_path`] pipeline.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use std::time::Duration;

use protocol::{Algorithm, Point, SolverRequest};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::animation::Pause;
use crate::consts::{
    EXPLORED_RADIUS, FALLBACK_BACKGROUND, MARKER_CORE_COLOR, MARKER_CORE_RADIUS, MARKER_RADIUS, OVERLAY_COLOR,
    OVERLAY_RADIUS, PATH_COLOR, PATH_GLOW_BLUR, PATH_GLOW_COLOR, PATH_WIDTH,
};
use crate::coords::{CanvasRect, Resolution, ScreenPoint};
use crate::engine::{PathSource, ViewerCore, ViewerError, find_path};
use crate::render::{Action, MarkerRole, RenderError, Surface, explored_color};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("logger already initialised");
    }
}

// =============================================================
// Surface
// =============================================================

/// 2D canvas context plus the base map image. Size is read from the canvas
/// on every repaint; the page resizes it once the image has loaded.
#[derive(Clone)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    base: HtmlImageElement,
}

fn js_err(err: JsValue) -> RenderError {
    RenderError(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl CanvasSurface {
    fn dot(&self, at: Point, radius: f64, color: &str) -> Result<(), RenderError> {
        self.ctx.begin_path();
        self.ctx
            .arc(f64::from(at.x), f64::from(at.y), radius, 0.0, TAU)
            .map_err(js_err)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn restore_base(&mut self) -> Result<(), RenderError> {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, width, height);
        if self.base.complete() && self.base.natural_width() > 0 {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(&self.base, 0.0, 0.0, width, height)
                .map_err(js_err)?;
        } else {
            self.ctx.set_fill_style_str(FALLBACK_BACKGROUND);
            self.ctx.fill_rect(0.0, 0.0, width, height);
        }
        Ok(())
    }

    fn draw_marker(&mut self, at: Point, role: MarkerRole) -> Result<(), RenderError> {
        self.dot(at, MARKER_RADIUS, role.color())?;
        self.dot(at, MARKER_CORE_RADIUS, MARKER_CORE_COLOR)
    }

    fn draw_overlay_point(&mut self, at: Point) -> Result<(), RenderError> {
        self.dot(at, OVERLAY_RADIUS, OVERLAY_COLOR)
    }

    fn draw_explored(&mut self, at: Point, algorithm: Algorithm) -> Result<(), RenderError> {
        self.dot(at, EXPLORED_RADIUS, explored_color(algorithm))
    }

    fn draw_segment(&mut self, from: Point, to: Point) -> Result<(), RenderError> {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_stroke_style_str(PATH_COLOR);
        ctx.set_line_width(PATH_WIDTH);
        ctx.set_line_cap("round");
        ctx.set_shadow_color(PATH_GLOW_COLOR);
        ctx.set_shadow_blur(PATH_GLOW_BLUR);
        ctx.begin_path();
        ctx.move_to(f64::from(from.x), f64::from(from.y));
        ctx.line_to(f64::from(to.x), f64::from(to.y));
        ctx.stroke();
        ctx.restore();
        Ok(())
    }
}

// =============================================================
// Timer and transport
// =============================================================

struct TimerPause;

impl Pause for TimerPause {
    async fn pause(&self, delay: Duration) {
        gloo_timers::future::sleep(delay).await;
    }
}

struct HttpPathSource;

impl PathSource for HttpPathSource {
    async fn fetch(&self, request: &SolverRequest) -> Result<String, ViewerError> {
        let url = format!("/path?{}", request.query_string());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ViewerError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ViewerError::Transport(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(ViewerError::Transport(format!("HTTP {status}: {}", body.trim())));
        }
        Ok(body)
    }
}

// =============================================================
// Viewer
// =============================================================

#[wasm_bindgen]
pub struct Viewer {
    canvas: HtmlCanvasElement,
    core: Rc<RefCell<ViewerCore>>,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl Viewer {
    /// Attach to a canvas whose internal size matches the map resolution.
    /// `base` may still be loading; call [`Viewer::redraw`] once it is.
    ///
    /// # Errors
    ///
    /// Fails when the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, base: HtmlImageElement) -> Result<Viewer, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let surface = CanvasSurface { canvas: canvas.clone(), ctx, base };
        Ok(Self { canvas, core: Rc::new(RefCell::new(ViewerCore::new())), surface })
    }

    /// Handle a click given in viewport coordinates.
    ///
    /// # Errors
    ///
    /// Propagates drawing failures.
    pub fn on_click(&mut self, client_x: f64, client_y: f64) -> Result<(), JsValue> {
        let dom = self.canvas.get_bounding_client_rect();
        let rect = CanvasRect { left: dom.left(), top: dom.top(), width: dom.width(), height: dom.height() };
        let resolution = Resolution { width: self.canvas.width(), height: self.canvas.height() };
        let actions = self.core.borrow_mut().on_pointer(ScreenPoint::new(client_x, client_y), rect, resolution);
        self.apply(&actions)
    }

    /// # Errors
    ///
    /// Propagates drawing failures.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        let actions = self.core.borrow_mut().reset();
        self.apply(&actions)
    }

    /// Repaint base, overlay and markers, e.g. once the map image loads.
    ///
    /// # Errors
    ///
    /// Propagates drawing failures.
    pub fn redraw(&mut self) -> Result<(), JsValue> {
        if self.core.borrow().is_animating() {
            return Ok(());
        }
        let actions = self.core.borrow().restore_view();
        self.apply(&actions)
    }

    /// Replace the overlay points from CSV text; returns how many parsed.
    pub fn load_overlay(&mut self, csv: &str) -> usize {
        let count = self.core.borrow_mut().load_overlay(csv);
        log::info!("overlay loaded: {count} points");
        count
    }

    /// # Errors
    ///
    /// Propagates drawing failures.
    pub fn set_overlay_visible(&mut self, visible: bool) -> Result<(), JsValue> {
        let actions = self.core.borrow_mut().set_overlay_visible(visible);
        self.apply(&actions)
    }

    pub fn is_animating(&self) -> bool {
        self.core.borrow().is_animating()
    }

    /// Request and animate a route. Resolves to `"completed"`, `"cancelled"`
    /// or `"ignored"`; rejects with a user-facing message.
    pub fn find_path(&self, algorithm: &str) -> js_sys::Promise {
        let algorithm = Algorithm::from_query(Some(algorithm));
        let core = Rc::clone(&self.core);
        let mut surface = self.surface.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            match find_path(&core, &HttpPathSource, &mut surface, &TimerPause, algorithm).await {
                Ok(outcome) => Ok(JsValue::from_str(outcome.label())),
                Err(err) => Err(JsValue::from_str(&err.to_string())),
            }
        })
    }
}

impl Viewer {
    fn apply(&mut self, actions: &[Action]) -> Result<(), JsValue> {
        self.core
            .borrow()
            .apply(&mut self.surface, actions)
            .map_err(|e| JsValue::from_str(&e.0))
    }
}
