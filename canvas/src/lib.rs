//! Browser client for the route viewer.
//!
//! This crate runs in the browser as WebAssembly. It turns pointer clicks on
//! the map canvas into a start/end selection, asks the server for a route,
//! decodes the solver's text stream and plays it back as a cancellable
//! animation. Everything except [`web`] is plain Rust and is tested natively
//! with fake surfaces, timers and path sources.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::ViewerCore`] controller and the [`engine::find_path`] pipeline |
//! | [`coords`] | Pointer/display to grid coordinate mapping |
//! | [`selection`] | Start/end selection state machine |
//! | [`session`] | Per-run animation session and its cancellation flag |
//! | [`animation`] | Two-phase cooperative playback of a parsed result |
//! | [`render`] | Drawing surface abstraction and render actions |
//! | [`overlay`] | Auxiliary marker CSV |
//! | [`consts`] | Colors, radii and timing constants |
//! | `web` | `wasm_bindgen` bindings (feature `web`) |

pub mod animation;
pub mod consts;
pub mod coords;
pub mod engine;
pub mod overlay;
pub mod render;
pub mod selection;
pub mod session;

#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
#[path = "fakes_test.rs"]
pub(crate) mod fakes;
