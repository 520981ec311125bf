//! Rendering Adapter: renderer-agnostic draw interface.
//!
//! # Invariants
//! - Renderers never mutate scene state; they consume a finished [`Frame`].
//! - Draw commands execute in the order they were pushed.
//! - Each command binds its own world matrix and diffuse colour; view and
//!   projection are shared by the whole frame.

mod draw;
mod renderer;

pub use draw::{DrawCommand, DrawList, Frame, FrameUniforms};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "fixture-render v0.1.0"
}
