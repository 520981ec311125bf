//! wgpu render backend for the fixture scene.
//!
//! Uploads every mesh in a [`fixture_mesh::MeshLibrary`] once, then executes
//! each frame's draw list with one flat-coloured instance per draw command.
//!
//! # Invariants
//! - Renderer never mutates scene state.
//! - Draws execute in draw-list order.
//! - Face culling is disabled; winding is not significant.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
