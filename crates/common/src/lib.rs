//! Shared types for the fixture scene.
//!
//! # Invariants
//! - Types here carry no behaviour beyond conversions; every crate may depend on them.

mod color;
mod types;

pub use color::Color;
pub use types::{MeshHandle, Transform};
