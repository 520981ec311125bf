//! Primitive mesh generators and the shared mesh library.
//!
//! # Invariants
//! - Generators are deterministic: the same parameters produce identical buffers.
//! - Mesh data is immutable once inserted into a [`MeshLibrary`].
//! - Index buffers are triangle lists.

mod data;
mod library;
pub mod primitives;

pub use data::{MeshData, MeshError, Vertex};
pub use library::{MeshLibrary, PrimitiveParams, StandardMeshes};
