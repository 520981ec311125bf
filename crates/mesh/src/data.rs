use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// GPU-ready vertex: position and normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Errors from mesh generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("tessellation must be within {min}..={max}, got {got}")]
    Tessellation { min: u32, max: u32, got: u32 },
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("pyramid base needs at least 3 points, got {0}")]
    PyramidBase(usize),
    #[error("non-finite vertex in pyramid definition")]
    NonFinitePoint,
}

/// Static triangle-list geometry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        self.vertices.push(Vertex::new(position, normal));
        (self.vertices.len() - 1) as u32
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Axis-aligned bounds of all vertex positions. `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position();
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            let p = v.position();
            (lo.min(p), hi.max(p))
        }))
    }

    /// Area of triangle `i`, used to check for degenerate faces.
    pub fn triangle_area(&self, i: usize) -> f32 {
        let t = &self.indices[i * 3..i * 3 + 3];
        let a = self.vertices[t[0] as usize].position();
        let b = self.vertices[t[1] as usize].position();
        let c = self.vertices[t[2] as usize].position();
        (b - a).cross(c - a).length() * 0.5
    }
}
