use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Index of a mesh inside a mesh library.
///
/// Fixtures hold handles, never geometry; the library owns the buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeshHandle(pub u32);

impl MeshHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// World matrix: scale, then rotate, then translate.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn matrix_scales_before_translating() {
        let t = Transform::from_position(Vec3::new(0.0, -4.0, 12.0)).with_uniform_scale(6.0);
        let corner = t.matrix().transform_point3(Vec3::splat(0.5));
        assert_eq!(corner, Vec3::new(3.0, -1.0, 15.0));
    }

    #[test]
    fn mesh_handle_index() {
        assert_eq!(MeshHandle(3).index(), 3);
    }
}
