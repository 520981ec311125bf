use crate::{MeshData, MeshError, primitives};
use fixture_common::MeshHandle;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Arena of immutable meshes addressed by [`MeshHandle`].
///
/// Handles stay valid for the lifetime of the library; meshes are never
/// removed or mutated after insertion.
#[derive(Debug, Clone, Default)]
pub struct MeshLibrary {
    meshes: Vec<MeshData>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `mesh` and return its handle.
    pub fn insert(&mut self, mesh: MeshData) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len() as u32);
        tracing::debug!(
            handle = handle.0,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "registered mesh"
        );
        self.meshes.push(mesh);
        handle
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&MeshData> {
        self.meshes.get(handle.index())
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// All meshes in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (MeshHandle, &MeshData)> {
        self.meshes
            .iter()
            .enumerate()
            .map(|(i, m)| (MeshHandle(i as u32), m))
    }
}

/// Construction parameters for the four scene primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveParams {
    pub sphere_diameter: f32,
    pub sphere_tessellation: u32,
    pub cube_size: f32,
    pub cylinder_height: f32,
    pub cylinder_diameter: f32,
    pub cylinder_tessellation: u32,
    pub pyramid_apex: Vec3,
    pub pyramid_base: Vec<Vec3>,
}

impl Default for PrimitiveParams {
    fn default() -> Self {
        Self {
            sphere_diameter: 1.0,
            sphere_tessellation: primitives::SPHERE_TESSELLATION,
            cube_size: 1.0,
            cylinder_height: 1.0,
            cylinder_diameter: 1.0,
            cylinder_tessellation: primitives::CYLINDER_TESSELLATION,
            pyramid_apex: Vec3::Y,
            pyramid_base: vec![
                Vec3::new(-1.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(-1.0, 0.0, 1.0),
            ],
        }
    }
}

/// Handles to the primitives every scene uses, generated once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardMeshes {
    pub sphere: MeshHandle,
    pub cube: MeshHandle,
    pub cylinder: MeshHandle,
    pub pyramid: MeshHandle,
}

impl StandardMeshes {
    pub fn generate(library: &mut MeshLibrary, params: &PrimitiveParams) -> Result<Self, MeshError> {
        let sphere = primitives::sphere(params.sphere_diameter, params.sphere_tessellation)?;
        let cube = primitives::cube(params.cube_size)?;
        let cylinder = primitives::cylinder(
            params.cylinder_height,
            params.cylinder_diameter,
            params.cylinder_tessellation,
        )?;
        let pyramid = primitives::pyramid(params.pyramid_apex, &params.pyramid_base)?;

        Ok(Self {
            sphere: library.insert(sphere),
            cube: library.insert(cube),
            cylinder: library.insert(cylinder),
            pyramid: library.insert(pyramid),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_sequential() {
        let mut lib = MeshLibrary::new();
        let a = lib.insert(primitives::cube(1.0).unwrap());
        let b = lib.insert(primitives::cube(2.0).unwrap());
        assert_eq!(a, MeshHandle(0));
        assert_eq!(b, MeshHandle(1));
        assert_eq!(lib.len(), 2);
        assert!(lib.get(MeshHandle(2)).is_none());
    }

    #[test]
    fn standard_meshes_generate_all_four() {
        let mut lib = MeshLibrary::new();
        let std_meshes = StandardMeshes::generate(&mut lib, &PrimitiveParams::default()).unwrap();
        assert_eq!(lib.len(), 4);
        assert_eq!(lib.get(std_meshes.sphere).unwrap().triangle_count(), 960);
        assert_eq!(lib.get(std_meshes.cube).unwrap().triangle_count(), 12);
        assert_eq!(lib.get(std_meshes.pyramid).unwrap().triangle_count(), 6);
        let handles: Vec<_> = lib.iter().map(|(h, _)| h).collect();
        assert_eq!(
            handles,
            vec![std_meshes.sphere, std_meshes.cube, std_meshes.cylinder, std_meshes.pyramid]
        );
    }

    #[test]
    fn bad_params_propagate_error() {
        let mut lib = MeshLibrary::new();
        let params = PrimitiveParams {
            pyramid_base: vec![Vec3::ZERO],
            ..PrimitiveParams::default()
        };
        assert_eq!(
            StandardMeshes::generate(&mut lib, &params),
            Err(MeshError::PyramidBase(1))
        );
    }
}
