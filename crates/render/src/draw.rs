use fixture_common::{Color, MeshHandle};
use glam::{Mat4, Vec3};

/// Per-frame shader parameters shared by every draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    pub clear_color: Color,
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            clear_color: Color::BLACK,
        }
    }
}

impl FrameUniforms {
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// "Draw mesh M with world matrix W in diffuse colour C".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub mesh: MeshHandle,
    pub world: Mat4,
    pub color: Color,
}

/// Ordered list of draw commands for one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, mesh: MeshHandle, world: Mat4, color: Color) {
        self.commands.push(DrawCommand { mesh, world, color });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Everything a renderer needs to produce one image.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub uniforms: FrameUniforms,
    pub draws: DrawList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_list_preserves_order() {
        let mut list = DrawList::new();
        list.draw(MeshHandle(2), Mat4::IDENTITY, Color::RED);
        list.draw(MeshHandle(0), Mat4::IDENTITY, Color::WHITE);
        let meshes: Vec<_> = list.iter().map(|c| c.mesh).collect();
        assert_eq!(meshes, vec![MeshHandle(2), MeshHandle(0)]);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn view_projection_composes_projection_last() {
        let u = FrameUniforms {
            view: Mat4::from_translation(Vec3::X),
            projection: Mat4::from_scale(Vec3::splat(2.0)),
            ..FrameUniforms::default()
        };
        let p = u.view_projection().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(2.0, 0.0, 0.0));
    }
}
