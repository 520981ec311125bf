use crate::Frame;
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer consumes a finished frame and produces output. It never
/// touches scene state; the composer owns the truth.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Debug text renderer for headless runs.
///
/// Produces one line per draw command: mesh handle, world-space origin and
/// diffuse colour. Used by the CLI and in tests of the draw order.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let u = &frame.uniforms;
        let mut out = String::new();
        let _ = writeln!(out, "=== Frame ({} draws) ===", frame.draws.len());
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2})",
            u.eye.x, u.eye.y, u.eye.z, u.target.x, u.target.y, u.target.z
        );
        for (i, cmd) in frame.draws.iter().enumerate() {
            let origin = cmd.world.w_axis;
            let [r, g, b] = cmd.color.rgb();
            let _ = writeln!(
                out,
                "  #{i:02} mesh={} origin=({:.2}, {:.2}, {:.2}) color=({:.2}, {:.2}, {:.2})",
                cmd.mesh.0, origin.x, origin.y, origin.z, r, g, b
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_common::{Color, MeshHandle};
    use glam::{Mat4, Vec3};

    #[test]
    fn debug_renderer_empty_frame() {
        let output = DebugTextRenderer::new().render(&Frame::default());
        assert!(output.contains("0 draws"));
        assert!(output.contains("Camera:"));
    }

    #[test]
    fn debug_renderer_lists_draws_in_order() {
        let mut frame = Frame::default();
        frame
            .draws
            .draw(MeshHandle(1), Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)), Color::RED);
        frame.draws.draw(MeshHandle(3), Mat4::IDENTITY, Color::WHITE);

        let output = DebugTextRenderer::new().render(&frame);
        assert!(output.contains("2 draws"));
        let first = output.find("mesh=1 origin=(1.00, 2.00, 3.00)").unwrap();
        let second = output.find("mesh=3").unwrap();
        assert!(first < second);
    }
}
