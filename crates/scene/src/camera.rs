use crate::CameraConfig;
use glam::{Mat4, Vec3};

/// Camera rig orbiting a target at a fixed distance and height.
///
/// Camera motion is derived each frame from the orbit angle and the target
/// position; nothing else is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub angle: f32,
    pub rotation_speed: f32,
    pub distance: f32,
    pub height: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl OrbitCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            angle: config.angle,
            rotation_speed: config.rotation_speed,
            distance: config.distance,
            height: config.height,
            fov: config.fov,
            aspect: config.aspect,
            near: config.near,
            far: config.far,
        }
    }

    /// Rotate around the target; `direction` is a signed unit rate.
    pub fn orbit(&mut self, direction: f32, dt: f32) {
        self.angle += direction * self.rotation_speed * dt;
    }

    /// Eye position relative to the target.
    pub fn offset(&self) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        Vec3::new(cos * self.distance, self.height, sin * self.distance)
    }

    pub fn eye(&self, target: Vec3) -> Vec3 {
        target + self.offset()
    }

    pub fn view_matrix(&self, target: Vec3) -> Mat4 {
        Mat4::look_at_rh(self.eye(target), target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_sits_behind_target() {
        let cam = OrbitCamera::default();
        let eye = cam.eye(Vec3::ZERO);
        assert!(eye.x.abs() < 1e-5);
        assert_eq!(eye.y, 3.0);
        assert!((eye.z + 7.0).abs() < 1e-5);
        let vp = cam.projection_matrix() * cam.view_matrix(Vec3::ZERO);
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn target_projects_to_screen_centre() {
        let cam = OrbitCamera::default();
        let target = Vec3::new(2.0, 1.0, 5.0);
        let vp = cam.projection_matrix() * cam.view_matrix(target);
        let ndc = vp.project_point3(target);
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
    }

    #[test]
    fn orbit_changes_angle_by_speed() {
        let mut cam = OrbitCamera::default();
        let start = cam.angle;
        cam.orbit(1.0, 0.1);
        assert!((cam.angle - start - 0.5).abs() < 1e-6);
        cam.orbit(-1.0, 0.1);
        assert!((cam.angle - start).abs() < 1e-6);
    }

    #[test]
    fn distance_is_preserved_while_orbiting() {
        let mut cam = OrbitCamera::default();
        for _ in 0..20 {
            cam.orbit(1.0, 0.07);
            let o = cam.offset();
            assert!((Vec3::new(o.x, 0.0, o.z).length() - 7.0).abs() < 1e-4);
        }
    }

    #[test]
    fn aspect_ignores_zero_height() {
        let mut cam = OrbitCamera::default();
        cam.set_aspect(800, 0);
        assert_eq!(cam.aspect, 800.0);
    }
}
