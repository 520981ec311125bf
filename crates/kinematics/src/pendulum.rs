use crate::{BoundedOscillator, Direction, Fixture, KinematicsError};
use fixture_common::{Color, MeshHandle};
use fixture_render::DrawList;
use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_4;

/// Motion layered on top of the swing: the pivot drifts and the swing plane spins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryMotion {
    /// Pivot velocity in world units per second.
    pub drift: Vec3,
    /// Yaw rate of the swing plane in radians per second.
    pub spin_rate: f32,
}

impl SecondaryMotion {
    fn is_finite(&self) -> bool {
        self.drift.is_finite() && self.spin_rate.is_finite()
    }
}

/// Construction parameters for a [`Pendulum`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumParams {
    pub pivot: Vec3,
    /// Yaw of the swing plane around +Y, in radians.
    pub rotation_angle: f32,
    /// Initial swing angle, clamped into `[min_angle, max_angle]`.
    pub angle: f32,
    pub min_angle: f32,
    pub max_angle: f32,
    pub length: f32,
    /// Radians per second.
    pub angular_speed: f32,
    pub arm_color: Color,
    pub bob_color: Color,
    pub bob_radius: f32,
    pub arm_thickness: f32,
    pub secondary_motion: Option<SecondaryMotion>,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            pivot: Vec3::new(0.0, 11.0, 3.0),
            rotation_angle: 0.0,
            angle: FRAC_PI_4,
            min_angle: -FRAC_PI_4,
            max_angle: FRAC_PI_4,
            length: 10.0,
            angular_speed: 3.0,
            arm_color: Color::DARK_GREEN,
            bob_color: Color::YELLOW,
            bob_radius: 0.5,
            arm_thickness: 0.2,
            secondary_motion: None,
        }
    }
}

/// An arm hanging from a pivot, swinging between two angles.
///
/// The swing happens in the plane spanned by +Y and the yawed +X axis; the
/// bob sits at the far end of the arm. No gravity is simulated: the angle
/// follows the same bounce law as the elevator.
#[derive(Debug, Clone)]
pub struct Pendulum {
    pivot: Vec3,
    rotation_angle: f32,
    swing: BoundedOscillator,
    length: f32,
    arm_color: Color,
    bob_color: Color,
    bob_radius: f32,
    arm_thickness: f32,
    secondary: Option<SecondaryMotion>,
    arm_mesh: MeshHandle,
    bob_mesh: MeshHandle,
}

impl Pendulum {
    pub fn new(
        params: &PendulumParams,
        arm_mesh: MeshHandle,
        bob_mesh: MeshHandle,
    ) -> Result<Self, KinematicsError> {
        if !params.pivot.is_finite() || !params.rotation_angle.is_finite() {
            return Err(KinematicsError::NonFinite("pendulum placement"));
        }
        if !(params.length.is_finite() && params.length > 0.0) {
            return Err(KinematicsError::NonPositiveLength(params.length));
        }
        for (name, value) in [
            ("bob radius", params.bob_radius),
            ("arm thickness", params.arm_thickness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(KinematicsError::NonPositiveSize { name, value });
            }
        }
        if params.secondary_motion.is_some_and(|m| !m.is_finite()) {
            return Err(KinematicsError::NonFinite("secondary motion"));
        }
        let swing = BoundedOscillator::new(
            params.min_angle,
            params.max_angle,
            params.angle,
            params.angular_speed,
        )?;
        Ok(Self {
            pivot: params.pivot,
            rotation_angle: params.rotation_angle,
            swing,
            length: params.length,
            arm_color: params.arm_color,
            bob_color: params.bob_color,
            bob_radius: params.bob_radius,
            arm_thickness: params.arm_thickness,
            secondary: params.secondary_motion,
            arm_mesh,
            bob_mesh,
        })
    }

    pub fn angle(&self) -> f32 {
        self.swing.value()
    }

    pub fn direction(&self) -> Direction {
        self.swing.direction()
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn secondary_motion(&self) -> Option<SecondaryMotion> {
        self.secondary
    }

    pub fn set_pivot(&mut self, pivot: Vec3) {
        self.pivot = pivot;
    }

    pub fn set_rotation_angle(&mut self, rotation_angle: f32) {
        self.rotation_angle = rotation_angle;
    }

    pub fn set_secondary_motion(&mut self, motion: Option<SecondaryMotion>) {
        self.secondary = motion;
    }

    fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_angle) * Quat::from_rotation_z(self.swing.value())
    }

    /// Pivot frame: translate to the pivot, yaw the swing plane, then swing.
    fn pivot_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.pivot)
    }

    /// World matrix for a unit cylinder stretched into the arm.
    pub fn arm_matrix(&self) -> Mat4 {
        self.pivot_matrix()
            * Mat4::from_translation(Vec3::new(0.0, -self.length * 0.5, 0.0))
            * Mat4::from_scale(Vec3::new(self.arm_thickness, self.length, self.arm_thickness))
    }

    pub fn bob_position(&self) -> Vec3 {
        self.pivot + self.orientation() * Vec3::new(0.0, -self.length, 0.0)
    }

    /// World matrix for a unit-diameter sphere scaled to the bob radius.
    pub fn bob_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.bob_position()) * Mat4::from_scale(Vec3::splat(self.bob_radius * 2.0))
    }
}

impl Fixture for Pendulum {
    fn update(&mut self, dt: f32) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }
        if let Some(motion) = self.secondary {
            self.pivot += motion.drift * dt;
            self.rotation_angle += motion.spin_rate * dt;
        }
        if self.swing.advance(dt) {
            tracing::trace!(
                angle = self.swing.value(),
                direction = ?self.swing.direction(),
                "pendulum reversed"
            );
        }
    }

    fn draw(&self, draws: &mut DrawList) {
        draws.draw(self.arm_mesh, self.arm_matrix(), self.arm_color);
        draws.draw(self.bob_mesh, self.bob_matrix(), self.bob_color);
    }
}
