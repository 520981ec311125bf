use crate::PlayerConfig;
use fixture_common::{Color, Transform};
use glam::{Mat4, Vec3};

/// The player-controlled sphere. Input moves the position directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec3,
    pub speed: f32,
    pub radius: f32,
    pub color: Color,
}

impl Player {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            position: config.start,
            speed: config.speed,
            radius: config.radius,
            color: config.color,
        }
    }

    /// Move along `direction` (unit rates per axis) for `dt` seconds.
    pub fn translate(&mut self, direction: Vec3, dt: f32) {
        self.position += direction * self.speed * dt;
    }

    /// World matrix for a unit-diameter sphere.
    pub fn world_matrix(&self) -> Mat4 {
        Transform::from_position(self.position)
            .with_uniform_scale(self.radius * 2.0)
            .matrix()
    }
}
