use crate::{BoundedOscillator, Direction, Fixture, KinematicsError};
use fixture_common::{Color, MeshHandle};
use fixture_render::DrawList;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Construction parameters for an [`Elevator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevatorParams {
    /// Position at zero displacement.
    pub base: Vec3,
    /// Movement direction; normalized on construction.
    pub axis: Vec3,
    pub min: f32,
    pub max: f32,
    /// Initial displacement, clamped into `[min, max]`.
    pub start: f32,
    /// Units per second.
    pub speed: f32,
    pub color: Color,
    /// Non-uniform scale applied to the mesh.
    pub scale: Vec3,
}

impl Default for ElevatorParams {
    fn default() -> Self {
        Self {
            base: Vec3::new(4.0, 2.0, 6.0),
            axis: Vec3::NEG_Y,
            min: 1.0,
            max: 2.0,
            start: 1.0,
            speed: 5.0,
            color: Color::GREEN,
            scale: Vec3::new(2.0, 0.25, 2.0),
        }
    }
}

/// A platform that travels back and forth along one axis.
#[derive(Debug, Clone)]
pub struct Elevator {
    base: Vec3,
    axis: Vec3,
    travel: BoundedOscillator,
    color: Color,
    scale: Vec3,
    mesh: MeshHandle,
}

impl Elevator {
    pub fn new(params: &ElevatorParams, mesh: MeshHandle) -> Result<Self, KinematicsError> {
        if !params.base.is_finite() {
            return Err(KinematicsError::NonFinite("elevator placement"));
        }
        let smallest = params.scale.min_element();
        if !(params.scale.is_finite() && smallest > 0.0) {
            return Err(KinematicsError::NonPositiveSize {
                name: "elevator scale",
                value: smallest,
            });
        }
        let axis = params.axis.try_normalize().ok_or(KinematicsError::DegenerateAxis)?;
        let travel = BoundedOscillator::new(params.min, params.max, params.start, params.speed)?;
        Ok(Self {
            base: params.base,
            axis,
            travel,
            color: params.color,
            scale: params.scale,
            mesh,
        })
    }

    pub fn displacement(&self) -> f32 {
        self.travel.value()
    }

    pub fn direction(&self) -> Direction {
        self.travel.direction()
    }

    pub fn position(&self) -> Vec3 {
        self.base + self.axis * self.travel.value()
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position()) * Mat4::from_scale(self.scale)
    }
}

impl Fixture for Elevator {
    fn update(&mut self, dt: f32) {
        if self.travel.advance(dt) {
            tracing::trace!(
                displacement = self.travel.value(),
                direction = ?self.travel.direction(),
                "elevator reversed"
            );
        }
    }

    fn draw(&self, draws: &mut DrawList) {
        draws.draw(self.mesh, self.world_matrix(), self.color);
    }
}
