//! Kinematic fixtures: closed-form per-frame motion for animated scene objects.
//!
//! # Invariants
//! - Every bounded quantity stays inside its `[min, max]` interval after any update.
//! - Direction flips exactly when a bound is reached (the bounce law).
//! - `update(0.0)` never changes state.
//! - Fixtures reference meshes by handle and never own geometry.

mod elevator;
mod oscillator;
mod pendulum;

pub use elevator::{Elevator, ElevatorParams};
pub use oscillator::{BoundedOscillator, Direction};
pub use pendulum::{Pendulum, PendulumParams, SecondaryMotion};

use fixture_render::DrawList;

/// Errors from fixture construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KinematicsError {
    #[error("lower bound {min} exceeds upper bound {max}")]
    InvertedBounds { min: f32, max: f32 },
    #[error("speed must be non-negative, got {0}")]
    NegativeSpeed(f32),
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    #[error("movement axis has zero length")]
    DegenerateAxis,
    #[error("pendulum arm length must be positive, got {0}")]
    NonPositiveLength(f32),
    #[error("{name} must be positive, got {value}")]
    NonPositiveSize { name: &'static str, value: f32 },
}

/// An animated scene object with its own per-frame update rule.
pub trait Fixture {
    /// Advance by `dt` seconds. Non-positive `dt` is a no-op.
    fn update(&mut self, dt: f32);

    /// Append this fixture's draw calls to `draws`.
    fn draw(&self, draws: &mut DrawList);
}
