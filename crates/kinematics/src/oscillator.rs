use crate::KinematicsError;
use serde::{Deserialize, Serialize};

/// Current travel direction of a [`BoundedOscillator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Positive,
    Negative,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// A scalar moving at constant speed between two bounds, reversing at each.
///
/// Shared by the elevator (linear displacement) and the pendulum (angle).
/// The value clamps to the bound it crosses; the remainder of the step is
/// discarded rather than reflected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedOscillator {
    value: f32,
    min: f32,
    max: f32,
    speed: f32,
    direction: Direction,
}

impl BoundedOscillator {
    /// Build an oscillator starting at `start` (clamped into `[min, max]`),
    /// moving in the positive direction.
    pub fn new(min: f32, max: f32, start: f32, speed: f32) -> Result<Self, KinematicsError> {
        for (name, v) in [("min", min), ("max", max), ("start", start), ("speed", speed)] {
            if !v.is_finite() {
                return Err(KinematicsError::NonFinite(name));
            }
        }
        if min > max {
            return Err(KinematicsError::InvertedBounds { min, max });
        }
        if speed < 0.0 {
            return Err(KinematicsError::NegativeSpeed(speed));
        }
        Ok(Self {
            value: start.clamp(min, max),
            min,
            max,
            speed,
            direction: Direction::Positive,
        })
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move by `speed * dt` in the current direction.
    ///
    /// Returns `true` when a bound was reached and the direction flipped.
    /// A `dt` that is not strictly positive (including NaN) leaves the state untouched.
    pub fn advance(&mut self, dt: f32) -> bool {
        if dt.is_nan() || dt <= 0.0 {
            return false;
        }
        self.value += self.direction.sign() * self.speed * dt;
        if self.value >= self.max {
            self.value = self.max;
            self.direction = Direction::Negative;
            true
        } else if self.value <= self.min {
            self.value = self.min;
            self.direction = Direction::Positive;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_clamped() {
        let o = BoundedOscillator::new(1.0, 2.0, 5.0, 1.0).unwrap();
        assert_eq!(o.value(), 2.0);
    }

    #[test]
    fn rejects_bad_construction() {
        assert_eq!(
            BoundedOscillator::new(2.0, 1.0, 1.5, 1.0),
            Err(KinematicsError::InvertedBounds { min: 2.0, max: 1.0 })
        );
        assert_eq!(
            BoundedOscillator::new(0.0, 1.0, 0.5, -1.0),
            Err(KinematicsError::NegativeSpeed(-1.0))
        );
        assert_eq!(
            BoundedOscillator::new(0.0, f32::INFINITY, 0.5, 1.0),
            Err(KinematicsError::NonFinite("max"))
        );
    }

    #[test]
    fn flips_at_upper_then_lower_bound() {
        let mut o = BoundedOscillator::new(0.0, 1.0, 0.5, 1.0).unwrap();
        assert!(o.advance(0.75));
        assert_eq!(o.value(), 1.0);
        assert_eq!(o.direction(), Direction::Negative);
        assert!(!o.advance(0.25));
        assert!((o.value() - 0.75).abs() < 1e-6);
        assert!(o.advance(10.0));
        assert_eq!(o.value(), 0.0);
        assert_eq!(o.direction(), Direction::Positive);
    }

    #[test]
    fn reaching_bound_exactly_flips() {
        let mut o = BoundedOscillator::new(0.0, 1.0, 0.0, 2.0).unwrap();
        assert!(o.advance(0.5));
        assert_eq!(o.value(), 1.0);
        assert_eq!(o.direction(), Direction::Negative);
    }

    #[test]
    fn zero_and_invalid_dt_are_noops() {
        let mut o = BoundedOscillator::new(-1.0, 1.0, 0.3, 4.0).unwrap();
        let before = o;
        for _ in 0..10 {
            o.advance(0.0);
        }
        o.advance(-1.0);
        o.advance(f32::NAN);
        assert_eq!(o, before);
    }

    #[test]
    fn value_never_leaves_bounds() {
        let mut o = BoundedOscillator::new(-0.7, 0.9, 0.0, 3.3).unwrap();
        let steps = [0.016, 0.5, 0.0, 1.7, 0.033, 3.0, 0.001, 0.25];
        for i in 0..400 {
            o.advance(steps[i % steps.len()]);
            assert!((-0.7..=0.9).contains(&o.value()));
        }
    }

    #[test]
    fn degenerate_interval_stays_put() {
        let mut o = BoundedOscillator::new(1.0, 1.0, 1.0, 5.0).unwrap();
        o.advance(0.1);
        assert_eq!(o.value(), 1.0);
        o.advance(0.1);
        assert_eq!(o.value(), 1.0);
    }

    #[test]
    fn direction_helpers() {
        assert_eq!(Direction::Positive.sign(), 1.0);
        assert_eq!(Direction::Negative.sign(), -1.0);
        assert_eq!(Direction::default(), Direction::Positive);
    }
}
