use crate::{Control, InputState};
use glam::Vec3;

/// A high-level action derived from held controls.
///
/// Magnitudes are unit rates; the consumer scales them by its own speed and `dt`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Move the player along a world-space direction.
    Move(Vec3),
    /// Orbit the camera around the player; positive is counter-clockwise seen from above.
    Orbit(f32),
    /// Leave the frame loop.
    Exit,
}

impl InputState {
    /// Map held controls to actions. Opposing controls cancel out.
    pub fn actions(&self) -> Vec<Action> {
        if self.is_held(Control::Exit) {
            return vec![Action::Exit];
        }

        let axis = |pos: Control, neg: Control| -> f32 {
            (self.is_held(pos) as i32 - self.is_held(neg) as i32) as f32
        };

        let mut actions = Vec::new();
        let movement = Vec3::new(
            axis(Control::StrafeLeft, Control::StrafeRight),
            axis(Control::Ascend, Control::Descend),
            axis(Control::Forward, Control::Back),
        );
        if movement != Vec3::ZERO {
            actions.push(Action::Move(movement));
        }
        let orbit = axis(Control::OrbitLeft, Control::OrbitRight);
        if orbit != 0.0 {
            actions.push(Action::Orbit(orbit));
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_no_actions() {
        assert!(InputState::new().actions().is_empty());
    }

    #[test]
    fn forward_is_positive_z() {
        let input: InputState = [Control::Forward].into_iter().collect();
        assert_eq!(input.actions(), vec![Action::Move(Vec3::Z)]);
    }

    #[test]
    fn strafe_left_is_positive_x() {
        let input: InputState = [Control::StrafeLeft, Control::Descend].into_iter().collect();
        assert_eq!(input.actions(), vec![Action::Move(Vec3::new(1.0, -1.0, 0.0))]);
    }

    #[test]
    fn opposing_controls_cancel() {
        let input: InputState = [Control::Forward, Control::Back, Control::OrbitLeft, Control::OrbitRight]
            .into_iter()
            .collect();
        assert!(input.actions().is_empty());
    }

    #[test]
    fn orbit_right_is_negative() {
        let input: InputState = [Control::OrbitRight].into_iter().collect();
        assert_eq!(input.actions(), vec![Action::Orbit(-1.0)]);
    }

    #[test]
    fn exit_wins() {
        let input: InputState = [Control::Exit, Control::Forward].into_iter().collect();
        assert_eq!(input.actions(), vec![Action::Exit]);
    }
}
