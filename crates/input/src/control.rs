use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A logical key the scene reacts to, independent of the physical binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    OrbitLeft,
    OrbitRight,
    Exit,
}

impl Control {
    pub const ALL: [Control; 9] = [
        Control::Forward,
        Control::Back,
        Control::StrafeLeft,
        Control::StrafeRight,
        Control::Ascend,
        Control::Descend,
        Control::OrbitLeft,
        Control::OrbitRight,
        Control::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Back => "back",
            Self::StrafeLeft => "strafe-left",
            Self::StrafeRight => "strafe-right",
            Self::Ascend => "ascend",
            Self::Descend => "descend",
            Self::OrbitLeft => "orbit-left",
            Self::OrbitRight => "orbit-right",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown control {0:?}")]
pub struct ParseControlError(pub String);

impl FromStr for Control {
    type Err = ParseControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Control::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseControlError(s.to_string()))
    }
}

/// Which controls are held this frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: BTreeSet<Control>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, control: Control) {
        self.held.insert(control);
    }

    pub fn release(&mut self, control: Control) {
        self.held.remove(&control);
    }

    pub fn set(&mut self, control: Control, held: bool) {
        if held {
            self.press(control);
        } else {
            self.release(control);
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn held(&self) -> impl Iterator<Item = Control> + '_ {
        self.held.iter().copied()
    }
}

impl FromIterator<Control> for InputState {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for c in Control::ALL {
            assert_eq!(c.name().parse::<Control>().unwrap(), c);
        }
        assert_eq!("Orbit-Left".parse::<Control>().unwrap(), Control::OrbitLeft);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "jump".parse::<Control>(),
            Err(ParseControlError("jump".into()))
        );
    }

    #[test]
    fn press_release() {
        let mut input = InputState::new();
        input.press(Control::Forward);
        input.set(Control::Ascend, true);
        assert!(input.is_held(Control::Forward));
        assert!(input.is_held(Control::Ascend));
        input.release(Control::Forward);
        input.set(Control::Ascend, false);
        assert!(!input.is_held(Control::Forward));
        assert_eq!(input, InputState::new());
    }
}
