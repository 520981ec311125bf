use serde::{Deserialize, Serialize};

/// Linear RGBA colour with components in `[0, 1]`.
///
/// Serialized as `[r, g, b, a]`; three-component arrays are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "[f32; 4]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
    pub const RED: Color = Color::from_rgb8(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb8(0, 128, 0);
    pub const DARK_GREEN: Color = Color::from_rgb8(0, 100, 0);
    pub const BLUE: Color = Color::from_rgb8(0, 0, 255);
    pub const DARK_BLUE: Color = Color::from_rgb8(0, 0, 139);
    pub const YELLOW: Color = Color::from_rgb8(255, 255, 0);
    pub const GRAY: Color = Color::from_rgb8(128, 128, 128);
    pub const ORANGE: Color = Color::from_rgb8(255, 165, 0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl TryFrom<Vec<f32>> for Color {
    type Error = String;

    fn try_from(v: Vec<f32>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b, 1.0)),
            [r, g, b, a] => Ok(Self::new(*r, *g, *b, *a)),
            other => Err(format!(
                "expected 3 or 4 colour components, got {}",
                other.len()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_opaque() {
        for c in [Color::RED, Color::DARK_BLUE, Color::ORANGE, Color::GRAY] {
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn rgb8_conversion() {
        assert_eq!(Color::WHITE.rgb(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::RED.rgb(), [1.0, 0.0, 0.0]);
        assert!((Color::ORANGE.g - 165.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn accepts_three_or_four_components() {
        assert_eq!(
            Color::try_from(vec![0.5, 0.25, 0.0]).unwrap(),
            Color::new(0.5, 0.25, 0.0, 1.0)
        );
        assert_eq!(
            Color::try_from(vec![0.5, 0.25, 0.0, 0.5]).unwrap().a,
            0.5
        );
        assert!(Color::try_from(vec![1.0]).is_err());
    }
}
