use fixture_common::Color;
use fixture_kinematics::{ElevatorParams, PendulumParams, SecondaryMotion};
use fixture_mesh::PrimitiveParams;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};
use std::path::{Path, PathBuf};

/// Errors from loading a scene configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scene configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start: Vec3,
    /// Units per second.
    pub speed: f32,
    pub radius: f32,
    pub color: Color,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: Vec3::ZERO,
            speed: 4.0,
            radius: 1.0,
            color: Color::DARK_BLUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial orbit angle around the player, radians.
    pub angle: f32,
    /// Radians per second while an orbit control is held.
    pub rotation_speed: f32,
    pub distance: f32,
    pub height: f32,
    /// Vertical field of view, radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            angle: -FRAC_PI_2,
            rotation_speed: 5.0,
            distance: 7.0,
            height: 3.0,
            fov: FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 250.0,
        }
    }
}

/// A row of cube tiles running along +Z below the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorConfig {
    pub tiles: u32,
    pub tile_size: f32,
    pub color: Color,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            tiles: 10,
            tile_size: 6.0,
            color: Color::RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PyramidConfig {
    pub position: Vec3,
    pub color: Color,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Color::WHITE,
        }
    }
}

/// Complete scene description. Every section falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub player: PlayerConfig,
    pub camera: CameraConfig,
    pub floor: FloorConfig,
    pub meshes: PrimitiveParams,
    pub pyramid: PyramidConfig,
    pub elevator: ElevatorParams,
    pub pendulums: Vec<PendulumParams>,
    pub clear_color: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            camera: CameraConfig::default(),
            floor: FloorConfig::default(),
            meshes: PrimitiveParams::default(),
            pyramid: PyramidConfig::default(),
            elevator: ElevatorParams::default(),
            pendulums: default_pendulums(),
            clear_color: Color::BLACK,
        }
    }
}

fn default_pendulums() -> Vec<PendulumParams> {
    vec![
        PendulumParams::default(),
        PendulumParams {
            pivot: Vec3::new(0.0, 11.0, 10.0),
            angle: -FRAC_PI_4,
            arm_color: Color::BLUE,
            bob_color: Color::WHITE,
            ..PendulumParams::default()
        },
        PendulumParams {
            pivot: Vec3::new(0.0, 5.0, 0.0),
            angle: 0.0,
            min_angle: 0.0,
            max_angle: TAU,
            length: 7.0,
            angular_speed: 5.0,
            arm_color: Color::GRAY,
            bob_color: Color::ORANGE,
            bob_radius: 1.5,
            secondary_motion: Some(SecondaryMotion {
                drift: Vec3::Z,
                spin_rate: 0.1,
            }),
            ..PendulumParams::default()
        },
    ]
}

impl SceneConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Read and parse a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded scene config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_demo_scene() {
        let c = SceneConfig::default();
        assert_eq!(c.player.speed, 4.0);
        assert_eq!(c.camera.distance, 7.0);
        assert_eq!(c.floor.tiles, 10);
        assert_eq!(c.pendulums.len(), 3);
        assert!(c.pendulums[2].secondary_motion.is_some());
        assert_eq!(c.elevator.axis, Vec3::NEG_Y);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(SceneConfig::from_yaml_str("{}").unwrap(), SceneConfig::default());
    }

    #[test]
    fn partial_yaml_overrides_sections() {
        let yaml = r#"
player:
  speed: 8.0
floor:
  tiles: 3
  color: [0.0, 1.0, 0.0]
pendulums:
  - pivot: [1.0, 2.0, 3.0]
    length: 4.0
    secondary_motion:
      drift: [0.0, 0.0, 2.0]
"#;
        let c = SceneConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(c.player.speed, 8.0);
        assert_eq!(c.player.radius, 1.0);
        assert_eq!(c.floor.tiles, 3);
        assert_eq!(c.floor.color, Color::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(c.pendulums.len(), 1);
        assert_eq!(c.pendulums[0].pivot, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(c.pendulums[0].angular_speed, 3.0);
        let motion = c.pendulums[0].secondary_motion.unwrap();
        assert_eq!(motion.drift, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(motion.spin_rate, 0.0);
    }

    #[test]
    fn yaml_round_trip() {
        let c = SceneConfig::default();
        let yaml = c.to_yaml_string().unwrap();
        assert_eq!(SceneConfig::from_yaml_str(&yaml).unwrap(), c);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = SceneConfig::from_yaml_str("floor: { color: [1.0] }").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "camera:\n  distance: 12.0").unwrap();
        let c = SceneConfig::load(file.path()).unwrap();
        assert_eq!(c.camera.distance, 12.0);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SceneConfig::load("/nonexistent/scene.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
