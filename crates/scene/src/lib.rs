//! Scene composer: owns the player, the camera rig and every fixture, and
//! turns one frame of input into one ordered frame of draw calls.
//!
//! # Invariants
//! - `update` completes before `frame` is built; `frame` never mutates state.
//! - Every fixture is updated exactly once per `update` call.
//! - Draw order is fixed: ground tiles, player sphere, pyramid, elevator, pendulums.

mod camera;
mod config;
mod player;
mod scene;

pub use camera::OrbitCamera;
pub use config::{
    CameraConfig, ConfigError, FloorConfig, PlayerConfig, PyramidConfig, SceneConfig,
};
pub use player::Player;
pub use scene::{
    ElevatorSnapshot, FrameControl, PendulumSnapshot, Scene, SceneError, SceneSnapshot,
};
