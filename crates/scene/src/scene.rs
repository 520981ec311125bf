use crate::{ConfigError, FloorConfig, OrbitCamera, Player, PyramidConfig, SceneConfig};
use fixture_common::{Color, Transform};
use fixture_input::{Action, InputState};
use fixture_kinematics::{
    Direction, Elevator, Fixture, KinematicsError, Pendulum, SecondaryMotion,
};
use fixture_mesh::{MeshError, MeshLibrary, StandardMeshes};
use fixture_render::{DrawList, Frame, FrameUniforms};
use glam::Vec3;
use serde::Serialize;

/// Errors from building a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("mesh generation failed: {0}")]
    Mesh(#[from] MeshError),
    #[error("invalid fixture: {0}")]
    Kinematics(#[from] KinematicsError),
    #[error("invalid camera: {0}")]
    Camera(&'static str),
}

/// Whether the frame loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Exit,
}

/// The whole scene: meshes, player, camera rig and fixtures.
#[derive(Debug, Clone)]
pub struct Scene {
    meshes: MeshLibrary,
    primitives: StandardMeshes,
    player: Player,
    camera: OrbitCamera,
    floor: FloorConfig,
    pyramid: PyramidConfig,
    clear_color: Color,
    elevator: Elevator,
    pendulums: Vec<Pendulum>,
    frame_index: u64,
    elapsed: f32,
}

impl Scene {
    /// Generate meshes and build every fixture from `config`.
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        validate_camera(&config.camera)?;

        let mut meshes = MeshLibrary::new();
        let primitives = StandardMeshes::generate(&mut meshes, &config.meshes)?;

        let elevator = Elevator::new(&config.elevator, primitives.cube)?;
        let pendulums = config
            .pendulums
            .iter()
            .map(|p| Pendulum::new(p, primitives.cylinder, primitives.sphere))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            meshes = meshes.len(),
            pendulums = pendulums.len(),
            floor_tiles = config.floor.tiles,
            "scene built"
        );

        Ok(Self {
            meshes,
            primitives,
            player: Player::from_config(&config.player),
            camera: OrbitCamera::from_config(&config.camera),
            floor: config.floor.clone(),
            pyramid: config.pyramid.clone(),
            clear_color: config.clear_color,
            elevator,
            pendulums,
            frame_index: 0,
            elapsed: 0.0,
        })
    }

    pub fn meshes(&self) -> &MeshLibrary {
        &self.meshes
    }

    pub fn primitives(&self) -> StandardMeshes {
        self.primitives
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    pub fn pendulums(&self) -> &[Pendulum] {
        &self.pendulums
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    fn fixtures_mut(&mut self) -> impl Iterator<Item = &mut dyn Fixture> {
        std::iter::once(&mut self.elevator as &mut dyn Fixture)
            .chain(self.pendulums.iter_mut().map(|p| p as &mut dyn Fixture))
    }

    fn fixtures(&self) -> impl Iterator<Item = &dyn Fixture> {
        std::iter::once(&self.elevator as &dyn Fixture)
            .chain(self.pendulums.iter().map(|p| p as &dyn Fixture))
    }

    /// Advance one frame: apply input, then update every fixture once.
    ///
    /// Returns [`FrameControl::Exit`] without advancing when exit is held.
    /// Negative or non-finite `dt` is treated as zero.
    pub fn update(&mut self, dt: f32, input: &InputState) -> FrameControl {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        for action in input.actions() {
            match action {
                Action::Exit => return FrameControl::Exit,
                Action::Move(direction) => self.player.translate(direction, dt),
                Action::Orbit(direction) => self.camera.orbit(direction, dt),
            }
        }

        for fixture in self.fixtures_mut() {
            fixture.update(dt);
        }

        self.frame_index += 1;
        self.elapsed += dt;
        FrameControl::Continue
    }

    pub fn uniforms(&self) -> FrameUniforms {
        let target = self.player.position;
        FrameUniforms {
            view: self.camera.view_matrix(target),
            projection: self.camera.projection_matrix(),
            eye: self.camera.eye(target),
            target,
            clear_color: self.clear_color,
        }
    }

    /// Append this frame's draw calls in their fixed order.
    pub fn draw(&self, draws: &mut DrawList) {
        let tile = self.floor.tile_size;
        for i in 0..self.floor.tiles {
            let position = Vec3::new(0.0, -self.player.radius - tile * 0.5, i as f32 * tile);
            let world = Transform::from_position(position)
                .with_uniform_scale(tile)
                .matrix();
            draws.draw(self.primitives.cube, world, self.floor.color);
        }

        draws.draw(
            self.primitives.sphere,
            self.player.world_matrix(),
            self.player.color,
        );

        draws.draw(
            self.primitives.pyramid,
            Transform::from_position(self.pyramid.position).matrix(),
            self.pyramid.color,
        );

        for fixture in self.fixtures() {
            fixture.draw(draws);
        }
    }

    pub fn frame(&self) -> Frame {
        let mut draws = DrawList::new();
        self.draw(&mut draws);
        Frame {
            uniforms: self.uniforms(),
            draws,
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            frame: self.frame_index,
            elapsed: self.elapsed,
            player: self.player.position,
            camera_angle: self.camera.angle,
            eye: self.camera.eye(self.player.position),
            elevator: ElevatorSnapshot {
                displacement: self.elevator.displacement(),
                direction: self.elevator.direction(),
                position: self.elevator.position(),
            },
            pendulums: self
                .pendulums
                .iter()
                .map(|p| PendulumSnapshot {
                    angle: p.angle(),
                    direction: p.direction(),
                    pivot: p.pivot(),
                    rotation_angle: p.rotation_angle(),
                    bob: p.bob_position(),
                    length: p.length(),
                    secondary_motion: p.secondary_motion(),
                })
                .collect(),
        }
    }
}

fn validate_camera(c: &crate::CameraConfig) -> Result<(), SceneError> {
    if !(c.distance.is_finite() && c.distance > 0.0) {
        return Err(SceneError::Camera("distance must be positive"));
    }
    if !(c.near > 0.0 && c.far > c.near) {
        return Err(SceneError::Camera("clip planes must satisfy 0 < near < far"));
    }
    if !(c.fov > 0.0 && c.fov < std::f32::consts::PI) {
        return Err(SceneError::Camera("fov must be between 0 and pi"));
    }
    if !(c.aspect.is_finite() && c.aspect > 0.0) {
        return Err(SceneError::Camera("aspect must be positive"));
    }
    if !(c.height.is_finite() && c.rotation_speed.is_finite()) {
        return Err(SceneError::Camera("height and rotation speed must be finite"));
    }
    Ok(())
}

/// Serializable view of the animated state, for logging and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub frame: u64,
    pub elapsed: f32,
    pub player: Vec3,
    pub camera_angle: f32,
    pub eye: Vec3,
    pub elevator: ElevatorSnapshot,
    pub pendulums: Vec<PendulumSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElevatorSnapshot {
    pub displacement: f32,
    pub direction: Direction,
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendulumSnapshot {
    pub angle: f32,
    pub direction: Direction,
    pub pivot: Vec3,
    pub rotation_angle: f32,
    pub bob: Vec3,
    pub length: f32,
    pub secondary_motion: Option<SecondaryMotion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_input::Control;
    use fixture_render::{DebugTextRenderer, Renderer};

    fn scene() -> Scene {
        Scene::new(&SceneConfig::default()).unwrap()
    }

    fn held(controls: &[Control]) -> InputState {
        controls.iter().copied().collect()
    }

    #[test]
    fn builds_default_scene() {
        let s = scene();
        assert_eq!(s.meshes().len(), 4);
        assert_eq!(s.pendulums().len(), 3);
        assert_eq!(s.frame_index(), 0);
        assert_eq!(s.elevator().displacement(), 1.0);
    }

    #[test]
    fn draw_order_is_fixed() {
        let s = scene();
        let p = s.primitives();
        let frame = s.frame();
        let meshes: Vec<_> = frame.draws.iter().map(|c| c.mesh).collect();

        let mut expected = vec![p.cube; 10];
        expected.extend([p.sphere, p.pyramid, p.cube]);
        for _ in 0..3 {
            expected.extend([p.cylinder, p.sphere]);
        }
        assert_eq!(meshes, expected);

        let colors: Vec<_> = frame.draws.iter().map(|c| c.color).collect();
        assert_eq!(colors[0], Color::RED);
        assert_eq!(colors[10], Color::DARK_BLUE);
        assert_eq!(colors[11], Color::WHITE);
        assert_eq!(colors[12], Color::GREEN);
        assert_eq!(&colors[13..15], &[Color::DARK_GREEN, Color::YELLOW]);
        assert_eq!(&colors[17..19], &[Color::GRAY, Color::ORANGE]);
    }

    #[test]
    fn floor_tiles_step_along_z_below_player() {
        let frame = scene().frame();
        for (i, cmd) in frame.draws.iter().take(10).enumerate() {
            let origin = cmd.world.w_axis.truncate();
            assert_eq!(origin, Vec3::new(0.0, -4.0, i as f32 * 6.0));
        }
    }

    #[test]
    fn update_moves_player_and_fixtures_once() {
        let mut s = scene();
        let control = s.update(0.1, &held(&[Control::Forward, Control::StrafeLeft]));
        assert_eq!(control, FrameControl::Continue);
        assert!((s.player().position - Vec3::new(0.4, 0.0, 0.4)).length() < 1e-5);
        assert!((s.elevator().displacement() - 1.5).abs() < 1e-5);
        assert_eq!(s.frame_index(), 1);

        let drifting = &s.pendulums()[2];
        assert!((drifting.pivot().z - 0.1).abs() < 1e-6);
        assert!((drifting.angle() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn update_zero_changes_nothing_but_frame_count() {
        let mut s = scene();
        let before = s.snapshot();
        s.update(0.0, &InputState::new());
        s.update(0.0, &held(&[Control::Forward]));
        let after = s.snapshot();
        assert_eq!(after.frame, 2);
        assert_eq!(SceneSnapshot { frame: 0, ..after }, before);
    }

    #[test]
    fn exit_stops_without_advancing() {
        let mut s = scene();
        let control = s.update(0.5, &held(&[Control::Exit, Control::Forward]));
        assert_eq!(control, FrameControl::Exit);
        assert_eq!(s.frame_index(), 0);
        assert_eq!(s.player().position, Vec3::ZERO);
        assert_eq!(s.elevator().displacement(), 1.0);
    }

    #[test]
    fn camera_follows_player_and_orbits() {
        let mut s = scene();
        s.update(0.25, &held(&[Control::Ascend]));
        let u = s.uniforms();
        assert_eq!(u.target, Vec3::new(0.0, 1.0, 0.0));
        assert!((u.eye - Vec3::new(0.0, 4.0, -7.0)).length() < 1e-4);

        let angle = s.camera().angle;
        s.update(0.1, &held(&[Control::OrbitRight]));
        assert!((s.camera().angle - (angle - 0.5)).abs() < 1e-6);
    }

    #[test]
    fn fixtures_stay_in_bounds_over_many_frames() {
        let mut s = scene();
        let input = InputState::new();
        for i in 0..600 {
            s.update(0.005 + (i % 5) as f32 * 0.01, &input);
            let e = s.elevator().displacement();
            assert!((1.0..=2.0).contains(&e));
            for p in s.pendulums() {
                let a = p.angle();
                assert!(a >= -std::f32::consts::FRAC_PI_4 - 1e-6);
                assert!(a <= std::f32::consts::TAU + 1e-6);
            }
        }
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut s = scene();
        s.update(-1.0, &held(&[Control::Forward]));
        s.update(f32::NAN, &held(&[Control::Forward]));
        assert_eq!(s.player().position, Vec3::ZERO);
        assert_eq!(s.elapsed(), 0.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = SceneConfig::default();
        config.camera.near = 0.0;
        assert!(matches!(Scene::new(&config), Err(SceneError::Camera(_))));

        let mut config = SceneConfig::default();
        config.meshes.sphere_tessellation = 1;
        assert!(matches!(Scene::new(&config), Err(SceneError::Mesh(_))));

        let mut config = SceneConfig::default();
        config.meshes.cylinder_tessellation = u32::MAX;
        assert!(matches!(Scene::new(&config), Err(SceneError::Mesh(_))));

        let mut config = SceneConfig::default();
        config.elevator.min = 3.0;
        assert!(matches!(Scene::new(&config), Err(SceneError::Kinematics(_))));
    }

    #[test]
    fn set_viewport_updates_projection_aspect() {
        let mut s = scene();
        s.set_viewport(1000, 500);
        assert_eq!(s.camera().aspect, 2.0);
        s.set_viewport(640, 0);
        assert_eq!(s.camera().aspect, 640.0);
        assert_eq!(s.uniforms().projection, s.camera().projection_matrix());
    }

    #[test]
    fn degenerate_camera_is_rejected() {
        let mut config = SceneConfig::default();
        config.camera.aspect = 0.0;
        assert!(matches!(Scene::new(&config), Err(SceneError::Camera(_))));

        let mut config = SceneConfig::default();
        config.camera.aspect = f32::NAN;
        assert!(matches!(Scene::new(&config), Err(SceneError::Camera(_))));

        let mut config = SceneConfig::default();
        config.camera.height = f32::INFINITY;
        assert!(matches!(Scene::new(&config), Err(SceneError::Camera(_))));

        let mut config = SceneConfig::default();
        config.camera.rotation_speed = f32::NAN;
        assert!(matches!(Scene::new(&config), Err(SceneError::Camera(_))));
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut s = scene();
        s.update(0.1, &InputState::new());
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["frame"], 1);
        assert_eq!(json["pendulums"].as_array().unwrap().len(), 3);
        assert_eq!(json["elevator"]["direction"], "Positive");

        let snap = s.snapshot();
        assert_eq!(snap.pendulums[0].length, 10.0);
        assert!(snap.pendulums[0].secondary_motion.is_none());
        let motion = snap.pendulums[2].secondary_motion.unwrap();
        assert_eq!(motion.drift, Vec3::Z);
        assert!(json["pendulums"][2]["secondary_motion"]["spin_rate"].is_number());
    }

    #[test]
    fn debug_renderer_lists_every_draw() {
        let output = DebugTextRenderer::new().render(&scene().frame());
        assert!(output.contains("19 draws"));
        assert!(output.contains("#18"));
    }
}
