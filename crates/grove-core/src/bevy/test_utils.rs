//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `GroveHeadlessPlugin` for testing game logic without
//! a rendering or windowing backend.

use bevy::prelude::*;

use crate::bevy::components::{Ball, ChaseCamera, HiddenTree, Tree};
use crate::bevy::events::{PlaySoundEvent, SoundKind};
use crate::bevy::plugin::GroveHeadlessPlugin;
use crate::bevy::rapier_plugin::{CollisionEvent, PhysicsBody, PhysicsWorldRes};
use crate::config::SceneConfig;
use crate::physics::PHYSICS_DT;

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Creates a test app running the default scene.
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Creates a test app running a custom scene.
    pub fn with_config(config: SceneConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(GroveHeadlessPlugin::new(config));
        // Pause virtual time so that only explicit step_physics calls
        // advance the simulation.
        app.world_mut().resource_mut::<Time<Virtual>>().pause();
        // Run one update to apply Startup systems.
        app.update();
        Self { app }
    }

    /// Runs a single frame update without advancing fixed time.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Advances the simulation by exactly `n` fixed timesteps.
    ///
    /// Feeds time directly into the fixed-timestep accumulator via
    /// `Time<Fixed>::accumulate_overstep`, bypassing (paused) virtual
    /// time, which keeps the simulation fully deterministic.
    pub fn step_physics(&mut self, n: usize) {
        let dt = std::time::Duration::from_secs_f32(PHYSICS_DT);
        for _ in 0..n {
            self.app
                .world_mut()
                .resource_mut::<Time<Fixed>>()
                .accumulate_overstep(dt);
            self.app.update();
        }
    }

    /// Spawns a chase camera rig at the given position.
    pub fn spawn_camera_rig(&mut self, position: Vec3, camera: ChaseCamera) -> Entity {
        self.app
            .world_mut()
            .spawn((camera, Transform::from_translation(position)))
            .id()
    }

    pub fn ball_entity(&mut self) -> Entity {
        let mut query = self.app.world_mut().query_filtered::<Entity, With<Ball>>();
        query.single(self.app.world()).unwrap()
    }

    pub fn tree_entities(&mut self) -> Vec<Entity> {
        let mut query = self.app.world_mut().query_filtered::<Entity, With<Tree>>();
        query.iter(self.app.world()).collect()
    }

    pub fn ball_position(&mut self) -> Vec3 {
        let ball = self.ball_entity();
        self.app.world().get::<Transform>(ball).unwrap().translation
    }

    /// Reads the ball's linear velocity straight from the physics world.
    pub fn ball_velocity(&mut self) -> Vec3 {
        let ball = self.ball_entity();
        let handle = self.app.world().get::<PhysicsBody>(ball).unwrap().0;
        let physics = self.app.world().resource::<PhysicsWorldRes>();
        let linvel = physics.world.get_rigid_body(handle).unwrap().linvel();
        Vec3::new(linvel.x, linvel.y, linvel.z)
    }

    pub fn set_ball_velocity(&mut self, velocity: Vec3) {
        let ball = self.ball_entity();
        let handle = self.app.world().get::<PhysicsBody>(ball).unwrap().0;
        let mut physics = self.app.world_mut().resource_mut::<PhysicsWorldRes>();
        let body = physics.world.get_rigid_body_mut(handle).unwrap();
        body.set_linvel(
            rapier3d::prelude::Vector::new(velocity.x, velocity.y, velocity.z),
            true,
        );
    }

    /// Injects a raw collision event, as if the physics step produced it.
    pub fn send_collision(&mut self, e1: Entity, e2: Entity) {
        self.app
            .world_mut()
            .write_message(CollisionEvent::Started(e1, e2));
    }

    pub fn tree_visibility(&mut self, tree: Entity) -> Visibility {
        *self.app.world().get::<Visibility>(tree).unwrap()
    }

    pub fn hidden_countdown(&mut self, tree: Entity) -> Option<f32> {
        self.app
            .world()
            .get::<HiddenTree>(tree)
            .map(|h| h.reveal_in)
    }

    /// Drains all pending sound requests.
    pub fn drain_sounds(&mut self) -> Vec<SoundKind> {
        self.app
            .world_mut()
            .resource_mut::<Messages<PlaySoundEvent>>()
            .drain()
            .map(|event| event.kind)
            .collect()
    }
}
