//! Bevy plugins.
//!
//! Provides:
//! - `GroveHeadlessPlugin`: logic-only plugin (no rendering/window
//!   dependencies) for headless testing
//! - `GroveGamePlugin`: `GroveHeadlessPlugin` plus camera, lighting,
//!   audio, and mesh systems for the desktop build

use bevy::prelude::*;

use crate::bevy::events::{JumpEvent, PlaySoundEvent, SceneSpawnedEvent, TreeHitEvent};
use crate::bevy::rapier_plugin::{GrovePhysicsPlugin, PhysicsSet};
use crate::bevy::resources::{GameTuning, GroveConfig, TiltSampler};
use crate::bevy::systems;
use crate::config::SceneConfig;
use crate::physics::PHYSICS_DT;

/// All game logic, no rendering or window dependencies.
///
/// Use with `MinimalPlugins` to run the full simulation headless. Input,
/// audio, and mesh systems live in [`GroveGamePlugin`]; the headless game
/// is driven through [`TiltSampler`] and the message types instead.
#[derive(Default)]
pub struct GroveHeadlessPlugin {
    pub config: SceneConfig,
}

impl GroveHeadlessPlugin {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }
}

impl Plugin for GroveHeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(f64::from(PHYSICS_DT)));
        app.add_plugins(GrovePhysicsPlugin);

        app.insert_resource(GameTuning::from_config(&self.config))
            .insert_resource(GroveConfig(self.config.clone()))
            .insert_resource(TiltSampler::new());

        app.add_message::<TreeHitEvent>()
            .add_message::<JumpEvent>()
            .add_message::<PlaySoundEvent>()
            .add_message::<SceneSpawnedEvent>();

        app.add_systems(Startup, systems::spawn_scene);

        // Camera smoothing reads last tick's ball position, so it runs
        // before this tick's inputs and physics step.
        app.add_systems(
            FixedUpdate,
            (
                systems::update_chase_camera,
                systems::apply_tilt_force,
                systems::apply_jump,
            )
                .chain()
                .in_set(PhysicsSet::ApplyInputs),
        );

        // Contact reactions run on the events the step just produced.
        app.add_systems(
            FixedUpdate,
            (
                systems::detect_tree_hits,
                systems::handle_tree_hits,
                systems::reveal_hidden_trees,
            )
                .chain()
                .after(PhysicsSet::SyncFromRapier),
        );
    }
}

/// Full desktop game: headless logic plus rendering, input, and audio.
#[derive(Default)]
pub struct GroveGamePlugin {
    pub config: SceneConfig,
}

impl GroveGamePlugin {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }
}

impl Plugin for GroveGamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GroveHeadlessPlugin::new(self.config.clone()));

        app.add_systems(
            Startup,
            (
                systems::setup_camera,
                systems::setup_lighting,
                systems::setup_sound_bank,
            ),
        );

        app.add_systems(
            Update,
            (
                systems::keyboard_tilt,
                systems::handle_tap,
                systems::play_sound_effects,
                systems::attach_ball_visuals,
                systems::attach_tree_visuals,
                systems::attach_ground_visuals,
            ),
        );
    }
}
