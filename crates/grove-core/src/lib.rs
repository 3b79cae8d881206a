//! Rolling Grove core library
//!
//! Game logic for a tilt-steered rolling-ball game: a chase camera follows
//! the ball, tilt input nudges its velocity, and running into a tree hides
//! the tree until a fixed delay elapses.
//!
//! Physics is a direct `Rapier3D` integration; everything else runs as Bevy
//! ECS systems. The `bevy::GroveHeadlessPlugin` contains all game logic with
//! no rendering or window dependencies, so the whole game can be driven in
//! headless tests.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod physics;
pub mod steering;

// Bevy integration
pub mod bevy;

pub use config::{
    BallConfig, CameraConfig, ContactConfig, GroundConfig, SceneConfig, SceneError, SceneMeta,
    SoundManifest, SteeringConfig, TreeLayout,
};
pub use physics::{PHYSICS_DT, PhysicsWorld, default_gravity};
pub use steering::{
    CAMERA_DAMPING, CAMERA_OFFSET, JUMP_IMPULSE, TILT_FORCE_SCALE, TILT_REST_BIAS,
    TREE_REVEAL_DELAY, chase_target, damp_toward, ray_hits_sphere, tilt_force,
};
