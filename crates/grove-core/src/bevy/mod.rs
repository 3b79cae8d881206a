//! Bevy ECS integration: components, messages, resources, the physics
//! plugin, and the game systems.

pub mod components;
pub mod events;
pub mod plugin;
pub mod rapier_plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
mod test_utils;

pub use components::{Ball, ChaseCamera, Ground, HiddenTree, Tree};
pub use events::{JumpEvent, PlaySoundEvent, SceneSpawnedEvent, SoundKind, TreeHitEvent};
pub use plugin::{GroveGamePlugin, GroveHeadlessPlugin};
pub use rapier_plugin::{
    CollisionEvent, GrovePhysicsPlugin, PhysicsBody, PhysicsCollider, PhysicsSet, PhysicsWorldRes,
};
pub use resources::{GameTuning, GroveConfig, SoundBank, TiltSampler};
