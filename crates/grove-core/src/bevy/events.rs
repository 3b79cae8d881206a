//! Bevy Messages for game events.

use bevy::prelude::*;

/// The ball touched a visible tree.
#[derive(Message, Debug, Clone, Copy)]
pub struct TreeHitEvent {
    pub ball: Entity,
    pub tree: Entity,
}

/// The player requested a jump (tap or key press on the ball).
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct JumpEvent;

/// Request to play a one-shot sound effect.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySoundEvent {
    pub kind: SoundKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    /// Played on the tap jump.
    Jump,
    /// Played when the ball fells a tree.
    Saw,
}

/// Emitted once the scene entities have been spawned.
#[derive(Message, Debug, Clone)]
pub struct SceneSpawnedEvent {
    pub name: String,
}
