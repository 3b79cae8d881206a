//! ECS components.

use bevy::prelude::*;

use crate::steering::{CAMERA_DAMPING, CAMERA_OFFSET};

/// The player-controlled rolling ball.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Ball;

/// A tree obstacle.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Tree;

/// The ground plane.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Ground;

/// Countdown attached to a tree while it is hidden after contact.
///
/// Decremented every fixed tick; the tree reappears when it reaches zero.
/// Contacts while this component is present are ignored, so a tree carries
/// at most one countdown.
#[derive(Component, Debug, Clone, Copy)]
pub struct HiddenTree {
    pub reveal_in: f32,
}

/// Camera that trails the ball at a fixed offset with one-pole smoothing.
#[derive(Component, Debug, Clone, Copy)]
pub struct ChaseCamera {
    pub offset: Vec3,
    pub damping: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            offset: CAMERA_OFFSET,
            damping: CAMERA_DAMPING,
        }
    }
}
