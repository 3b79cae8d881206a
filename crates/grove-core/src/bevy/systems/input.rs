//! Desktop input: keyboard tilt emulation and the tap-to-jump hit test.

use bevy::prelude::*;

use crate::bevy::components::{Ball, ChaseCamera};
use crate::bevy::events::JumpEvent;
use crate::bevy::resources::{GroveConfig, TiltSampler};
use crate::steering::ray_hits_sphere;

/// How far the arrow keys push the emulated tilt sample.
const KEY_TILT: f32 = 0.6;

/// Maps arrow keys to tilt samples, standing in for the device
/// accelerometer on desktop.
pub fn keyboard_tilt(keys: Res<ButtonInput<KeyCode>>, sampler: Res<TiltSampler>) {
    let mut sample = Vec3::ZERO;
    if keys.pressed(KeyCode::ArrowLeft) {
        sample.x -= KEY_TILT;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        sample.x += KEY_TILT;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        sample.y += KEY_TILT;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        sample.y -= KEY_TILT;
    }
    sampler.push(sample);
}

/// Emits a [`JumpEvent`] when the player clicks the ball (or presses
/// space, which skips the hit test).
pub fn handle_tap(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<ChaseCamera>>,
    balls: Query<&Transform, With<Ball>>,
    config: Res<GroveConfig>,
    mut jumps: MessageWriter<JumpEvent>,
) {
    if keys.just_pressed(KeyCode::Space) {
        jumps.write(JumpEvent);
        return;
    }
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };
    let Ok(ball) = balls.single() else {
        return;
    };
    if ray_hits_sphere(
        ray.origin,
        *ray.direction,
        ball.translation,
        config.0.ball.radius,
    ) {
        jumps.write(JumpEvent);
    }
}
