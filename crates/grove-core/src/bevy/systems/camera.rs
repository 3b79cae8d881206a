//! Chase camera smoothing.

use bevy::prelude::*;

use crate::bevy::components::{Ball, ChaseCamera};
use crate::steering::{chase_target, damp_toward};

/// Eases every chase camera toward its offset point above and behind the
/// ball. Runs once per fixed tick, before input forces are applied, so the
/// camera trails the ball's position from the previous step.
pub fn update_chase_camera(
    balls: Query<&Transform, (With<Ball>, Without<ChaseCamera>)>,
    mut cameras: Query<(&mut Transform, &ChaseCamera), Without<Ball>>,
) {
    let Ok(ball) = balls.single() else {
        return;
    };
    for (mut transform, camera) in cameras.iter_mut() {
        let target = chase_target(ball.translation, camera.offset);
        transform.translation = damp_toward(transform.translation, target, camera.damping);
    }
}
