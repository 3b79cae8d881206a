//! Tilt steering and the tap jump: both mutate the ball's linear velocity
//! directly, before the physics step of the same tick.

use bevy::prelude::*;
use rapier3d::prelude::Vector;

use crate::bevy::components::Ball;
use crate::bevy::events::{JumpEvent, PlaySoundEvent, SoundKind};
use crate::bevy::rapier_plugin::{PhysicsBody, PhysicsWorldRes};
use crate::bevy::resources::{GameTuning, TiltSampler};
use crate::steering::tilt_force;

/// Adds the tilt-derived velocity nudge to the ball every tick.
///
/// With the sampler at rest this still applies the forward drift coming
/// from the rest bias, so the ball always creeps down the track.
pub fn apply_tilt_force(
    sampler: Res<TiltSampler>,
    tuning: Res<GameTuning>,
    mut physics: ResMut<PhysicsWorldRes>,
    balls: Query<&PhysicsBody, With<Ball>>,
) {
    let Ok(body_comp) = balls.single() else {
        return;
    };
    let Some(body) = physics.world.get_rigid_body_mut(body_comp.0) else {
        return;
    };
    let force = tilt_force(sampler.sample(), tuning.force_scale, tuning.rest_bias);
    let linvel = body.linvel() + Vector::new(force.x, force.y, force.z);
    body.set_linvel(linvel, true);
}

/// Applies the jump impulse for each pending [`JumpEvent`].
pub fn apply_jump(
    mut jumps: MessageReader<JumpEvent>,
    tuning: Res<GameTuning>,
    mut physics: ResMut<PhysicsWorldRes>,
    balls: Query<&PhysicsBody, With<Ball>>,
    mut sounds: MessageWriter<PlaySoundEvent>,
) {
    let Ok(body_comp) = balls.single() else {
        return;
    };
    for _ in jumps.read() {
        let Some(body) = physics.world.get_rigid_body_mut(body_comp.0) else {
            return;
        };
        let impulse = tuning.jump_impulse;
        let linvel = body.linvel() + Vector::new(impulse.x, impulse.y, impulse.z);
        body.set_linvel(linvel, true);
        sounds.write(PlaySoundEvent {
            kind: SoundKind::Jump,
        });
    }
}
