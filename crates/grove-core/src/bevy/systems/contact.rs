//! Tree contact handling: hide the felled tree, bounce the ball, and
//! reveal the tree again after the delay.

use bevy::prelude::*;
use rapier3d::prelude::Vector;

use crate::bevy::components::{Ball, HiddenTree, Tree};
use crate::bevy::events::{PlaySoundEvent, SoundKind, TreeHitEvent};
use crate::bevy::rapier_plugin::{CollisionEvent, PhysicsBody, PhysicsWorldRes};
use crate::bevy::resources::GameTuning;

/// Filters raw collision events down to ball-hits-visible-tree.
///
/// Hidden trees keep their collider, so repeat contacts still show up
/// here; they are dropped by the `Without<HiddenTree>` filter, which keeps
/// the hide idempotent and the reveal countdown untouched.
pub fn detect_tree_hits(
    mut collisions: MessageReader<CollisionEvent>,
    balls: Query<(), With<Ball>>,
    trees: Query<(), (With<Tree>, Without<HiddenTree>)>,
    mut hits: MessageWriter<TreeHitEvent>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(e1, e2) = *event else {
            continue;
        };
        // The pair arrives in arbitrary order.
        let (ball, tree) = if balls.contains(e1) && trees.contains(e2) {
            (e1, e2)
        } else if balls.contains(e2) && trees.contains(e1) {
            (e2, e1)
        } else {
            continue;
        };
        hits.write(TreeHitEvent { ball, tree });
    }
}

/// Responds to a tree hit: hides the tree, starts its reveal countdown,
/// bounces the ball, and requests the saw sound.
pub fn handle_tree_hits(
    mut hits: MessageReader<TreeHitEvent>,
    mut commands: Commands,
    tuning: Res<GameTuning>,
    mut physics: ResMut<PhysicsWorldRes>,
    bodies: Query<&PhysicsBody>,
    mut trees: Query<&mut Visibility, With<Tree>>,
    mut sounds: MessageWriter<PlaySoundEvent>,
) {
    for hit in hits.read() {
        let Ok(mut visibility) = trees.get_mut(hit.tree) else {
            continue;
        };
        *visibility = Visibility::Hidden;
        commands.entity(hit.tree).insert(HiddenTree {
            reveal_in: tuning.reveal_delay,
        });

        if let Ok(body_comp) = bodies.get(hit.ball)
            && let Some(body) = physics.world.get_rigid_body_mut(body_comp.0)
        {
            let bounce = tuning.bounce_impulse;
            let linvel = body.linvel() + Vector::new(bounce.x, bounce.y, bounce.z);
            body.set_linvel(linvel, true);
        }

        tracing::debug!(tree = ?hit.tree, "tree felled");
        sounds.write(PlaySoundEvent {
            kind: SoundKind::Saw,
        });
    }
}

/// Counts down hidden trees and reveals them when their delay elapses.
pub fn reveal_hidden_trees(
    time: Res<Time>,
    mut commands: Commands,
    mut hidden: Query<(Entity, &mut HiddenTree, &mut Visibility)>,
) {
    for (entity, mut tree, mut visibility) in hidden.iter_mut() {
        tree.reveal_in -= time.delta_secs();
        if tree.reveal_in <= 0.0 {
            *visibility = Visibility::Inherited;
            commands.entity(entity).remove::<HiddenTree>();
            tracing::debug!(tree = ?entity, "tree revealed");
        }
    }
}
