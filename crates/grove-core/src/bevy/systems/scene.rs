//! Scene spawning: builds the ECS entities and their Rapier bodies and
//! colliders from the loaded config.

use bevy::prelude::*;
use rapier3d::prelude::{
    ActiveEvents, ColliderBuilder, Group, InteractionGroups, InteractionTestMode,
    RigidBodyBuilder, Vector,
};

use crate::bevy::components::{Ball, Ground, Tree};
use crate::bevy::events::SceneSpawnedEvent;
use crate::bevy::rapier_plugin::{PhysicsBody, PhysicsCollider, PhysicsWorldRes};
use crate::bevy::resources::GroveConfig;
use crate::physics::{BALL_GROUP, GROUND_GROUP, TREE_GROUP};

/// Tree trunk collider half-height.
const TREE_HALF_HEIGHT: f32 = 1.0;
/// Tree trunk collider radius.
const TREE_RADIUS: f32 = 0.3;

/// Spawns the ground, the ball, and the trees.
///
/// Each entity gets its Rapier counterpart with `user_data` set to the
/// entity bits, so collision events can be mapped back to entities.
pub fn spawn_scene(
    mut commands: Commands,
    config: Res<GroveConfig>,
    mut physics: ResMut<PhysicsWorldRes>,
    mut spawned: MessageWriter<SceneSpawnedEvent>,
) {
    let config = &config.0;

    // Ground: a flat static slab just below y = 0.
    let [hx, hz] = config.ground.half_extents;
    let ground = commands
        .spawn((Ground, Transform::from_xyz(0.0, -0.1, 0.0), Visibility::default()))
        .id();
    let ground_collider = ColliderBuilder::cuboid(hx, 0.1, hz)
        .translation(Vector::new(0.0, -0.1, 0.0))
        .collision_groups(InteractionGroups::new(
            GROUND_GROUP,
            Group::ALL,
            InteractionTestMode::And,
        ))
        .user_data(ground.to_bits() as u128)
        .build();
    let ground_handle = physics.world.add_static_collider(ground_collider);
    commands.entity(ground).insert(PhysicsCollider(ground_handle));

    // Ball: the only dynamic body in the scene. CCD keeps fast rolls from
    // tunneling through tree trunks.
    let spawn = Vec3::from_array(config.ball.spawn);
    let ball = commands
        .spawn((Ball, Transform::from_translation(spawn), Visibility::default()))
        .id();
    let ball_body = RigidBodyBuilder::dynamic()
        .translation(Vector::new(spawn.x, spawn.y, spawn.z))
        .ccd_enabled(true)
        .user_data(ball.to_bits() as u128)
        .build();
    let ball_handle = physics.world.add_rigid_body(ball_body);
    let ball_collider = ColliderBuilder::ball(config.ball.radius)
        .restitution(config.ball.restitution)
        .friction(config.ball.friction)
        .active_events(ActiveEvents::COLLISION_EVENTS)
        .collision_groups(InteractionGroups::new(
            BALL_GROUP,
            Group::ALL,
            InteractionTestMode::And,
        ))
        .build();
    physics.world.add_collider(ball_collider, ball_handle);
    commands.entity(ball).insert(PhysicsBody(ball_handle));

    // Trees: static trunk colliders, only interested in the ball.
    let positions = config.tree_positions();
    for pos in &positions {
        let pos = Vec3::from_array(*pos);
        let tree = commands
            .spawn((Tree, Transform::from_translation(pos), Visibility::default()))
            .id();
        let collider = ColliderBuilder::cylinder(TREE_HALF_HEIGHT, TREE_RADIUS)
            .translation(Vector::new(pos.x, pos.y + TREE_HALF_HEIGHT, pos.z))
            .collision_groups(InteractionGroups::new(
                TREE_GROUP,
                BALL_GROUP,
                InteractionTestMode::And,
            ))
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .user_data(tree.to_bits() as u128)
            .build();
        let handle = physics.world.add_static_collider(collider);
        commands.entity(tree).insert(PhysicsCollider(handle));
    }

    tracing::info!(
        scene = %config.meta.name,
        trees = positions.len(),
        "scene spawned"
    );
    spawned.write(SceneSpawnedEvent {
        name: config.meta.name.clone(),
    });
}
