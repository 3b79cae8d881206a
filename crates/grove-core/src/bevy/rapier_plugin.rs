//! Custom Rapier3D physics plugin for Bevy.
//!
//! Replaces `bevy_rapier3d` with direct Rapier3D integration via
//! `PhysicsWorld`. The physics state lives in a single resource, colliders
//! map back to entities via `user_data`, and the pipeline steps on the
//! fixed-update schedule.

use bevy::prelude::*;
use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};

use crate::physics::PhysicsWorld;

/// Bevy Resource wrapping `PhysicsWorld` for direct Rapier access.
#[derive(Resource)]
pub struct PhysicsWorldRes {
    pub world: PhysicsWorld,
    /// Collision events collected during the last physics step.
    collision_events: Vec<PhysicsCollisionEvent>,
}

impl PhysicsWorldRes {
    pub fn new() -> Self {
        Self {
            world: PhysicsWorld::new(),
            collision_events: Vec::new(),
        }
    }

    /// Returns the collision events from the last step and clears the buffer.
    pub fn drain_collision_events(&mut self) -> Vec<PhysicsCollisionEvent> {
        std::mem::take(&mut self.collision_events)
    }
}

impl Default for PhysicsWorldRes {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity ↔ RigidBody mapping component.
#[derive(Component, Debug, Clone, Copy)]
pub struct PhysicsBody(pub RigidBodyHandle);

/// Entity ↔ Collider mapping (for static colliders without a body).
#[derive(Component, Debug, Clone, Copy)]
pub struct PhysicsCollider(pub ColliderHandle);

/// Phases of the fixed-update physics tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    /// Input systems writing into Rapier bodies (tilt force, jump).
    ApplyInputs,
    /// Run the physics simulation step.
    Step,
    /// Sync Rapier state back into Bevy Transforms and publish events.
    SyncFromRapier,
}

/// Collision event from the physics simulation, already entity-mapped.
#[derive(Debug, Clone)]
pub enum PhysicsCollisionEvent {
    Started(Entity, Entity),
    Stopped(Entity, Entity),
}

/// Bevy Message for collision events.
#[derive(Message, Debug, Clone, Copy)]
pub enum CollisionEvent {
    Started(Entity, Entity),
    Stopped(Entity, Entity),
}

/// Runs one physics simulation step and collects collision events.
pub fn run_physics_step(mut physics: ResMut<PhysicsWorldRes>) {
    let raw = physics.world.step_with_events();

    let mut events = Vec::with_capacity(raw.len());
    for event in raw {
        match event {
            rapier3d::prelude::CollisionEvent::Started(h1, h2, _flags) => {
                let e1 = collider_to_entity(&physics.world, h1);
                let e2 = collider_to_entity(&physics.world, h2);
                if let (Some(e1), Some(e2)) = (e1, e2) {
                    events.push(PhysicsCollisionEvent::Started(e1, e2));
                }
            }
            rapier3d::prelude::CollisionEvent::Stopped(h1, h2, _flags) => {
                let e1 = collider_to_entity(&physics.world, h1);
                let e2 = collider_to_entity(&physics.world, h2);
                if let (Some(e1), Some(e2)) = (e1, e2) {
                    events.push(PhysicsCollisionEvent::Stopped(e1, e2));
                }
            }
        }
    }

    physics.collision_events = events;
}

/// Syncs dynamic Rapier body state back to Bevy Transforms.
pub fn sync_from_rapier(
    physics: Res<PhysicsWorldRes>,
    mut bodies: Query<(&PhysicsBody, &mut Transform)>,
) {
    for (body_comp, mut transform) in bodies.iter_mut() {
        if let Some(body) = physics.world.rigid_body_set.get(body_comp.0)
            && body.is_dynamic()
        {
            let pos = body.translation();
            transform.translation = Vec3::new(pos.x, pos.y, pos.z);
            let rot = body.rotation();
            transform.rotation = Quat::from_xyzw(rot.x, rot.y, rot.z, rot.w);
        }
    }
}

/// Publishes collision events as Bevy Messages.
pub fn publish_collision_events(
    mut physics: ResMut<PhysicsWorldRes>,
    mut writer: MessageWriter<CollisionEvent>,
) {
    for event in physics.drain_collision_events() {
        match event {
            PhysicsCollisionEvent::Started(e1, e2) => {
                writer.write(CollisionEvent::Started(e1, e2));
            }
            PhysicsCollisionEvent::Stopped(e1, e2) => {
                writer.write(CollisionEvent::Stopped(e1, e2));
            }
        }
    }
}

/// Maps a Rapier `ColliderHandle` to a Bevy Entity via `user_data` stored in
/// the collider's parent body or the collider itself.
fn collider_to_entity(world: &PhysicsWorld, handle: ColliderHandle) -> Option<Entity> {
    let collider = world.collider_set.get(handle)?;
    let user_data = if let Some(parent) = collider.parent() {
        world.rigid_body_set.get(parent)?.user_data
    } else {
        collider.user_data
    };

    if user_data == 0 {
        return None;
    }

    Some(Entity::from_bits(user_data as u64))
}

/// Physics plugin replacing `bevy_rapier3d`.
pub struct GrovePhysicsPlugin;

impl Plugin for GrovePhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PhysicsWorldRes::new());

        app.add_message::<CollisionEvent>();

        app.configure_sets(
            FixedUpdate,
            (
                PhysicsSet::ApplyInputs,
                PhysicsSet::Step,
                PhysicsSet::SyncFromRapier,
            )
                .chain(),
        );

        app.add_systems(FixedUpdate, run_physics_step.in_set(PhysicsSet::Step));
        app.add_systems(
            FixedUpdate,
            (sync_from_rapier, publish_collision_events)
                .chain()
                .in_set(PhysicsSet::SyncFromRapier),
        );
    }
}
