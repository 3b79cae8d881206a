//! Rendering setup: camera, lighting, and the meshes attached to spawned
//! gameplay entities.

use bevy::prelude::*;

use crate::bevy::components::{Ball, ChaseCamera, Ground, Tree};
use crate::bevy::resources::GroveConfig;

/// Spawns the chase camera at its resting offset from the ball spawn.
pub fn setup_camera(mut commands: Commands, config: Res<GroveConfig>) {
    let spawn = Vec3::from_array(config.0.ball.spawn);
    let offset = Vec3::from_array(config.0.camera.offset);
    commands.spawn((
        Camera3d::default(),
        ChaseCamera {
            offset,
            damping: config.0.camera.damping,
        },
        // Ambient light is per-camera.
        AmbientLight {
            color: Color::WHITE,
            brightness: 250.0,
            ..default()
        },
        Transform::from_translation(spawn + offset).looking_at(spawn, Vec3::Y),
    ));
}

/// A sun and a sky-ish clear color.
pub fn setup_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(ClearColor(Color::srgb(0.53, 0.78, 0.92)));
}

/// Attaches a sphere mesh to newly spawned balls.
pub fn attach_ball_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GroveConfig>,
    balls: Query<Entity, Added<Ball>>,
) {
    for entity in balls.iter() {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(config.0.ball.radius))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.85, 0.2, 0.2),
                perceptual_roughness: 0.4,
                ..default()
            })),
        ));
    }
}

/// Attaches a trunk and canopy to newly spawned trees.
///
/// The meshes are children of the tree entity, so hiding the tree hides
/// them through inherited visibility.
pub fn attach_tree_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    trees: Query<Entity, Added<Tree>>,
) {
    if trees.is_empty() {
        return;
    }
    let trunk_mesh = meshes.add(Cylinder::new(0.3, 2.0));
    let canopy_mesh = meshes.add(Sphere::new(0.9));
    let trunk_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.3, 0.15),
        ..default()
    });
    let canopy_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.15, 0.5, 0.2),
        ..default()
    });

    for entity in trees.iter() {
        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                Mesh3d(trunk_mesh.clone()),
                MeshMaterial3d(trunk_material.clone()),
                Transform::from_xyz(0.0, 1.0, 0.0),
            ));
            parent.spawn((
                Mesh3d(canopy_mesh.clone()),
                MeshMaterial3d(canopy_material.clone()),
                Transform::from_xyz(0.0, 2.4, 0.0),
            ));
        });
    }
}

/// Attaches a slab mesh to the ground.
pub fn attach_ground_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GroveConfig>,
    grounds: Query<Entity, Added<Ground>>,
) {
    for entity in grounds.iter() {
        let [hx, hz] = config.0.ground.half_extents;
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Cuboid::new(hx * 2.0, 0.2, hz * 2.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.35, 0.6, 0.3),
                perceptual_roughness: 0.9,
                ..default()
            })),
        ));
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;

    #[test]
    fn test_camera_carries_ambient_light() {
        let mut world = World::new();
        world.insert_resource(GroveConfig::default());
        world.run_system_once(setup_camera).unwrap();

        let mut cameras = world.query::<(&ChaseCamera, &AmbientLight)>();
        assert_eq!(cameras.iter(&world).count(), 1);
    }
}
