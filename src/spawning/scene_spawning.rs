use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use bevy_pbr::StandardMaterial;
use crate::core::components::*;
use crate::core::settings::{parse_color, HeroSettings, ParticleSettings};
use crate::materials::hero_materials::{core_material, monolith_material, particle_material};
use crate::spawning::geometry::{dodecahedron_mesh, point_cloud_mesh};
use crate::spawning::helpers::{scatter_points, GenRng};
use crate::spawning::light_spawning::{core_light, key_light, spawn_point_light, spawn_spot_light};

const MONOLITH_RADIUS: f32 = 2.0;
const CORE_SCALE: f32 = 0.35;

/// Meshes that are expensive enough to build off the main thread.
pub struct BuiltScene {
    pub particles: Mesh,
    pub particle_count: usize,
    pub monolith: Mesh,
}

pub fn build_scene_meshes(particles: &ParticleSettings, seed: u64) -> BuiltScene {
    let mut rng = GenRng::new(seed);
    let points = scatter_points(rng.rng_mut(), particles.count, particles.spread);
    BuiltScene {
        particles: point_cloud_mesh(&points, particles.size),
        particle_count: points.len(),
        monolith: dodecahedron_mesh(MONOLITH_RADIUS),
    }
}

/// The objects the frame writers drive. Only present between mount and teardown.
#[derive(Resource, Clone, Debug)]
pub struct HeroHandles {
    pub root: Entity,
    pub particles: Entity,
    pub particle_material: Handle<StandardMaterial>,
    pub monolith_group: Entity,
    pub float_rig: Entity,
    pub monolith: Entity,
    pub monolith_material: Handle<StandardMaterial>,
}

pub fn spawn_hero_camera(mut commands: Commands) {
    commands.spawn_empty()
        .insert(Camera3d::default())
        .insert(Projection::Perspective(PerspectiveProjection {
            fov: 35f32.to_radians(),
            ..default()
        }))
        .insert(Transform::from_xyz(0.0, 0.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y))
        .insert(Name::new("HeroCamera"))
        .insert(HeroCamera);
}

pub(crate) fn spawn_hero_scene(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &HeroSettings,
    built: BuiltScene,
) -> HeroHandles {
    let keys = &settings.keyframes;
    let particle_color = parse_color(&settings.particles.color).unwrap_or(Color::srgb_u8(0x81, 0x8c, 0xf8));
    let core_color = Color::srgb_u8(0x63, 0x66, 0xf1);

    let root = commands.spawn_empty()
        .insert(Name::new("HeroRoot"))
        .insert(Transform::default())
        .insert(Visibility::default())
        .insert(HeroRoot)
        .id();

    spawn_spot_light(
        commands,
        key_light(),
        Transform::from_xyz(20.0, 20.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
        root,
    );

    let particle_material = materials.add(particle_material(particle_color, keys.particle_opacity.first()));
    let particles = commands.spawn_empty()
        .insert(Mesh3d(meshes.add(built.particles)))
        .insert(MeshMaterial3d(particle_material.clone()))
        .insert(Transform::from_scale(Vec3::splat(keys.particle_scale.first())))
        .insert(NoFrustumCulling)
        .insert(Name::new(format!("DataParticles ({})", built.particle_count)))
        .insert(ParticleCloud)
        .set_parent(root)
        .id();

    let monolith_group = commands.spawn_empty()
        .insert(Transform::from_scale(Vec3::splat(keys.monolith_scale.first())))
        .insert(Visibility::default())
        .insert(Name::new("Monolith"))
        .insert(MonolithGroup)
        .set_parent(root)
        .id();

    let float_rig = commands.spawn_empty()
        .insert(Transform::default())
        .insert(Visibility::default())
        .insert(Name::new("FloatRig"))
        .insert(FloatRig)
        .set_parent(monolith_group)
        .id();

    let monolith_material = materials.add(monolith_material(
        keys.monolith_transmission.first(),
        keys.monolith_thickness.first(),
        keys.monolith_opacity.first(),
    ));
    let monolith = commands.spawn_empty()
        .insert(Mesh3d(meshes.add(built.monolith)))
        .insert(MeshMaterial3d(monolith_material.clone()))
        .insert(Transform::default())
        .insert(Name::new("MonolithMesh"))
        .insert(MonolithMesh)
        .set_parent(float_rig)
        .id();

    let core = commands.spawn_empty()
        .insert(Mesh3d(meshes.add(Sphere::new(1.0).mesh().uv(32, 32))))
        .insert(MeshMaterial3d(materials.add(core_material(core_color))))
        .insert(Transform::from_scale(Vec3::splat(CORE_SCALE)))
        .insert(Name::new("MonolithCore"))
        .insert(MonolithCore)
        .set_parent(monolith_group)
        .id();
    spawn_point_light(commands, core_light(core_color), Transform::default(), core);

    HeroHandles {
        root,
        particles,
        particle_material,
        monolith_group,
        float_rig,
        monolith,
        monolith_material,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_meshes_follow_particle_settings() {
        let settings = ParticleSettings { count: 40, ..default() };
        let built = build_scene_meshes(&settings, 132);
        assert_eq!(built.particle_count, 40);
        assert_eq!(built.particles.count_vertices(), 40 * 6);
        assert_eq!(built.monolith.count_vertices(), 12 * 9);
    }
}
