use bevy::prelude::*;
use bevy_pbr::StandardMaterial;
use crate::core::components::{FloatRig, MonolithGroup, MonolithMesh, ParticleCloud};
use crate::core::scroll::ProgressSource;
use crate::core::settings::HeroSettings;
use crate::core::visual_params::VisualParams;
use crate::materials::hero_materials::apply_monolith_params;
use crate::spawning::scene_spawning::HeroHandles;

// Writers only touch what `HeroHandles` points at. Before mount, or if an entity or
// material has gone missing, the write is skipped for that frame.

pub fn write_particles<S: ProgressSource + Resource>(
    source: Res<S>,
    time: Res<Time>,
    settings: Res<HeroSettings>,
    handles: Option<Res<HeroHandles>>,
    mut transforms: Query<&mut Transform, With<ParticleCloud>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(handles) = handles else { return };
    let params = VisualParams::sample(&settings, source.progress(), time.elapsed_secs());

    if let Ok(mut transform) = transforms.get_mut(handles.particles) {
        transform.rotation = Quat::from_rotation_y(params.particle_yaw);
        transform.scale = Vec3::splat(params.particle_scale);
    }
    if let Some(material) = materials.get_mut(&handles.particle_material) {
        material.base_color.set_alpha(params.particle_opacity);
    }
}

pub fn write_monolith<S: ProgressSource + Resource>(
    source: Res<S>,
    time: Res<Time>,
    settings: Res<HeroSettings>,
    handles: Option<Res<HeroHandles>>,
    mut transforms: Query<&mut Transform, Or<(With<MonolithGroup>, With<FloatRig>, With<MonolithMesh>)>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(handles) = handles else { return };
    let params = VisualParams::sample(&settings, source.progress(), time.elapsed_secs());

    if let Ok(mut group) = transforms.get_mut(handles.monolith_group) {
        group.scale = Vec3::splat(params.monolith_scale);
    }
    if let Ok(mut rig) = transforms.get_mut(handles.float_rig) {
        *rig = params.float_pose.transform();
    }
    if let Ok(mut mesh) = transforms.get_mut(handles.monolith) {
        mesh.rotation = Quat::from_euler(EulerRot::XYZ, 0.0, params.monolith_yaw, params.monolith_roll);
    }
    if let Some(material) = materials.get_mut(&handles.monolith_material) {
        apply_monolith_params(
            material,
            params.monolith_transmission,
            params.monolith_thickness,
            params.monolith_opacity,
        );
    }
}
