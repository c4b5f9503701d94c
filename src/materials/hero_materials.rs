use bevy::prelude::*;
use bevy_pbr::StandardMaterial;

/// Additive, unlit glow used for the particle cloud. Transparent blend modes skip
/// depth writes, so overlapping points brighten instead of occluding.
pub fn particle_material(color: Color, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(opacity),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        fog_enabled: false,
        ..default()
    }
}

/// Glass-like material for the monolith. Transmission, thickness and opacity are
/// driven by scroll afterwards; these are the resting values.
pub fn monolith_material(transmission: f32, thickness: f32, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE.with_alpha(opacity),
        specular_transmission: transmission,
        thickness,
        ior: 1.5,
        perceptual_roughness: 0.1,
        anisotropy_strength: 0.3,
        alpha_mode: AlphaMode::Blend,
        // render the back faces too
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

pub fn core_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(0.6),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

/// Pushes one frame's values into the monolith material.
pub fn apply_monolith_params(material: &mut StandardMaterial, transmission: f32, thickness: f32, opacity: f32) {
    material.specular_transmission = transmission;
    material.thickness = thickness;
    material.base_color.set_alpha(opacity);
}
