use bevy::prelude::*;
use std::f32::consts::PI;

// three-style candela figures to Bevy's lumens
pub(crate) fn candela_to_lumens(candela: f32) -> f32 {
    candela * 4.0 * PI
}

pub(crate) fn spawn_point_light(
    commands: &mut Commands,
    point_light: PointLight,
    transform: Transform,
    parent: Entity,
) -> Entity {
    let entity = commands.spawn_empty()
        .insert(point_light)
        .insert(transform)
        .insert(Name::new("CoreLight"))
        .set_parent(parent)
        .id();

    entity
}

pub(crate) fn spawn_spot_light(
    commands: &mut Commands,
    spot_light: SpotLight,
    transform: Transform,
    parent: Entity,
) -> Entity {
    let entity = commands.spawn_empty()
        .insert(spot_light)
        .insert(transform)
        .insert(Name::new("KeyLight"))
        .set_parent(parent)
        .id();

    entity
}

/// Core glow: a small point light inside the monolith.
pub(crate) fn core_light(color: Color) -> PointLight {
    PointLight {
        color,
        intensity: candela_to_lumens(40.0),
        range: 20.0,
        shadows_enabled: false,
        ..default()
    }
}

/// Narrow key light from the upper right. Full penumbra means the cone fades from its axis.
pub(crate) fn key_light() -> SpotLight {
    SpotLight {
        color: Color::WHITE,
        intensity: candela_to_lumens(3.0),
        range: 60.0,
        outer_angle: 0.15,
        inner_angle: 0.0,
        shadows_enabled: false,
        ..default()
    }
}
