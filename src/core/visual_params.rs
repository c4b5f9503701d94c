use bevy::prelude::*;
use crate::core::settings::HeroSettings;

/// Gentle bob and sway applied to the monolith's float rig.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatPose {
    pub rotation: Vec3,
    pub height: f32,
}

impl FloatPose {
    pub fn at(elapsed: f32, speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        let phase = elapsed / 4.0 * speed;
        let (sin, cos) = phase.sin_cos();
        FloatPose {
            rotation: Vec3::new(cos / 8.0, sin / 8.0, sin / 20.0) * rotation_intensity,
            height: sin / 10.0 * float_intensity,
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_xyz(0.0, self.height, 0.0).with_rotation(Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ))
    }
}

/// Every value the frame writers push into the scene for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualParams {
    pub particle_opacity: f32,
    pub particle_scale: f32,
    pub particle_yaw: f32,
    pub monolith_scale: f32,
    pub monolith_yaw: f32,
    pub monolith_roll: f32,
    pub monolith_transmission: f32,
    pub monolith_thickness: f32,
    pub monolith_opacity: f32,
    pub float_pose: FloatPose,
    pub text_opacity: f32,
    pub text_offset: f32,
}

impl VisualParams {
    pub fn sample(settings: &HeroSettings, progress: f32, elapsed: f32) -> Self {
        let keys = &settings.keyframes;
        let motion = &settings.motion;

        VisualParams {
            particle_opacity: keys.particle_opacity.sample(progress),
            particle_scale: keys.particle_scale.sample(progress),
            particle_yaw: elapsed * settings.particles.spin_speed,
            monolith_scale: keys.monolith_scale.sample(progress),
            monolith_yaw: elapsed * motion.monolith_spin_speed + keys.monolith_rotation.sample(progress),
            monolith_roll: (elapsed * motion.monolith_roll_speed).sin() * motion.monolith_roll_amplitude,
            monolith_transmission: keys.monolith_transmission.sample(progress),
            monolith_thickness: keys.monolith_thickness.sample(progress),
            monolith_opacity: keys.monolith_opacity.sample(progress),
            float_pose: FloatPose::at(elapsed, motion.float_speed, motion.float_rotation_intensity, motion.float_intensity),
            text_opacity: keys.text_opacity.sample(progress),
            text_offset: keys.text_offset.sample(progress),
        }
    }
}
