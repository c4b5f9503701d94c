use std::fs::File;
use std::path::Path;
use bevy::prelude::*;
use ron::de::from_reader;
use serde::{Deserialize, Serialize};
use crate::core::hero_error::HeroError;
use crate::core::interpolation::Keyframes;
use crate::core::scroll::ScrollOffset;

pub const DEFAULT_SETTINGS_PATH: &str = "assets/hero.ron";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParticleSettings {
    pub count: usize,
    // side length of the cube the points are scattered in
    pub spread: f32,
    pub size: f32,
    pub color: String,
    pub seed: Option<u64>,
    pub spin_speed: f32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        ParticleSettings {
            count: 1500,
            spread: 65.0,
            size: 0.15,
            color: "#818cf8".to_string(),
            seed: None,
            spin_speed: 0.04,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ScrollSettings {
    pub offsets: [ScrollOffset; 2],
    // sizes in viewport heights
    pub container_height: f32,
    pub page_height: f32,
    // pixels per wheel "line"
    pub line_height: f32,
    pub key_step: f32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        ScrollSettings {
            offsets: [ScrollOffset::START_START, ScrollOffset::END_START],
            container_height: 1.0,
            page_height: 2.0,
            line_height: 40.0,
            key_step: 60.0,
        }
    }
}

/// Control points for every scroll-driven parameter.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct KeyframeSettings {
    pub particle_opacity: Keyframes,
    pub particle_scale: Keyframes,
    pub monolith_scale: Keyframes,
    pub monolith_rotation: Keyframes,
    pub monolith_transmission: Keyframes,
    pub monolith_thickness: Keyframes,
    pub monolith_opacity: Keyframes,
    pub text_opacity: Keyframes,
    // multiples of the copy block's own height
    pub text_offset: Keyframes,
}

impl Default for KeyframeSettings {
    fn default() -> Self {
        KeyframeSettings {
            particle_opacity: Keyframes::from_sorted(vec![(0.0, 0.8), (0.2, 0.8), (1.0, 0.0)]),
            particle_scale: Keyframes::linear(1.2, 0.01),
            monolith_scale: Keyframes::linear(0.8, 4.0),
            monolith_rotation: Keyframes::linear(0.0, std::f32::consts::TAU),
            monolith_transmission: Keyframes::linear(0.4, 1.0),
            monolith_thickness: Keyframes::linear(1.0, 4.0),
            monolith_opacity: Keyframes::linear(0.2, 1.0),
            text_opacity: Keyframes::from_sorted(vec![(0.0, 1.0), (0.1, 1.0), (0.2, 0.0)]),
            text_offset: Keyframes::linear(0.0, -2.0),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MotionSettings {
    pub monolith_spin_speed: f32,
    pub monolith_roll_speed: f32,
    pub monolith_roll_amplitude: f32,
    pub float_speed: f32,
    pub float_rotation_intensity: f32,
    pub float_intensity: f32,
    pub intro_duration: f32,
    pub intro_rise: f32,
    pub footer_delay: f32,
    pub footer_fade: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        MotionSettings {
            monolith_spin_speed: 0.2,
            monolith_roll_speed: 0.4,
            monolith_roll_amplitude: 0.1,
            float_speed: 2.0,
            float_rotation_intensity: 0.5,
            float_intensity: 0.5,
            intro_duration: 1.8,
            intro_rise: 40.0,
            footer_delay: 2.0,
            footer_fade: 0.3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CopySettings {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub tagline: String,
    pub primary_action: String,
    pub secondary_action: String,
    pub status: String,
    pub coordinates: String,
}

impl Default for CopySettings {
    fn default() -> Self {
        CopySettings {
            badge: "XAI V4.2 / STRUCTURAL CORE".to_string(),
            headline: "DATA".to_string(),
            headline_accent: "SYNERGY.".to_string(),
            tagline: "Transforming the noise of infinite data into a singular, high-fidelity command environment.".to_string(),
            primary_action: "INITIALIZE SYSTEM".to_string(),
            secondary_action: "DOCUMENTATION".to_string(),
            status: "NEURAL LINK ONLINE".to_string(),
            coordinates: "37.7749° N, 122.4194° W".to_string(),
        }
    }
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HeroSettings {
    pub particles: ParticleSettings,
    pub scroll: ScrollSettings,
    pub keyframes: KeyframeSettings,
    pub motion: MotionSettings,
    pub copy: CopySettings,
}

impl HeroSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HeroError> {
        let file = File::open(path.as_ref())?;
        let settings: HeroSettings = from_reader(file)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads from `path`, falling back to the defaults when the file is missing or bad.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No hero settings at {:?}, using defaults", path);
            return HeroSettings::default();
        }
        match HeroSettings::load(path) {
            Ok(settings) => {
                info!("Loaded hero settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                HeroSettings::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), HeroError> {
        parse_color(&self.particles.color)?;
        non_negative("particle spread", self.particles.spread)?;
        non_negative("particle size", self.particles.size)?;
        non_negative("wheel line height", self.scroll.line_height)?;
        non_negative("key scroll step", self.scroll.key_step)?;
        if !(self.scroll.container_height >= 0.0 && self.scroll.page_height >= 1.0) {
            return Err(HeroError::Settings(format!(
                "container height must be non-negative and the page at least one viewport tall, got {} / {}",
                self.scroll.container_height, self.scroll.page_height
            )));
        }
        Ok(())
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), HeroError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HeroError::Settings(format!("{} must be finite and non-negative, got {}", name, value)))
    }
}

pub fn parse_color(hex: &str) -> Result<Color, HeroError> {
    Srgba::hex(hex)
        .map(Color::from)
        .map_err(|e| HeroError::InvalidColor(format!("'{}': {}", hex, e)))
}
