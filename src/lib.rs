pub mod core;
pub mod materials;
pub mod spawning;
pub mod systems;

pub mod prelude {
    pub use crate::core::components::HeroAction;
    pub use crate::core::hero_error::HeroError;
    pub use crate::core::hero_plugin::{HeroPlugin, HeroSet};
    pub use crate::core::interpolation::Keyframes;
    pub use crate::core::scroll::{FixedProgress, ProgressSource, ScrollOffset, ScrollTracker};
    pub use crate::core::settings::HeroSettings;
    pub use crate::spawning::scene_spawning::HeroHandles;
    pub use crate::systems::lifecycle::{HeroMounted, HeroState, MountHero, UnmountHero};
}
