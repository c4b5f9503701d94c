pub mod geometry;
pub mod helpers;
pub mod light_spawning;
pub mod overlay;
pub mod scene_spawning;
