pub mod components;
pub mod hero_error;
pub mod hero_plugin;
pub mod interpolation;
pub mod scroll;
pub mod settings;
pub mod visual_params;
