use std::path::PathBuf;
use bevy::app::{App, Plugin};
use bevy::prelude::*;

use crate::core::components::HeroAction;
use crate::core::scroll::ScrollTracker;
use crate::core::settings::{HeroSettings, DEFAULT_SETTINGS_PATH};
use crate::spawning::helpers::GenRng;
use crate::spawning::scene_spawning::spawn_hero_camera;
use crate::systems::frame_writer::{write_monolith, write_particles};
use crate::systems::lifecycle::*;
use crate::systems::overlay::{button_actions, button_hover, write_overlay};
use crate::systems::scroll_input::{init_scroll_layout, scroll_key_input, scroll_wheel_input, track_layout};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroSet {
    Lifecycle,
    Input,
    Write,
}

pub struct HeroPlugin {
    pub settings: Option<HeroSettings>,
    pub settings_path: PathBuf,
}

impl Default for HeroPlugin {
    fn default() -> Self {
        HeroPlugin {
            settings: None,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
        }
    }
}

impl HeroPlugin {
    pub fn with_settings(settings: HeroSettings) -> Self {
        HeroPlugin { settings: Some(settings), ..default() }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        HeroPlugin { settings: None, settings_path: path.into() }
    }
}

impl Plugin for HeroPlugin {
    fn build(&self, app: &mut App) {
        let settings = self.settings.clone()
            .unwrap_or_else(|| HeroSettings::load_or_default(&self.settings_path));

        app
            .insert_resource(GenRng::seeded_or_not(settings.particles.seed))
            .insert_resource(ScrollTracker::with_offsets(settings.scroll.offsets))
            .insert_resource(ClearColor(Color::BLACK))
            // three's 0.6 ambient, in cd/m²
            .insert_resource(AmbientLight { color: Color::WHITE, brightness: 300.0 })
            .insert_resource(settings)
            .init_state::<HeroState>()
            .add_event::<HeroMounted>()
            .add_event::<UnmountHero>()
            .add_event::<MountHero>()
            .add_event::<HeroAction>();

        app.configure_sets(Update, (HeroSet::Lifecycle, HeroSet::Input, HeroSet::Write).chain());

        app.add_systems(Startup, spawn_hero_camera);
        app.add_systems(OnEnter(HeroState::Loading), begin_loading);
        app.add_systems(OnEnter(HeroState::Unmounted), teardown);

        // Pending build is polled before teardown requests so an unmount in the same frame wins.
        app.add_systems(Update, (
            poll_pending_scene.run_if(in_state(HeroState::Loading)),
            request_unmount,
            request_mount,
        ).chain().in_set(HeroSet::Lifecycle));

        // Scroll listeners are detached once unmounted.
        app.add_systems(Update, (
            init_scroll_layout,
            track_layout,
            scroll_wheel_input,
            scroll_key_input,
        ).chain().in_set(HeroSet::Input).run_if(not(in_state(HeroState::Unmounted))));

        app.add_systems(Update, (
            write_particles::<ScrollTracker>,
            write_monolith::<ScrollTracker>,
        ).in_set(HeroSet::Write).run_if(in_state(HeroState::Mounted)));

        app.add_systems(Update, (
            button_hover,
            button_actions,
            write_overlay::<ScrollTracker>,
        ).chain().in_set(HeroSet::Write).run_if(not(in_state(HeroState::Unmounted))));
    }
}
