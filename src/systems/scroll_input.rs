use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use crate::core::scroll::ScrollTracker;
use crate::core::settings::HeroSettings;

/// Lays the page out against the primary window the first time one is available.
pub fn init_scroll_layout(
    settings: Res<HeroSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut tracker: ResMut<ScrollTracker>,
) {
    if tracker.container.is_some() {
        return;
    }
    if let Ok(window) = windows.get_single() {
        tracker.relayout(window.height(), settings.scroll.container_height, settings.scroll.page_height);
    }
}

pub fn track_layout(
    mut resized: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    settings: Res<HeroSettings>,
    mut tracker: ResMut<ScrollTracker>,
) {
    let primary = primary.get_single().ok();
    for event in resized.read() {
        if primary.is_some_and(|window| window != event.window) {
            continue;
        }
        tracker.relayout(event.height, settings.scroll.container_height, settings.scroll.page_height);
    }
}

pub fn scroll_wheel_input(
    mut wheel: EventReader<MouseWheel>,
    settings: Res<HeroSettings>,
    mut tracker: ResMut<ScrollTracker>,
) {
    for event in wheel.read() {
        let pixels = match event.unit {
            MouseScrollUnit::Line => event.y * settings.scroll.line_height,
            MouseScrollUnit::Pixel => event.y,
        };
        // wheel up is positive, the page moves the other way
        tracker.scroll_by(-pixels);
    }
}

pub fn scroll_key_input(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<HeroSettings>,
    mut tracker: ResMut<ScrollTracker>,
) {
    let page = tracker.viewport_height() * 0.9;
    let step = settings.scroll.key_step;

    if keys.just_pressed(KeyCode::Home) {
        tracker.scroll_to(0.0);
    }
    if keys.just_pressed(KeyCode::End) {
        let max = tracker.max_scroll();
        tracker.scroll_to(max);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        tracker.scroll_by(step);
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        tracker.scroll_by(-step);
    }
    if keys.just_pressed(KeyCode::PageDown) || keys.just_pressed(KeyCode::Space) {
        tracker.scroll_by(page);
    }
    if keys.just_pressed(KeyCode::PageUp) {
        tracker.scroll_by(-page);
    }
}
