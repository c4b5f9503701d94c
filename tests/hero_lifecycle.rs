use std::time::Duration;

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::state::state::StateTransition;
use bevy::window::{ExitCondition, WindowResized};
use bevy_pbr::StandardMaterial;
use hero_scene::core::components::*;
use hero_scene::prelude::*;
use hero_scene::systems::frame_writer::{write_monolith, write_particles};
use hero_scene::systems::lifecycle::PendingScene;

fn test_settings() -> HeroSettings {
    let mut settings = HeroSettings::default();
    settings.particles.count = 64;
    settings.particles.seed = Some(132);
    settings
}

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        AssetPlugin::default(),
        InputPlugin,
        StatesPlugin,
        WindowPlugin {
            primary_window: None,
            exit_condition: ExitCondition::DontExit,
            ..default()
        },
    ))
    .init_asset::<Mesh>()
    .init_asset::<StandardMaterial>();
    app
}

fn hero_app() -> App {
    let mut app = headless_app();
    app.add_plugins(HeroPlugin::with_settings(test_settings()));
    app
}

// Runs only the initial state transition, so `OnEnter(Loading)` has spawned the
// placeholder and queued the build but nothing has polled it yet.
fn enter_loading(app: &mut App) {
    app.finish();
    app.cleanup();
    app.world_mut().run_schedule(StateTransition);
}

fn wait_for_build(app: &App) {
    for _ in 0..1000 {
        if app.world().resource::<PendingScene>().is_finished() {
            return;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    panic!("scene build never finished");
}

fn mount(app: &mut App) {
    for _ in 0..1000 {
        app.update();
        if app.world().get_resource::<HeroHandles>().is_some() {
            return;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    panic!("hero never mounted");
}

fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut().query_filtered::<Entity, With<C>>().iter(app.world()).count()
}

fn state(app: &App) -> HeroState {
    app.world().resource::<State<HeroState>>().get().clone()
}

// 800px viewport, scrolled `pixels` down the page.
fn scroll(app: &mut App, pixels: f32) {
    app.world_mut().send_event(WindowResized {
        window: Entity::PLACEHOLDER,
        width: 1280.0,
        height: 800.0,
    });
    app.world_mut().send_event(MouseWheel {
        unit: MouseScrollUnit::Pixel,
        x: 0.0,
        y: -pixels,
        window: Entity::PLACEHOLDER,
    });
}

fn material(app: &App, handle: &Handle<StandardMaterial>) -> StandardMaterial {
    app.world().resource::<Assets<StandardMaterial>>().get(handle).cloned().expect("material missing")
}

fn scale_of(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<Transform>(entity).expect("transform missing").scale
}

#[test]
fn placeholder_shows_while_loading() {
    let mut app = hero_app();
    enter_loading(&mut app);

    assert_eq!(state(&app), HeroState::Loading);
    assert!(app.world().get_resource::<PendingScene>().is_some());
    assert!(app.world().get_resource::<HeroHandles>().is_none());
    assert_eq!(count::<HeroPlaceholder>(&mut app), 1);
    assert_eq!(count::<HeroOverlay>(&mut app), 1);
    assert_eq!(count::<HeroRoot>(&mut app), 0);
}

#[test]
fn mounts_after_async_build() {
    let mut app = hero_app();
    enter_loading(&mut app);
    assert_eq!(count::<HeroPlaceholder>(&mut app), 1);

    mount(&mut app);
    app.update();

    assert_eq!(state(&app), HeroState::Mounted);
    assert!(!app.world().resource::<Events<HeroMounted>>().is_empty());
    assert_eq!(count::<HeroPlaceholder>(&mut app), 0);
    assert_eq!(count::<ParticleCloud>(&mut app), 1);
    assert_eq!(count::<MonolithMesh>(&mut app), 1);
    assert_eq!(count::<MonolithCore>(&mut app), 1);
    assert_eq!(count::<HeroCamera>(&mut app), 1);
}

#[test]
fn scroll_progress_drives_scene_properties() {
    let mut app = hero_app();
    mount(&mut app);
    let handles = app.world().resource::<HeroHandles>().clone();

    scroll(&mut app, 400.0);
    app.update();

    let progress = app.world().resource::<ScrollTracker>().progress();
    assert!((progress - 0.5).abs() < 1e-5);

    assert!((scale_of(&app, handles.particles).x - 0.605).abs() < 1e-4);
    assert!((scale_of(&app, handles.monolith_group).x - 2.4).abs() < 1e-4);

    let particles = material(&app, &handles.particle_material);
    assert!((particles.base_color.alpha() - 0.5).abs() < 1e-4);

    let monolith = material(&app, &handles.monolith_material);
    assert!((monolith.specular_transmission - 0.7).abs() < 1e-4);
    assert!((monolith.thickness - 2.5).abs() < 1e-4);
    assert!((monolith.base_color.alpha() - 0.6).abs() < 1e-4);
}

#[test]
fn copy_fades_out_early_in_the_scroll() {
    let mut app = hero_app();
    mount(&mut app);

    scroll(&mut app, 400.0);
    app.update();

    let mut copy = app.world_mut().query::<(&FadeTarget, &TextColor)>();
    let alphas: Vec<f32> = copy
        .iter(app.world())
        .filter(|(fade, _)| fade.group == FadeGroup::Copy)
        .map(|(_, color)| color.0.alpha())
        .collect();
    assert!(!alphas.is_empty());
    assert!(alphas.iter().all(|a| *a == 0.0));
}

#[test]
fn writers_accept_any_progress_source() {
    let mut app = hero_app();
    app.insert_resource(FixedProgress(1.0));
    app.add_systems(Update, (write_particles::<FixedProgress>, write_monolith::<FixedProgress>).after(HeroSet::Write));
    mount(&mut app);
    app.update();

    let handles = app.world().resource::<HeroHandles>().clone();
    assert!((scale_of(&app, handles.monolith_group).x - 4.0).abs() < 1e-5);
    assert!((scale_of(&app, handles.particles).x - 0.01).abs() < 1e-5);
    assert!(material(&app, &handles.particle_material).base_color.alpha().abs() < 1e-6);
}

#[test]
fn writers_skip_when_targets_are_missing() {
    let mut app = headless_app();
    app.insert_resource(test_settings())
        .insert_resource(FixedProgress(0.5))
        .add_systems(Update, (write_particles::<FixedProgress>, write_monolith::<FixedProgress>));
    app.update();

    let gone = app.world_mut().spawn_empty().id();
    app.world_mut().despawn(gone);
    app.insert_resource(HeroHandles {
        root: gone,
        particles: gone,
        particle_material: Handle::default(),
        monolith_group: gone,
        float_rig: gone,
        monolith: gone,
        monolith_material: Handle::default(),
    });
    app.update();
}

#[test]
fn teardown_detaches_writers_and_listeners() {
    let mut app = hero_app();
    mount(&mut app);
    scroll(&mut app, 200.0);
    app.update();

    let handles = app.world().resource::<HeroHandles>().clone();
    app.world_mut().send_event(UnmountHero);
    app.update();
    app.update();

    assert_eq!(state(&app), HeroState::Unmounted);
    assert!(app.world().get_resource::<HeroHandles>().is_none());
    assert_eq!(count::<HeroRoot>(&mut app), 0);
    assert_eq!(count::<ParticleCloud>(&mut app), 0);
    assert_eq!(count::<HeroOverlay>(&mut app), 0);

    let scroll_before = app.world().resource::<ScrollTracker>().scroll_y();
    let alpha_before = material(&app, &handles.monolith_material).base_color.alpha();

    scroll(&mut app, 300.0);
    for _ in 0..3 {
        app.update();
    }

    assert_eq!(app.world().resource::<ScrollTracker>().scroll_y(), scroll_before);
    assert_eq!(material(&app, &handles.monolith_material).base_color.alpha(), alpha_before);
}

#[test]
fn unmount_while_loading_cancels_the_build() {
    let mut app = hero_app();
    app.update();
    assert_eq!(state(&app), HeroState::Loading);

    app.world_mut().send_event(UnmountHero);
    for _ in 0..20 {
        app.update();
        std::thread::sleep(Duration::from_millis(2));
    }

    assert_eq!(state(&app), HeroState::Unmounted);
    assert!(app.world().get_resource::<HeroHandles>().is_none());
    assert_eq!(count::<HeroRoot>(&mut app), 0);
    assert_eq!(count::<ParticleCloud>(&mut app), 0);
    assert_eq!(count::<HeroPlaceholder>(&mut app), 0);
}

#[test]
fn unmount_in_the_finishing_frame_discards_the_build() {
    let mut app = hero_app();
    enter_loading(&mut app);
    wait_for_build(&app);

    app.world_mut().send_event(UnmountHero);
    app.update();

    assert!(app.world().resource::<Events<HeroMounted>>().is_empty());
    assert!(app.world().get_resource::<HeroHandles>().is_none());
    assert_eq!(count::<HeroRoot>(&mut app), 0);

    app.update();
    assert_eq!(state(&app), HeroState::Unmounted);
    assert!(app.world().get_resource::<PendingScene>().is_none());
    assert!(app.world().resource::<Events<HeroMounted>>().is_empty());
}

#[test]
fn remounts_after_teardown() {
    let mut app = hero_app();
    mount(&mut app);
    scroll(&mut app, 300.0);
    app.update();
    assert_eq!(app.world().resource::<ScrollTracker>().scroll_y(), 300.0);

    app.world_mut().send_event(UnmountHero);
    app.update();
    app.update();
    assert_eq!(state(&app), HeroState::Unmounted);

    app.world_mut().send_event(MountHero);
    mount(&mut app);
    app.update();

    assert_eq!(state(&app), HeroState::Mounted);
    assert_eq!(count::<HeroRoot>(&mut app), 1);
    assert_eq!(count::<HeroOverlay>(&mut app), 1);
    assert_eq!(app.world().resource::<ScrollTracker>().scroll_y(), 0.0);
    assert_eq!(app.world().resource::<ScrollTracker>().progress(), 0.0);
}
