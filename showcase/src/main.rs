use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use hero_scene::prelude::*;

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "warn,hero_scene=info".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Hero Showcase".into(),
                    resolution: (1440.0, 900.0).into(),
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    // Setup inspector plugins
    app.add_plugins(
        WorldInspectorPlugin::default().run_if(bevy::input::common_conditions::input_toggle_active(false, KeyCode::Escape)),
    );

    // Setup the hero, from an optional settings file
    let hero = match std::env::args().nth(1) {
        Some(path) => HeroPlugin::from_path(path),
        None => HeroPlugin::default(),
    };
    app.add_plugins(hero);

    app.add_systems(Update, (toggle_mount_on_u, log_actions));

    app.run();
}

fn toggle_mount_on_u(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<HeroState>>,
    mut unmount: EventWriter<UnmountHero>,
    mut mount: EventWriter<MountHero>,
) {
    if !keys.just_pressed(KeyCode::KeyU) { return; }

    match state.get() {
        HeroState::Unmounted => { mount.send(MountHero); }
        _ => { unmount.send(UnmountHero); }
    }
}

fn log_actions(mut actions: EventReader<HeroAction>) {
    for action in actions.read() {
        info!("Hero action: {:?}", action);
    }
}
