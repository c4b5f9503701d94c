use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use bevy_pbr::StandardMaterial;
use futures::FutureExt;
use rand::Rng;
use crate::core::components::{HeroOverlay, HeroPlaceholder, HeroRoot};
use crate::core::scroll::ScrollTracker;
use crate::core::settings::HeroSettings;
use crate::spawning::helpers::GenRng;
use crate::spawning::overlay::{spawn_overlay, spawn_placeholder};
use crate::spawning::scene_spawning::{build_scene_meshes, spawn_hero_scene, BuiltScene, HeroHandles};
use crate::systems::overlay::OverlayClock;

#[derive(States, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum HeroState {
    #[default]
    Loading,
    Mounted,
    Unmounted,
}

/// Sent once the scene is spawned and `HeroHandles` is available. Not sent when the
/// build finishes in a frame that also asks for an unmount.
#[derive(Event, Debug, Clone)]
pub struct HeroMounted(pub HeroHandles);

/// Tear the hero down: cancel any pending build and despawn everything it owns.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct UnmountHero;

/// Start a fresh load after an unmount.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct MountHero;

// Dropping the task cancels it.
#[derive(Resource)]
pub struct PendingScene(Task<BuiltScene>);

impl PendingScene {
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

pub fn begin_loading(
    mut commands: Commands,
    settings: Res<HeroSettings>,
    time: Res<Time>,
    mut gen_rng: ResMut<GenRng>,
) {
    spawn_placeholder(&mut commands);
    spawn_overlay(&mut commands, &settings.copy);
    commands.insert_resource(OverlayClock { started: time.elapsed_secs() });

    let particles = settings.particles.clone();
    let seed = gen_rng.rng_mut().gen::<u64>();
    let task = AsyncComputeTaskPool::get().spawn(async move { build_scene_meshes(&particles, seed) });
    commands.insert_resource(PendingScene(task));
    debug!("[HeroState] Building scene for {} particles", settings.particles.count);
}

pub fn poll_pending_scene(
    mut commands: Commands,
    pending: Option<ResMut<PendingScene>>,
    settings: Res<HeroSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    placeholders: Query<Entity, With<HeroPlaceholder>>,
    mut unmount: EventReader<UnmountHero>,
    mut mounted: EventWriter<HeroMounted>,
    mut next: ResMut<NextState<HeroState>>,
) {
    let Some(mut pending) = pending else { return };
    // Leave the build for teardown to drop.
    if !unmount.is_empty() {
        unmount.clear();
        return;
    }
    let Some(built) = (&mut pending.0).now_or_never() else { return };
    commands.remove_resource::<PendingScene>();

    for placeholder in placeholders.iter() {
        commands.entity(placeholder).despawn_recursive();
    }

    let handles = spawn_hero_scene(&mut commands, &mut meshes, &mut materials, &settings, built);
    commands.insert_resource(handles.clone());
    mounted.send(HeroMounted(handles));
    next.set(HeroState::Mounted);
    info!("[HeroState] Loading -> Mounted");
}

pub fn request_unmount(
    mut requests: EventReader<UnmountHero>,
    state: Res<State<HeroState>>,
    mut next: ResMut<NextState<HeroState>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();
    if *state.get() != HeroState::Unmounted {
        info!("[HeroState] {:?} -> Unmounted", state.get());
        next.set(HeroState::Unmounted);
    }
}

pub fn request_mount(
    mut requests: EventReader<MountHero>,
    state: Res<State<HeroState>>,
    mut next: ResMut<NextState<HeroState>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();
    if *state.get() == HeroState::Unmounted {
        info!("[HeroState] Unmounted -> Loading");
        next.set(HeroState::Loading);
    }
}

pub fn teardown(
    mut commands: Commands,
    mut tracker: ResMut<ScrollTracker>,
    owned: Query<Entity, Or<(With<HeroRoot>, With<HeroOverlay>, With<HeroPlaceholder>)>>,
) {
    tracker.scroll_to(0.0);
    commands.remove_resource::<PendingScene>();
    commands.remove_resource::<HeroHandles>();
    commands.remove_resource::<OverlayClock>();
    for entity in owned.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
