use bevy::prelude::*;

#[derive(Component)]
pub struct HeroCamera;

// Parent of everything in the 3D scene, so teardown is a single recursive despawn.
#[derive(Component)]
pub struct HeroRoot;

#[derive(Component)]
pub struct ParticleCloud;

#[derive(Component)]
pub struct MonolithGroup;

#[derive(Component)]
pub struct FloatRig;

#[derive(Component)]
pub struct MonolithMesh;

#[derive(Component)]
pub struct MonolithCore;

// Blank stand-in shown while the scene is still being built.
#[derive(Component)]
pub struct HeroPlaceholder;

#[derive(Component)]
pub struct HeroOverlay;

// The marketing copy that fades and slides away as the page scrolls.
#[derive(Component)]
pub struct CopyBlock;

// Inner wrapper of the copy block that plays the intro slide-in.
#[derive(Component)]
pub struct IntroReveal;

#[derive(Component)]
pub struct FooterBar;

#[derive(Component)]
pub struct PingDot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeGroup {
    Copy,
    Footer,
}

/// Authored alpha of a UI element's colours, scaled by its group's opacity each frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct FadeTarget {
    pub group: FadeGroup,
    pub text: f32,
    pub background: f32,
    pub border: f32,
}

impl FadeTarget {
    pub fn text(group: FadeGroup, color: Color) -> Self {
        FadeTarget { group, text: color.alpha(), background: 0.0, border: 0.0 }
    }

    pub fn panel(group: FadeGroup, background: Color, border: Color) -> Self {
        FadeTarget { group, text: 0.0, background: background.alpha(), border: border.alpha() }
    }
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroAction {
    InitializeSystem,
    Documentation,
}

/// Button in the overlay, with its idle and hovered fill.
#[derive(Component, Clone, Copy, Debug)]
pub struct HeroButton {
    pub action: HeroAction,
    pub idle: Color,
    pub hovered: Color,
}
