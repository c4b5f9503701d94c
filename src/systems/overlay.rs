use bevy::prelude::*;
use bevy_math::cubic_splines::CubicSegment;
use crate::core::components::*;
use crate::core::scroll::ProgressSource;
use crate::core::settings::{HeroSettings, MotionSettings};

/// Time at which the overlay was spawned; intro animations run from here.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct OverlayClock {
    pub started: f32,
}

/// Opacity and slide of the copy block's intro, `since` seconds after spawn.
pub fn intro_reveal(motion: &MotionSettings, since: f32) -> (f32, f32) {
    let t = if motion.intro_duration > 0.0 { (since / motion.intro_duration).clamp(0.0, 1.0) } else { 1.0 };
    let eased = CubicSegment::new_bezier((0.16, 1.0), (0.3, 1.0)).ease(t);
    (eased, motion.intro_rise * (1.0 - eased))
}

pub fn footer_reveal(motion: &MotionSettings, since: f32) -> f32 {
    let shown = since - motion.footer_delay;
    if motion.footer_fade <= 0.0 {
        return if shown >= 0.0 { 1.0 } else { 0.0 };
    }
    (shown / motion.footer_fade).clamp(0.0, 1.0)
}

// One ping per second: bright at the start of the cycle, fading out.
fn ping(elapsed: f32) -> f32 {
    0.4 + 0.6 * (1.0 - elapsed.fract())
}

pub fn write_overlay<S: ProgressSource + Resource>(
    source: Res<S>,
    time: Res<Time>,
    settings: Res<HeroSettings>,
    clock: Option<Res<OverlayClock>>,
    mut blocks: Query<(&mut Node, &ComputedNode), (With<CopyBlock>, Without<IntroReveal>)>,
    mut reveals: Query<&mut Node, (With<IntroReveal>, Without<CopyBlock>)>,
    mut targets: Query<(
        &FadeTarget,
        Option<&mut TextColor>,
        Option<&mut BackgroundColor>,
        Option<&mut BorderColor>,
        Has<PingDot>,
    )>,
) {
    let Some(clock) = clock else { return };
    let progress = source.progress();
    let since = time.elapsed_secs() - clock.started;
    let keys = &settings.keyframes;

    let (intro_opacity, rise) = intro_reveal(&settings.motion, since);
    let copy_opacity = keys.text_opacity.sample(progress) * intro_opacity;
    let footer_opacity = footer_reveal(&settings.motion, since);

    for (mut node, computed) in blocks.iter_mut() {
        let height = computed.size().y * computed.inverse_scale_factor();
        node.top = Val::Px(keys.text_offset.sample(progress) * height);
    }
    for mut node in reveals.iter_mut() {
        node.top = Val::Px(rise);
    }

    for (fade, text, background, border, is_ping) in targets.iter_mut() {
        let mut opacity = match fade.group {
            FadeGroup::Copy => copy_opacity,
            FadeGroup::Footer => footer_opacity,
        };
        if is_ping {
            opacity *= ping(time.elapsed_secs());
        }
        if let Some(mut text) = text {
            text.0.set_alpha(fade.text * opacity);
        }
        if let Some(mut background) = background {
            background.0.set_alpha(fade.background * opacity);
        }
        if let Some(mut border) = border {
            border.0.set_alpha(fade.border * opacity);
        }
    }
}

pub fn button_hover(
    mut buttons: Query<(&Interaction, &HeroButton, &mut BackgroundColor, &mut FadeTarget), Changed<Interaction>>,
) {
    for (interaction, button, mut background, mut fade) in buttons.iter_mut() {
        background.0 = match interaction {
            Interaction::Hovered | Interaction::Pressed => button.hovered,
            Interaction::None => button.idle,
        };
        fade.background = background.0.alpha();
    }
}

pub fn button_actions(
    buttons: Query<(&Interaction, &HeroButton), Changed<Interaction>>,
    mut actions: EventWriter<HeroAction>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            info!("[HeroOverlay] {:?} pressed", button.action);
            actions.send(button.action);
        }
    }
}
