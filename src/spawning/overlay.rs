use bevy::prelude::*;
use crate::core::components::*;
use crate::core::settings::CopySettings;

const INDIGO_400: Color = Color::srgb(0.506, 0.549, 0.973);
const INDIGO_500: Color = Color::srgb(0.388, 0.4, 0.945);
const ZINC_100: Color = Color::srgb(0.957, 0.957, 0.961);
const ZINC_400: Color = Color::srgb(0.631, 0.631, 0.667);
const ZINC_700: Color = Color::srgb(0.247, 0.247, 0.275);
const ZINC_800: Color = Color::srgb(0.153, 0.153, 0.165);

fn white(alpha: f32) -> Color {
    Color::srgba(1.0, 1.0, 1.0, alpha)
}

fn text(parent: &mut ChildBuilder, value: &str, size: f32, color: Color, group: FadeGroup) -> Entity {
    parent.spawn_empty()
        .insert(Text::new(value))
        .insert(TextFont { font_size: size, ..default() })
        .insert(TextColor(color))
        .insert(TextLayout::new_with_justify(JustifyText::Center))
        .insert(FadeTarget::text(group, color))
        .id()
}

fn button(parent: &mut ChildBuilder, label: &str, action: HeroAction, idle: Color, hovered: Color, border: Color, label_color: Color) {
    parent.spawn_empty()
        .insert(Button)
        .insert(Node {
            padding: UiRect::axes(Val::Px(48.0), Val::Px(24.0)),
            border: UiRect::all(Val::Px(1.0)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .insert(BorderRadius::MAX)
        .insert(BackgroundColor(idle))
        .insert(BorderColor(border))
        .insert(HeroButton { action, idle, hovered })
        .insert(FadeTarget::panel(FadeGroup::Copy, idle, border))
        .with_children(|b| {
            text(b, label, 11.0, label_color, FadeGroup::Copy);
        });
}

/// Empty stand-in shown until the 3D scene is ready.
pub fn spawn_placeholder(commands: &mut Commands) -> Entity {
    commands.spawn_empty()
        .insert(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .insert(BackgroundColor(Color::BLACK))
        .insert(GlobalZIndex(-1))
        .insert(Name::new("HeroPlaceholder"))
        .insert(HeroPlaceholder)
        .id()
}

/// Marketing copy and footer laid over the 3D view.
pub fn spawn_overlay(commands: &mut Commands, copy: &CopySettings) -> Entity {
    let root = commands.spawn_empty()
        .insert(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            overflow: Overflow::clip(),
            ..default()
        })
        .insert(Name::new("HeroOverlay"))
        .insert(HeroOverlay)
        .id();

    commands.entity(root).with_children(|overlay| {
        overlay.spawn_empty()
            .insert(Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::horizontal(Val::Px(24.0)),
                max_width: Val::Px(1152.0),
                ..default()
            })
            .insert(Name::new("CopyBlock"))
            .insert(CopyBlock)
            .with_children(|block| {
                block.spawn_empty()
                    .insert(Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        top: Val::Px(40.0),
                        ..default()
                    })
                    .insert(IntroReveal)
                    .with_children(|reveal| {
                        reveal.spawn_empty()
                            .insert(Node {
                                padding: UiRect::axes(Val::Px(24.0), Val::Px(10.0)),
                                border: UiRect::all(Val::Px(1.0)),
                                margin: UiRect::bottom(Val::Px(48.0)),
                                ..default()
                            })
                            .insert(BorderRadius::MAX)
                            .insert(BackgroundColor(white(0.05)))
                            .insert(BorderColor(white(0.1)))
                            .insert(FadeTarget::panel(FadeGroup::Copy, white(0.05), white(0.1)))
                            .with_children(|badge| {
                                text(badge, &copy.badge, 10.0, INDIGO_400, FadeGroup::Copy);
                            });

                        reveal.spawn_empty()
                            .insert(Node {
                                flex_direction: FlexDirection::Column,
                                align_items: AlignItems::Center,
                                margin: UiRect::bottom(Val::Px(48.0)),
                                ..default()
                            })
                            .with_children(|title| {
                                text(title, &copy.headline, 128.0, Color::WHITE, FadeGroup::Copy);
                                text(title, &copy.headline_accent, 128.0, ZINC_700, FadeGroup::Copy);
                            });

                        reveal.spawn_empty()
                            .insert(Node {
                                max_width: Val::Px(672.0),
                                margin: UiRect::bottom(Val::Px(80.0)),
                                ..default()
                            })
                            .with_children(|tagline| {
                                text(tagline, &copy.tagline, 24.0, ZINC_400, FadeGroup::Copy);
                            });

                        reveal.spawn_empty()
                            .insert(Node {
                                flex_direction: FlexDirection::Row,
                                flex_wrap: FlexWrap::Wrap,
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                column_gap: Val::Px(32.0),
                                row_gap: Val::Px(32.0),
                                ..default()
                            })
                            .with_children(|actions| {
                                button(
                                    actions,
                                    &format!("{}  →", copy.primary_action),
                                    HeroAction::InitializeSystem,
                                    Color::WHITE,
                                    ZINC_100,
                                    Color::NONE,
                                    Color::BLACK,
                                );
                                button(
                                    actions,
                                    &copy.secondary_action,
                                    HeroAction::Documentation,
                                    white(0.0),
                                    white(0.05),
                                    white(0.1),
                                    Color::WHITE,
                                );
                            });
                    });
            });

        overlay.spawn_empty()
            .insert(Node {
                position_type: PositionType::Absolute,
                left: Val::Px(64.0),
                right: Val::Px(64.0),
                bottom: Val::Px(64.0),
                padding: UiRect::top(Val::Px(48.0)),
                border: UiRect::top(Val::Px(1.0)),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::End,
                ..default()
            })
            .insert(BorderColor(white(0.05)))
            .insert(FadeTarget::panel(FadeGroup::Footer, Color::NONE, white(0.05)))
            .insert(Name::new("FooterBar"))
            .insert(FooterBar)
            .with_children(|footer| {
                footer.spawn_empty()
                    .insert(Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(8.0),
                        ..default()
                    })
                    .with_children(|column| {
                        column.spawn_empty()
                            .insert(Node {
                                align_items: AlignItems::Center,
                                column_gap: Val::Px(12.0),
                                ..default()
                            })
                            .with_children(|status| {
                                status.spawn_empty()
                                    .insert(Node {
                                        width: Val::Px(8.0),
                                        height: Val::Px(8.0),
                                        ..default()
                                    })
                                    .insert(BorderRadius::MAX)
                                    .insert(BackgroundColor(INDIGO_500))
                                    .insert(FadeTarget::panel(FadeGroup::Footer, INDIGO_500, Color::NONE))
                                    .insert(PingDot);
                                text(status, &copy.status, 10.0, INDIGO_500, FadeGroup::Footer);
                            });
                        text(column, &copy.coordinates, 9.0, ZINC_800, FadeGroup::Footer);
                    });
            });
    });

    root
}
