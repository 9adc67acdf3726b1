//! Full-screen title card that fades in and out when a scene loads

use bevy::prelude::*;

use crate::constants::*;
use crate::events::{EventBus, GameEvent};

const CARD_TOTAL: f32 = CARD_FADE_IN + CARD_HOLD + CARD_FADE_OUT;

#[derive(Resource)]
pub struct CardTimer(pub f32);

#[derive(Component)]
pub struct CardRoot;

#[derive(Component)]
pub struct CardText;

/// Spawn a title card for every SceneLoaded event
pub fn show_scene_card(
    mut commands: Commands,
    event_bus: Res<EventBus>,
    existing: Query<Entity, With<CardRoot>>,
) {
    let Some(scene) = event_bus.pending_events().find_map(|e| match e {
        GameEvent::SceneLoaded { scene } => Some(scene.clone()),
        _ => None,
    }) else {
        return;
    };

    // Replace any card still fading from the previous scene
    for entity in &existing {
        commands.entity(entity).despawn();
    }
    commands.insert_resource(CardTimer(0.0));

    commands
        .spawn((
            CardRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            GlobalZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                CardText,
                Text::new(scene),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.0)),
            ));
        });
}

/// Text and background alpha at time `t` into the card
pub fn card_alpha(t: f32) -> (f32, f32) {
    if t < CARD_FADE_IN {
        (t / CARD_FADE_IN, 1.0)
    } else if t < CARD_FADE_IN + CARD_HOLD {
        (1.0, 1.0)
    } else {
        let fade_t = ((t - CARD_FADE_IN - CARD_HOLD) / CARD_FADE_OUT).min(1.0);
        (1.0 - fade_t, 1.0 - fade_t)
    }
}

pub fn fade_card(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: Option<ResMut<CardTimer>>,
    roots: Query<Entity, With<CardRoot>>,
    mut texts: Query<&mut TextColor, With<CardText>>,
    mut backgrounds: Query<&mut BackgroundColor, With<CardRoot>>,
) {
    let Some(timer) = timer.as_mut() else {
        return;
    };

    timer.0 += time.delta_secs();
    let t = timer.0;

    if t >= CARD_TOTAL {
        for entity in &roots {
            commands.entity(entity).despawn();
        }
        commands.remove_resource::<CardTimer>();
        return;
    }

    let (text_alpha, bg_alpha) = card_alpha(t);
    for mut color in &mut texts {
        color.0 = Color::srgba(1.0, 1.0, 1.0, text_alpha);
    }
    for mut bg in &mut backgrounds {
        bg.0 = Color::srgba(0.0, 0.0, 0.0, bg_alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_alpha_phases() {
        assert_eq!(card_alpha(0.0), (0.0, 1.0));
        assert_eq!(card_alpha(CARD_FADE_IN + 0.1), (1.0, 1.0));
        let (text, bg) = card_alpha(CARD_TOTAL);
        assert!(text.abs() < 0.0001 && bg.abs() < 0.0001);
    }
}
