//! Celebration cue - the scene mascot dances when the level is cleared

use bevy::prelude::*;

use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::scenes::SceneEntity;

/// Marker for the scene mascot
#[derive(Component)]
pub struct Mascot;

/// Dance animation state (added by the LevelCleared cue)
#[derive(Component, Default)]
pub struct Dancing {
    pub elapsed: f32,
}

/// Spawn the mascot for the current scene
pub fn spawn_mascot(commands: &mut Commands) {
    commands.spawn((
        Sprite::from_color(MASCOT_COLOR, MASCOT_SIZE),
        Transform::from_translation(MASCOT_POSITION),
        Name::new("Mascot"),
        Mascot,
        SceneEntity,
    ));
}

/// Start dancing on LevelCleared
pub fn trigger_celebration(
    mut commands: Commands,
    event_bus: Res<EventBus>,
    mascots: Query<Entity, (With<Mascot>, Without<Dancing>)>,
) {
    let cleared = event_bus
        .pending_events()
        .any(|e| matches!(e, GameEvent::LevelCleared { .. }));
    if !cleared {
        return;
    }
    for entity in &mascots {
        commands.entity(entity).insert(Dancing::default());
    }
}

/// Hop height and sway angle at a point in the dance
pub fn dance_pose(elapsed: f32) -> (f32, f32) {
    let phase = elapsed * DANCE_SPEED;
    let hop = phase.sin().abs() * DANCE_HOP_HEIGHT;
    let sway = (phase * 0.5).sin() * 0.3;
    (hop, sway)
}

/// Animate dancing mascots
pub fn animate_dance(time: Res<Time>, mut query: Query<(&mut Transform, &mut Dancing), With<Mascot>>) {
    for (mut transform, mut dancing) in &mut query {
        dancing.elapsed += time.delta_secs();
        let (hop, sway) = dance_pose(dancing.elapsed);
        transform.translation.y = MASCOT_POSITION.y + hop;
        transform.rotation = Quat::from_rotation_z(sway);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dance_starts_at_rest() {
        assert_eq!(dance_pose(0.0), (0.0, 0.0));
    }

    #[test]
    fn test_dance_hop_is_bounded() {
        for i in 0..200 {
            let (hop, _) = dance_pose(i as f32 * 0.05);
            assert!((0.0..=DANCE_HOP_HEIGHT).contains(&hop));
        }
    }
}
