//! Avatar movement - turn with A/D, walk with W/S, stop on release

use bevy::prelude::*;

use super::components::{Heading, Player};
use crate::constants::*;
use crate::input::PlayerInput;

/// Spawn the avatar (persists across scene changes)
pub fn spawn_player(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            Sprite::from_color(PLAYER_COLOR, PLAYER_SIZE),
            Transform::from_translation(PLAYER_SPAWN),
            Name::new("Player"),
            Player,
            Heading::default(),
        ))
        .id()
}

/// Advance heading and position for one frame of input.
/// No forward input means no movement (no sliding).
pub fn step_player(position: Vec2, heading: f32, input: &PlayerInput, dt: f32) -> (Vec2, f32) {
    let heading = heading + input.turn * PLAYER_TURN_RATE * dt;
    let direction = Heading(heading).direction();
    let position = position + direction * input.forward * PLAYER_SPEED * dt;
    (position, heading)
}

/// Apply captured input to the avatar
pub fn move_player(
    input: Res<PlayerInput>,
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut Heading), With<Player>>,
) {
    let Ok((mut transform, mut heading)) = query.single_mut() else {
        return;
    };

    let (position, new_heading) = step_player(
        transform.translation.truncate(),
        heading.0,
        &input,
        time.delta_secs(),
    );

    transform.translation.x = position.x;
    transform.translation.y = position.y;
    transform.rotation = Quat::from_rotation_z(new_heading);
    heading.0 = new_heading;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_moves_along_heading() {
        let input = PlayerInput {
            forward: 1.0,
            turn: 0.0,
        };
        let (pos, heading) = step_player(Vec2::ZERO, 0.0, &input, 1.0);
        assert_eq!(heading, 0.0);
        assert!((pos - Vec2::new(0.0, PLAYER_SPEED)).length() < 0.001);
    }

    #[test]
    fn test_turn_without_forward_stays_put() {
        let input = PlayerInput {
            forward: 0.0,
            turn: 1.0,
        };
        let (pos, heading) = step_player(Vec2::new(5.0, 5.0), 0.0, &input, 0.5);
        assert_eq!(pos, Vec2::new(5.0, 5.0));
        assert!((heading - PLAYER_TURN_RATE * 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_heading_direction_left_turn() {
        let dir = Heading(std::f32::consts::FRAC_PI_2).direction();
        assert!((dir - Vec2::new(-1.0, 0.0)).length() < 0.0001);
    }
}
