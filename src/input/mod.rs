//! Input module - PlayerInput resource, discrete input queue, and capture_input system

use bevy::prelude::*;

use crate::constants::STICK_DEADZONE;

/// Discrete input events consumed once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// E key / West button - act on objects in range
    Interact,
    /// Q key / Select - jump to the scene's skip target
    SkipScene,
}

/// Queue of discrete inputs captured this frame.
/// Refilled at the start of every frame; consumers take only their own kind.
#[derive(Resource, Default, Debug)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Remove every queued event of `kind`, returning how many there were
    pub fn take(&mut self, kind: InputEvent) -> usize {
        let before = self.events.len();
        self.events.retain(|e| *e != kind);
        before - self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Continuous movement input for the avatar
#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    /// -1.0 (back) to 1.0 (forward)
    pub forward: f32,
    /// -1.0 (turn right) to 1.0 (turn left)
    pub turn: f32,
}

/// Runs first in Update: snapshot movement and queue this frame's presses
pub fn capture_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<PlayerInput>,
    mut queue: ResMut<InputQueue>,
) {
    // Presses not consumed last frame are stale
    queue.clear();

    let mut forward = 0.0;
    let mut turn = 0.0;

    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        forward += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        forward -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        turn += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        turn -= 1.0;
    }

    for gamepad in &gamepads {
        if let Some(stick_y) = gamepad.get(GamepadAxis::LeftStickY) {
            if stick_y.abs() > STICK_DEADZONE {
                forward += stick_y;
            }
        }
        if let Some(stick_x) = gamepad.get(GamepadAxis::LeftStickX) {
            if stick_x.abs() > STICK_DEADZONE {
                turn -= stick_x;
            }
        }
    }

    input.forward = forward.clamp(-1.0, 1.0);
    input.turn = turn.clamp(-1.0, 1.0);

    let interact = keyboard.just_pressed(KeyCode::KeyE)
        || gamepads
            .iter()
            .any(|gp| gp.just_pressed(GamepadButton::West));
    if interact {
        queue.push(InputEvent::Interact);
    }

    let skip = keyboard.just_pressed(KeyCode::KeyQ)
        || gamepads
            .iter()
            .any(|gp| gp.just_pressed(GamepadButton::Select));
    if skip {
        queue.push(InputEvent::SkipScene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_only_removes_matching_kind() {
        let mut queue = InputQueue::default();
        queue.push(InputEvent::Interact);
        queue.push(InputEvent::SkipScene);
        queue.push(InputEvent::Interact);

        assert_eq!(queue.take(InputEvent::Interact), 2);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.take(InputEvent::Interact), 0);
        assert_eq!(queue.take(InputEvent::SkipScene), 1);
        assert!(queue.is_empty());
    }
}
