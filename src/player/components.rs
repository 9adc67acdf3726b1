//! Player-related components

use bevy::prelude::*;

/// Marker for the player avatar
#[derive(Component)]
pub struct Player;

/// Facing angle in radians (0 = up the screen, counter-clockwise positive)
#[derive(Component, Default)]
pub struct Heading(pub f32);

impl Heading {
    /// Unit vector the avatar walks along
    pub fn direction(&self) -> Vec2 {
        Vec2::new(-self.0.sin(), self.0.cos())
    }
}
