//! Player module - avatar components and movement

mod components;
mod movement;

pub use components::*;
pub use movement::*;
