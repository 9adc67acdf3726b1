//! UI module - checklist HUD, prompt overlay, celebration cue, and title cards

mod card;
mod celebration;
mod hud;
mod prompts;

pub use card::*;
pub use celebration::*;
pub use hud::*;
pub use prompts::*;
