//! Tunable constants for kitchen_chores
//!
//! Gameplay timings, layout values, and file paths live here.

use bevy::prelude::*;

// =============================================================================
// FILE PATHS
// =============================================================================

pub const SCENES_FILE: &str = "assets/scenes.toml";

/// Scene loaded when neither settings nor the command line name one
pub const DEFAULT_START_SCENE: &str = "Level1";

// =============================================================================
// CHECKLIST
// =============================================================================

/// Seconds between clearing the level and requesting the next scene
pub const LEVEL_CLEAR_COUNTDOWN: f32 = 5.0;

pub const TASK_DONE_SUFFIX: &str = " - Done!";
pub const CHECKLIST_HEADER: &str = "Task List:";

// =============================================================================
// WORLD OBJECTS
// =============================================================================

pub const KETTLE_BOIL_TIME: f32 = 15.0;
pub const OVEN_COOK_TIME: f32 = 2.0;
pub const DEFAULT_TRIGGER_RADIUS: f32 = 80.0;
pub const OBJECT_SIZE: Vec2 = Vec2::new(40.0, 40.0);
pub const EMITTER_SIZE: Vec2 = Vec2::new(24.0, 16.0);
pub const EMITTER_OFFSET: Vec3 = Vec3::new(0.0, 34.0, 0.5);

pub const COLLECTABLE_COLOR: Color = Color::srgb(0.95, 0.8, 0.3);
pub const INTERACTABLE_COLOR: Color = Color::srgb(0.4, 0.7, 0.9);
pub const KETTLE_COLOR: Color = Color::srgb(0.75, 0.75, 0.8);
pub const OVEN_COLOR: Color = Color::srgb(0.35, 0.3, 0.3);
pub const STEAM_COLOR: Color = Color::srgba(0.95, 0.95, 1.0, 0.7);
pub const COOKING_COLOR: Color = Color::srgba(1.0, 0.5, 0.2, 0.8);
pub const LOCKED_TINT: f32 = 0.4; // Alpha applied to objects whose zone is disabled

// =============================================================================
// PLAYER
// =============================================================================

pub const PLAYER_SIZE: Vec2 = Vec2::new(30.0, 30.0);
pub const PLAYER_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, -200.0, 1.0);
pub const PLAYER_SPEED: f32 = 250.0;
pub const PLAYER_TURN_RATE: f32 = 3.0; // Radians per second
pub const STICK_DEADZONE: f32 = 0.25;

// =============================================================================
// PRESENTATION
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.32, 0.28, 0.24);
pub const TEXT_PRIMARY: Color = Color::srgb(0.95, 0.9, 0.8);
pub const PROMPT_BACKGROUND: Color = Color::srgba(0.1, 0.1, 0.1, 0.8);
pub const PROMPT_OFFSET_Y: f32 = 20.0; // Distance from bottom of the window
pub const PROMPT_HEIGHT: f32 = 30.0;
pub const PROMPT_WIDTH_PERCENT: f32 = 50.0;

pub const MASCOT_POSITION: Vec3 = Vec3::new(320.0, 200.0, 1.0);
pub const MASCOT_SIZE: Vec2 = Vec2::new(50.0, 60.0);
pub const MASCOT_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const DANCE_HOP_HEIGHT: f32 = 18.0;
pub const DANCE_SPEED: f32 = 9.0;

pub const CARD_FADE_IN: f32 = 0.3;
pub const CARD_HOLD: f32 = 1.2;
pub const CARD_FADE_OUT: f32 = 0.8;

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;
