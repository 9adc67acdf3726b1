//! Kitchen Chores - a small top-down checklist game built with Bevy
//!
//! Walk a kitchen, finish the task list in order, and move on to the next scene.
//! This crate provides all game components, resources, and systems organized into modules.

// Core modules
pub mod config_watcher;
pub mod constants;
pub mod events;
pub mod settings;
pub mod testing;

// Game logic modules
pub mod checklist;
pub mod input;
pub mod objects;
pub mod player;
pub mod scenes;
pub mod ui;

// Re-export commonly used types for convenience
pub use checklist::{
    Checklist, ChecklistPhase, ChecklistSignal, Interaction, ObjectKey, Task, TaskList,
    advance_checklist, report_and_publish, tick_and_publish,
};
pub use config_watcher::ConfigWatcher;
pub use constants::*;
pub use events::{BusEvent, EventBus, GameEvent, flush_event_bus, update_event_bus_time};
pub use input::{InputEvent, InputQueue, PlayerInput};
pub use objects::{Emitter, ObjectEffect, ObjectKind, TriggerZone, WorldObject};
pub use player::{Heading, Player};
pub use scenes::{CurrentScene, ObjectDef, SceneDatabase, SceneDef, SceneEntity, SceneRoutes, TaskDef};
pub use settings::{InitSettings, SETTINGS_FILE};
