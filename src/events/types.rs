//! Event type definitions for the event bus

use crate::checklist::ObjectKey;

/// All gameplay events routed through the bus
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // === Scene Events ===
    /// A scene finished loading
    SceneLoaded { scene: String },
    /// Both task lists complete
    LevelCleared { scene: String },
    /// Clear countdown expired, next scene wanted
    TransitionRequested { scene: String },
    /// A scene change was requested directly (skip key or button)
    SceneSkip { from: String, to: String },

    // === Zone Events ===
    ZoneEnter { object: ObjectKey },
    ZoneExit { object: ObjectKey },

    // === Object Events ===
    /// Timed activity started (kettle boiling, oven cooking)
    ActivityStarted { object: ObjectKey, duration: f32 },
    /// Timed activity finished, object about to report
    ActivityFinished { object: ObjectKey },

    // === Checklist Events ===
    InteractionAccepted { object: ObjectKey, index: usize },
    InteractionRejected {
        object: ObjectKey,
        expected: Option<ObjectKey>,
    },
    SecondListUnlocked,
}

impl GameEvent {
    /// Event type code for compact serialization
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SceneLoaded { .. } => "SL",
            GameEvent::LevelCleared { .. } => "LC",
            GameEvent::TransitionRequested { .. } => "TR",
            GameEvent::SceneSkip { .. } => "SK",
            GameEvent::ZoneEnter { .. } => "ZE",
            GameEvent::ZoneExit { .. } => "ZX",
            GameEvent::ActivityStarted { .. } => "AS",
            GameEvent::ActivityFinished { .. } => "AF",
            GameEvent::InteractionAccepted { .. } => "I+",
            GameEvent::InteractionRejected { .. } => "I-",
            GameEvent::SecondListUnlocked => "UN",
        }
    }

    /// Human-readable event name (used by scenario expectations)
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::SceneLoaded { .. } => "SceneLoaded",
            GameEvent::LevelCleared { .. } => "LevelCleared",
            GameEvent::TransitionRequested { .. } => "TransitionRequested",
            GameEvent::SceneSkip { .. } => "SceneSkip",
            GameEvent::ZoneEnter { .. } => "ZoneEnter",
            GameEvent::ZoneExit { .. } => "ZoneExit",
            GameEvent::ActivityStarted { .. } => "ActivityStarted",
            GameEvent::ActivityFinished { .. } => "ActivityFinished",
            GameEvent::InteractionAccepted { .. } => "InteractionAccepted",
            GameEvent::InteractionRejected { .. } => "InteractionRejected",
            GameEvent::SecondListUnlocked => "SecondListUnlocked",
        }
    }

    /// Object the event concerns, if any
    pub fn object(&self) -> Option<&ObjectKey> {
        match self {
            GameEvent::ZoneEnter { object }
            | GameEvent::ZoneExit { object }
            | GameEvent::ActivityStarted { object, .. }
            | GameEvent::ActivityFinished { object }
            | GameEvent::InteractionAccepted { object, .. }
            | GameEvent::InteractionRejected { object, .. } => Some(object),
            _ => None,
        }
    }
}
