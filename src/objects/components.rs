//! World object components and their per-object state machine

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::checklist::ObjectKey;
use crate::constants::*;

/// What a world object does when the player acts on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Picked up and removed once the checklist accepts it
    Collectable,
    /// Reports immediately, stays in the scene
    Interactable,
    /// Boils for a while before reporting
    Kettle,
    /// Cooks for a while before reporting
    Oven,
}

impl ObjectKind {
    pub fn default_prompt(self) -> &'static str {
        match self {
            ObjectKind::Collectable => "Press 'E' to pick up",
            ObjectKind::Interactable => "Press 'E' to interact",
            ObjectKind::Kettle => "Press 'E' to boil the kettle",
            ObjectKind::Oven => "Press 'E' to use the oven",
        }
    }

    /// Seconds of local activity before the object reports, if any
    pub fn default_activity_time(self) -> Option<f32> {
        match self {
            ObjectKind::Kettle => Some(KETTLE_BOIL_TIME),
            ObjectKind::Oven => Some(OVEN_COOK_TIME),
            ObjectKind::Collectable | ObjectKind::Interactable => None,
        }
    }

    /// Whether an accepted report removes the object from the scene
    pub fn consumed_on_accept(self) -> bool {
        self == ObjectKind::Collectable
    }

    pub fn color(self) -> Color {
        match self {
            ObjectKind::Collectable => COLLECTABLE_COLOR,
            ObjectKind::Interactable => INTERACTABLE_COLOR,
            ObjectKind::Kettle => KETTLE_COLOR,
            ObjectKind::Oven => OVEN_COLOR,
        }
    }

    /// Particle stand-in shown while the activity runs
    pub fn emitter_color(self) -> Option<Color> {
        match self {
            ObjectKind::Kettle => Some(STEAM_COLOR),
            ObjectKind::Oven => Some(COOKING_COLOR),
            ObjectKind::Collectable | ObjectKind::Interactable => None,
        }
    }

    pub fn activity_started_message(self) -> &'static str {
        match self {
            ObjectKind::Kettle => "Kettle boiling started!",
            ObjectKind::Oven => "Oven cooking started!",
            ObjectKind::Collectable | ObjectKind::Interactable => "Activity started",
        }
    }

    pub fn activity_finished_message(self) -> &'static str {
        match self {
            ObjectKind::Kettle => "Kettle is boiled!",
            ObjectKind::Oven => "Oven cooking finished!",
            ObjectKind::Collectable | ObjectKind::Interactable => "Activity finished",
        }
    }
}

/// What a world object wants done after handling an input or a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectEffect {
    None,
    /// A timed activity began with this duration
    ActivityStarted(f32),
    /// Notify the checklist that this object was acted upon
    Report,
}

/// A world object the player can act on
#[derive(Component, Debug, Clone)]
pub struct WorldObject {
    pub key: ObjectKey,
    pub kind: ObjectKind,
    pub prompt: String,
    activity_time: Option<f32>,
    in_range: bool,
    /// Time left in the running activity
    remaining: Option<f32>,
}

impl WorldObject {
    pub fn new(key: ObjectKey, kind: ObjectKind) -> Self {
        Self {
            key,
            kind,
            prompt: kind.default_prompt().to_string(),
            activity_time: kind.default_activity_time(),
            in_range: false,
            remaining: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Override the activity time; ignored for kinds without an activity
    pub fn with_activity_time(mut self, seconds: f32) -> Self {
        if self.activity_time.is_some() {
            self.activity_time = Some(seconds.max(0.0));
        }
        self
    }

    /// Player entered the trigger zone. Returns false if already inside.
    pub fn on_zone_enter(&mut self) -> bool {
        !std::mem::replace(&mut self.in_range, true)
    }

    /// Player left the trigger zone. Returns false if already outside.
    pub fn on_zone_exit(&mut self) -> bool {
        std::mem::replace(&mut self.in_range, false)
    }

    /// Interact key pressed this tick
    pub fn on_interact(&mut self) -> ObjectEffect {
        if !self.in_range || self.is_busy() {
            return ObjectEffect::None;
        }
        match self.activity_time {
            Some(duration) => {
                self.remaining = Some(duration);
                ObjectEffect::ActivityStarted(duration)
            }
            None => ObjectEffect::Report,
        }
    }

    /// Advance the running activity; reports once when it runs out
    pub fn on_tick(&mut self, delta_secs: f32) -> ObjectEffect {
        let Some(remaining) = self.remaining.as_mut() else {
            return ObjectEffect::None;
        };
        *remaining -= delta_secs;
        if *remaining <= 0.0 {
            self.remaining = None;
            ObjectEffect::Report
        } else {
            ObjectEffect::None
        }
    }

    pub fn in_range(&self) -> bool {
        self.in_range
    }

    pub fn is_busy(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }

    /// Prompt is suppressed out of range and while an activity runs
    pub fn prompt_visible(&self) -> bool {
        self.in_range && !self.is_busy()
    }
}

/// Proximity zone around a world object
#[derive(Component, Debug, Clone)]
pub struct TriggerZone {
    pub radius: f32,
    /// Disabled zones never register the player
    pub enabled: bool,
}

impl Default for TriggerZone {
    fn default() -> Self {
        Self {
            radius: DEFAULT_TRIGGER_RADIUS,
            enabled: true,
        }
    }
}

impl TriggerZone {
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        self.enabled && center.distance(point) <= self.radius
    }
}

/// Particle stand-in child (steam, oven glow); visible while busy
#[derive(Component)]
pub struct Emitter;

#[cfg(test)]
mod tests {
    use super::*;

    fn kettle() -> WorldObject {
        WorldObject::new(ObjectKey::new("kettle"), ObjectKind::Kettle)
    }

    #[test]
    fn test_interact_requires_range() {
        let mut mug = WorldObject::new(ObjectKey::new("mug"), ObjectKind::Collectable);
        assert_eq!(mug.on_interact(), ObjectEffect::None);

        mug.on_zone_enter();
        assert_eq!(mug.on_interact(), ObjectEffect::Report);
        assert!(mug.prompt_visible());

        mug.on_zone_exit();
        assert_eq!(mug.on_interact(), ObjectEffect::None);
        assert!(!mug.prompt_visible());
    }

    #[test]
    fn test_zone_transitions_report_changes() {
        let mut object = kettle();
        assert!(object.on_zone_enter());
        assert!(!object.on_zone_enter());
        assert!(object.on_zone_exit());
        assert!(!object.on_zone_exit());
    }

    #[test]
    fn test_kettle_reports_once_after_boil_time() {
        let mut object = kettle();
        object.on_zone_enter();

        assert_eq!(object.on_interact(), ObjectEffect::ActivityStarted(KETTLE_BOIL_TIME));
        assert!(!object.prompt_visible());

        // Busy kettle ignores further presses
        assert_eq!(object.on_interact(), ObjectEffect::None);

        for _ in 0..14 {
            assert_eq!(object.on_tick(1.0), ObjectEffect::None);
        }
        assert_eq!(object.on_tick(1.0), ObjectEffect::Report);
        assert!(!object.is_busy());
        assert_eq!(object.on_tick(1.0), ObjectEffect::None);
        assert!(object.prompt_visible());
    }

    #[test]
    fn test_activity_continues_out_of_range() {
        let mut oven = WorldObject::new(ObjectKey::new("oven"), ObjectKind::Oven);
        oven.on_zone_enter();
        oven.on_interact();
        oven.on_zone_exit();

        assert_eq!(oven.on_tick(1.0), ObjectEffect::None);
        assert_eq!(oven.on_tick(1.0), ObjectEffect::Report);
    }

    #[test]
    fn test_activity_time_override() {
        let mut object = kettle().with_activity_time(0.5);
        object.on_zone_enter();
        assert_eq!(object.on_interact(), ObjectEffect::ActivityStarted(0.5));

        // Instant kinds ignore the override
        let mut fridge = WorldObject::new(ObjectKey::new("fridge"), ObjectKind::Interactable)
            .with_activity_time(3.0);
        fridge.on_zone_enter();
        assert_eq!(fridge.on_interact(), ObjectEffect::Report);
    }

    #[test]
    fn test_disabled_zone_never_contains() {
        let mut zone = TriggerZone::default();
        assert!(zone.contains(Vec2::ZERO, Vec2::new(10.0, 0.0)));
        assert!(!zone.contains(Vec2::ZERO, Vec2::new(DEFAULT_TRIGGER_RADIUS + 1.0, 0.0)));
        zone.enabled = false;
        assert!(!zone.contains(Vec2::ZERO, Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn test_kind_parses_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: ObjectKind,
        }
        let w: Wrapper = toml::from_str("kind = \"oven\"").unwrap();
        assert_eq!(w.kind, ObjectKind::Oven);
    }
}
