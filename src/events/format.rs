//! Compact text format for event log lines
//!
//! Format: `T:NNNNN|CODE|data...`
//! - T:NNNNN = timestamp in milliseconds (5 digits, wraps at 99999)
//! - CODE = 2-char event type code
//! - data = pipe-separated values specific to event type
//!
//! Examples:
//! ```text
//! T:00000|SL|Level1
//! T:02150|ZE|mug
//! T:02400|I+|mug|0
//! T:03100|I-|oven|kettle
//! T:09800|AS|kettle|15.0
//! ```

use super::types::GameEvent;

/// Serialize a GameEvent to compact text format
pub fn serialize_event(time_ms: u32, event: &GameEvent) -> String {
    let ts = format!("T:{:05}", time_ms % 100000);
    let code = event.type_code();

    let data = match event {
        GameEvent::SceneLoaded { scene }
        | GameEvent::LevelCleared { scene }
        | GameEvent::TransitionRequested { scene } => scene.clone(),
        GameEvent::SceneSkip { from, to } => format!("{}|{}", from, to),
        GameEvent::ZoneEnter { object }
        | GameEvent::ZoneExit { object }
        | GameEvent::ActivityFinished { object } => object.to_string(),
        GameEvent::ActivityStarted { object, duration } => {
            format!("{}|{:.1}", object, duration)
        }
        GameEvent::InteractionAccepted { object, index } => format!("{}|{}", object, index),
        GameEvent::InteractionRejected { object, expected } => format!(
            "{}|{}",
            object,
            expected.as_ref().map(|e| e.as_str()).unwrap_or("-")
        ),
        GameEvent::SecondListUnlocked => String::new(),
    };

    if data.is_empty() {
        format!("{}|{}", ts, code)
    } else {
        format!("{}|{}|{}", ts, code, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::ObjectKey;

    #[test]
    fn test_serialize_interaction_events() {
        let accepted = GameEvent::InteractionAccepted {
            object: ObjectKey::new("mug"),
            index: 0,
        };
        assert_eq!(serialize_event(2400, &accepted), "T:02400|I+|mug|0");

        let rejected = GameEvent::InteractionRejected {
            object: ObjectKey::new("oven"),
            expected: None,
        };
        assert_eq!(serialize_event(3100, &rejected), "T:03100|I-|oven|-");
    }

    #[test]
    fn test_serialize_without_data() {
        assert_eq!(
            serialize_event(123456, &GameEvent::SecondListUnlocked),
            "T:23456|UN"
        );
    }
}
