//! Checklist module - task lists, the coordinator state machine, and its frame system

mod coordinator;
mod task;

pub use coordinator::*;
pub use task::*;
// Explicit re-export so this shadows `bevy::prelude::Interaction` from the glob below
pub use coordinator::Interaction;

use bevy::prelude::*;

use crate::events::{EventBus, GameEvent};
use crate::scenes::CurrentScene;

/// Report an interaction and publish the outcome to the bus
pub fn report_and_publish(
    checklist: &mut Checklist,
    object: &ObjectKey,
    event_bus: &mut EventBus,
) -> Interaction {
    let result = checklist.report_interaction(object);
    match &result {
        Interaction::Accepted {
            index,
            unlocked_secondary,
        } => {
            event_bus.emit(GameEvent::InteractionAccepted {
                object: object.clone(),
                index: *index,
            });
            if *unlocked_secondary {
                event_bus.emit(GameEvent::SecondListUnlocked);
            }
        }
        Interaction::Rejected { expected } => {
            event_bus.emit(GameEvent::InteractionRejected {
                object: object.clone(),
                expected: expected.clone(),
            });
        }
    }
    result
}

/// Tick the coordinator and publish any one-shot signal for `scene`
pub fn tick_and_publish(
    checklist: &mut Checklist,
    delta_secs: f32,
    scene: &str,
    event_bus: &mut EventBus,
) -> Option<ChecklistSignal> {
    let signal = checklist.tick(delta_secs)?;
    let scene = scene.to_string();
    match signal {
        ChecklistSignal::LevelCleared => event_bus.emit(GameEvent::LevelCleared { scene }),
        ChecklistSignal::TransitionDue => {
            event_bus.emit(GameEvent::TransitionRequested { scene })
        }
    }
    Some(signal)
}

/// Frame system: advance the clear countdown.
/// Emits LevelCleared once and TransitionRequested once per scene.
pub fn advance_checklist(
    time: Res<Time>,
    mut checklist: ResMut<Checklist>,
    current_scene: Res<CurrentScene>,
    mut event_bus: ResMut<EventBus>,
) {
    tick_and_publish(
        &mut checklist,
        time.delta_secs(),
        &current_scene.0,
        &mut event_bus,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_and_publish_emits_unlock() {
        let mut checklist =
            Checklist::from_tasks(vec![Task::new("A", "Do A")], vec![Task::new("B", "Do B")]);
        let mut bus = EventBus::new();

        report_and_publish(&mut checklist, &ObjectKey::new("B"), &mut bus);
        report_and_publish(&mut checklist, &ObjectKey::new("A"), &mut bus);

        let names: Vec<&str> = bus.pending_events().map(GameEvent::name).collect();
        assert_eq!(
            names,
            vec!["InteractionRejected", "InteractionAccepted", "SecondListUnlocked"]
        );
    }

    #[test]
    fn test_tick_and_publish_signals_once() {
        let mut checklist = Checklist::default();
        let mut bus = EventBus::new();

        tick_and_publish(&mut checklist, 0.1, "Level1", &mut bus);
        tick_and_publish(&mut checklist, 0.1, "Level1", &mut bus);

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].event,
            GameEvent::LevelCleared {
                scene: "Level1".to_string()
            }
        );
    }
}
