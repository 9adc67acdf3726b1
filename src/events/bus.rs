//! Event Bus - central hub for cross-module communication
//!
//! The EventBus decouples gameplay systems:
//! - World objects emit zone, activity and interaction events
//! - The checklist emits LevelCleared and TransitionRequested
//! - Presentation and the scene loader consume them in the same frame
//!
//! Events are drained and written to the debug log at the end of each frame.

use bevy::prelude::*;

use super::format::serialize_event;
use super::types::GameEvent;

/// Timestamped event for the event bus
#[derive(Debug, Clone)]
pub struct BusEvent {
    /// Time in milliseconds since app start
    pub time_ms: u32,
    /// The event data
    pub event: GameEvent,
}

/// Central event bus for cross-module communication
///
/// Systems emit events to the bus and later systems in the frame peek at them.
/// `flush_event_bus` drains everything once the frame's consumers have run.
#[derive(Resource, Default)]
pub struct EventBus {
    /// Events emitted this frame, waiting to be consumed
    pending: Vec<BusEvent>,

    /// Events that have been drained (kept until cleared)
    processed: Vec<BusEvent>,

    /// Current elapsed time in milliseconds (for timestamping)
    elapsed_ms: u32,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the elapsed time (called each frame)
    pub fn update_time(&mut self, elapsed_secs: f32) {
        self.elapsed_ms = (elapsed_secs * 1000.0) as u32;
    }

    /// Emit an event to the bus
    pub fn emit(&mut self, event: GameEvent) {
        self.pending.push(BusEvent {
            time_ms: self.elapsed_ms,
            event,
        });
    }

    /// Get pending events for consumption (does not drain)
    pub fn peek(&self) -> &[BusEvent] {
        &self.pending
    }

    /// Iterate pending events of interest without draining
    pub fn pending_events(&self) -> impl Iterator<Item = &GameEvent> {
        self.pending.iter().map(|e| &e.event)
    }

    /// Drain pending events, moving them to processed
    pub fn drain(&mut self) -> Vec<BusEvent> {
        let events = std::mem::take(&mut self.pending);
        self.processed.extend(events.clone());
        events
    }

    /// Get all processed events
    pub fn processed(&self) -> &[BusEvent] {
        &self.processed
    }

    /// Clear processed events
    pub fn clear_processed(&mut self) {
        self.processed.clear();
    }

    /// Get the number of pending events
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Check if the bus has any pending events
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Get current elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// System to update the event bus time each frame
pub fn update_event_bus_time(mut bus: ResMut<EventBus>, time: Res<Time>) {
    bus.update_time(time.elapsed_secs());
}

/// Drain the frame's events into the debug log.
/// Runs after every consumer in the frame chain.
pub fn flush_event_bus(mut bus: ResMut<EventBus>) {
    if !bus.has_pending() {
        return;
    }
    for event in bus.drain() {
        debug!("{}", serialize_event(event.time_ms, &event.event));
    }
    bus.clear_processed();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::ObjectKey;

    #[test]
    fn test_emit_and_drain() {
        let mut bus = EventBus::new();
        bus.update_time(1.5);

        bus.emit(GameEvent::ZoneEnter {
            object: ObjectKey::new("kettle"),
        });

        assert_eq!(bus.pending_count(), 1);
        assert!(bus.has_pending());

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time_ms, 1500);
        assert_eq!(bus.pending_count(), 0);
        assert_eq!(bus.processed().len(), 1);
    }

    #[test]
    fn test_default_bus_records_events() {
        let mut bus = EventBus::default();
        bus.emit(GameEvent::SecondListUnlocked);
        assert_eq!(bus.pending_count(), 1);
    }

    #[test]
    fn test_peek_keeps_events_pending() {
        let mut bus = EventBus::new();
        bus.emit(GameEvent::LevelCleared {
            scene: "Level1".to_string(),
        });

        let cleared = bus
            .pending_events()
            .any(|e| matches!(e, GameEvent::LevelCleared { .. }));
        assert!(cleared);
        assert_eq!(bus.peek().len(), 1);
        assert_eq!(bus.pending_count(), 1);
    }
}
