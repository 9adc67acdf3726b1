//! Game event bus and compact event log format
//!
//! The EventBus enables decoupled cross-module communication; every event is
//! written to the debug log when the bus is flushed at the end of a frame.

mod bus;
mod format;
mod types;

pub use bus::{BusEvent, EventBus, flush_event_bus, update_event_bus_time};
pub use format::serialize_event;
pub use types::GameEvent;
