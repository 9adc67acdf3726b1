//! World object systems - trigger zones, interactions, timed activities

use bevy::prelude::*;

use super::components::{Emitter, ObjectEffect, TriggerZone, WorldObject};
use crate::checklist::{Checklist, Interaction, report_and_publish};
use crate::constants::LOCKED_TINT;
use crate::events::{EventBus, GameEvent};
use crate::input::{InputEvent, InputQueue};
use crate::player::Player;

/// Enable zones for reachable tasks, disable zones for locked ones.
/// Only the first primary task starts enabled; each acceptance opens the next.
pub fn sync_zone_locks(
    checklist: Res<Checklist>,
    mut objects: Query<(&WorldObject, &mut TriggerZone, &mut Sprite)>,
) {
    for (object, mut zone, mut sprite) in &mut objects {
        let enabled = !checklist.is_locked(&object.key);
        if zone.enabled == enabled {
            continue;
        }
        zone.enabled = enabled;
        let alpha = if enabled { 1.0 } else { LOCKED_TINT };
        let base = object.kind.color().to_srgba();
        sprite.color = Color::srgba(base.red, base.green, base.blue, alpha);
    }
}

/// Track player membership in each trigger zone and emit enter/exit events
pub fn update_trigger_zones(
    players: Query<&Transform, With<Player>>,
    mut objects: Query<(&mut WorldObject, &TriggerZone, &Transform), Without<Player>>,
    mut event_bus: ResMut<EventBus>,
) {
    let Ok(player_transform) = players.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (mut object, zone, transform) in &mut objects {
        let inside = zone.contains(transform.translation.truncate(), player_pos);
        if inside {
            if object.on_zone_enter() {
                event_bus.emit(GameEvent::ZoneEnter {
                    object: object.key.clone(),
                });
            }
        } else if object.on_zone_exit() {
            event_bus.emit(GameEvent::ZoneExit {
                object: object.key.clone(),
            });
        }
    }
}

/// Consume this tick's interact presses and deliver them to objects in range
pub fn process_interactions(
    mut commands: Commands,
    mut input_queue: ResMut<InputQueue>,
    mut checklist: ResMut<Checklist>,
    mut objects: Query<(Entity, &mut WorldObject)>,
    mut event_bus: ResMut<EventBus>,
) {
    let presses = input_queue.take(InputEvent::Interact);
    for _ in 0..presses {
        for (entity, mut object) in &mut objects {
            match object.on_interact() {
                ObjectEffect::None => {}
                ObjectEffect::ActivityStarted(duration) => {
                    info!("{}", object.kind.activity_started_message());
                    event_bus.emit(GameEvent::ActivityStarted {
                        object: object.key.clone(),
                        duration,
                    });
                }
                ObjectEffect::Report => {
                    debug!("Interact key pressed on {}", object.key);
                    report_object(
                        &mut commands,
                        entity,
                        &object,
                        &mut checklist,
                        &mut event_bus,
                    );
                }
            }
        }
    }
}

/// Count down running activities; a finished activity reports to the checklist
pub fn advance_activities(
    mut commands: Commands,
    time: Res<Time>,
    mut checklist: ResMut<Checklist>,
    mut objects: Query<(Entity, &mut WorldObject)>,
    mut event_bus: ResMut<EventBus>,
) {
    let delta = time.delta_secs();
    for (entity, mut object) in &mut objects {
        if object.on_tick(delta) != ObjectEffect::Report {
            continue;
        }
        info!("{}", object.kind.activity_finished_message());
        event_bus.emit(GameEvent::ActivityFinished {
            object: object.key.clone(),
        });
        report_object(
            &mut commands,
            entity,
            &object,
            &mut checklist,
            &mut event_bus,
        );
    }
}

/// Show particle stand-ins while their parent object is busy
pub fn update_emitters(
    objects: Query<(&WorldObject, &Children)>,
    mut emitters: Query<&mut Visibility, With<Emitter>>,
) {
    for (object, children) in &objects {
        let visibility = if object.is_busy() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        for child in children.iter() {
            if let Ok(mut emitter) = emitters.get_mut(child) {
                emitter.set_if_neq(visibility);
            }
        }
    }
}

fn report_object(
    commands: &mut Commands,
    entity: Entity,
    object: &WorldObject,
    checklist: &mut Checklist,
    event_bus: &mut EventBus,
) {
    let result = report_and_publish(checklist, &object.key, event_bus);
    if matches!(result, Interaction::Accepted { .. }) && object.kind.consumed_on_accept() {
        info!("Picked up {}", object.key);
        commands.entity(entity).despawn();
    }
}
