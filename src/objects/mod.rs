//! Objects module - world objects the player acts on (collectables, props, kettle, oven)

mod components;
mod systems;

pub use components::*;
pub use systems::*;

use bevy::prelude::*;

use crate::constants::*;
use crate::scenes::{ObjectDef, SceneEntity};

/// Spawn a world object from scene data, with its emitter child if the kind has one
pub fn spawn_world_object(commands: &mut Commands, def: &ObjectDef) -> Entity {
    let mut object = WorldObject::new(def.key.clone(), def.kind);
    if let Some(prompt) = &def.prompt {
        object = object.with_prompt(prompt.clone());
    }
    if let Some(duration) = def.duration {
        object = object.with_activity_time(duration);
    }

    let zone = TriggerZone {
        radius: def.radius.unwrap_or(DEFAULT_TRIGGER_RADIUS),
        ..default()
    };

    let mut entity = commands.spawn((
        Sprite::from_color(def.kind.color(), OBJECT_SIZE),
        Transform::from_xyz(def.x, def.y, 0.0),
        Name::new(def.key.to_string()),
        object,
        zone,
        SceneEntity,
    ));

    if let Some(color) = def.kind.emitter_color() {
        entity.with_children(|parent| {
            parent.spawn((
                Sprite::from_color(color, EMITTER_SIZE),
                Transform::from_translation(EMITTER_OFFSET),
                Visibility::Hidden,
                Emitter,
            ));
        });
    }

    entity.id()
}
