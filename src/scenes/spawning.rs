//! Scene spawning - world objects and mascot for a scene definition

use bevy::prelude::*;

use super::database::SceneDef;
use crate::objects::spawn_world_object;
use crate::ui::spawn_mascot;

/// Marks entities owned by the active scene (despawned on scene change)
#[derive(Component)]
pub struct SceneEntity;

/// Spawn every object of a scene plus its mascot
pub fn spawn_scene(commands: &mut Commands, scene: &SceneDef) {
    for object in &scene.objects {
        spawn_world_object(commands, object);
    }
    spawn_mascot(commands);
}

/// Despawn everything the previous scene spawned
pub fn despawn_scene(commands: &mut Commands, entities: impl Iterator<Item = Entity>) {
    for entity in entities {
        commands.entity(entity).despawn();
    }
}
