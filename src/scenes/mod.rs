//! Scenes module - database, routes, spawning, and the scene loader

mod database;
mod routes;
mod spawning;

pub use database::*;
pub use routes::*;
pub use spawning::*;

use bevy::prelude::*;

use crate::checklist::Checklist;
use crate::constants::PLAYER_SPAWN;
use crate::events::{EventBus, GameEvent};
use crate::input::{InputEvent, InputQueue};
use crate::player::{Heading, Player};

/// Name of the active scene
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct CurrentScene(pub String);

impl Default for CurrentScene {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_START_SCENE.to_string())
    }
}

impl CurrentScene {
    /// Switch to another scene by name (button-style direct load).
    /// Change detection only fires when the name differs.
    pub fn request_scene(current: &mut ResMut<CurrentScene>, name: &str) {
        current.set_if_neq(CurrentScene(name.to_string()));
    }
}

/// Follow the route table when the checklist asks for the next scene.
/// A scene without a route stays put and logs a warning.
pub fn handle_transition_requests(
    event_bus: Res<EventBus>,
    routes: Res<SceneRoutes>,
    mut current_scene: ResMut<CurrentScene>,
) {
    let requests: Vec<String> = event_bus
        .pending_events()
        .filter_map(|e| match e {
            GameEvent::TransitionRequested { scene } => Some(scene.clone()),
            _ => None,
        })
        .collect();

    for scene in requests {
        match routes.next(&scene) {
            Some(next) => {
                info!("Scene {} complete, loading {}", scene, next);
                CurrentScene::request_scene(&mut current_scene, next);
            }
            None => {
                warn!("No scene defined for {} completion", scene);
            }
        }
    }
}

/// Skip key (Q) jumps straight to the scene's configured skip target
pub fn handle_skip_requests(
    mut input_queue: ResMut<InputQueue>,
    scene_db: Res<SceneDatabase>,
    mut current_scene: ResMut<CurrentScene>,
    mut event_bus: ResMut<EventBus>,
) {
    if input_queue.take(InputEvent::SkipScene) == 0 {
        return;
    }

    let from = current_scene.0.clone();
    let Some(to) = scene_db.get(&from).and_then(|s| s.skip_to.clone()) else {
        warn!("Scene {} has no skip target", from);
        return;
    };

    CurrentScene::request_scene(&mut current_scene, &to);
    event_bus.emit(GameEvent::SceneSkip { from, to });
}

/// Rebuild the world whenever CurrentScene changes.
/// Scenes without a definition (e.g. the final "complete" screen) get no
/// checklist and no objects.
pub fn load_current_scene(
    mut commands: Commands,
    scene_db: Res<SceneDatabase>,
    current_scene: Res<CurrentScene>,
    scene_entities: Query<Entity, With<SceneEntity>>,
    mut players: Query<(&mut Transform, &mut Heading), With<Player>>,
    mut event_bus: ResMut<EventBus>,
) {
    despawn_scene(&mut commands, scene_entities.iter());

    let name = current_scene.0.clone();
    match scene_db.get(&name) {
        Some(scene) => {
            spawn_scene(&mut commands, scene);
            commands.insert_resource(scene.build_checklist());
            info!(
                "Loaded scene {} ({} objects, {} tasks)",
                name,
                scene.objects.len(),
                scene.primary.len() + scene.secondary.len()
            );
        }
        None => {
            commands.remove_resource::<Checklist>();
            info!("Scene {} has no definition, showing title only", name);
        }
    }

    for (mut transform, mut heading) in &mut players {
        transform.translation = PLAYER_SPAWN;
        transform.rotation = Quat::IDENTITY;
        heading.0 = 0.0;
    }

    event_bus.emit(GameEvent::SceneLoaded { scene: name });
}
