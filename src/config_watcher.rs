//! Config file auto-reload system
//!
//! Polls the scenes file every few seconds and reloads it when modified.
//! Reloaded scenes take effect on the next scene load.

use bevy::prelude::*;
use std::fs;
use std::time::SystemTime;

use crate::constants::SCENES_FILE;
use crate::scenes::{SceneDatabase, SceneRoutes};

/// How often to check for config changes (seconds)
const CHECK_INTERVAL: f32 = 5.0;

/// Tracks modification time of the scenes file for hot-reload
#[derive(Resource)]
pub struct ConfigWatcher {
    /// Time since last check
    pub timer: f32,
    /// Last known modification time
    pub scenes_mtime: Option<SystemTime>,
}

impl Default for ConfigWatcher {
    fn default() -> Self {
        Self {
            timer: 0.0,
            scenes_mtime: get_mtime(SCENES_FILE),
        }
    }
}

impl ConfigWatcher {
    /// Advance the poll timer; true when a check is due
    pub fn tick(&mut self, delta_secs: f32) -> bool {
        self.timer += delta_secs;
        if self.timer < CHECK_INTERVAL {
            return false;
        }
        self.timer = 0.0;
        true
    }
}

/// Get file modification time, or None if file doesn't exist
fn get_mtime(path: &str) -> Option<SystemTime> {
    fs::metadata(path).ok().and_then(|m| m.modified().ok())
}

/// Check for scenes file changes and reload the database and routes
pub fn check_config_changes(
    time: Res<Time>,
    mut watcher: ResMut<ConfigWatcher>,
    mut scene_db: ResMut<SceneDatabase>,
    mut routes: ResMut<SceneRoutes>,
) {
    if !watcher.tick(time.delta_secs()) {
        return;
    }

    let new_mtime = get_mtime(SCENES_FILE);
    if new_mtime == watcher.scenes_mtime {
        return;
    }
    watcher.scenes_mtime = new_mtime;

    let (db, new_routes) = SceneDatabase::load_from_file(SCENES_FILE);
    *scene_db = db;
    *routes = new_routes;
    info!(
        "Auto-reloaded scenes from {} - changes apply on next scene load",
        SCENES_FILE
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_fires_every_interval() {
        let mut watcher = ConfigWatcher {
            timer: 0.0,
            scenes_mtime: None,
        };
        assert!(!watcher.tick(CHECK_INTERVAL - 1.0));
        assert!(watcher.tick(1.0));
        assert_eq!(watcher.timer, 0.0);
        assert!(!watcher.tick(0.1));
    }
}
