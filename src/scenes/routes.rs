//! Static scene-to-scene lookup used when a level is cleared

use bevy::prelude::*;
use std::collections::HashMap;

/// Maps a cleared scene's name to the scene that follows it
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneRoutes {
    routes: HashMap<String, String>,
}

impl Default for SceneRoutes {
    fn default() -> Self {
        Self::new(HashMap::from([
            ("Level1".to_string(), "NextLevel".to_string()),
            ("Level2".to_string(), "complete".to_string()),
        ]))
    }
}

impl SceneRoutes {
    pub fn new(routes: HashMap<String, String>) -> Self {
        Self { routes }
    }

    /// Next scene for `current`, or None when the scene has no route
    pub fn next(&self, current: &str) -> Option<&str> {
        self.routes.get(current).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
