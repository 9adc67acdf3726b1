//! Scene database - parsing and storage

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;

use super::routes::SceneRoutes;
use crate::checklist::{Checklist, ObjectKey, Task, TaskList};
use crate::objects::ObjectKind;

/// World object placement in scene data
#[derive(Clone, Debug, Deserialize)]
pub struct ObjectDef {
    pub key: ObjectKey,
    pub kind: ObjectKind,
    pub x: f32,
    pub y: f32,
    /// Overrides the kind's default prompt text
    #[serde(default)]
    pub prompt: Option<String>,
    /// Overrides the kind's default activity time (seconds)
    #[serde(default)]
    pub duration: Option<f32>,
    /// Trigger zone radius
    #[serde(default)]
    pub radius: Option<f32>,
}

/// Task entry in scene data
#[derive(Clone, Debug, Deserialize)]
pub struct TaskDef {
    pub object: ObjectKey,
    pub description: String,
}

impl TaskDef {
    pub fn to_task(&self) -> Task {
        Task::new(self.object.clone(), self.description.clone())
    }
}

/// Single scene definition
#[derive(Clone, Debug, Deserialize)]
pub struct SceneDef {
    pub name: String,
    /// Scene loaded by the skip key (Q)
    #[serde(default)]
    pub skip_to: Option<String>,
    #[serde(default, rename = "object")]
    pub objects: Vec<ObjectDef>,
    #[serde(default)]
    pub primary: Vec<TaskDef>,
    #[serde(default)]
    pub secondary: Vec<TaskDef>,
}

impl SceneDef {
    /// Fresh coordinator for this scene's task lists
    pub fn build_checklist(&self) -> Checklist {
        Checklist::new(
            self.primary.iter().map(TaskDef::to_task).collect::<TaskList>(),
            self.secondary.iter().map(TaskDef::to_task).collect::<TaskList>(),
        )
    }

    pub fn object(&self, key: &ObjectKey) -> Option<&ObjectDef> {
        self.objects.iter().find(|o| o.key == *key)
    }

    /// Problems that make the scene unwinnable or ambiguous
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut seen = HashSet::new();
        for object in &self.objects {
            if !seen.insert(&object.key) {
                problems.push(format!(
                    "scene {}: duplicate object key {}",
                    self.name, object.key
                ));
            }
        }

        let mut tasked = HashSet::new();
        for task in self.primary.iter().chain(self.secondary.iter()) {
            if self.object(&task.object).is_none() {
                problems.push(format!(
                    "scene {}: task '{}' names unknown object {}",
                    self.name, task.description, task.object
                ));
            }
            if !tasked.insert(&task.object) {
                problems.push(format!(
                    "scene {}: object {} is used by more than one task",
                    self.name, task.object
                ));
            }
        }

        problems
    }
}

/// Raw file layout for scenes.toml
#[derive(Debug, Deserialize)]
struct SceneFile {
    #[serde(default)]
    routes: Option<HashMap<String, String>>,
    #[serde(default, rename = "scene")]
    scenes: Vec<SceneDef>,
}

/// Database of all loaded scenes
#[derive(Resource, Default)]
pub struct SceneDatabase {
    pub scenes: Vec<SceneDef>,
}

impl SceneDatabase {
    /// Load scenes and routes from file, falling back to defaults on error
    pub fn load_from_file(path: &str) -> (Self, SceneRoutes) {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to load scenes from {}: {}, using defaults", path, e);
                return (Self::default_scenes(), SceneRoutes::default());
            }
        };

        match Self::parse(&content) {
            Ok((db, routes)) => {
                info!("Loaded {} scenes from {}", db.len(), path);
                (db, routes)
            }
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path, e);
                (Self::default_scenes(), SceneRoutes::default())
            }
        }
    }

    /// Parse scene data from a TOML string.
    /// A file without a `[routes]` table gets the built-in routes.
    pub fn parse(content: &str) -> Result<(Self, SceneRoutes), String> {
        let file: SceneFile = toml::from_str(content).map_err(|e| e.to_string())?;

        if file.scenes.is_empty() {
            return Err("no scenes defined".to_string());
        }

        let db = Self {
            scenes: file.scenes,
        };
        for problem in db.validate() {
            warn!("{}", problem);
        }

        let routes = file.routes.map(SceneRoutes::new).unwrap_or_default();
        Ok((db, routes))
    }

    /// Validation problems across all scenes
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut names = HashSet::new();
        for scene in &self.scenes {
            if !names.insert(scene.name.as_str()) {
                problems.push(format!("duplicate scene name {}", scene.name));
            }
            problems.extend(scene.validate());
        }
        problems
    }

    /// Hardcoded fallback scenes
    pub fn default_scenes() -> Self {
        fn object(key: &str, kind: ObjectKind, x: f32, y: f32) -> ObjectDef {
            ObjectDef {
                key: ObjectKey::new(key),
                kind,
                x,
                y,
                prompt: None,
                duration: None,
                radius: None,
            }
        }
        fn task(key: &str, description: &str) -> TaskDef {
            TaskDef {
                object: ObjectKey::new(key),
                description: description.to_string(),
            }
        }

        Self {
            scenes: vec![
                SceneDef {
                    name: "Level1".to_string(),
                    skip_to: Some("Level2".to_string()),
                    objects: vec![
                        object("mug", ObjectKind::Collectable, -350.0, 120.0),
                        object("kettle", ObjectKind::Kettle, 0.0, 220.0),
                        object("teabag", ObjectKind::Collectable, 350.0, 120.0),
                        object("fridge", ObjectKind::Interactable, -350.0, -150.0),
                    ],
                    primary: vec![
                        task("mug", "Find a mug"),
                        task("kettle", "Boil the kettle"),
                        task("teabag", "Grab a teabag"),
                    ],
                    secondary: vec![task("fridge", "Get milk from the fridge")],
                },
                SceneDef {
                    name: "Level2".to_string(),
                    skip_to: Some("complete".to_string()),
                    objects: vec![
                        object("flour", ObjectKind::Collectable, -400.0, 150.0),
                        object("eggs", ObjectKind::Collectable, 400.0, 150.0),
                        object("bowl", ObjectKind::Interactable, 0.0, 0.0),
                        object("oven", ObjectKind::Oven, 0.0, 250.0),
                    ],
                    primary: vec![
                        task("flour", "Fetch the flour"),
                        task("eggs", "Fetch the eggs"),
                        task("bowl", "Mix the batter"),
                    ],
                    secondary: vec![task("oven", "Bake the cake")],
                },
            ],
        }
    }

    /// Get scene by name
    pub fn get(&self, name: &str) -> Option<&SceneDef> {
        self.scenes.iter().find(|s| s.name == name)
    }

    /// Get number of scenes
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Check if database is empty
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
