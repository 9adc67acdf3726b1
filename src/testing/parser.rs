//! TOML test file parsing

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::checklist::ObjectKey;
use crate::scenes::TaskDef;

/// Complete test definition from TOML file
#[derive(Debug, Deserialize)]
pub struct TestDefinition {
    pub name: String,
    pub description: Option<String>,
    pub setup: TestSetup,
    /// Scripted actions, run in order (uses [[step]] TOML syntax)
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub expect: TestExpectations,
}

/// Test setup configuration
///
/// Either name a scene from the scenes file, or list tasks inline.
#[derive(Debug, Deserialize)]
pub struct TestSetup {
    /// Scene to load from the scenes file
    pub scene: Option<String>,
    /// Scene name reported for inline task lists
    #[serde(default = "default_scene_name")]
    pub scene_name: String,
    #[serde(default)]
    pub primary: Vec<TaskDef>,
    #[serde(default)]
    pub secondary: Vec<TaskDef>,
    /// Replaces the route table
    pub routes: Option<HashMap<String, String>>,
}

fn default_scene_name() -> String {
    "Scenario".to_string()
}

/// One scripted action.
///
/// `repeat` expands into that many consecutive steps, each numbered
/// separately for `step_min`/`step_max`/`after_step`.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Report an interaction with this object
    pub interact: Option<ObjectKey>,
    /// Advance the coordinator by this many seconds
    pub tick: Option<f32>,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_repeat() -> u32 {
    1
}

/// Expected test outcomes
#[derive(Debug, Default, Deserialize)]
pub struct TestExpectations {
    #[serde(default)]
    pub sequence: Vec<ExpectedEvent>,
    /// Multiple state assertions at different steps (uses [[expect.state]] TOML syntax)
    #[serde(default)]
    pub state: Vec<StateAssertion>,
}

/// Expected event in sequence
#[derive(Debug, Deserialize)]
pub struct ExpectedEvent {
    pub event: String,
    pub object: Option<String>,
    pub step_min: Option<usize>,
    pub step_max: Option<usize>,
}

/// State assertion after a step (0 = before the first step)
#[derive(Debug, Clone, Deserialize)]
pub struct StateAssertion {
    pub after_step: usize,
    #[serde(default)]
    pub checks: Vec<String>,
}

/// Parse a test file from path
pub fn parse_test_file(path: &Path) -> Result<TestDefinition, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}
