//! Test execution engine
//!
//! Drives a `Checklist` and an `EventBus` directly, the same way the frame
//! systems do, without building an App.

use crate::checklist::{Checklist, TaskList, report_and_publish, tick_and_publish};
use crate::constants::SCENES_FILE;
use crate::events::{EventBus, GameEvent};
use crate::scenes::{SceneDatabase, SceneRoutes, TaskDef};

use super::assertions::{AssertionError, CapturedEvent, ScenarioState, check_sequence, check_state};
use super::parser::{Step, TestDefinition, TestSetup};

/// Result of running a test
#[derive(Debug)]
pub enum TestResult {
    Pass { steps: usize },
    Fail { error: AssertionError },
    Error { message: String },
}

/// Everything the scripted steps act on
struct Scenario {
    scene: String,
    checklist: Checklist,
    routes: SceneRoutes,
    bus: EventBus,
    events: Vec<CapturedEvent>,
    transitions: usize,
    next_scene: Option<String>,
    renders: usize,
    text: String,
}

impl Scenario {
    fn new(scene: String, checklist: Checklist, routes: SceneRoutes) -> Self {
        let mut scenario = Self {
            scene,
            checklist,
            routes,
            bus: EventBus::new(),
            events: Vec::new(),
            transitions: 0,
            next_scene: None,
            renders: 0,
            text: String::new(),
        };
        scenario.collect(0);
        scenario
    }

    fn apply(&mut self, step_number: usize, step: &Step) {
        if let Some(object) = &step.interact {
            report_and_publish(&mut self.checklist, object, &mut self.bus);
        }
        if let Some(delta) = step.tick {
            tick_and_publish(&mut self.checklist, delta, &self.scene, &mut self.bus);
        }
        self.collect(step_number);
    }

    /// Play the roles of the presentation sink and the scene loader
    fn collect(&mut self, step_number: usize) {
        if let Some(text) = self.checklist.take_pending_text() {
            self.renders += 1;
            self.text = text;
        }

        for bus_event in self.bus.drain() {
            if let GameEvent::TransitionRequested { scene } = &bus_event.event {
                self.transitions += 1;
                self.next_scene = self.routes.next(scene).map(str::to_string);
            }
            self.events
                .push(CapturedEvent::from_game_event(step_number, &bus_event.event));
        }
    }

    fn state(&self) -> ScenarioState {
        ScenarioState::capture(
            &self.checklist,
            self.transitions,
            self.next_scene.clone(),
            self.renders,
            self.text.clone(),
        )
    }
}

fn tasks(defs: &[TaskDef]) -> TaskList {
    defs.iter().map(TaskDef::to_task).collect()
}

/// Build the starting coordinator, scene name, and route table
fn build_setup(setup: &TestSetup) -> Result<(String, Checklist, SceneRoutes), String> {
    let (name, checklist, routes) = match &setup.scene {
        Some(scene_name) => {
            let (scene_db, routes) = SceneDatabase::load_from_file(SCENES_FILE);
            let scene = scene_db.get(scene_name).ok_or_else(|| {
                format!(
                    "Scene '{}' not found. Available: {:?}",
                    scene_name,
                    scene_db.scenes.iter().map(|s| &s.name).collect::<Vec<_>>()
                )
            })?;
            (scene.name.clone(), scene.build_checklist(), routes)
        }
        None => (
            setup.scene_name.clone(),
            Checklist::new(tasks(&setup.primary), tasks(&setup.secondary)),
            SceneRoutes::default(),
        ),
    };

    let routes = setup.routes.clone().map(SceneRoutes::new).unwrap_or(routes);
    Ok((name, checklist, routes))
}

/// Run a single test and return the result
pub fn run_test(test: &TestDefinition) -> TestResult {
    let (scene, checklist, routes) = match build_setup(&test.setup) {
        Ok(setup) => setup,
        Err(message) => return TestResult::Error { message },
    };

    let steps: Vec<&Step> = test
        .steps
        .iter()
        .flat_map(|step| std::iter::repeat_n(step, step.repeat as usize))
        .collect();

    let mut state_checks = test.expect.state.clone();
    state_checks.sort_by_key(|s| s.after_step);
    if let Some(last) = state_checks.last() {
        if last.after_step > steps.len() {
            return TestResult::Error {
                message: format!(
                    "State check after step {} but the test only has {} steps",
                    last.after_step,
                    steps.len()
                ),
            };
        }
    }

    let mut scenario = Scenario::new(scene, checklist, routes);
    let mut next_check = 0;

    for step_number in 0..=steps.len() {
        if step_number > 0 {
            scenario.apply(step_number, steps[step_number - 1]);
        }

        while next_check < state_checks.len() && state_checks[next_check].after_step == step_number {
            if let Err(error) = check_state(&state_checks[next_check], &scenario.state()) {
                return TestResult::Fail {
                    error: AssertionError {
                        message: format!("After step {}: {}", step_number, error.message),
                        ..error
                    },
                };
            }
            next_check += 1;
        }
    }

    if let Err(error) = check_sequence(&test.expect.sequence, &scenario.events) {
        return TestResult::Fail { error };
    }

    TestResult::Pass { steps: steps.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::parser::parse_test_file;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn run_toml(content: &str) -> TestResult {
        let def: TestDefinition = toml::from_str(content).unwrap();
        run_test(&def)
    }

    #[test]
    fn test_inline_scenario_passes() {
        let result = run_toml(
            r#"
name = "inline"
[setup]
primary = [{ object = "A", description = "Do A" }]

[[step]]
interact = "A"

[[step]]
tick = 0.1

[expect]
sequence = [
    { event = "InteractionAccepted", object = "A", step_max = 1 },
    { event = "SecondListUnlocked" },
    { event = "LevelCleared", step_min = 2 },
]

[[expect.state]]
after_step = 0
checks = ["index = 0", "renders = 1", "text = \"Do A\""]

[[expect.state]]
after_step = 2
checks = ["cleared = true", "phase = Cleared", "task.A = true"]
"#,
        );
        assert!(matches!(result, TestResult::Pass { steps: 2 }), "{:?}", result);
    }

    #[test]
    fn test_failed_check_is_reported() {
        let result = run_toml(
            r#"
name = "failing"
[setup]
primary = [{ object = "A", description = "Do A" }]

[[step]]
interact = "B"

[[expect.state]]
after_step = 1
checks = ["index = 1"]
"#,
        );
        assert!(matches!(result, TestResult::Fail { .. }), "{:?}", result);
    }

    #[test]
    fn test_check_past_last_step_is_an_error() {
        let result = run_toml(
            r#"
name = "too far"
[setup]

[[expect.state]]
after_step = 3
checks = ["cleared = false"]
"#,
        );
        assert!(matches!(result, TestResult::Error { .. }), "{:?}", result);
    }

    fn collect_scenarios(dir: &Path, out: &mut Vec<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_scenarios(&path, out);
            } else if path.extension().is_some_and(|e| e == "toml") {
                out.push(path);
            }
        }
    }

    #[test]
    fn test_all_scenario_files_pass() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(crate::testing::SCENARIOS_DIR);
        let mut files = Vec::new();
        collect_scenarios(&dir, &mut files);
        assert!(!files.is_empty(), "no scenarios under {}", dir.display());

        for path in files {
            let def = parse_test_file(&path).unwrap();
            let result = run_test(&def);
            assert!(
                matches!(result, TestResult::Pass { .. }),
                "{}: {:?}",
                path.display(),
                result
            );
        }
    }
}
