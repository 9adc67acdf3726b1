//! Assertion checking for test expectations

use std::collections::HashMap;

use super::parser::{ExpectedEvent, StateAssertion};
use crate::checklist::{Checklist, ChecklistPhase};
use crate::events::GameEvent;

/// Error when an assertion fails
#[derive(Debug)]
pub struct AssertionError {
    pub message: String,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for AssertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n    Expected: {}\n    Actual: {}",
            self.message, self.expected, self.actual
        )
    }
}

/// Captured event with timing info
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub step: usize,
    pub event_type: String,
    pub object: Option<String>,
}

impl CapturedEvent {
    pub fn from_game_event(step: usize, event: &GameEvent) -> Self {
        Self {
            step,
            event_type: event.name().to_string(),
            object: event.object().map(ToString::to_string),
        }
    }
}

/// Check if captured events match expected sequence
pub fn check_sequence(
    expected: &[ExpectedEvent],
    captured: &[CapturedEvent],
) -> Result<(), AssertionError> {
    let mut captured_idx = 0;

    for (i, exp) in expected.iter().enumerate() {
        // Find matching event starting from current position
        let found = captured[captured_idx..].iter().enumerate().find(|(_, cap)| {
            if cap.event_type != exp.event {
                return false;
            }
            if let Some(ref exp_object) = exp.object {
                if cap.object.as_ref() != Some(exp_object) {
                    return false;
                }
            }
            true
        });

        match found {
            Some((offset, cap)) => {
                if let Some(min) = exp.step_min {
                    if cap.step < min {
                        return Err(AssertionError {
                            message: format!("Event #{} '{}' occurred too early", i + 1, exp.event),
                            expected: format!("step >= {}", min),
                            actual: format!("step {}", cap.step),
                        });
                    }
                }
                if let Some(max) = exp.step_max {
                    if cap.step > max {
                        return Err(AssertionError {
                            message: format!("Event #{} '{}' occurred too late", i + 1, exp.event),
                            expected: format!("step <= {}", max),
                            actual: format!("step {}", cap.step),
                        });
                    }
                }
                captured_idx += offset + 1;
            }
            None => {
                let object_str = exp
                    .object
                    .as_ref()
                    .map(|o| format!(" (object: {})", o))
                    .unwrap_or_default();
                return Err(AssertionError {
                    message: format!("Event #{} '{}'{} not found", i + 1, exp.event, object_str),
                    expected: format!("'{}' event in sequence", exp.event),
                    actual: format!(
                        "events after position {}: {:?}",
                        captured_idx,
                        captured[captured_idx..]
                            .iter()
                            .map(|e| &e.event_type)
                            .collect::<Vec<_>>()
                    ),
                });
            }
        }
    }

    Ok(())
}

/// Coordinator state snapshot for assertions
#[derive(Debug, Clone)]
pub struct ScenarioState {
    pub index: usize,
    pub unlocked: bool,
    pub cleared: bool,
    pub countdown: f32,
    pub phase: ChecklistPhase,
    /// TransitionRequested events seen so far
    pub transitions: usize,
    /// Scene the route table picked, if any
    pub next_scene: Option<String>,
    /// Renderings handed to the presentation sink so far
    pub renders: usize,
    /// Latest rendering handed to the sink
    pub text: String,
    pub completed: HashMap<String, bool>,
    pub locked: HashMap<String, bool>,
}

impl ScenarioState {
    pub fn capture(
        checklist: &Checklist,
        transitions: usize,
        next_scene: Option<String>,
        renders: usize,
        text: String,
    ) -> Self {
        let tasks = checklist.primary().iter().chain(checklist.secondary().iter());
        let mut completed = HashMap::new();
        let mut locked = HashMap::new();
        for task in tasks {
            completed.insert(task.object.to_string(), task.completed);
            locked.insert(task.object.to_string(), checklist.is_locked(&task.object));
        }

        Self {
            index: checklist.current_index(),
            unlocked: checklist.second_list_unlocked(),
            cleared: checklist.level_cleared(),
            countdown: checklist.countdown(),
            phase: checklist.phase(),
            transitions,
            next_scene,
            renders,
            text,
            completed,
            locked,
        }
    }
}

/// Parse a check string into (path, operator, value)
fn parse_check(check: &str) -> Option<(&str, &str, &str)> {
    // Try operators in order of specificity (>= before >, etc.)
    for op in &[">=", "<=", "!=", "=", ">", "<"] {
        if let Some(idx) = check.find(op) {
            let path = check[..idx].trim();
            let value = check[idx + op.len()..].trim();
            return Some((path, op, value));
        }
    }
    None
}

/// Check state assertions against the scenario state
pub fn check_state(assertion: &StateAssertion, state: &ScenarioState) -> Result<(), AssertionError> {
    for check in &assertion.checks {
        let (path, operator, expected_value) = parse_check(check).ok_or_else(|| AssertionError {
            message: format!("Invalid check syntax: {}", check),
            expected: "format: 'property = value' or 'task.<object> = true'".to_string(),
            actual: check.clone(),
        })?;

        let path_parts: Vec<&str> = path.split('.').collect();

        match path_parts.as_slice() {
            ["index"] => check_float_comparison(path, state.index as f32, operator, expected_value)?,
            ["countdown"] => check_float_comparison(path, state.countdown, operator, expected_value)?,
            ["transitions"] => {
                check_float_comparison(path, state.transitions as f32, operator, expected_value)?
            }
            ["renders"] => check_float_comparison(path, state.renders as f32, operator, expected_value)?,
            ["unlocked"] => check_bool(check, state.unlocked, expected_value)?,
            ["cleared"] => check_bool(check, state.cleared, expected_value)?,
            ["phase"] => check_text(check, &format!("{:?}", state.phase), operator, expected_value)?,
            ["next_scene"] => {
                let actual = state.next_scene.as_deref().unwrap_or("none");
                check_text(check, actual, operator, expected_value)?
            }
            ["text"] => check_text(check, &state.text, operator, expected_value)?,
            ["task", object] => {
                let completed = state.completed.get(*object).ok_or_else(|| unknown_task(object, state))?;
                check_bool(check, *completed, expected_value)?
            }
            ["locked", object] => {
                let locked = state.locked.get(*object).ok_or_else(|| unknown_task(object, state))?;
                check_bool(check, *locked, expected_value)?
            }
            _ => {
                return Err(AssertionError {
                    message: format!("Unknown check path: {}", path),
                    expected: "index, countdown, transitions, renders, unlocked, cleared, phase, next_scene, text, task.<object>, locked.<object>".to_string(),
                    actual: path.to_string(),
                });
            }
        }
    }

    Ok(())
}

fn unknown_task(object: &str, state: &ScenarioState) -> AssertionError {
    AssertionError {
        message: format!("Task for '{}' not found", object),
        expected: format!("task for object '{}'", object),
        actual: format!("available: {:?}", state.completed.keys().collect::<Vec<_>>()),
    }
}

fn check_bool(check: &str, actual: bool, expected_str: &str) -> Result<(), AssertionError> {
    let expected = expected_str == "true";
    if actual != expected {
        return Err(AssertionError {
            message: format!("Check failed: {}", check),
            expected: expected_str.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// String equality; `\n` in the expected value matches a line break
fn check_text(check: &str, actual: &str, operator: &str, expected_str: &str) -> Result<(), AssertionError> {
    let expected = expected_str.trim_matches('"').replace("\\n", "\n");
    let pass = match operator {
        "=" | "==" => actual == expected,
        "!=" => actual != expected,
        _ => false,
    };
    if !pass {
        return Err(AssertionError {
            message: format!("Check failed: {}", check),
            expected: format!("{} {:?}", operator, expected),
            actual: format!("{:?}", actual),
        });
    }
    Ok(())
}

/// Check float comparison with operator
fn check_float_comparison(path: &str, actual: f32, operator: &str, expected_str: &str) -> Result<(), AssertionError> {
    let value: f32 = expected_str.trim().parse().map_err(|_| AssertionError {
        message: format!("Invalid value for {}", path),
        expected: "number".to_string(),
        actual: expected_str.to_string(),
    })?;

    let pass = match operator {
        ">=" => actual >= value,
        "<=" => actual <= value,
        ">" => actual > value,
        "<" => actual < value,
        "=" | "==" => (actual - value).abs() < 0.01,
        "!=" => (actual - value).abs() >= 0.01,
        _ => true, // Unknown operator, pass by default
    };

    if !pass {
        return Err(AssertionError {
            message: format!("Check failed: {} {} {} (actual: {:.2})", path, operator, expected_str, actual),
            expected: format!("{} {} {}", path, operator, value),
            actual: format!("{:.2}", actual),
        });
    }

    Ok(())
}
