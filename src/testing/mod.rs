//! Scenario testing system for deterministic checklist testing
//!
//! Runs scripted interactions and ticks from TOML files against the
//! checklist coordinator and checks the events and state it produces.

pub mod assertions;
pub mod parser;
pub mod runner;

pub use assertions::{AssertionError, CapturedEvent, ScenarioState, check_sequence, check_state};
pub use parser::{ExpectedEvent, StateAssertion, Step, TestDefinition, TestExpectations, TestSetup};
pub use runner::{TestResult, run_test};

/// Default path for test scenarios
pub const SCENARIOS_DIR: &str = "tests/scenarios";
