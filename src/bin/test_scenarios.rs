//! Scenario test runner CLI
//!
//! Usage:
//!   cargo run --bin test-scenarios              # Run all tests
//!   cargo run --bin test-scenarios -- checklist/ # Run category
//!   cargo run --bin test-scenarios -- checklist/out_of_order  # Run single test
//!   cargo run --bin test-scenarios -- --verbose # Show details on failure
//!   cargo run --bin test-scenarios -- --list    # List scenarios without running

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use kitchen_chores::testing::{SCENARIOS_DIR, TestResult, parser::parse_test_file, runner::run_test};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut verbose = false;
    let mut list_only = false;
    let mut filter: Option<String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            "--list" | "-l" => list_only = true,
            other if !other.starts_with('-') => filter = Some(other.to_string()),
            other => eprintln!("Ignoring unknown flag {}", other),
        }
    }

    let scenarios_path = Path::new(SCENARIOS_DIR);
    if !scenarios_path.exists() {
        println!("No scenarios directory found at {}", SCENARIOS_DIR);
        std::process::exit(1);
    }

    let tests = discover_tests(scenarios_path, filter.as_deref());
    if tests.is_empty() {
        println!("No test files found.");
        if let Some(f) = filter {
            println!("Filter: {}", f);
        }
        std::process::exit(1);
    }

    if list_only {
        for test_path in &tests {
            let rel_path = test_path.strip_prefix(scenarios_path).unwrap_or(test_path);
            println!("{}", rel_path.display());
        }
        return;
    }

    println!("Checklist Scenarios");
    println!("===================\n");

    let mut passed = 0;
    let mut failures: Vec<String> = Vec::new();
    let mut current_category = String::new();

    for test_path in &tests {
        let rel_path = test_path.strip_prefix(scenarios_path).unwrap_or(test_path);

        // Print category header
        if let Some(parent) = rel_path.parent() {
            let category = parent.to_string_lossy().to_string();
            if category != current_category && !category.is_empty() {
                if !current_category.is_empty() {
                    println!();
                }
                println!("{}/", category);
                current_category = category;
            }
        }

        let test_name = rel_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let result = match parse_test_file(test_path) {
            Ok(def) => {
                if verbose {
                    if let Some(description) = &def.description {
                        println!("  # {}", description);
                    }
                }
                run_test(&def)
            }
            Err(message) => TestResult::Error { message },
        };

        print_result(&test_name, &result, verbose);
        match result {
            TestResult::Pass { .. } => passed += 1,
            TestResult::Fail { .. } | TestResult::Error { .. } => {
                failures.push(rel_path.display().to_string())
            }
        }
    }

    println!("\n===================");
    println!("Results: {} passed, {} failed", passed, failures.len());

    if !failures.is_empty() {
        for failure in &failures {
            println!("  {}", failure);
        }
        std::process::exit(1);
    }
}

fn discover_tests(base: &Path, filter: Option<&str>) -> Vec<PathBuf> {
    let mut tests = Vec::new();
    discover_tests_recursive(base, base, filter, &mut tests);
    tests.sort();
    tests
}

fn discover_tests_recursive(
    base: &Path,
    current: &Path,
    filter: Option<&str>,
    tests: &mut Vec<PathBuf>,
) {
    let Ok(entries) = fs::read_dir(current) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.is_dir() {
            discover_tests_recursive(base, &path, filter, tests);
        } else if path.extension().is_some_and(|e| e == "toml") {
            let rel = path.strip_prefix(base).unwrap_or(&path).to_string_lossy();
            if filter.is_some_and(|f| !rel.contains(f)) {
                continue;
            }
            tests.push(path);
        }
    }
}

fn print_result(name: &str, result: &TestResult, verbose: bool) {
    let dots = ".".repeat(40 - name.len().min(39));

    match result {
        TestResult::Pass { steps } => {
            println!("  {} {} PASS ({} steps)", name, dots, steps);
        }
        TestResult::Fail { error } => {
            println!("  {} {} FAIL", name, dots);
            if verbose {
                println!("    {}", error);
            } else {
                println!("    {}", error.message);
            }
        }
        TestResult::Error { message } => {
            println!("  {} {} ERROR", name, dots);
            println!("    {}", message);
        }
    }
}
