//! End-to-end tests for the `cachex` binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn cachex(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cachex"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn write_scenario(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

// ============================================================================
// SEARCH
// ============================================================================

#[test]
fn test_search_prints_cost_and_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(
        dir.path(),
        "open.json",
        r#"{"n": 3, "board": [], "start": [0, 2], "goal": [2, 0]}"#,
    );

    let output = cachex(&["search", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2\n(0,2)\n(1,1)\n(2,0)\n");
}

#[test]
fn test_search_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(
        dir.path(),
        "walls.json",
        r#"{"n": 4, "board": [["b", 1, 0], ["b", 1, 1], ["b", 1, 2]], "start": [0, 0], "goal": [3, 0]}"#,
    );

    let output = cachex(&["search", "--json", path.to_str().unwrap()]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["reachable"], true);
    let cost = report["cost"].as_u64().unwrap();
    assert_eq!(report["path"].as_array().unwrap().len() as u64, cost + 1);
    assert_eq!(report["path"][0], serde_json::json!([0, 0]));
}

#[test]
fn test_search_unreachable_goal_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(
        dir.path(),
        "sealed.json",
        r#"{"n": 3, "board": [["b", 0, 1], ["b", 1, 0]], "start": [0, 0], "goal": [2, 2]}"#,
    );

    let output = cachex(&["search", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "no path\n");
}

#[test]
fn test_search_invalid_board_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(
        dir.path(),
        "bad.json",
        r#"{"n": 3, "board": [], "start": [0, 0], "goal": [5, 5]}"#,
    );

    let output = cachex(&["search", path.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_search_missing_file_fails() {
    let output = cachex(&["search", "/definitely/not/here.json"]);
    assert!(!output.status.success());
}

// ============================================================================
// SELFPLAY
// ============================================================================

#[test]
fn test_selfplay_json_counts_every_game() {
    let output = cachex(&["--seed", "11", "selfplay", "--games", "20", "--size", "5", "--json"]);
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(results["games"], 20);
    let a = results["player_a_wins"].as_u64().unwrap();
    let b = results["player_b_wins"].as_u64().unwrap();
    assert_eq!(a + b, 20);
    assert_eq!(results["config"]["board_size"], 5);
}

#[test]
fn test_selfplay_is_reproducible_with_seed() {
    let args = ["selfplay", "--games", "10", "--size", "4", "--seed", "5"];
    let first = cachex(&args);
    let mut parallel_args = args.to_vec();
    parallel_args.push("--parallel");
    let second = cachex(&parallel_args);
    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn test_selfplay_rejects_zero_size() {
    let output = cachex(&["selfplay", "--size", "0"]);
    assert!(!output.status.success());
}
