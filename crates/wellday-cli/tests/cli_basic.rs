//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary and verify outputs. Config reads go to the
//! development directory so a user's real defaults are never touched.

use std::process::Command;

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_wellday-cli"))
        .args(args)
        .env("WELLDAY_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

const REFERENCE_DAY: [&str; 14] = [
    "--wake", "06:30", "--bed", "22:30", "--hydration", "60", "--eye", "20", "--movement", "90",
    "--focus", "mobility", "--goal", "2500",
];

#[test]
fn test_timeline_show_text() {
    let mut args = vec!["timeline", "show"];
    args.extend(REFERENCE_DAY);
    let (code, stdout, _) = run_cli(&args);
    assert_eq!(code, 0, "Timeline show failed");
    assert!(stdout.contains("06:45 AM  [movement] Morning activation"));
    assert!(stdout.contains("10:00 PM  [mindfulness] Evening wind-down"));
    assert!(stdout.contains("10:15 PM  [sleep] Digital sunset"));
    assert!(stdout.contains("(06:30 -> 22:30, focus mobility)"));
}

#[test]
fn test_timeline_show_json() {
    let mut args = vec!["timeline", "show", "--json"];
    args.extend(REFERENCE_DAY);
    let (code, stdout, _) = run_cli(&args);
    assert_eq!(code, 0, "Timeline show --json failed");

    let slots: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let slots = slots.as_array().unwrap();
    assert_eq!(slots[0]["minute"], 405);
    assert_eq!(slots[0]["clock"], "06:45 AM");
    let first_eye = slots
        .iter()
        .find(|s| {
            s["events"]
                .as_array()
                .unwrap()
                .iter()
                .any(|e| e["kind"] == "eye-rest")
        })
        .unwrap();
    assert_eq!(first_eye["clock"], "07:10 AM");
}

#[test]
fn test_timeline_rejects_inverted_window() {
    let (code, _, stderr) = run_cli(&[
        "timeline", "show", "--wake", "23:00", "--bed", "07:00", "--hydration", "60", "--eye",
        "20", "--movement", "90",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("must be before bed time"));
}

#[test]
fn test_timeline_rejects_zero_interval() {
    let (code, _, stderr) = run_cli(&["timeline", "show", "--hydration", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("positive"));
}

#[test]
fn test_preset_list() {
    let (code, stdout, _) = run_cli(&["preset", "list"]);
    assert_eq!(code, 0, "Preset list failed");
    assert!(stdout.contains("desk"));
    assert!(stdout.contains("active"));
    assert!(stdout.contains("calm"));
}

#[test]
fn test_preset_show_json() {
    let (code, stdout, _) = run_cli(&["preset", "show", "active", "--json"]);
    assert_eq!(code, 0, "Preset show failed");
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["name"], "active");
    assert_eq!(v["focus"], "strength");
    assert_eq!(v["movement_interval"], 75);
    assert_eq!(v["eye_interval"], 25);
    assert_eq!(v["hydration_interval"], 45);
}

#[test]
fn test_preset_show_unknown() {
    let (code, _, _) = run_cli(&["preset", "show", "gym"]);
    assert_ne!(code, 0);
}

#[test]
fn test_watch_runs_bounded() {
    let mut args = vec!["watch", "--ticks", "1", "--log", "500"];
    args.extend(REFERENCE_DAY);
    let (code, stdout, _) = run_cli(&args);
    assert_eq!(code, 0, "Watch failed");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("water 500/2500 ml (20%)"));
}

#[test]
fn test_config_get() {
    let (code, _, _) = run_cli(&["config", "get", "planner.focus"]);
    assert_eq!(code, 0, "Config get failed");
}

#[test]
fn test_config_get_unknown_key() {
    let (code, _, stderr) = run_cli(&["config", "get", "planner.nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_completions() {
    let (code, stdout, _) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "Completions failed");
    assert!(stdout.contains("wellday-cli"));
}
