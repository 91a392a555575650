//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test
//! uses its own REWIRE_ENV so parallel tests never share a data directory.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(env: &str, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "-p", "rewire-cli", "--"])
        .args(args)
        .env("REWIRE_ENV", env)
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn breathe_patterns_lists_builtins() {
    let (stdout, stderr, code) = run_cli("test-patterns", &["breathe", "patterns"]);
    assert_eq!(code, 0, "breathe patterns failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["4-4-4-4", "4-7-8", "5-5"]);
}

#[test]
fn breathe_run_completes_a_short_session() {
    let (stdout, stderr, code) = run_cli(
        "test-breathe",
        &[
            "breathe", "run", "--pattern", "5-5", "--duration", "2", "--quiet",
        ],
    );
    assert_eq!(code, 0, "breathe run failed: {stderr}");
    assert!(stdout.contains("done: 2s"), "unexpected output: {stdout}");
}

#[test]
fn profile_init_then_stats_show() {
    let env = "test-stats";
    let (_, stderr, code) = run_cli(
        env,
        &[
            "profile",
            "init",
            "--name",
            "Ana",
            "--baseline",
            "10",
            "--quit-date",
            "2020-01-01T00:00:00Z",
        ],
    );
    assert_eq!(code, 0, "profile init failed: {stderr}");

    let (stdout, stderr, code) = run_cli(env, &["profile", "show"]);
    assert_eq!(code, 0, "profile show failed: {stderr}");
    let profile: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(profile["name"], "Ana");
    assert_eq!(profile["onboarding_complete"], true);

    let (stdout, stderr, code) = run_cli(
        env,
        &["stats", "show", "--at", "2020-01-04T00:00:00Z"],
    );
    assert_eq!(code, 0, "stats show failed: {stderr}");
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["days_since_quit"], 3);
    assert_eq!(stats["cigarettes_not_smoked"], 30);
    assert_eq!(stats["daily_message_index"], 3);
}

#[test]
fn stats_without_profile_fails() {
    let (_, stderr, code) = run_cli("test-noprofile", &["stats", "show"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no profile"));
}

#[test]
fn diary_checkin_then_history() {
    let env = "test-diary";
    let (_, stderr, code) = run_cli(
        env,
        &[
            "diary", "checkin", "--craving", "4", "--stress", "3", "--mood", "7", "--sleep", "6",
            "--trigger", "coffee",
        ],
    );
    assert_eq!(code, 0, "diary checkin failed: {stderr}");

    let (stdout, stderr, code) = run_cli(env, &["diary", "history"]);
    assert_eq!(code, 0, "diary history failed: {stderr}");
    let history: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = history.as_array().unwrap();
    assert!(!entries.is_empty());
    // Most recent entry is today's; saving twice on one day keeps one entry.
    assert_eq!(entries[0]["top_trigger"], "coffee");
    let today = entries[0]["date"].clone();
    assert_eq!(
        entries.iter().filter(|e| e["date"] == today).count(),
        1,
        "check-in upsert should keep one per day"
    );
}

#[test]
fn diary_craving_records_outcome() {
    let (stdout, stderr, code) = run_cli(
        "test-craving",
        &[
            "diary",
            "craving",
            "--intensity",
            "8",
            "--trigger",
            "stress",
            "--intervention",
            "4-7-8",
            "--outcome",
            "reduced",
            "--duration-secs",
            "120",
        ],
    );
    assert_eq!(code, 0, "diary craving failed: {stderr}");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["outcome"], "reduced");
    assert_eq!(event["intensity"], 8);
}

#[test]
fn plan_add_toggle_remove() {
    let env = "test-plan";
    let (stdout, stderr, code) = run_cli(
        env,
        &["plan", "add", "--if", "coffee", "--then", "8 breaths + water"],
    );
    assert_eq!(code, 0, "plan add failed: {stderr}");
    let rule: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let id = rule["id"].as_str().unwrap().to_string();

    let (stdout, _, code) = run_cli(env, &["plan", "toggle", &id]);
    assert_eq!(code, 0);
    let toggled: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(toggled["active"], false);

    let (_, _, code) = run_cli(env, &["plan", "remove", &id]);
    assert_eq!(code, 0);

    let (_, _, code) = run_cli(env, &["plan", "remove", &id]);
    assert_ne!(code, 0, "removing a missing rule should fail");
}

#[test]
fn config_get_set_list() {
    let env = "test-config";
    let (stdout, stderr, code) = run_cli(env, &["config", "get", "breathing.default_pattern"]);
    assert_eq!(code, 0, "config get failed: {stderr}");
    assert_eq!(stdout.trim(), "4-4-4-4");

    let (_, stderr, code) = run_cli(env, &["config", "set", "breathing.default_duration_secs", "90"]);
    assert_eq!(code, 0, "config set failed: {stderr}");

    let (stdout, _, code) = run_cli(env, &["config", "get", "breathing.default_duration_secs"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "90");

    let (stdout, _, code) = run_cli(env, &["config", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.get("defaults").is_some());
}
