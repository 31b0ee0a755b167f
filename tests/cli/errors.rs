//! Tests for argument handling and missing tooling.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_actions() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup").and(predicate::str::contains("backup")));
}

#[test]
fn test_unknown_action_fails() {
    let t = Test::new();

    t.cmd().arg("restore").assert().failure();
}

#[test]
fn test_no_action_fails() {
    let t = Test::new();

    t.cmd().assert().failure();
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("n8n-setup"));
}

#[test]
fn test_completions_need_no_docker() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n8n-setup"));
}

#[test]
fn test_every_docker_action_fails_without_docker() {
    let t = Test::new();
    t.write_templates();

    for action in ["setup", "start", "stop", "status", "logs", "backup"] {
        let output = t.run(action);
        assert_exit_one(&output);
        assert_stderr_contains(&output, "Docker is not installed or not accessible");
    }

    assert!(!t.path(".env").exists());
    assert!(!t.path("custom-nodes").exists());
}

#[cfg(unix)]
#[test]
fn test_docker_without_compose_fails() {
    let t = Test::with(Toolchain::DockerOnly);

    let output = t.run("status");

    assert_exit_one(&output);
    assert_stderr_contains(&output, "Docker Compose is not installed or not accessible");
    assert_eq!(t.calls(), vec!["docker --version", "docker compose version"]);
}

#[cfg(unix)]
#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::with(Toolchain::Plugin);

    let output = t.cmd().args(["--verbose", "status"]).output().unwrap();

    assert_success(&output);
    assert_stderr_contains(&output, "probed compose variant");
    assert!(!stdout(&output).contains("DEBUG"));
}

#[cfg(unix)]
#[test]
fn test_log_env_var_controls_filter() {
    let t = Test::with(Toolchain::Plugin);

    let output = t
        .cmd()
        .env("N8N_SETUP_LOG", "n8n_setup=debug")
        .arg("status")
        .output()
        .unwrap();

    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
}

#[cfg(unix)]
#[test]
fn test_default_has_no_debug_output() {
    let t = Test::with(Toolchain::Plugin);

    let output = t.run("status");

    assert_success(&output);
    assert!(!stderr(&output).contains("DEBUG"));
}
