//! Tests for `n8n-setup start`.

#![cfg(unix)]

use crate::support::*;
use std::fs;

#[test]
fn test_start_without_env_exits_one_before_compose() {
    let t = Test::with(Toolchain::Plugin);

    let output = t.run("start");

    assert_exit_one(&output);
    assert_stderr_contains(&output, ".env file not found");
    assert_stdout_contains(&output, "run: n8n-setup setup");
    assert_eq!(t.calls(), vec!["docker --version", "docker compose version"]);
}

#[test]
fn test_start_refreshes_sql_and_starts() {
    let t = Test::with(Toolchain::Plugin);
    fs::write(
        t.path(".env"),
        "POSTGRES_DB=automation\nPOSTGRES_NON_ROOT_USER=worker\nPOSTGRES_NON_ROOT_PASSWORD=pw\n",
    )
    .unwrap();

    let output = t.run("start");

    assert_success(&output);
    assert_stdout_contains(&output, "services started successfully");
    assert_stdout_contains(&output, "http://localhost:5678");
    assert_eq!(
        t.read("init-scripts/init-user.sql"),
        "CREATE USER worker WITH PASSWORD 'pw';\nGRANT ALL PRIVILEGES ON DATABASE automation TO worker;\n"
    );
    assert_eq!(t.calls().last().unwrap(), "docker compose up -d");
}

#[test]
fn test_start_sql_is_idempotent() {
    let t = Test::with(Toolchain::Plugin);
    fs::write(t.path(".env"), "POSTGRES_DB=n8n\n").unwrap();

    assert_success(&t.run("start"));
    let first = t.read("init-scripts/init-user.sql");
    assert_success(&t.run("start"));
    let second = t.read("init-scripts/init-user.sql");

    assert_eq!(first, second);
}

#[test]
fn test_start_uses_standalone_when_plugin_missing() {
    let t = Test::with(Toolchain::Standalone);
    fs::write(t.path(".env"), "A=1\n").unwrap();

    let output = t.run("start");

    assert_success(&output);
    assert_stdout_contains(&output, "using 'docker-compose'");
    assert_eq!(
        t.calls(),
        vec![
            "docker --version",
            "docker compose version",
            "docker-compose --version",
            "docker-compose up -d",
        ]
    );
}

#[test]
fn test_start_prints_configured_url() {
    let t = Test::with(Toolchain::Plugin);
    fs::write(t.path(".env"), "A=1\n").unwrap();
    fs::write(
        t.path("n8n-setup.toml"),
        "[app]\nurl = \"https://n8n.example.com\"\n",
    )
    .unwrap();

    let output = t.run("start");

    assert_success(&output);
    assert_stdout_contains(&output, "https://n8n.example.com");
}

#[test]
fn test_start_with_bad_settings_is_fatal() {
    let t = Test::with(Toolchain::Plugin);
    fs::write(t.path(".env"), "A=1\n").unwrap();
    fs::write(t.path("n8n-setup.toml"), "[app\n").unwrap();

    let output = t.run("start");

    assert_exit_one(&output);
    assert_stderr_contains(&output, "invalid settings file");
    assert!(!t.calls().iter().any(|c| c.ends_with("up -d")));
}
