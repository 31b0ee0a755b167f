//! Tests for `n8n-setup setup`.

#![cfg(unix)]

use crate::support::*;
use std::fs;

#[test]
fn test_setup_creates_layout_and_files() {
    let t = Test::with(Toolchain::Plugin);

    let output = t.run("setup");

    assert_success(&output);
    assert_stdout_contains(&output, "using 'docker compose'");
    assert_stdout_contains(&output, "setup complete");

    for dir in [
        "custom-nodes",
        "backups",
        "workflows/production",
        "workflows/development",
        "workflows/templates",
        "init-scripts",
    ] {
        assert!(t.path(dir).is_dir(), "{} missing", dir);
    }

    assert!(t.path(".env").exists());
    assert!(t.path("init-scripts/init-user.sql").exists());
    assert_eq!(t.calls(), vec!["docker --version", "docker compose version"]);
}

#[test]
fn test_setup_twice_declined_keeps_secrets() {
    let t = Test::with(Toolchain::Plugin);
    assert_success(&t.run("setup"));
    let first = fs::read(t.path(".env")).unwrap();

    let output = t.run_answering("setup", "N");

    assert_success(&output);
    assert_eq!(fs::read(t.path(".env")).unwrap(), first);
}

#[test]
fn test_setup_twice_confirmed_rotates_secrets() {
    let t = Test::with(Toolchain::Plugin);
    assert_success(&t.run("setup"));
    let first = t.read(".env");

    assert_success(&t.run_answering("setup", "y"));
    let second = t.read(".env");

    assert_ne!(
        env_value(&first, "N8N_ENCRYPTION_KEY"),
        env_value(&second, "N8N_ENCRYPTION_KEY")
    );
}
