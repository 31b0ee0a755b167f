//! Tests for `n8n-setup env`.

use crate::support::*;
use std::fs;

#[test]
fn test_env_generates_secrets_without_docker() {
    let t = Test::new();
    t.write_templates();

    let output = t.run("env");
    assert_success(&output);
    assert_stdout_contains(&output, ".env file created with generated passwords");

    let env = t.read(".env");
    for marker in MARKERS {
        assert!(!env.contains(marker), "{} left in .env", marker);
    }

    let postgres = env_value(&env, "POSTGRES_PASSWORD").unwrap();
    let non_root = env_value(&env, "POSTGRES_NON_ROOT_PASSWORD").unwrap();
    let admin = env_value(&env, "N8N_BASIC_AUTH_PASSWORD").unwrap();
    let key = env_value(&env, "N8N_ENCRYPTION_KEY").unwrap();

    assert_eq!(postgres.len(), 20);
    assert_eq!(non_root.len(), 20);
    assert_eq!(admin.len(), 16);
    assert_eq!(key.len(), 32);
    assert!(admin.chars().all(|c| PASSWORD_CHARS.contains(c)));
    assert!(key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

    // Only the admin password is shown
    assert_stdout_contains(&output, &admin);
    assert!(!stdout(&output).contains(&postgres));

    // Untouched lines survive verbatim
    assert!(env.contains("# PostgreSQL\n"));
    assert!(env.contains("N8N_BASIC_AUTH_USER=admin\n"));

    assert!(t.calls().is_empty());
}

#[test]
fn test_env_renders_sql_from_new_env() {
    let t = Test::new();
    t.write_templates();

    assert_success(&t.run("env"));

    let password = env_value(&t.read(".env"), "POSTGRES_NON_ROOT_PASSWORD").unwrap();
    let sql = t.read("init-scripts/init-user.sql");
    assert_eq!(
        sql,
        format!(
            "CREATE USER n8n WITH PASSWORD '{}';\nGRANT ALL PRIVILEGES ON DATABASE n8n TO n8n;\n",
            password
        )
    );
}

#[test]
fn test_env_declined_keeps_existing_file() {
    let t = Test::new();
    t.write_templates();
    fs::write(t.path(".env"), "KEEP=me\n").unwrap();

    let output = t.run_answering("env", "n");

    assert_success(&output);
    assert_stdout_contains(&output, "Overwrite?");
    assert_stdout_contains(&output, "skipping .env file creation");
    assert_eq!(t.read(".env"), "KEEP=me\n");
}

#[test]
fn test_env_eof_counts_as_no() {
    let t = Test::new();
    t.write_templates();
    fs::write(t.path(".env"), "KEEP=me\n").unwrap();

    let output = t.run("env");

    assert_success(&output);
    assert_eq!(t.read(".env"), "KEEP=me\n");
}

#[test]
fn test_env_confirmed_overwrites() {
    let t = Test::new();
    t.write_templates();
    fs::write(t.path(".env"), "KEEP=me\n").unwrap();

    let output = t.run_answering("env", "y");

    assert_success(&output);
    let env = t.read(".env");
    assert!(!env.contains("KEEP=me"));
    assert!(env_value(&env, "N8N_ENCRYPTION_KEY").is_some());
}

#[test]
fn test_env_missing_template_is_fatal() {
    let t = Test::new();

    let output = t.run("env");

    assert_exit_one(&output);
    assert_stderr_contains(&output, "env.template not found");
    assert!(!t.path(".env").exists());
}

#[test]
fn test_env_missing_sql_template_is_reported() {
    let t = Test::new();
    fs::write(t.path("env.template"), ENV_TEMPLATE).unwrap();

    let output = t.run("env");

    assert_success(&output);
    assert_stdout_contains(&output, "init-user.sql.template not found");
    assert!(t.path(".env").exists());
}

#[cfg(unix)]
#[test]
fn test_env_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    t.write_templates();
    assert_success(&t.run("env"));

    let mode = fs::metadata(t.path(".env")).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}
