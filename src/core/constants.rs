//! Constants used throughout n8n-setup.
//!
//! Centralizes file names, template markers and defaults.

/// Rendered environment file (.env).
pub const ENV_FILE: &str = ".env";

/// Environment template consumed by `setup` and `env`.
pub const ENV_TEMPLATE: &str = "env.template";

/// Directory holding database init scripts.
pub const INIT_SCRIPTS_DIR: &str = "init-scripts";

/// SQL template file name inside [`INIT_SCRIPTS_DIR`].
pub const SQL_TEMPLATE: &str = "init-user.sql.template";

/// Rendered SQL file name inside [`INIT_SCRIPTS_DIR`].
pub const SQL_FILE: &str = "init-user.sql";

/// Backup output directory.
pub const BACKUP_DIR: &str = "backups";

/// Optional settings file.
pub const SETTINGS_FILE: &str = "n8n-setup.toml";

/// Directories created by `setup`, parents before children.
pub const PROJECT_DIRS: &[&str] = &[
    "custom-nodes",
    "backups",
    "workflows",
    "workflows/production",
    "workflows/development",
    "workflows/templates",
    "init-scripts",
];

/// Env template markers, replaced with freshly generated secrets.
pub const POSTGRES_PASSWORD_MARKER: &str = "your_secure_postgres_password_here";
pub const POSTGRES_NON_ROOT_PASSWORD_MARKER: &str = "your_secure_n8n_db_password_here";
pub const N8N_PASSWORD_MARKER: &str = "your_secure_n8n_password_here";
pub const ENCRYPTION_KEY_MARKER: &str = "your_32_character_encryption_key_here";

/// Env keys read when rendering the SQL template.
pub const POSTGRES_DB: &str = "POSTGRES_DB";
pub const POSTGRES_NON_ROOT_USER: &str = "POSTGRES_NON_ROOT_USER";
pub const POSTGRES_NON_ROOT_PASSWORD: &str = "POSTGRES_NON_ROOT_PASSWORD";

pub const DEFAULT_POSTGRES_DB: &str = "n8n";
pub const DEFAULT_POSTGRES_NON_ROOT_USER: &str = "n8n";
pub const DEFAULT_POSTGRES_NON_ROOT_PASSWORD: &str = "n8n_password";

/// Secret lengths.
pub const POSTGRES_PASSWORD_LEN: usize = 20;
pub const POSTGRES_NON_ROOT_PASSWORD_LEN: usize = 20;
pub const N8N_PASSWORD_LEN: usize = 16;
pub const ENCRYPTION_KEY_LEN: usize = 32;

/// Backup defaults. These do not follow the generated credentials.
pub const DEFAULT_DB_SERVICE: &str = "postgres";
pub const DEFAULT_BACKUP_USER: &str = "n8n";
pub const DEFAULT_BACKUP_DATABASE: &str = "n8n";

/// Backup file name pieces: `n8n_backup_YYYYMMDD_HHMMSS.sql`.
pub const BACKUP_PREFIX: &str = "n8n_backup_";
pub const BACKUP_EXTENSION: &str = "sql";
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Where n8n listens once started.
pub const DEFAULT_APP_URL: &str = "http://localhost:5678";

/// Log filter env var.
pub const LOG_ENV: &str = "N8N_SETUP_LOG";
