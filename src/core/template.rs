//! Template rendering.
//!
//! Two artifacts are rendered: `.env` from `env.template` (markers replaced
//! with fresh secrets) and `init-scripts/init-user.sql` from its template
//! (`{NAME}` placeholders filled from `.env` or defaults).

use tracing::{debug, info};

use crate::core::constants;
use crate::core::env::EnvVars;
use crate::core::layout::{write_atomic, Layout};
use crate::core::prompt::Confirm;
use crate::core::secret::Credentials;
use crate::error::{MissingPrerequisite, Result};

/// Replace every placeholder in one left-to-right pass.
///
/// At each position the earliest match wins, ties going to the longest
/// placeholder. Inserted values are not re-scanned and unknown tokens are
/// copied through.
pub fn substitute(text: &str, replacements: &[(&str, &str)]) -> String {
    let replacements: Vec<(&str, &str)> = replacements
        .iter()
        .filter(|(placeholder, _)| !placeholder.is_empty())
        .copied()
        .collect();

    // next occurrence of each placeholder; only refreshed once the cursor passes it
    let mut next: Vec<Option<usize>> = replacements
        .iter()
        .map(|(placeholder, _)| text.find(placeholder))
        .collect();

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    loop {
        for (slot, (placeholder, _)) in next.iter_mut().zip(&replacements) {
            if matches!(*slot, Some(idx) if idx < cursor) {
                *slot = text[cursor..].find(placeholder).map(|idx| cursor + idx);
            }
        }

        let best = next
            .iter()
            .zip(&replacements)
            .filter_map(|(slot, (placeholder, value))| {
                slot.map(|idx| (idx, placeholder.len(), *value))
            })
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        match best {
            Some((idx, len, value)) => {
                out.push_str(&text[cursor..idx]);
                out.push_str(value);
                cursor = idx + len;
            }
            None => {
                out.push_str(&text[cursor..]);
                return out;
            }
        }
    }
}

/// Result of [`render_env_template`].
#[derive(Debug)]
pub enum EnvOutcome {
    /// `.env` existed and the user declined to overwrite it
    Skipped,
    /// `.env` was written. `sql` is the follow-up SQL render.
    Written {
        credentials: Credentials,
        sql: Result<()>,
    },
}

/// Render `.env` from `env.template` with freshly generated secrets.
///
/// An existing `.env` is only replaced after `confirm` says yes. After
/// writing, the SQL init script is re-rendered from the new values.
///
/// # Errors
///
/// Returns `MissingPrerequisite::EnvTemplate` if the template is absent.
/// Nothing is written in that case.
pub fn render_env_template(layout: &Layout, confirm: &dyn Confirm) -> Result<EnvOutcome> {
    let env_path = layout.env_file();

    if env_path.exists() && !confirm.confirm(".env file already exists. Overwrite?")? {
        info!("keeping existing .env");
        return Ok(EnvOutcome::Skipped);
    }

    let template_path = layout.env_template();
    if !template_path.exists() {
        return Err(MissingPrerequisite::EnvTemplate.into());
    }
    let template = std::fs::read_to_string(&template_path)?;

    let credentials = Credentials::generate();
    let rendered = substitute(&template, &credentials.replacements());

    write_atomic(&env_path, &rendered, true)?;
    info!(path = %env_path.display(), "wrote env file");

    let sql = render_sql_template(layout);
    Ok(EnvOutcome::Written { credentials, sql })
}

/// Values substituted into the SQL template, from `.env` or defaults.
///
/// The non-root password falls back to `n8n_password` only when `.env` has
/// no `POSTGRES_NON_ROOT_PASSWORD`.
pub fn sql_values(env: &EnvVars) -> [(&'static str, String); 3] {
    [
        (
            constants::POSTGRES_DB,
            env.get_or(constants::POSTGRES_DB, constants::DEFAULT_POSTGRES_DB)
                .to_string(),
        ),
        (
            constants::POSTGRES_NON_ROOT_USER,
            env.get_or(
                constants::POSTGRES_NON_ROOT_USER,
                constants::DEFAULT_POSTGRES_NON_ROOT_USER,
            )
            .to_string(),
        ),
        (
            constants::POSTGRES_NON_ROOT_PASSWORD,
            env.get_or(
                constants::POSTGRES_NON_ROOT_PASSWORD,
                constants::DEFAULT_POSTGRES_NON_ROOT_PASSWORD,
            )
            .to_string(),
        ),
    ]
}

/// Render the SQL template against an already-loaded env.
pub fn render_sql(template: &str, env: &EnvVars) -> String {
    let values = sql_values(env);
    let placeholders: Vec<(String, &str)> = values
        .iter()
        .map(|(name, value)| (format!("{{{}}}", name), value.as_str()))
        .collect();
    let replacements: Vec<(&str, &str)> = placeholders
        .iter()
        .map(|(placeholder, value)| (placeholder.as_str(), *value))
        .collect();

    substitute(template, &replacements)
}

/// Render `init-scripts/init-user.sql` from its template and `.env`.
///
/// Always overwrites the output; it is derived and can be regenerated.
///
/// # Errors
///
/// Returns `MissingPrerequisite::SqlTemplate` if the template is absent.
pub fn render_sql_template(layout: &Layout) -> Result<()> {
    let template_path = layout.sql_template();
    if !template_path.exists() {
        return Err(MissingPrerequisite::SqlTemplate.into());
    }

    let env = EnvVars::load(layout.env_file())?;
    let template = std::fs::read_to_string(&template_path)?;
    let rendered = render_sql(&template, &env);

    let sql_path = layout.sql_file();
    write_atomic(&sql_path, &rendered, false)?;
    debug!(path = %sql_path.display(), "wrote sql init script");

    Ok(())
}
