//! `.env` file parsing.
//!
//! Values are kept verbatim: no unquoting, no escape handling. Only the
//! first `=` separates key from value.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Parsed `KEY=VALUE` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    /// Load an env file.
    ///
    /// A missing file yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "env file absent");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let vars = Self::parse(&contents);
        debug!(path = %path.display(), entries = vars.len(), "env file loaded");
        Ok(vars)
    }

    /// Parse env file contents.
    ///
    /// Blank lines, `#` comments and lines without `=` are skipped. A
    /// repeated key keeps its last value.
    pub fn parse(contents: &str) -> Self {
        let mut vars = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                vars.insert(key.to_string(), value.to_string());
            }
        }

        Self { vars }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Get a value, falling back to `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
