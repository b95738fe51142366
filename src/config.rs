//! Database connection settings.
//!
//! Values come from the process environment, which may first be populated
//! from a dotenv-style settings file. Variables that are already set in the
//! environment are never overridden by the file. Missing variables are read
//! as empty strings; nothing here validates them.

use std::{env, path::Path};

use log::{debug, info};

use crate::error::{MatchError, MatchResult};

pub const DEFAULT_SETTINGS_FILE: &str = ".env";

pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_NAME: &str = "DB_NAME";

/// Populates the process environment from `path`.
///
/// When `required` is false a missing file is skipped. A file that exists but
/// cannot be read or parsed is always an error.
pub fn load_settings(path: &Path, required: bool) -> MatchResult<()> {
    if !required && !path.exists() {
        debug!("No settings file at {path:?}; using process environment only");
        return Ok(());
    }
    dotenvy::from_path(path).map_err(|source| MatchError::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded settings from {path:?}");
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionParams {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub database: String,
}

impl ConnectionParams {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).unwrap_or_default();
        Self {
            user: read(DB_USER),
            password: read(DB_PASSWORD),
            host: read(DB_HOST),
            port: read(DB_PORT),
            database: read(DB_NAME),
        }
    }

    /// Connection target for log lines, with the password masked.
    pub fn redacted(&self) -> String {
        format!(
            "{}:***@tcp({}:{})/{}",
            self.user, self.host, self.port, self.database
        )
    }
}
