//! Configuration - where the user store lives

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Default user store file, relative to the working directory
pub const DEFAULT_USERS_FILE: &str = "users.json";

/// Environment variable overriding the user store path
pub const USERS_PATH_ENV: &str = "TODO_USERS_PATH";

/// Resolve the user store path
///
/// `TODO_USERS_PATH` wins when set; otherwise `users.json` in the current
/// working directory. A set-but-blank variable is rejected rather than
/// silently falling back.
pub fn users_path() -> Result<PathBuf> {
    match std::env::var(USERS_PATH_ENV) {
        Ok(path) if path.trim().is_empty() => Err(Error::config(format!(
            "{} is set but empty",
            USERS_PATH_ENV
        ))),
        Ok(path) => Ok(PathBuf::from(path)),
        Err(_) => Ok(PathBuf::from(DEFAULT_USERS_FILE)),
    }
}

/// Resolve the user store path, letting an explicit `--users` value win
///
/// The explicit value gets the same blank check as the environment variable.
pub fn resolve_users_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.as_os_str().to_string_lossy().trim().is_empty() => {
            Err(Error::config("user store path is empty"))
        }
        Some(path) => Ok(path),
        None => users_path(),
    }
}
