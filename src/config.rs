//! Locations and environment knobs.

use std::env;
use std::path::PathBuf;

/// Overrides the directory holding `settings.json` and the log file.
pub const CONFIG_DIR_ENV: &str = "PASSMINT_CONFIG_DIR";
/// Log filter directive, same syntax as `RUST_LOG`.
pub const LOG_ENV: &str = "PASSMINT_LOG";

pub const APP_NAME: &str = "passmint";
pub const LOG_FILE: &str = "passmint.log";

pub fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    match env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home).join(".config").join(APP_NAME),
        _ => PathBuf::from(format!(".{APP_NAME}")),
    }
}

#[inline]
pub fn log_path() -> PathBuf {
    config_dir().join(LOG_FILE)
}
