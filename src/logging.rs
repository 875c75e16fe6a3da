//! Tracing setup. Logs go to a file so they never draw over the TUI.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config;

pub fn init() {
    let env_filter = EnvFilter::try_from_env(config::LOG_ENV)
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("off"));

    let path = config::log_path();
    let file = path
        .parent()
        .map(fs::create_dir_all)
        .transpose()
        .ok()
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path).ok());

    match file {
        Some(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::debug!(path = %path.display(), "logging initialized");
        }
        // No log file: drop logs rather than writing over the terminal.
        None => tracing_subscriber::registry().with(env_filter).init(),
    }
}
