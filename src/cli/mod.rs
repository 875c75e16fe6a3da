//! One-shot command line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

use std::io;
use std::process::ExitCode;

use tracing::warn;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::clipboard::SystemClipboard;
use crate::config;
use crate::settings::{FileStorage, SettingsStore};

/// Run CLI mode against the on-disk settings.
pub fn run(args: Vec<String>) -> ExitCode {
    let store = SettingsStore::new(FileStorage::new(config::config_dir()));
    let mut ctx = match Context::new(&args, store, SystemClipboard::new()) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("See `passmint --help`");
            return ExitCode::from(2);
        }
    };
    quiet::set(ctx.flags.quiet);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match ctx.run(&mut out, &mut rand::thread_rng()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(error = %e, "cli run failed");
            prompts::error(&e.to_string());
            ExitCode::from(2)
        }
    }
}
