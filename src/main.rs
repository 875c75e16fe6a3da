use std::env;
use std::process::ExitCode;

mod app;
mod cli;
mod clipboard;
mod config;
mod error;
mod history;
mod logging;
mod notify;
mod pass;
mod settings;
mod terminal;
mod tui;

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}

fn main() -> ExitCode {
    disable_core_dumps();
    logging::init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if cli::quiet::is_interactive() => match tui::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                terminal::reset_terminal();
                tracing::error!(error = %e, "terminal failure");
                cli::prompts::error(&format!("Terminal error: {e}"));
                ExitCode::FAILURE
            }
        },
        _ => cli::run(args),
    }
}
