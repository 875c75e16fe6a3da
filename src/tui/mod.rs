//! Interactive full-screen generator.

mod input;
mod text;

pub use input::*;
pub use text::*;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use rand::Rng;
use tracing::info;

use crate::app::{Action, App};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config;
use crate::settings::{FileStorage, MAX_LENGTH, SettingsStore, Storage};
use crate::terminal::{ScreenGuard, clear};

const POLL_TIME: Duration = Duration::from_millis(100);

/// Run TUI interactive mode against the on-disk settings.
pub fn run() -> io::Result<()> {
    let store = SettingsStore::new(FileStorage::new(config::config_dir()));
    let mut app = App::new(store, SystemClipboard::new(), rand::thread_rng());
    app.startup(Instant::now());
    info!(settings = ?app.settings(), "interactive session started");

    event_loop(&mut app)
}

fn event_loop<S: Storage, C: Clipboard, R: Rng>(app: &mut App<S, C, R>) -> io::Result<()> {
    let mut screen = ScreenGuard::enter()?;
    let mut stdout = io::stdout();
    let mut selected: Option<usize> = None;
    let mut dirty = true;

    loop {
        if app.tick(Instant::now()) {
            dirty = true;
        }
        if dirty {
            render(&app.view(Instant::now()), selected).draw(&mut stdout)?;
            dirty = false;
        }

        if !event::poll(POLL_TIME)? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(..) => {
                dirty = true;
                continue;
            }
            _ => continue,
        };
        let Some(command) = command_for(key) else {
            continue;
        };

        dirty = true;
        let now = Instant::now();
        let length = app.settings().password_length;
        let history_len = app.history().len();

        match command {
            Command::Quit => break,
            Command::LengthUp => {
                app.dispatch(Action::SetLength((length + 1).min(MAX_LENGTH)), now);
            }
            Command::LengthDown => {
                app.dispatch(Action::SetLength(length.saturating_sub(1)), now);
            }
            Command::EditLength => {
                screen.suspend();
                clear();
                let typed = get_numeric_input("Password length", length, MAX_LENGTH);
                screen.resume()?;
                if let Some(typed) = typed {
                    app.dispatch(Action::SetLength(typed), Instant::now());
                }
            }
            Command::Toggle(class) => {
                app.toggle(class, now);
            }
            Command::Generate => {
                if app.dispatch(Action::Generate, now) {
                    selected = None;
                }
            }
            Command::Copy => {
                app.dispatch(Action::CopyCurrent, now);
            }
            Command::SelectUp => selected = select_prev(selected, history_len),
            Command::SelectDown => selected = select_next(selected, history_len),
            Command::CopySelected => {
                let action = selected.map_or(Action::CopyCurrent, Action::CopyHistory);
                app.dispatch(action, now);
            }
            Command::ClearHistory => {
                app.dispatch(Action::ClearHistory, now);
                selected = None;
            }
        }
    }

    drop(screen);
    info!(generated = app.history().len(), "interactive session ended");
    Ok(())
}
