//! CLI context - bundles settings, flags, storage and clipboard.

use std::io::Write;

use rand::Rng;
use tracing::debug;
use zeroize::Zeroize;

use super::{CliFlags, ParseError, parse, prompts};
use crate::clipboard::Clipboard;
use crate::error::{Error, Result};
use crate::pass::{self, charset::CharClass};
use crate::settings::{Settings, SettingsStore, Storage};
use crate::tui::print_help;

/// Most passwords a single run will generate.
pub const MAX_COUNT: usize = 10_000;

/// Application context for CLI mode.
pub struct Context<S, C> {
    pub settings: Settings,
    pub flags: CliFlags,
    store: SettingsStore<S>,
    clipboard: C,
}

impl<S: Storage, C: Clipboard> Context<S, C> {
    /// Parse `args` and load the stored settings.
    pub fn new(
        args: &[String],
        mut store: SettingsStore<S>,
        clipboard: C,
    ) -> std::result::Result<Self, ParseError> {
        let flags = parse(args)?;
        let settings = store.load();
        Ok(Self {
            settings,
            flags,
            store,
            clipboard,
        })
    }

    pub fn run<W: Write, R: Rng>(&mut self, out: &mut W, rng: &mut R) -> Result<()> {
        if self.flags.help {
            print_help();
            return Ok(());
        }
        if self.flags.version {
            writeln!(out, "passmint {}", env!("CARGO_PKG_VERSION"))?;
            return Ok(());
        }

        self.apply_flags()?;
        self.generate_output(out, rng)
    }

    /// Apply CLI flags to settings, persisting them when asked.
    fn apply_flags(&mut self) -> Result<()> {
        if let Some(length) = self.flags.length {
            self.settings.set_length(length)?;
        }
        if let Some(ref only) = self.flags.only {
            self.settings.selected_options = selection_from(only)?;
        }
        if self.flags.no_special {
            self.settings.set_option(CharClass::Special.name(), false)?;
        }

        if self.flags.changes_settings() {
            debug!(settings = ?self.settings, "flags applied");
        }
        if self.flags.save {
            self.store.save(&self.settings)?;
            prompts::settings_saved(
                self.settings.password_length,
                &self.settings.selected_options,
            );
        }
        Ok(())
    }

    /// Generate passwords and write them out, or copy them with `-b`.
    fn generate_output<W: Write, R: Rng>(&mut self, out: &mut W, rng: &mut R) -> Result<()> {
        let count = self.flags.number.unwrap_or(1);
        if count == 0 || count > MAX_COUNT {
            return Err(Error::InvalidConfiguration(format!(
                "Number of passwords must be between 1 and {MAX_COUNT}!"
            )));
        }
        let mut passwords = Vec::with_capacity(count);
        for _ in 0..count {
            passwords.push(pass::generate_for(&self.settings, rng)?);
        }

        if self.flags.clipboard && !passwords.is_empty() {
            let mut joined = passwords.join("\n");
            let copied = self.clipboard.write_text(&joined);
            joined.zeroize();
            match copied {
                Ok(()) => {
                    passwords.zeroize();
                    prompts::clipboard_copied(count);
                    return Ok(());
                }
                Err(e) => prompts::clipboard_fallback(&e.to_string()),
            }
        }

        for password in &passwords {
            writeln!(out, "{password}")?;
        }
        out.flush()?;
        passwords.zeroize();
        Ok(())
    }

    #[cfg(test)]
    pub fn store(&self) -> &SettingsStore<S> {
        &self.store
    }
}

/// Validate a `--only` list: known names, first occurrence wins, not empty.
fn selection_from(names: &[String]) -> Result<Vec<String>> {
    let mut selection: Vec<String> = Vec::new();
    for name in names {
        if CharClass::from_name(name).is_none() {
            return Err(Error::InvalidConfiguration(format!(
                "Unknown option: {name}"
            )));
        }
        if !selection.contains(name) {
            selection.push(name.clone());
        }
    }
    if selection.is_empty() {
        return Err(Error::InvalidConfiguration(
            "Must select at least one option!".to_string(),
        ));
    }
    Ok(selection)
}
