//! Settings persistence.

use tracing::{debug, warn};

use super::{Settings, Storage};
use crate::error::{Error, Result};

/// The single key the settings record is stored under.
pub const SETTINGS_KEY: &str = "settings";

pub struct SettingsStore<S> {
    storage: S,
}

impl<S: Storage> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the stored record.
    ///
    /// Never fails: an absent record is replaced by the defaults, and an
    /// unreadable or corrupt one is logged, replaced by the defaults and
    /// rewritten.
    pub fn load(&mut self) -> Settings {
        match self.try_load() {
            Ok(Some(settings)) => {
                debug!(?settings, "settings loaded");
                settings
            }
            Ok(None) => {
                debug!("no stored settings, writing defaults");
                self.reset()
            }
            Err(e) => {
                warn!(error = %e, "falling back to default settings");
                self.reset()
            }
        }
    }

    /// Read and validate the stored record without any recovery.
    pub fn try_load(&self) -> Result<Option<Settings>> {
        let Some(text) = self.storage.get(SETTINGS_KEY)? else {
            return Ok(None);
        };
        let settings: Settings = serde_json::from_str(&text)
            .map_err(|e| Error::PersistedStateCorrupt(e.to_string()))?;
        settings
            .validate()
            .map_err(|e| Error::PersistedStateCorrupt(e.to_string()))?;
        Ok(Some(settings))
    }

    /// Persist `settings`, replacing whatever was stored.
    pub fn save(&mut self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.storage.set(SETTINGS_KEY, &json)?;
        debug!(length = settings.password_length, options = ?settings.selected_options, "settings saved");
        Ok(())
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn reset(&mut self) -> Settings {
        let settings = Settings::default();
        if let Err(e) = self.save(&settings) {
            warn!(error = %e, "failed to persist default settings");
        }
        settings
    }
}
