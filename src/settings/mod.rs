//! Password generation settings.

mod storage;
mod store;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pass::charset::CharClass;

#[cfg(test)]
pub use storage::MemoryStorage;
pub use storage::{FileStorage, Storage};
pub use store::{SETTINGS_KEY, SettingsStore};

pub const SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_LENGTH: usize = 12;
/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 512;

fn schema_version() -> u32 {
    SCHEMA_VERSION
}

/// The persisted record. Field names match the stored JSON
/// (`passwordLength`, `selectedOptions`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "schema_version")]
    pub version: u32,
    pub password_length: usize,
    /// Option names in the order they were selected. Names outside the
    /// catalog are kept as stored and contribute nothing to the pool.
    pub selected_options: Vec<String>,
}

impl Settings {
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_options.iter().any(|o| o == name)
    }

    pub fn set_length(&mut self, length: usize) -> Result<()> {
        check_length(length)?;
        self.password_length = length;
        Ok(())
    }

    /// Check or uncheck one character class.
    ///
    /// Unchecking the last selected class is rejected and leaves the
    /// selection untouched. Returns whether anything changed.
    pub fn set_option(&mut self, name: &str, checked: bool) -> Result<bool> {
        if CharClass::from_name(name).is_none() {
            return Err(Error::InvalidConfiguration(format!(
                "Unknown option: {name}"
            )));
        }

        if checked {
            if self.is_selected(name) {
                return Ok(false);
            }
            self.selected_options.push(name.to_string());
            return Ok(true);
        }

        if !self.is_selected(name) {
            return Ok(false);
        }
        let others_known = self
            .selected_options
            .iter()
            .any(|o| o != name && CharClass::from_name(o).is_some());
        if !others_known {
            return Err(Error::InvalidConfiguration(
                "Must select at least one option!".to_string(),
            ));
        }
        self.selected_options.retain(|o| o != name);
        Ok(true)
    }

    /// Structural validity of a loaded record.
    pub fn validate(&self) -> Result<()> {
        check_length(self.password_length)
    }
}

fn check_length(length: usize) -> Result<()> {
    match length {
        0 => Err(Error::InvalidConfiguration(
            "Password length must be at least 1!".to_string(),
        )),
        n if n > MAX_LENGTH => Err(Error::InvalidConfiguration(format!(
            "Password length must be at most {MAX_LENGTH}!"
        ))),
        _ => Ok(()),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            password_length: DEFAULT_LENGTH,
            selected_options: CharClass::ALL.iter().map(|c| c.name().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_every_class_in_catalog_order() {
        let settings = Settings::default();
        assert_eq!(settings.password_length, 12);
        assert_eq!(
            settings.selected_options,
            vec!["lowercase", "uppercase", "numbers", "special"]
        );
    }

    #[test]
    fn unchecking_then_rechecking_appends_at_end() {
        let mut settings = Settings::default();
        assert!(settings.set_option("lowercase", false).unwrap());
        assert!(settings.set_option("lowercase", true).unwrap());
        assert_eq!(
            settings.selected_options,
            vec!["uppercase", "numbers", "special", "lowercase"]
        );
    }

    #[test]
    fn checking_a_selected_option_is_a_no_op() {
        let mut settings = Settings::default();
        assert!(!settings.set_option("numbers", true).unwrap());
        assert_eq!(settings.selected_options.len(), 4);
    }

    #[test]
    fn last_option_cannot_be_unchecked() {
        let mut settings = Settings {
            selected_options: vec!["numbers".to_string()],
            ..Settings::default()
        };
        let err = settings.set_option("numbers", false).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert_eq!(settings.selected_options, vec!["numbers"]);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.set_option("emoji", true),
            Err(Error::InvalidConfiguration(_))
        ));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut settings = Settings::default();
        assert!(settings.set_length(0).is_err());
        assert_eq!(settings.password_length, 12);
        settings.set_length(20).unwrap();
        assert_eq!(settings.password_length, 20);
    }

    #[test]
    fn length_above_maximum_is_rejected() {
        let mut settings = Settings::default();
        settings.set_length(MAX_LENGTH).unwrap();
        assert!(matches!(
            settings.set_length(MAX_LENGTH + 1),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(settings.set_length(usize::MAX).is_err());
        assert_eq!(settings.password_length, MAX_LENGTH);

        settings.password_length = usize::MAX;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn record_without_version_loads_as_version_one() {
        let json = r#"{"passwordLength":16,"selectedOptions":["numbers"]}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.password_length, 16);
        assert_eq!(settings.selected_options, vec!["numbers"]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"passwordLength\":12"));
        assert!(json.contains("\"selectedOptions\":[\"lowercase\""));
        assert!(json.contains("\"version\":1"));
    }
}
