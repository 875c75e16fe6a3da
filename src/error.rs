//! Error type shared by every component.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Stored settings could not be parsed or describe an impossible record.
    #[error("persisted settings are corrupt: {0}")]
    PersistedStateCorrupt(String),

    /// Generation or a settings change was requested with values that cannot work.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The system clipboard could not be opened or rejected the write.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short message suitable for the notification line.
    pub fn notice(&self) -> String {
        match self {
            Error::InvalidConfiguration(msg) => msg.clone(),
            Error::ClipboardUnavailable(_) => "Could not copy to clipboard!".to_string(),
            Error::PersistedStateCorrupt(_) => "Settings were reset to defaults".to_string(),
            Error::Io(_) | Error::Serialize(_) => "Could not save settings!".to_string(),
        }
    }
}
