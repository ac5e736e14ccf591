//! `podium set` / `podium unset` key handling.

use std::error::Error as StdError;
use std::fmt;

use crate::core::config::data::Config;

/// Config keys as typed on the command line.
pub const KEYS: &[&str] = &["base-url", "endpoint", "timeout", "log-file"];

/// Errors that can occur when modifying configuration settings.
#[derive(Debug, PartialEq, Eq)]
pub enum SettingError {
    /// The provided setting key is not recognized.
    UnknownKey(String),
    /// The timeout value is not a positive whole number of seconds.
    InvalidTimeout(String),
    /// The key needs a value and none was given.
    MissingValue(&'static str),
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::UnknownKey(key) => {
                write!(f, "Unknown config key: {key} (known keys: {})", KEYS.join(", "))
            }
            SettingError::InvalidTimeout(value) => {
                write!(f, "Invalid timeout: {value} (expected whole seconds, e.g. 30)")
            }
            SettingError::MissingValue(key) => write!(f, "Missing value for {key}"),
        }
    }
}

impl StdError for SettingError {}

impl Config {
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<(), SettingError> {
        let value = value.trim();
        let canonical = canonical_key(key)?;
        if value.is_empty() {
            return Err(SettingError::MissingValue(canonical));
        }

        match canonical {
            "base-url" => self.base_url = Some(value.to_string()),
            "endpoint" => self.endpoint = Some(value.to_string()),
            "timeout" => {
                let secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| SettingError::InvalidTimeout(value.to_string()))?;
                self.timeout_secs = Some(secs);
            }
            _ => self.log_file = Some(value.to_string()),
        }
        Ok(())
    }

    pub fn unset_key(&mut self, key: &str) -> Result<(), SettingError> {
        match canonical_key(key)? {
            "base-url" => self.base_url = None,
            "endpoint" => self.endpoint = None,
            "timeout" => self.timeout_secs = None,
            _ => self.log_file = None,
        }
        Ok(())
    }
}

fn canonical_key(key: &str) -> Result<&'static str, SettingError> {
    let normalized = key.trim().to_ascii_lowercase().replace('_', "-");
    KEYS.iter()
        .copied()
        .find(|known| *known == normalized)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))
}
