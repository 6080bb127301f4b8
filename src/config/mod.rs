//! User configuration, stored as JSON under the platform config directory.
//!
//! Every key is optional. A missing file yields the defaults; unknown keys
//! are ignored so older binaries keep reading newer files.

mod error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

use crate::workflow::Timings;

/// Address the composed enquiry is addressed to unless overridden.
pub const DEFAULT_RECIPIENT: &str = "enquiry@omentics.tech";
/// Location shown in the info panel unless overridden.
pub const DEFAULT_LOCATION: &str = "Johannesburg, South Africa";

const APP_DIR: &str = "omentics-contact";
const CONFIG_FILE: &str = "config.json";

/// Settings read from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed `mailto:` recipient; never taken from form input.
    pub recipient: String,
    /// Location line for the info panel.
    pub location: String,
    /// Delay before the success indicator appears.
    pub settle_delay_ms: u64,
    /// How long the success indicator stays up.
    pub success_window_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let timings = Timings::default();
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            settle_delay_ms: duration_ms(timings.settle_delay),
            success_window_ms: duration_ms(timings.success_window),
        }
    }
}

impl Config {
    /// Default location of the config file (`~/.config/omentics-contact/config.json` on Linux).
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads from [`default_path`](Self::default_path).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Checks values that serde alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.recipient.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidRecipient(self.recipient.clone())),
        }
    }

    /// Workflow delays derived from the millisecond settings.
    pub fn timings(&self) -> Timings {
        Timings {
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            success_window: Duration::from_millis(self.success_window_ms),
        }
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
