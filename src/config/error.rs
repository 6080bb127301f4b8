use std::path::PathBuf;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`Config`](super::Config).
    #[error("JSON error in {path}: {source}")]
    Json {
        /// The file that failed to parse.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The platform does not provide a config directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// The configured recipient is not an email address.
    #[error("recipient is not an email address: {0:?}")]
    InvalidRecipient(String),
}
