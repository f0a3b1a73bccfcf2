//! Error types for letterpress-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading a defaults file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read (not found, permission denied, etc.).
    #[error("failed to read defaults at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error — includes the file path and serde_yaml's line context.
    #[error("failed to parse defaults at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
