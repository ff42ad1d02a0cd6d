use std::path::PathBuf;

use thiserror::Error;

/// Library error type for loading timeline data.
#[derive(Debug, Error)]
pub enum Error {
    /// The manifest could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML/serde manifest or configuration error.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// The manifest parsed but produced no rows to display.
    #[error("timeline has no photos on or after anyone's birth date")]
    EmptyTimeline,
}
