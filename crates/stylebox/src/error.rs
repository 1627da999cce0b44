//! Error types for the editor crate.

use std::path::PathBuf;

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up an editor.
///
/// Declaration errors are not here: they are shown in the panel and never
/// returned to the host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration document is not valid TOML or has wrong field types.
    #[error("Invalid editor configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
