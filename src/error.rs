use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Every way a catalog run can fail. All of them abort the run.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("album root '{}' does not exist", path.display())]
    RootNotFound { path: PathBuf },

    #[error("album root '{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize library: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidSettings(String),
}

impl CatalogError {
    /// Convert a walkdir failure into a read error for the path it was visiting.
    pub(crate) fn from_walk(fallback: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| fallback.to_path_buf());
        let source = match err.into_io_error() {
            Some(e) => e,
            None => io::Error::other("filesystem loop detected"),
        };
        Self::Read { path, source }
    }
}
