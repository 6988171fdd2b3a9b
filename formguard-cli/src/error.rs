//! CLI error type.

use std::path::{Path, PathBuf};

use formguard::{ConfigError, FormError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Failed to encode form state: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
