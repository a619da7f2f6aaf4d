use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DftVecError {
    #[error("Invalid vector length: expected {expected}, got {actual}")]
    InvalidVectorLength { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),
}

impl DftVecError {
    /// Attach the file path to a bare stream error
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            DftVecError::Stream(source) => DftVecError::Io {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, DftVecError>;
