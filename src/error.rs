use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FelixError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),
}
impl FelixError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FelixError::Io {
            path: path.into(),
            source,
        }
    }
    /// Error text without the path prefix, for diagnostics that already name the file.
    pub(crate) fn cause(&self) -> String {
        match self {
            FelixError::Io { source, .. } => source.to_string(),
            FelixError::Pattern { message, .. } => message.clone(),
            FelixError::Walk(message) => message.clone(),
            FelixError::Output(source) => source.to_string(),
        }
    }
}
