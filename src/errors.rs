use std::path::PathBuf;

use thiserror::Error;

/// Error type for dataset loading and view derivation failures.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("dataset '{path}' could not be loaded: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("no data for this selection: {0}")]
    EmptyResult(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ViewError {
    pub(crate) fn load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for the recoverable "nothing matched" state.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult(_))
    }
}
