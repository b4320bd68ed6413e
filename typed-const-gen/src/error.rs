/// Failures of the generator entry points.
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Caller supplied a missing or malformed option. Raised before any I/O.
    #[error("{0}")]
    InvalidArgument(&'static str),
    /// Data could not be converted to JSON.
    #[error("cannot serialize data: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl WriteError {
    /// True for directory-creation and file-write failures.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, WriteError::CreateDir { .. } | WriteError::Write { .. })
    }
}

pub(crate) const INVALID_VARIABLE_NAME: &str =
    "variableName must be a valid identifier (no spaces)";
pub(crate) const MISSING_OUTPUT_PATH: &str = "outputPath is required";
