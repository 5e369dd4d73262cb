use thiserror::Error;

use crate::core::ParseModeError;

/// Errors raised while assembling or validating runtime settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// History limit outside the accepted range.
    #[error("History limit must be between 1 and {max}, got {value}")]
    InvalidHistoryLimit { value: usize, max: usize },
    /// Copy confirmation duration outside the accepted range.
    #[error("Copy feedback duration must be between 1 and {max} ms, got {value}")]
    InvalidCopyFeedback { value: u64, max: u64 },
    /// Mode name not recognised.
    #[error(transparent)]
    InvalidMode(#[from] ParseModeError),
}
