//! Error types

use thiserror::Error;

/// Errors raised while setting up the gesture system
///
/// Gesture processing itself never fails; these only come from startup.
#[derive(Debug, Error)]
pub enum SwipeError {
    /// Configuration files or environment could not be read
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// A setting was loaded but is out of range
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting {
        field: &'static str,
        reason: String,
    },
}

impl SwipeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = SwipeError> = std::result::Result<T, E>;
