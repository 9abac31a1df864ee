//! Error types for authorization requests
//!
//! The decision engine itself never fails. These errors belong to the
//! validation layer around it: broken caller contracts, missing spaces,
//! slow stores, and denials surfaced as `Forbidden`.

use spacegate_rbac::Action;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigError;

/// Authorization error types.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The resource does not belong to the space it was checked against
    #[error("Resource belongs to space {resource_space}, not {space}")]
    SpaceMismatch {
        /// Space the resource reports as its owner.
        resource_space: Uuid,
        /// Space that was supplied.
        space: Uuid,
    },

    /// The owning space does not exist
    #[error("Space not found: {0}")]
    SpaceNotFound(Uuid),

    /// The actor may not perform the action
    #[error("Forbidden: {action} not permitted")]
    Forbidden {
        /// The refused action.
        action: Action,
    },

    /// The space lookup did not finish in time
    #[error("Space lookup timed out after {0:?}")]
    LookupTimeout(Duration),

    /// The space store failed
    #[error("Space store error: {0}")]
    Store(String),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for authorization operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

impl PolicyError {
    /// Check if this error should be logged at error level.
    ///
    /// Denials and missing spaces are expected outcomes.
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            PolicyError::SpaceMismatch { .. } => 409,
            PolicyError::SpaceNotFound(_) => 404,
            PolicyError::Forbidden { .. } => 403,
            PolicyError::LookupTimeout(_) => 504,
            PolicyError::Store(_) | PolicyError::Config(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            PolicyError::SpaceMismatch { .. } => "SPACE_MISMATCH",
            PolicyError::SpaceNotFound(_) => "SPACE_NOT_FOUND",
            PolicyError::Forbidden { .. } => "FORBIDDEN",
            PolicyError::LookupTimeout(_) => "LOOKUP_TIMEOUT",
            PolicyError::Store(_) => "STORE_ERROR",
            PolicyError::Config(_) => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PolicyError::Forbidden { action: Action::Show }.status_code(), 403);
        assert_eq!(PolicyError::SpaceNotFound(Uuid::nil()).status_code(), 404);
        assert_eq!(
            PolicyError::LookupTimeout(Duration::from_millis(5)).status_code(),
            504
        );
        assert_eq!(PolicyError::Store("down".into()).status_code(), 500);
    }

    #[test]
    fn test_server_errors() {
        assert!(!PolicyError::Forbidden { action: Action::Destroy }.is_server_error());
        assert!(!PolicyError::SpaceNotFound(Uuid::nil()).is_server_error());
        assert!(PolicyError::Store("down".into()).is_server_error());
        assert!(PolicyError::Config(ConfigError::InvalidValue {
            key: "SPACEGATE_LOOKUP_TIMEOUT_MS".into(),
            message: "must be positive".into(),
        })
        .is_server_error());
    }

    #[test]
    fn test_messages() {
        let err = PolicyError::Forbidden { action: Action::Destroy };
        assert_eq!(err.to_string(), "Forbidden: destroy not permitted");
        assert_eq!(err.error_code(), "FORBIDDEN");

        let err = PolicyError::SpaceMismatch {
            resource_space: Uuid::nil(),
            space: Uuid::from_u128(1),
        };
        assert_eq!(err.error_code(), "SPACE_MISMATCH");
        assert!(err.to_string().starts_with("Resource belongs to space 00000000"));
    }
}
