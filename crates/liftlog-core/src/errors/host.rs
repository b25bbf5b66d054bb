// ABOUTME: Error types for the host presentation channel (lock screen / widget host)
// ABOUTME: Defines HostError and its conversion into the unified AppError

use super::{AppError, ErrorCode};

/// Failures reported by the host that presents live activities
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The user or platform has live activities turned off
    #[error("Live activities are disabled on this host")]
    Disabled,

    /// The host refuses more concurrent activities for this app
    #[error("Live activity quota exceeded (limit {limit})")]
    QuotaExceeded {
        /// Maximum concurrent activities the host allows
        limit: usize,
    },

    /// The handle no longer refers to a session the host knows about
    #[error("Live activity session '{activity_id}' not found")]
    SessionNotFound {
        /// Host-assigned identifier of the missing session
        activity_id: String,
    },

    /// Any other refusal, with the host's reason
    #[error("Host rejected request: {0}")]
    Rejected(String),
}

impl HostError {
    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Disabled => ErrorCode::ExternalServiceUnavailable,
            Self::QuotaExceeded { .. } => ErrorCode::ExternalRateLimited,
            Self::SessionNotFound { .. } => ErrorCode::ResourceNotFound,
            Self::Rejected(_) => ErrorCode::ExternalServiceError,
        }
    }
}

impl From<HostError> for AppError {
    fn from(error: HostError) -> Self {
        Self::new(error.code(), error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_error_codes() {
        assert_eq!(
            HostError::Disabled.code(),
            ErrorCode::ExternalServiceUnavailable
        );
        assert_eq!(
            HostError::QuotaExceeded { limit: 2 }.code(),
            ErrorCode::ExternalRateLimited
        );
        assert_eq!(
            HostError::SessionNotFound {
                activity_id: "a1".to_owned()
            }
            .code(),
            ErrorCode::ResourceNotFound
        );
    }

    #[test]
    fn test_conversion_into_app_error() {
        let error: AppError = HostError::QuotaExceeded { limit: 5 }.into();
        assert_eq!(error.code, ErrorCode::ExternalRateLimited);
        assert!(error.message.contains("limit 5"));
    }
}
