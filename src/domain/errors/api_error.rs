//! Backend API error types.

use thiserror::Error;

/// Errors raised while talking to the tracker backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("{message}")]
    Validation { message: String },

    #[error("backend rejected request ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    #[error("{message}")]
    Network { message: String },

    #[error("failed to parse response: {message}")]
    Decode { message: String },

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Creates validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates rejection error from an HTTP status and optional `detail`.
    #[must_use]
    pub const fn rejected(status: u16, detail: Option<String>) -> Self {
        Self::Rejected { status, detail }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns the text shown to the user.
    ///
    /// A rejection carries the backend's `detail` when present; otherwise the
    /// call site's `fallback` is used.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            Self::Rejected { .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Error occurred while fetching data";

    #[test]
    fn test_rejection_prefers_detail() {
        let err = ApiError::rejected(404, Some("Cryptocurrency foo not found".to_string()));
        assert_eq!(err.user_message(FALLBACK), "Cryptocurrency foo not found");
    }

    #[test]
    fn test_rejection_without_detail_uses_fallback() {
        assert_eq!(ApiError::rejected(500, None).user_message(FALLBACK), FALLBACK);
        assert_eq!(
            ApiError::rejected(500, Some("  ".to_string())).user_message(FALLBACK),
            FALLBACK
        );
    }

    #[test]
    fn test_transport_errors_keep_their_message() {
        let err = ApiError::network("failed to connect to backend");
        assert_eq!(err.user_message(FALLBACK), "failed to connect to backend");
    }
}
