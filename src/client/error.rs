//! Client error types.
//!
//! Every failed API operation resolves to exactly one `ClientError` variant,
//! so callers discriminate failures by matching on the variant rather than
//! inspecting message strings.

use std::collections::BTreeMap;

/// Field-level validation errors, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Client errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The API returned 404, or an external-id lookup matched no records.
    #[error("not found: {message}")]
    NotFound {
        /// Human-readable message, for display only.
        message: String,
        /// HTTP status, absent when the lookup itself returned an empty result.
        status: Option<u16>,
    },

    /// The API rejected the payload with 422.
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable message, for display only.
        message: String,
        /// Field-level errors from the response body, empty if none were given.
        errors: FieldErrors,
        /// HTTP status, always 422.
        status: u16,
    },

    /// Any other failure: non-2xx statuses, transport-level failures and
    /// undecodable success responses.
    #[error("API error: {message}")]
    Api {
        /// Human-readable message, for display only.
        message: String,
        /// HTTP status, absent for failures that happened before a response.
        status: Option<u16>,
    },

    /// The client configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Returns the HTTP status associated with this error, if one is known.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { status, .. } | Self::Api { status, .. } => *status,
            Self::Validation { status, .. } => Some(*status),
            Self::InvalidConfig(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::NotFound {
            message: "Sale not found".to_string(),
            status: Some(404),
        };
        assert_eq!(err.to_string(), "not found: Sale not found");
    }

    #[test]
    fn test_error_validation_display() {
        let err = ClientError::Validation {
            message: "Validation failed".to_string(),
            errors: FieldErrors::new(),
            status: 422,
        };
        assert_eq!(err.to_string(), "validation failed: Validation failed");
    }

    #[test]
    fn test_error_status() {
        let err = ClientError::Api {
            message: "Server error".to_string(),
            status: Some(500),
        };
        assert_eq!(err.status(), Some(500));

        let err = ClientError::Api {
            message: "connection refused".to_string(),
            status: None,
        };
        assert_eq!(err.status(), None);

        let err = ClientError::Validation {
            message: "Validation failed".to_string(),
            errors: FieldErrors::new(),
            status: 422,
        };
        assert_eq!(err.status(), Some(422));
    }
}
