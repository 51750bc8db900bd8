//! Error Types
//!
//! `ApiError` for anything crossing the network, `ValidationError` for
//! local form checks that short-circuit before a request is sent.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("session expired or missing")]
    Unauthorized,

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text suitable for a toast description
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server.".to_string(),
            ApiError::Unauthorized => "Please sign in again.".to_string(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

impl ValidationError {
    /// Toast title for this failure
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::Required(_) => "Missing field",
            ValidationError::PasswordMismatch => "Passwords do not match",
            ValidationError::PasswordTooShort { .. } => "Password too short",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_is_shown_verbatim() {
        let err = ApiError::Status { status: 403, message: "Not a board member".into() };
        assert_eq!(err.user_message(), "Not a board member");
        assert_eq!(err.to_string(), "server returned 403: Not a board member");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Required("Title").to_string(), "Title is required");
        assert_eq!(
            ValidationError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters long"
        );
    }
}
