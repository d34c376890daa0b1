pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod logout;
pub use self::logout::{logout, logout_redirect};

pub mod pages;
pub use self::pages::login_page;

// common error taxonomy for the auth handlers
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Everything the login flow can fail with. Each variant maps to a fixed,
/// deliberately vague client message so nothing about why authentication
/// failed leaks out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The shared password was never provisioned.
    ConfigurationMissing,
    /// The submitted password does not match.
    InvalidCredential,
    /// The request body could not be parsed.
    RequestMalformed,
}

impl AuthError {
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::ConfigurationMissing | Self::RequestMalformed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::InvalidCredential => StatusCode::UNAUTHORIZED,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigurationMissing => "Password protection not configured",
            Self::InvalidCredential => "Invalid password",
            Self::RequestMalformed => "Internal server error",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert_eq!(
            AuthError::ConfigurationMissing.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AuthError::InvalidCredential.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::RequestMalformed.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AuthError::ConfigurationMissing.message(),
            "Password protection not configured"
        );
        assert_eq!(AuthError::InvalidCredential.message(), "Invalid password");
        assert_eq!(AuthError::RequestMalformed.message(), "Internal server error");
    }

    #[test]
    fn test_into_response() {
        let response = AuthError::InvalidCredential.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
