/**
 * Authentication Error Types
 *
 * This module defines the errors returned by the login, registration and
 * current-user flows. Every variant maps to a stable HTTP status code and a
 * fixed client-facing message.
 *
 * # Error Categories
 *
 * ## Client Errors (400)
 *
 * - Missing required fields
 * - Invalid login or password (covers unknown email, wrong password and
 *   token issuance failure alike)
 * - Email already in use
 * - Registration could not issue a token
 *
 * ## Authentication Errors (401)
 *
 * Raised by the bearer-token middleware only.
 *
 * ## Server Errors (500)
 *
 * Store or hashing failures. The internal detail is kept for logging and is
 * never written to the response.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Errors surfaced at the authentication flow boundary
///
/// # Usage
///
/// ```rust
/// use userauth::backend::error::AuthError;
/// use axum::http::StatusCode;
///
/// let err = AuthError::server("connection reset");
/// assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
/// assert_eq!(err.message(), "Server error");
/// ```
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field was missing or empty
    #[error("missing required fields")]
    Validation,

    /// Login failed; deliberately does not say which factor was wrong
    #[error("invalid login or password")]
    InvalidCredentials,

    /// Another user already registered this email
    #[error("email already used")]
    DuplicateEmail,

    /// The user record was created but no token could be issued
    #[error("registration failed")]
    RegistrationFailed,

    /// Missing, malformed or expired bearer token
    #[error("not authorized")]
    Unauthorized,

    /// Unexpected store or hashing failure
    #[error("server error: {detail}")]
    Server {
        /// Internal description, logged but never sent to the client
        detail: String,
    },
}

impl AuthError {
    /// Create a new server error with an internal description
    pub fn server(detail: impl Into<String>) -> Self {
        Self::Server {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `InvalidCredentials`, `DuplicateEmail`,
    ///   `RegistrationFailed` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Server` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation
            | Self::InvalidCredentials
            | Self::DuplicateEmail
            | Self::RegistrationFailed => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Server { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message
    ///
    /// Unlike `Display`, this never includes internal detail.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Validation => "Please fill in the required fields",
            Self::InvalidCredentials => "Invalid login or password",
            Self::DuplicateEmail => "This email is already used",
            Self::RegistrationFailed => "Failed to register",
            Self::Unauthorized => "Not authorized",
            Self::Server { .. } => "Server error",
        }
    }
}
