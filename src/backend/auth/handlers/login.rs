/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/user/login.
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 400 body
 * - Passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, or invalid login or password
/// * `500 Internal Server Error` - The user lookup failed
///
/// # Example Request
///
/// ```http
/// POST /api/user/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "a@x.com",
///   "password": "pw123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "email": "a@x.com",
///   "name": "Ann",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AuthError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected login body: {}", e);
        AuthError::Validation
    })?;
    tracing::info!("Login request for: {}", request.email);

    let response = auth.login(&request.email, &request.password).await?;

    Ok(Json(response))
}
