/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/user/register.
 *
 * # Registration Process
 *
 * 1. Require email, password and name
 * 2. Check the email is not already used
 * 3. Hash the password using bcrypt
 * 4. Create the user
 * 5. Generate a JWT token and return it with the user info (201 Created)
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, email already used, or no token
///   could be issued for the new user
/// * `500 Internal Server Error` - Store or hashing failure
///
/// # Example Request
///
/// ```http
/// POST /api/user/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "a@x.com",
///   "password": "pw123",
///   "name": "Ann"
/// }
/// ```
pub async fn register(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected registration body: {}", e);
        AuthError::Validation
    })?;
    tracing::info!("Registration request for: {}", request.email);

    let response = auth
        .register(&request.email, &request.password, &request.name)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}
