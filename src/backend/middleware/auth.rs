/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header, resolves the user, and attaches the user's public
 * identity to the request.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::AuthError;

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Loads the user named by the token subject
/// 4. Attaches the user's `UserResponse` to request extensions
///
/// Returns 401 if the token is missing or invalid or the user no longer
/// exists, and 500 if the user lookup fails.
pub async fn auth_middleware(
    State(auth): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            AuthError::Unauthorized
        })?;

    let user_id = auth
        .tokens()
        .verify(token)
        .and_then(|claims| claims.user_id())
        .map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            AuthError::Unauthorized
        })?;

    let user = auth
        .store()
        .find_user_by_id(user_id)
        .await
        .map_err(|e| AuthError::server(format!("user lookup failed: {e}")))?
        .ok_or_else(|| {
            tracing::warn!("Token subject not found: {}", user_id);
            AuthError::Unauthorized
        })?;

    request.extensions_mut().insert(UserResponse::from(&user));

    Ok(next.run(request).await)
}

/// Extract the token from a `Bearer <token>` header value
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Axum extractor for the authenticated user
///
/// Reads the identity attached by `auth_middleware`. Rejects with 401 when
/// the route is not behind the middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub UserResponse);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<UserResponse>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("UserResponse not found in request extensions");
                AuthError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
