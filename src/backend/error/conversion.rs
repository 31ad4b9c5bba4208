/**
 * Error Conversion
 *
 * This module converts `AuthError` into HTTP responses so handlers and
 * middleware can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Invalid login or password"
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use crate::backend::error::types::AuthError;

/// JSON body of every error response
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub message: &'static str,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let AuthError::Server { detail } = &self {
            tracing::error!("Request failed with server error: {}", detail);
        }

        let status = self.status_code();
        let body = ErrorBody {
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}
