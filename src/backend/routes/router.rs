/**
 * Router Configuration
 *
 * Combines the API routes, the JSON 404 fallback and the request tracing
 * layer into a single Axum router.
 */

use axum::{http::StatusCode, response::Json, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::ErrorBody;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `POST /api/user/login` - User login
/// - `POST /api/user/register` - User registration
/// - `GET /api/user/current` - Current user (requires authentication)
///
/// Unknown routes return 404 with a `{"message"}` body.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody { message: "Not found" }))
}
