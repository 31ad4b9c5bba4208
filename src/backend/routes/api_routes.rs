/**
 * API Route Handlers
 *
 * ## Public
 * - `POST /api/user/login` - User login
 * - `POST /api/user/register` - User registration
 *
 * ## Private (bearer token)
 * - `GET /api/user/current` - Current user info
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{current, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `/api/user/current` is wrapped in `auth_middleware`; the other routes
/// are public.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let private = Router::new()
        .route("/api/user/current", get(current))
        .route_layer(middleware::from_fn_with_state(
            app_state.auth.clone(),
            auth_middleware,
        ));

    router
        .route("/api/user/login", post(login))
        .route("/api/user/register", post(register))
        .merge(private)
}
