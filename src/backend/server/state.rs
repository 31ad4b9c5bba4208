/**
 * Application State
 *
 * `AppState` is the router state. It holds the authentication service
 * behind an `Arc`; nothing in it is mutable after startup.
 *
 * The `FromRef` implementation lets handlers extract `State<Arc<AuthService>>`
 * directly.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::passwords::{HashError, PasswordHasher};
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::UserStore;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Login/registration flow with its store, hasher and token issuer
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Build the state around a credential store
    ///
    /// # Errors
    ///
    /// `HashError` if the configured bcrypt cost is rejected.
    pub fn new(store: Arc<dyn UserStore>, config: &ServerConfig) -> Result<Self, HashError> {
        let hasher = PasswordHasher::new(config.bcrypt_cost)?;
        let tokens = TokenIssuer::new(&config.jwt_secret);

        Ok(Self {
            auth: Arc::new(AuthService::new(store, hasher, tokens)),
        })
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
