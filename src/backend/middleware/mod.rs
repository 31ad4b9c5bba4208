//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer-token authentication for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use userauth::backend::middleware::auth_middleware;
//! use userauth::backend::auth::AuthService;
//! use axum::{middleware, routing::get, Router};
//! use std::sync::Arc;
//!
//! # fn example(auth: Arc<AuthService>) {
//! let protected: Router = Router::new()
//!     .route("/private", get(|| async { "ok" }))
//!     .route_layer(middleware::from_fn_with_state(auth, auth_middleware));
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser};
