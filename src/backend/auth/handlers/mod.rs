//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Handlers
//!
//! - **`login`** - POST /api/user/login - Verify credentials, return a token
//! - **`register`** - POST /api/user/register - Create a user, return a token
//! - **`current`** - GET /api/user/current - Return the authenticated identity
//!
//! # Example
//!
//! ```rust,no_run
//! use userauth::backend::auth::handlers::{current, login, register};
//! use userauth::backend::server::AppState;
//! use axum::{routing::get, routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/user/login", post(login))
//!     .route("/api/user/register", post(register))
//!     .route("/api/user/current", get(current));
//! ```

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Registration handler
pub mod register;

/// Current user handler
pub mod current;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

// Re-export handlers
pub use current::current;
pub use login::login;
pub use register::register;
