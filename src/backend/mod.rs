//! Backend Module
//!
//! Server-side code for the userauth service: an Axum HTTP server exposing
//! login, registration and current-user endpoints.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, password hashing, JWT tokens, auth flow
//! - **`middleware`** - Bearer-token authentication
//! - **`error`** - `AuthError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - userauth-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! The only shared state is `AppState`, which wraps an immutable
//! `AuthService` in an `Arc`. Stores handle their own synchronization:
//! `PgPool` is thread-safe and the in-memory store uses a tokio `RwLock`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::AuthError;
pub use server::create_app;
