//! userauth - User Authentication Service
//!
//! An HTTP service with three endpoints: register a user, log in, and fetch
//! the currently authenticated user. Passwords are stored as bcrypt hashes;
//! sessions are stateless HS256 JWTs valid for 30 days.
//!
//! # Module Structure
//!
//! - **`backend`** - Axum server, authentication flow, stores, middleware
//!
//! # Usage
//!
//! ```rust,no_run
//! use userauth::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every failure is returned to the client as `{"message": ...}` with a
//! stable status code; see `backend::error::AuthError`.

/// Backend server-side code
pub mod backend;
