//! Backend Error Module
//!
//! This module defines the error type returned by the authentication flows
//! and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - AuthError definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `AuthError` implements `IntoResponse`, so handlers return
//! `Result<_, AuthError>` and every failure becomes a `{"message": ...}`
//! body with a stable status code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
pub use conversion::ErrorBody;
