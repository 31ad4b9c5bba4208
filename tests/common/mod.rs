//! Common test utilities and helpers
//!
//! - Test server and configuration fixtures
//! - Authentication helpers (registration, tokens)
//! - Response assertions

pub mod database;

// Re-export commonly used utilities
pub use assertions::*;
pub use auth_helpers::*;
