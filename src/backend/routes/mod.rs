//! Route Configuration Module
//!
//! - **`router`** - Main router creation
//! - **`api_routes`** - Authentication endpoints
//!
//! # Routes
//!
//! - `POST /api/user/login` - User login
//! - `POST /api/user/register` - User registration
//! - `GET /api/user/current` - Current user (bearer token)

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
