//! Authentication Module
//!
//! This module handles user registration, login and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User model, `UserStore` interface and PostgreSQL store
//! - **`memory`** - In-memory `UserStore`
//! - **`passwords`** - bcrypt hashing and verification
//! - **`sessions`** - JWT token issuance and validation
//! - **`service`** - `AuthService`, the login/register flow
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential store
//! ├── memory.rs       - In-memory credential store
//! ├── passwords.rs    - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Login and registration flow
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── current.rs  - Current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email, password, name → user created → JWT returned
//! 2. **Login**: email, password → credentials verified → JWT returned
//! 3. **Current**: JWT verified by middleware → identity returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication and expire after 30 days
//! - Unknown email and wrong password produce the same error, and cost the
//!   same bcrypt verification

/// User data model and credential store
pub mod users;

/// In-memory credential store
pub mod memory;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Login and registration flow
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{current, login, register};
pub use memory::MemoryUserStore;
pub use passwords::PasswordHasher;
pub use service::AuthService;
pub use sessions::{SigningSecret, TokenIssuer};
pub use users::{PgUserStore, UserStore};
