//! Database test fixtures
//!
//! Connects to `DATABASE_URL` and runs migrations. Only the ignored
//! PostgreSQL tests use this.

use sqlx::PgPool;
use userauth::backend::server::config::load_database;

/// Test database fixture
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect and migrate, panicking if `DATABASE_URL` is unset or unreachable
    pub async fn new() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
        let pool = load_database(&database_url)
            .await
            .expect("Failed to connect to test database");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
