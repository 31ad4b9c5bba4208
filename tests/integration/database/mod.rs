//! PostgreSQL store tests (ignored unless a database is available)

mod users_test;
