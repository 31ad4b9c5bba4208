//! API integration tests
//!
//! Integration tests for the authentication endpoints

mod auth_test;
