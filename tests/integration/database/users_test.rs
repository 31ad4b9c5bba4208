//! PostgreSQL credential store tests
//!
//! These need a reachable PostgreSQL at `DATABASE_URL`:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test -- --ignored
//! ```

use assert_matches::assert_matches;
use userauth::backend::auth::users::{NewUser, StoreError};
use userauth::backend::auth::{PgUserStore, UserStore};
use uuid::Uuid;

use crate::common::database::TestDatabase;

fn unique_email() -> String {
    format!("user-{}@example.com", Uuid::new_v4())
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: "Test User".to_string(),
        password_hash: "$2b$04$notarealhashbutlongenoughtobestoredxxxxxxxxxxxxxxxxxx".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_users_table_exists() {
    let db = TestDatabase::new().await;

    let result = sqlx::query("SELECT 1 FROM users LIMIT 1")
        .execute(db.pool())
        .await;

    assert!(result.is_ok(), "Users table should exist");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_find_user() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool().clone());
    let email = unique_email();

    let created = store.create_user(new_user(&email)).await.unwrap();
    assert_eq!(created.email, email);

    let by_email = store.find_user_by_email(&email).await.unwrap().unwrap();
    assert_eq!(by_email.id, created.id);

    let by_id = store.find_user_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, email);
    assert_eq!(by_id.password_hash, created.password_hash);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_email_is_conflict() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool().clone());
    let email = unique_email();

    store.create_user(new_user(&email)).await.unwrap();
    let result = store.create_user(new_user(&email)).await;

    assert_matches!(result, Err(StoreError::Conflict));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_missing_user() {
    let db = TestDatabase::new().await;
    let store = PgUserStore::new(db.pool().clone());

    assert!(store.find_user_by_email(&unique_email()).await.unwrap().is_none());
    assert!(store.find_user_by_id(Uuid::new_v4()).await.unwrap().is_none());
}
