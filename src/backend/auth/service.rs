/**
 * Authentication Flow
 *
 * `AuthService` orchestrates the credential store, the password hasher and
 * the token issuer. It is built once at startup with its signing secret
 * already validated, and shared by all handlers behind an `Arc`.
 *
 * # Login
 *
 * 1. Reject empty email/password (`Validation`) before touching the store
 * 2. Look up the user by email
 * 3. Verify the password, or the dummy hash when no user was found
 * 4. Issue a token
 *
 * Unknown email, wrong password and token failure all collapse into
 * `InvalidCredentials`. A password longer than bcrypt's 72-byte input can
 * never match a stored hash and is rejected the same way, without a lookup.
 *
 * # Registration
 *
 * 1. Reject empty email/password/name, or a password over 72 bytes
 *    (`Validation`)
 * 2. Reject an email that is already registered (`DuplicateEmail`)
 * 3. Hash the password
 * 4. Insert the user; a store conflict is also `DuplicateEmail`
 * 5. Issue a token (`RegistrationFailed` if that fails)
 */

use std::sync::Arc;

use crate::backend::auth::handlers::types::{AuthResponse, UserResponse};
use crate::backend::auth::passwords::{PasswordHasher, MAX_PASSWORD_BYTES};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::{NewUser, StoreError, UserStore};
use crate::backend::error::AuthError;

pub struct AuthService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self { store, hasher, tokens }
    }

    pub fn store(&self) -> &Arc<dyn UserStore> {
        &self.store
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Verify credentials and issue a session token
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation);
        }

        if password.len() > MAX_PASSWORD_BYTES {
            tracing::warn!("Login rejected, password over {} bytes for: {}", MAX_PASSWORD_BYTES, email);
            return Err(AuthError::InvalidCredentials);
        }

        let user = self
            .store
            .find_user_by_email(email)
            .await
            .map_err(|e| AuthError::server(format!("user lookup failed: {e}")))?;

        let Some(user) = user else {
            self.hasher.verify_dummy(password).await;
            tracing::warn!("Login rejected, unknown email: {}", email);
            return Err(AuthError::InvalidCredentials);
        };

        let valid = self
            .hasher
            .verify(password, &user.password_hash)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Password verification error for user {}: {:?}", user.id, e);
                false
            });

        if !valid {
            tracing::warn!("Login rejected, wrong password for: {}", email);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id).map_err(|e| {
            tracing::error!("Failed to create token for user {}: {:?}", user.id, e);
            AuthError::InvalidCredentials
        })?;

        tracing::info!("User logged in: {} ({})", user.id, user.email);

        Ok(AuthResponse {
            user: UserResponse::from(&user),
            token,
        })
    }

    /// Create a user and issue a session token
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResponse, AuthError> {
        if email.is_empty() || password.is_empty() || name.is_empty() {
            return Err(AuthError::Validation);
        }

        if password.len() > MAX_PASSWORD_BYTES {
            tracing::warn!("Registration rejected, password over {} bytes for: {}", MAX_PASSWORD_BYTES, email);
            return Err(AuthError::Validation);
        }

        let existing = self
            .store
            .find_user_by_email(email)
            .await
            .map_err(|e| AuthError::server(format!("user lookup failed: {e}")))?;

        if existing.is_some() {
            tracing::warn!("Registration rejected, email already used: {}", email);
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = self
            .hasher
            .hash(password)
            .await
            .map_err(|e| AuthError::server(format!("password hashing failed: {e}")))?;

        let user = self
            .store
            .create_user(NewUser {
                email: email.to_string(),
                name: name.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::Conflict => {
                    tracing::warn!("Registration lost insert race for: {}", email);
                    AuthError::DuplicateEmail
                }
                other => AuthError::server(format!("user insert failed: {other}")),
            })?;

        let token = self.tokens.issue(user.id).map_err(|e| {
            tracing::error!("User {} created but token issuance failed: {:?}", user.id, e);
            AuthError::RegistrationFailed
        })?;

        tracing::info!("User registered: {} ({})", user.id, user.email);

        Ok(AuthResponse {
            user: UserResponse::from(&user),
            token,
        })
    }

    /// Identity attached by the auth middleware, returned unchanged
    pub fn current(&self, identity: UserResponse) -> UserResponse {
        identity
    }
}
