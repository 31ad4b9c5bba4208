/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both run on tokio's blocking pool since
 * a single bcrypt round at the default cost takes tens of milliseconds.
 *
 * A dummy hash at the configured cost is computed once at construction.
 * Login verifies against it when no user matches the submitted email, so
 * an unknown email costs the same as a wrong password.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * refused with `HashError::TooLong` instead of being silently truncated, so
 * two passwords that share a 72-byte prefix never verify against each other.
 */

use std::sync::Arc;

use thiserror::Error;

/// Default bcrypt work factor
pub const DEFAULT_COST: u32 = 10;

/// Longest password bcrypt hashes without truncation, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

const DUMMY_PASSWORD: &str = "userauth-timing-equalizer";

/// Hashing failures
#[derive(Debug, Error)]
pub enum HashError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("password is {0} bytes, limit is 72")]
    TooLong(usize),
}

fn check_length(password: &str) -> Result<(), HashError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(HashError::TooLong(password.len()));
    }
    Ok(())
}

/// Salted one-way password hasher
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<str>,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    ///
    /// # Errors
    ///
    /// `HashError::Bcrypt` if the cost is outside bcrypt's 4..=31 range.
    pub fn new(cost: u32) -> Result<Self, HashError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)?;
        Ok(Self {
            cost,
            dummy_hash: dummy_hash.into(),
        })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a freshly generated salt
    ///
    /// # Errors
    ///
    /// `HashError::TooLong` for passwords over `MAX_PASSWORD_BYTES`.
    pub async fn hash(&self, password: &str) -> Result<String, HashError> {
        check_length(password)?;
        let password = password.to_owned();
        let cost = self.cost;
        Ok(tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??)
    }

    /// Check a password against a stored hash
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        check_length(password)?;
        let password = password.to_owned();
        let hash = hash.to_owned();
        Ok(tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??)
    }

    /// Pay the cost of a verification without a stored hash
    pub async fn verify_dummy(&self, password: &str) {
        let dummy_hash = Arc::clone(&self.dummy_hash);
        if let Err(e) = self.verify(password, &dummy_hash).await {
            tracing::debug!("Dummy password verification failed: {:?}", e);
        }
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}
