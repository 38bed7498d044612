use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::registration::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher,
};

/// bcrypt hashing on the blocking thread pool, so a slow cost factor never
/// stalls the actix worker handling other requests.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self::with_cost(DEFAULT_COST)
    }

    /// Accepted range is 4..=31; anything else fails at hash time.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || {
            hash(password, cost).map_err(|e| HashError::HashFailed(e.to_string()))
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|e| HashError::VerifyFailed(e.to_string()))
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
