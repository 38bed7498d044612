use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Password verification failed: {0}")]
    VerifyFailed(String),

    #[error("Background hashing task failed")]
    TaskFailed,
}

/// One-way adaptive password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produces a salted hash; two calls with the same password give different hashes.
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` means a well-formed hash that does not match the password.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
