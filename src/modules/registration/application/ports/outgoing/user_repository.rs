use crate::registration::application::domain::{Role, User};
use async_trait::async_trait;

/// Data required to insert a new user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    /// The insert hit a unique index on username or email.
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: CreateUserData) -> Result<User, UserRepositoryError>;
}
