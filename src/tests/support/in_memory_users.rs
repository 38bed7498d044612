use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::registration::application::domain::User;
use crate::registration::application::ports::outgoing::{
    CreateUserData, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

/// `users` table stand-in with the same uniqueness rules as the migration.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    rows: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn exists_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, UserQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .any(|u| u.email == email || u.username == username))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|u| u.email == data.email || u.username == data.username)
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let user = User {
            id: rows.len() as i32 + 1,
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            role: data.role,
        };
        rows.push(user.clone());
        Ok(user)
    }
}
