use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use std::sync::Arc;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};
use crate::registration::application::domain::User;
use crate::registration::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryMysql {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryMysql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_insert_error(err: DbErr) -> UserRepositoryError {
        Self::classify_insert_error(err.sql_err(), err.to_string())
    }

    /// MySQL reports unique index violations as error 1062 ("Duplicate entry ... for key ...").
    fn classify_insert_error(sql_err: Option<SqlErr>, message: String) -> UserRepositoryError {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = sql_err {
            return UserRepositoryError::UserAlreadyExists;
        }

        let lowered = message.to_lowercase();
        if lowered.contains("1062") || lowered.contains("duplicate entry") {
            return UserRepositoryError::UserAlreadyExists;
        }

        UserRepositoryError::DatabaseError(message)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryMysql {
    /// Single INSERT; the returned user is built from the submitted data and
    /// `LAST_INSERT_ID()`, so a committed row is never reported as a failure.
    async fn create_user(&self, user: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: NotSet,
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_str().to_string()),
        };

        let inserted = UserEntity::insert(active_user)
            .exec(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(User {
            id: inserted.last_insert_id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
        })
    }
}
