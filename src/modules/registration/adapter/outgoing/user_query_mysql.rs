use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::registration::application::ports::outgoing::{UserQuery, UserQueryError};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QuerySelect,
};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryMysql {
    db: Arc<DatabaseConnection>,
}

impl UserQueryMysql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Only the key is read, so rows written by other tools with other role
/// strings still count as taken.
#[derive(Debug, FromQueryResult)]
struct MatchingUserId {
    #[allow(dead_code)]
    id: i32,
}

#[async_trait]
impl UserQuery for UserQueryMysql {
    async fn exists_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, UserQueryError> {
        let matching = UserEntity::find()
            .select_only()
            .column(UserColumn::Id)
            .filter(
                Condition::any()
                    .add(UserColumn::Email.eq(email))
                    .add(UserColumn::Username.eq(username)),
            )
            .into_model::<MatchingUserId>()
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(matching.is_some())
    }
}
