pub mod sea_orm_entity;
pub mod security;
pub mod user_query_mysql;
pub mod user_repository_mysql;
