use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::registration::application::domain::{
    RawRegistration, RegistrationForm, RegistrationValidationError, Role, User,
};
use crate::registration::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};

// ========================= Input / Output =========================

/// Untrusted form submission.
#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

impl RegisterUserInput {
    fn as_raw(&self) -> RawRegistration<'_> {
        RawRegistration {
            username: &self.username,
            email: &self.email,
            password: &self.password,
            confirm_password: &self.confirm_password,
            role: &self.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserOutput {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for RegisterUserOutput {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

// ============================ Errors =============================

/// Coarse classification used to pick the response and the log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationErrorKind {
    /// Rejected locally, the datastore was never touched.
    Validation,
    /// Username or email is already taken.
    Conflict,
    /// Hashing or datastore failure.
    Persistence,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterUserError {
    #[error(transparent)]
    Validation(#[from] RegistrationValidationError),

    #[error("Email or username already exists")]
    UserAlreadyExists,

    #[error(transparent)]
    HashingFailed(#[from] HashError),

    #[error("Duplicate check failed: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Insert failed: {0}")]
    RepositoryError(UserRepositoryError),
}

impl RegisterUserError {
    pub fn kind(&self) -> RegistrationErrorKind {
        match self {
            RegisterUserError::Validation(_) => RegistrationErrorKind::Validation,
            RegisterUserError::UserAlreadyExists => RegistrationErrorKind::Conflict,
            RegisterUserError::HashingFailed(_)
            | RegisterUserError::QueryError(_)
            | RegisterUserError::RepositoryError(_) => RegistrationErrorKind::Persistence,
        }
    }
}

impl From<UserRepositoryError> for RegisterUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            // Lost the race against a concurrent signup: same outcome as the pre-check
            UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
            other => RegisterUserError::RepositoryError(other),
        }
    }
}

// =========================== Use case ============================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput)
        -> Result<RegisterUserOutput, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    /// Validate, hash, check for duplicates, insert. The first failing step ends the request.
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        let form = RegistrationForm::parse(input.as_raw())?;

        let password_hash = self.password_hasher.hash_password(form.password()).await?;

        if self
            .query
            .exists_by_email_or_username(form.email(), form.username())
            .await?
        {
            debug!(
                username = %form.username(),
                email = %form.email(),
                "Registration collides with existing user"
            );
            return Err(RegisterUserError::UserAlreadyExists);
        }

        let created = self
            .repository
            .create_user(CreateUserData {
                username: form.username().to_string(),
                email: form.email().to_string(),
                password_hash,
                role: form.role(),
            })
            .await?;

        Ok(created.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub UserQueryMock {}
        #[async_trait]
        impl UserQuery for UserQueryMock {
            async fn exists_by_email_or_username(
                &self,
                email: &str,
                username: &str,
            ) -> Result<bool, UserQueryError>;
        }
    }

    mock! {
        pub UserRepositoryMock {}
        #[async_trait]
        impl UserRepository for UserRepositoryMock {
            async fn create_user(&self, user: CreateUserData) -> Result<User, UserRepositoryError>;
        }
    }

    struct PrefixHasher;

    #[async_trait]
    impl PasswordHasher for PrefixHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed::{password}"))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("hashed::{password}"))
        }
    }

    struct FailingHasher;

    #[async_trait]
    impl PasswordHasher for FailingHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Err(HashError::HashFailed("cost not allowed".to_string()))
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(false)
        }
    }

    fn alice_input() -> RegisterUserInput {
        RegisterUserInput {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "Secr3t!".to_string(),
            confirm_password: "Secr3t!".to_string(),
            role: "eleve".to_string(),
        }
    }

    /// Query and repository that fail the test if the datastore is touched.
    fn untouched_store() -> (MockUserQueryMock, MockUserRepositoryMock) {
        let mut query = MockUserQueryMock::new();
        query.expect_exists_by_email_or_username().times(0);
        let mut repository = MockUserRepositoryMock::new();
        repository.expect_create_user().times(0);
        (query, repository)
    }

    #[tokio::test]
    async fn test_register_user_success() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_exists_by_email_or_username()
            .times(1)
            .returning(|_, _| Ok(false));

        let mut repository = MockUserRepositoryMock::new();
        repository
            .expect_create_user()
            .withf(|user| {
                user.username == "alice"
                    && user.email == "alice@example.com"
                    && user.password_hash == "hashed::Secr3t!"
                    && user.role == Role::Eleve
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: 1,
                    username: user.username,
                    email: user.email,
                    password_hash: user.password_hash,
                    role: user.role,
                })
            });

        let use_case = RegisterUserUseCase::new(query, repository, Arc::new(PrefixHasher));
        let output = use_case.execute(alice_input()).await.unwrap();

        assert_eq!(
            output,
            RegisterUserOutput {
                user_id: 1,
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                role: Role::Eleve,
            }
        );
    }

    #[tokio::test]
    async fn test_register_user_password_mismatch_skips_datastore() {
        let (query, repository) = untouched_store();
        let use_case = RegisterUserUseCase::new(query, repository, Arc::new(PrefixHasher));

        let input = RegisterUserInput {
            confirm_password: "different".to_string(),
            role: "teacher".to_string(),
            ..alice_input()
        };
        let err = use_case.execute(input).await.unwrap_err();

        assert!(matches!(
            err,
            RegisterUserError::Validation(RegistrationValidationError::PasswordMismatch)
        ));
        assert_eq!(err.kind(), RegistrationErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_register_user_invalid_role_skips_datastore() {
        let (query, repository) = untouched_store();
        let use_case = RegisterUserUseCase::new(query, repository, Arc::new(PrefixHasher));

        let input = RegisterUserInput {
            role: "teacher".to_string(),
            ..alice_input()
        };
        let err = use_case.execute(input).await.unwrap_err();

        assert!(matches!(
            err,
            RegisterUserError::Validation(RegistrationValidationError::InvalidRole(ref role))
                if role == "teacher"
        ));
    }

    #[tokio::test]
    async fn test_register_user_missing_field_skips_datastore() {
        let (query, repository) = untouched_store();
        let use_case = RegisterUserUseCase::new(query, repository, Arc::new(PrefixHasher));

        let input = RegisterUserInput {
            email: "   ".to_string(),
            ..alice_input()
        };
        let err = use_case.execute(input).await.unwrap_err();

        assert!(matches!(
            err,
            RegisterUserError::Validation(RegistrationValidationError::MissingField("email"))
        ));
    }

    #[tokio::test]
    async fn test_register_user_duplicate_does_not_insert() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_exists_by_email_or_username()
            .times(1)
            .returning(|_, _| Ok(true));
        let mut repository = MockUserRepositoryMock::new();
        repository.expect_create_user().times(0);

        let use_case = RegisterUserUseCase::new(query, repository, Arc::new(PrefixHasher));
        let err = use_case.execute(alice_input()).await.unwrap_err();

        assert!(matches!(err, RegisterUserError::UserAlreadyExists));
        assert_eq!(err.kind(), RegistrationErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_register_user_unique_violation_on_insert_is_conflict() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_exists_by_email_or_username()
            .returning(|_, _| Ok(false));
        let mut repository = MockUserRepositoryMock::new();
        repository
            .expect_create_user()
            .times(1)
            .returning(|_| Err(UserRepositoryError::UserAlreadyExists));

        let use_case = RegisterUserUseCase::new(query, repository, Arc::new(PrefixHasher));
        let err = use_case.execute(alice_input()).await.unwrap_err();

        assert!(matches!(err, RegisterUserError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn test_register_user_hashing_failure_skips_datastore() {
        let (query, repository) = untouched_store();
        let use_case = RegisterUserUseCase::new(query, repository, Arc::new(FailingHasher));

        let err = use_case.execute(alice_input()).await.unwrap_err();

        assert!(matches!(err, RegisterUserError::HashingFailed(_)));
        assert_eq!(err.kind(), RegistrationErrorKind::Persistence);
    }

    #[tokio::test]
    async fn test_register_user_query_error_does_not_insert() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_exists_by_email_or_username()
            .returning(|_, _| Err(UserQueryError::DatabaseError("gone away".to_string())));
        let mut repository = MockUserRepositoryMock::new();
        repository.expect_create_user().times(0);

        let use_case = RegisterUserUseCase::new(query, repository, Arc::new(PrefixHasher));
        let err = use_case.execute(alice_input()).await.unwrap_err();

        assert!(matches!(err, RegisterUserError::QueryError(_)));
        assert_eq!(err.kind(), RegistrationErrorKind::Persistence);
    }

    #[tokio::test]
    async fn test_register_user_repository_error() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_exists_by_email_or_username()
            .returning(|_, _| Ok(false));
        let mut repository = MockUserRepositoryMock::new();
        repository.expect_create_user().returning(|_| {
            Err(UserRepositoryError::DatabaseError(
                "Lock wait timeout exceeded".to_string(),
            ))
        });

        let use_case = RegisterUserUseCase::new(query, repository, Arc::new(PrefixHasher));
        let err = use_case.execute(alice_input()).await.unwrap_err();

        match err {
            RegisterUserError::RepositoryError(UserRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("Lock wait timeout"));
            }
            other => panic!("Expected RepositoryError, got {other:?}"),
        }
    }
}
