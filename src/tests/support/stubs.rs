use async_trait::async_trait;

use crate::registration::application::domain::Role;
use crate::registration::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
};

/// Accepts every submission without touching any port.
#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        Ok(RegisterUserOutput {
            user_id: 1,
            username: input.username,
            email: input.email,
            role: input.role.parse().unwrap_or(Role::Eleve),
        })
    }
}
