use crate::registration::application::use_cases::register_user::IRegisterUserUseCase;
use crate::tests::support::stubs::StubRegisterUserUseCase;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn IRegisterUserUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(Arc::new(StubRegisterUserUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: Arc<dyn IRegisterUserUseCase + Send + Sync>) -> Self {
        self.register_user = Some(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self
                .register_user
                .expect("register_user use case not set"),
        })
    }
}
