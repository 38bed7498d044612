pub mod entities;
pub mod registration_form;

pub use entities::{Role, User};
pub use registration_form::{RawRegistration, RegistrationForm, RegistrationValidationError};
