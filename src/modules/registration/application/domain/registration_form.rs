use email_address::EmailAddress;

use super::entities::Role;

/// Widths of the `users.username` and `users.email` columns, in characters.
pub const USERNAME_MAX_CHARS: usize = 150;
pub const EMAIL_MAX_CHARS: usize = 150;

/// Local validation failures, detected before any hashing or datastore access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Raw signup submission, as received from the client.
#[derive(Debug, Clone, Copy)]
pub struct RawRegistration<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub role: &'a str,
}

/// A signup submission that passed every local rule.
///
/// Fields are private so a `RegistrationForm` can only be obtained through
/// [`RegistrationForm::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    username: String,
    email: String,
    password: String,
    role: Role,
}

impl RegistrationForm {
    /// Runs the rules in order and stops at the first failure: password
    /// confirmation, role, required fields, column widths, email format.
    pub fn parse(raw: RawRegistration<'_>) -> Result<Self, RegistrationValidationError> {
        check_password_confirmation(raw.password, raw.confirm_password)?;
        let role = parse_role(raw.role)?;
        check_required_fields(raw.username, raw.email, raw.password)?;
        check_field_lengths(raw.username, raw.email)?;
        check_email_format(raw.email)?;

        Ok(Self {
            username: raw.username.to_string(),
            email: raw.email.to_string(),
            password: raw.password.to_string(),
            role,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

pub fn check_password_confirmation(
    password: &str,
    confirm_password: &str,
) -> Result<(), RegistrationValidationError> {
    if password != confirm_password {
        return Err(RegistrationValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn parse_role(role: &str) -> Result<Role, RegistrationValidationError> {
    role.parse::<Role>()
        .map_err(|_| RegistrationValidationError::InvalidRole(role.to_string()))
}

/// Username and email must contain something other than whitespace; the
/// password only has to be non-empty since whitespace is a legal password.
pub fn check_required_fields(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), RegistrationValidationError> {
    if username.trim().is_empty() {
        return Err(RegistrationValidationError::MissingField("username"));
    }
    if email.trim().is_empty() {
        return Err(RegistrationValidationError::MissingField("email"));
    }
    if password.is_empty() {
        return Err(RegistrationValidationError::MissingField("password"));
    }
    Ok(())
}

pub fn check_field_lengths(username: &str, email: &str) -> Result<(), RegistrationValidationError> {
    if username.chars().count() > USERNAME_MAX_CHARS {
        return Err(RegistrationValidationError::FieldTooLong {
            field: "username",
            max: USERNAME_MAX_CHARS,
        });
    }
    if email.chars().count() > EMAIL_MAX_CHARS {
        return Err(RegistrationValidationError::FieldTooLong {
            field: "email",
            max: EMAIL_MAX_CHARS,
        });
    }
    Ok(())
}

pub fn check_email_format(email: &str) -> Result<(), RegistrationValidationError> {
    if !EmailAddress::is_valid(email) {
        return Err(RegistrationValidationError::InvalidEmail);
    }
    Ok(())
}
