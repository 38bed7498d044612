use crate::registration::application::domain::RegistrationValidationError;
use crate::registration::application::use_cases::register_user::{
    RegisterUserError, RegisterUserInput,
};
use crate::shared::api::TextResponse;
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

pub const ACCOUNT_CREATED_MESSAGE: &str = "Compte créé avec succès !";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Les mots de passe ne correspondent pas.";
pub const INVALID_ROLE_MESSAGE: &str = "Rôle invalide.";
pub const INVALID_EMAIL_MESSAGE: &str = "Adresse email invalide.";
pub const USER_ALREADY_EXISTS_MESSAGE: &str = "L'email ou le nom d'utilisateur existe déjà.";

/// Fields posted by the registration page.
///
/// Absent fields decode as empty strings so every submission goes through the
/// same ordered validation.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterUserForm {
    /// Username (unique)
    #[schema(example = "alice")]
    pub username: String,

    /// Email address (unique)
    #[schema(example = "alice@x.io")]
    pub email: String,

    #[schema(example = "Secr3t!")]
    pub password: String,

    /// Must equal `password`
    #[schema(example = "Secr3t!")]
    pub confirm_password: String,

    /// One of `eleve`, `professeur`, `admin`
    #[schema(example = "eleve")]
    pub role: String,
}

impl From<RegisterUserForm> for RegisterUserInput {
    fn from(form: RegisterUserForm) -> Self {
        Self {
            username: form.username,
            email: form.email,
            password: form.password,
            confirm_password: form.confirm_password,
            role: form.role,
        }
    }
}

fn validation_message(err: &RegistrationValidationError) -> String {
    match err {
        RegistrationValidationError::PasswordMismatch => PASSWORD_MISMATCH_MESSAGE.to_string(),
        RegistrationValidationError::InvalidRole(_) => INVALID_ROLE_MESSAGE.to_string(),
        RegistrationValidationError::MissingField(field) => {
            format!("Le champ {} est obligatoire.", field)
        }
        RegistrationValidationError::FieldTooLong { field, max } => {
            format!("Le champ {} ne doit pas dépasser {} caractères.", field, max)
        }
        RegistrationValidationError::InvalidEmail => INVALID_EMAIL_MESSAGE.to_string(),
    }
}

fn map_register_user_error(err: RegisterUserError, username: &str, email: &str) -> HttpResponse {
    match &err {
        RegisterUserError::Validation(validation) => {
            warn!(
                username = %username,
                email = %email,
                error = %err,
                "Invalid registration input"
            );
            TextResponse::bad_request(&validation_message(validation))
        }

        RegisterUserError::UserAlreadyExists => {
            warn!(
                username = %username,
                email = %email,
                "User already exists"
            );
            TextResponse::conflict(USER_ALREADY_EXISTS_MESSAGE)
        }

        _ => {
            error!(
                username = %username,
                email = %email,
                kind = ?err.kind(),
                error = %err,
                "User registration failed"
            );
            TextResponse::internal_error()
        }
    }
}

/// Submit the registration form
///
/// Validates the submission, hashes the password and stores the new account.
#[utoipa::path(
    post,
    path = "/register",
    tag = "registration",
    request_body(
        content = RegisterUserForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (
            status = 201,
            description = "Account created",
            body = String,
            content_type = "text/plain",
            example = json!("Compte créé avec succès !")
        ),
        (
            status = 400,
            description = "Validation error or undecodable form",
            body = String,
            content_type = "text/plain",
            examples(
                ("Password mismatch" = (value = json!("Les mots de passe ne correspondent pas."))),
                ("Invalid role" = (value = json!("Rôle invalide."))),
                ("Missing field" = (value = json!("Le champ username est obligatoire."))),
                ("Field too long" = (value = json!("Le champ email ne doit pas dépasser 150 caractères."))),
                ("Invalid email" = (value = json!("Adresse email invalide.")))
            )
        ),
        (
            status = 409,
            description = "Email or username already taken",
            body = String,
            content_type = "text/plain",
            example = json!("L'email ou le nom d'utilisateur existe déjà.")
        ),
        (
            status = 500,
            description = "Hashing or database failure",
            body = String,
            content_type = "text/plain",
            example = json!("Erreur : une erreur interne est survenue.")
        ),
    )
)]
pub async fn register_user_handler(
    form: web::Form<RegisterUserForm>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let form = form.into_inner();
    let username = form.username.clone();
    let email = form.email.clone();

    info!(
        username = %username,
        email = %email,
        role = %form.role,
        "User registration attempt"
    );

    match data.register_user_use_case.execute(form.into()).await {
        Ok(user) => {
            info!(
                user_id = user.user_id,
                username = %user.username,
                email = %user.email,
                role = %user.role,
                "User created successfully"
            );
            TextResponse::created(ACCOUNT_CREATED_MESSAGE)
        }
        Err(e) => map_register_user_error(e, &username, &email),
    }
}
