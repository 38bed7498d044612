// src/shared/api/form_config.rs
use crate::shared::api::TextResponse;
use actix_web::web::FormConfig;

/// Rejects undecodable or incomplete form bodies with a plain-text 400 instead
/// of actix's default error page.
pub fn custom_form_config() -> FormConfig {
    FormConfig::default().error_handler(|err, _req| {
        let message = format!("Formulaire invalide : {}", err);
        actix_web::error::InternalError::from_response(err, TextResponse::bad_request(&message))
            .into()
    })
}
