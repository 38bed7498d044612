pub mod register_user;
pub mod registration_page;

pub use register_user::*;
pub use registration_page::*;

use crate::shared::api::custom_form_config;
use actix_web::web;

/// Mounts `/register`: POST submits the form, every other method gets the page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/register")
            .app_data(custom_form_config())
            .route(web::post().to(register_user_handler))
            .default_service(web::to(registration_page_handler)),
    );
}
