use crate::shared::api::TextResponse;
use actix_web::HttpResponse;

const REGISTRATION_PAGE: &str = include_str!("../templates/register.html");

/// Registration page
///
/// Served for every method except POST on `/register`.
#[utoipa::path(
    get,
    path = "/register",
    tag = "registration",
    responses(
        (
            status = 200,
            description = "HTML signup form",
            body = String,
            content_type = "text/html"
        )
    )
)]
pub async fn registration_page_handler() -> HttpResponse {
    TextResponse::html(REGISTRATION_PAGE)
}
