// src/shared/api/response.rs
use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse,
};

/// Body sent for every unexpected failure; backend details only go to the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erreur : une erreur interne est survenue.";

/// Builders for the plain-text and HTML bodies served by the registration endpoint.
pub struct TextResponse;

impl TextResponse {
    pub fn text(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(message.to_string())
    }

    pub fn created(message: &str) -> HttpResponse {
        Self::text(StatusCode::CREATED, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::text(StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::text(StatusCode::CONFLICT, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    pub fn html(page: &'static str) -> HttpResponse {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .insert_header(("Cache-Control", "no-store"))
            .body(page)
    }
}
