pub mod form_config;
pub mod response;

pub use form_config::custom_form_config;
pub use response::TextResponse;
