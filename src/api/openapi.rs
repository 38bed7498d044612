use utoipa::OpenApi;

use crate::health::{HealthResponse, ReadinessResponse};
use crate::registration::adapter::incoming::web::routes::RegisterUserForm;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "School Registration API",
        version = "1.0.0",
        description = "Account registration form for students, teachers and administrators"
    ),
    paths(
        // Registration
        crate::registration::adapter::incoming::web::routes::registration_page_handler,
        crate::registration::adapter::incoming::web::routes::register_user_handler,

        // Probes
        crate::health::health,
        crate::health::readiness,
    ),
    components(schemas(RegisterUserForm, HealthResponse, ReadinessResponse)),
    tags(
        (name = "registration", description = "Signup page and form submission"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
