pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::registration;

use crate::api::openapi::ApiDoc;
use crate::config::{load_env_files, AppConfig};
use crate::registration::adapter::outgoing::security::BcryptHasher;
use crate::registration::adapter::outgoing::user_query_mysql::UserQueryMysql;
use crate::registration::adapter::outgoing::user_repository_mysql::UserRepositoryMysql;
use crate::registration::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserUseCase,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let environment = load_env_files();
    info!(environment = %environment, "Starting application...");

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    // Database pool; connections go back to the pool when each statement's guard drops
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(io::Error::other)?;
    let db_arc = Arc::new(conn);

    let user_query = UserQueryMysql::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryMysql::new(Arc::clone(&db_arc));
    let password_hasher = BcryptHasher::with_cost(config.bcrypt_cost);

    let register_user_use_case =
        RegisterUserUseCase::new(user_query, user_repo, Arc::new(password_hasher));

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
    };

    let server_url = config.server.bind_address();
    info!(address = %server_url, bcrypt_cost = config.bcrypt_cost, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Registration
    crate::registration::adapter::incoming::web::routes::configure(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
