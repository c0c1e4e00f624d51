pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::config::AppConfig;
use crate::modules::user::adapter::incoming::web::routes;
use crate::modules::user::adapter::outgoing::UserRepositoryPostgres;
use crate::modules::user::application::user_use_cases::UserUseCases;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

/// Process-wide context, created once in `start` and cloned into every worker.
#[derive(Clone)]
pub struct AppState {
    pub user_use_cases: UserUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Loaded first so RUST_LOG from the .env file applies
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(config.db_connect_timeout)
        .acquire_timeout(config.db_connect_timeout)
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("Failed to migrate database schema")?;
    info!("Database schema is up to date");

    let db_arc = Arc::new(conn);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let state = AppState {
        user_use_cases: UserUseCases::from_repository(user_repo),
    };

    let server_url = config.server_url();
    info!(address = %server_url, "Server listening");

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    info!("Server stopped");
    match Arc::try_unwrap(db_arc) {
        Ok(conn) => conn
            .close()
            .await
            .context("Failed to close database pool")?,
        Err(_) => warn!("Database pool still referenced at shutdown, dropping it"),
    }

    Ok(())
}

pub(crate) fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Docs
    cfg.service(crate::api::openapi::openapi_json);
    // Users
    cfg.service(routes::create_user_handler);
    cfg.service(routes::get_user_handler);
    cfg.service(routes::update_user_handler);
    cfg.service(routes::delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
