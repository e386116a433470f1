use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api;

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
///
/// A missing or empty database URL does not abort startup; the handler answers
/// each request with a configuration error instead.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let database_url = server_config
        .database_url
        .as_deref()
        .filter(|url| !url.is_empty());

    let repo = match database_url {
        Some(url) => {
            let pool = establish_connection_pool(url).map_err(|e| {
                std::io::Error::other(format!("Failed to establish database connection: {e}"))
            })?;
            Some(DieselRepository::new(pool))
        }
        None => None,
    };

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(api::configure)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
