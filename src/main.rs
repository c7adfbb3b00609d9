use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use zola_api::{config::AppConfig, routes, services::plan_store::InMemoryPlanStore, state::AppState};

const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    config.log_missing_keys();

    let host = config.host.clone();
    let port = config.port;

    let state = AppState::new(config, Arc::new(InMemoryPlanStore::new()))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let state = web::Data::new(state);

    log::info!(
        "Image cache at {} holds {} images",
        state.image_cache.root().display(),
        state.image_cache.count()
    );
    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = ALLOWED_ORIGINS
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
