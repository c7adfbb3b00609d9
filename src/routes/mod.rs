use actix_web::{error::InternalError, web};

use crate::models::response::ZolaResponse;

pub mod images;
pub mod itinerary;
pub mod location;
pub mod plans;
pub mod root;

/// Registers every endpoint plus the extractor configs that turn malformed
/// bodies and queries into error envelopes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/", web::get().to(root::banner))
        .route("/health", web::get().to(root::health_check))
        .route("/get-random-images", web::get().to(images::get_random_images))
        .route("/get-images", web::get().to(images::get_images))
        .route("/pin-image", web::post().to(images::pin_image))
        .route("/create-itinerary", web::post().to(itinerary::create_itinerary))
        .route("/get-locations", web::post().to(location::get_locations))
        .service(
            web::scope("/plans")
                .route("", web::post().to(plans::create))
                .route("", web::get().to(plans::get_all))
                .route("/{id}", web::get().to(plans::get_by_id)),
        );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid request body: {}", err);
        InternalError::from_response(err, ZolaResponse::bad_request(message)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid query: {}", err);
        InternalError::from_response(err, ZolaResponse::bad_request(message)).into()
    })
}
