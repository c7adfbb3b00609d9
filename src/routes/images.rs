use actix_web::{web, Responder};
use serde_json::json;

use crate::models::image::{ImageSearchQuery, PinImageRequest};
use crate::models::response::ZolaResponse;
use crate::state::AppState;

/*
    /get-random-images
*/
pub async fn get_random_images(state: web::Data<AppState>) -> impl Responder {
    let size = state.config.image_cache.sample_size;

    let cached = state.image_cache.sample(size);
    if !cached.is_empty() {
        return ZolaResponse::success(json!({ "images": cached, "source": "cache" }));
    }

    log::info!("Image cache is empty, fetching random images live");
    match state.unsplash.random_photos(size).await {
        Ok(images) => ZolaResponse::success(json!({ "images": images, "source": "live" })),
        Err(e) => {
            log::error!("Failed to fetch random images: {}", e);
            ZolaResponse::bad_gateway(format!("Failed to fetch random images: {}", e))
        }
    }
}

/*
    /get-images?query=
*/
pub async fn get_images(
    state: web::Data<AppState>,
    params: web::Query<ImageSearchQuery>,
) -> impl Responder {
    let query = match params.query.as_deref().map(str::trim) {
        Some(query) if !query.is_empty() => query,
        _ => return ZolaResponse::bad_request("query must not be empty"),
    };

    match state.unsplash.search_photos(query).await {
        Ok(images) => ZolaResponse::success(json!({ "images": images })),
        Err(e) => {
            log::error!("Image search failed for {:?}: {}", query, e);
            ZolaResponse::bad_gateway(format!("Failed to search images: {}", e))
        }
    }
}

/*
    /pin-image
*/
pub async fn pin_image(
    state: web::Data<AppState>,
    input: web::Json<PinImageRequest>,
) -> impl Responder {
    if let Err(e) = input.validate() {
        return ZolaResponse::bad_request(e.to_string());
    }
    let image_id = input.into_inner().image_id;

    match state.unsplash.photo_tags(&image_id).await {
        Ok(tags) => ZolaResponse::success(json!({ "imageId": image_id, "tags": tags })),
        Err(e) => {
            log::error!("Failed to fetch tags for photo {}: {}", image_id, e);
            ZolaResponse::bad_gateway(format!("Failed to fetch tags: {}", e))
        }
    }
}
