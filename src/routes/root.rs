use actix_web::{web, Responder};
use serde::Serialize;
use serde_json::json;

use crate::models::response::ZolaResponse;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "Zola Backend";

/*
    /
*/
pub async fn banner() -> impl Responder {
    ZolaResponse::success(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "service": SERVICE_NAME,
        "endpoints": {
            "health": "/health",
            "random_images": "/get-random-images",
            "search_images": "/get-images?query=",
            "pin_image": "/pin-image",
            "create_itinerary": "/create-itinerary",
            "locations": "/get-locations",
            "plans": "/plans"
        }
    }))
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
    providers: ProviderKeys,
    image_cache: CacheStatus,
}

#[derive(Serialize)]
struct ProviderKeys {
    unsplash: bool,
    tripadvisor: bool,
    openai: bool,
}

#[derive(Serialize)]
struct CacheStatus {
    count: usize,
    target: usize,
}

/*
    /health
*/
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let config = &state.config;
    let providers = ProviderKeys {
        unsplash: config.unsplash.api_key.is_some(),
        tripadvisor: config.tripadvisor.api_key.is_some(),
        openai: config.openai.provider.api_key.is_some(),
    };

    // A missing key leaves the service up but degraded.
    let status = if providers.unsplash && providers.tripadvisor && providers.openai {
        "ok"
    } else {
        "degraded"
    };

    ZolaResponse::success(HealthStatus {
        status,
        version: env!("CARGO_PKG_VERSION"),
        providers,
        image_cache: CacheStatus {
            count: state.image_cache.count(),
            target: state.image_cache.target(),
        },
    })
}
