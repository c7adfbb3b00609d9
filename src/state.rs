use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::ProviderError;
use crate::services::{
    image_cache::ImageCache, itinerary_service::ItineraryService, plan_store::PlanStore,
    tripadvisor_service::TripAdvisorService, unsplash_service::UnsplashService,
};

/// Shared handler state, registered once as `web::Data<AppState>`.
pub struct AppState {
    pub config: AppConfig,
    pub unsplash: UnsplashService,
    pub tripadvisor: TripAdvisorService,
    pub itineraries: ItineraryService,
    pub image_cache: ImageCache,
    pub plans: Arc<dyn PlanStore>,
}

impl AppState {
    pub fn new(config: AppConfig, plans: Arc<dyn PlanStore>) -> Result<Self, ProviderError> {
        Ok(Self {
            unsplash: UnsplashService::new(&config.unsplash)?,
            tripadvisor: TripAdvisorService::new(&config.tripadvisor)?,
            itineraries: ItineraryService::new(&config.openai)?,
            image_cache: ImageCache::new(&config.image_cache),
            plans,
            config,
        })
    }
}
