pub mod http;
pub mod image_cache;
pub mod itinerary_service;
pub mod plan_store;
pub mod prompt;
pub mod tripadvisor_service;
pub mod unsplash_service;
