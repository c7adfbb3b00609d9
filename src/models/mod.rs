pub mod image;
pub mod itinerary;
pub mod location;
pub mod plan;
pub mod response;
