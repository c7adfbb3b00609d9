use serde::{Deserialize, Serialize};

/// A TripAdvisor location (hotel, attraction, restaurant).
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Location {
    pub location_id: String,
    pub name: String,
    /// "hotel", "restaurant", "attraction" or empty.
    pub category: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub price_level: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub trip_types: Vec<String>,
    pub web_url: Option<String>,
    pub photo_url: Option<String>,
}

impl Location {
    /// Record used when a details payload cannot be read at all.
    pub fn minimal(location_id: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            location_id: location_id.into(),
            name: name.unwrap_or("Unknown").to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LocationsRequest {
    pub queries: Vec<String>,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
    pub total_count: usize,
}
