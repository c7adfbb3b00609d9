use serde::{Deserialize, Serialize};

use crate::models::location::Location;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DayPlan {
    pub id: String,
    pub day_number: u32,
    /// "YYYY-MM-DD"
    pub date: String,
    #[serde(default)]
    pub hotels: Vec<Location>,
    #[serde(default)]
    pub attractions: Vec<Location>,
    #[serde(default)]
    pub restaurants: Vec<Location>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Itinerary {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub day_plans: Vec<DayPlan>,
}

#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub itinerary: String,
}
