//! TripAdvisor content API client and the normalizer that turns its
//! location-details payloads into `Location` records.
//!
//! Every list of locations is built sequentially: search, then details and
//! photo for each hit. A failure on one location never discards its siblings,
//! and a failed photo lookup only clears `photo_url`.

use serde_json::Value;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::models::location::Location;
use crate::services::http::{build_client, endpoint, read_json, require_key};

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

#[derive(Clone)]
pub struct TripAdvisorService {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TripAdvisorService {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: build_client(config.timeout)?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    async fn get(&self, path: &[&str], query: &[(&str, &str)]) -> Result<Value, ProviderError> {
        let key = require_key(&self.api_key, "TRIPADVISOR_KEY")?;
        let response = self
            .http_client
            .get(endpoint(&self.base_url, path)?)
            .header("Accept", "application/json")
            .query(&[("key", key), ("language", "en")])
            .query(query)
            .send()
            .await?;
        read_json(response).await
    }

    /// Location ids matching a free-text query, at most `limit` of them.
    pub async fn search(
        &self,
        query: &str,
        category: Option<&str>,
        limit: usize,
    ) -> Result<Vec<String>, ProviderError> {
        let mut params = vec![("searchQuery", query)];
        if let Some(category) = category {
            params.push(("category", category));
        }

        let body = self.get(&["location", "search"], &params).await?;
        let data = body
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::Decode("missing search data".to_string()))?;

        Ok(data
            .iter()
            .filter_map(|hit| id_string(hit.get("location_id")))
            .take(limit)
            .collect())
    }

    pub async fn details(&self, location_id: &str) -> Result<Value, ProviderError> {
        self.get(&["location", location_id, "details"], &[("currency", "USD")])
            .await
    }

    /// Original-resolution URL of the first photo of a location.
    pub async fn first_photo_url(&self, location_id: &str) -> Result<Option<String>, ProviderError> {
        let body = self
            .get(&["location", location_id, "photos"], &[("limit", "1")])
            .await?;
        Ok(first_photo_url(&body))
    }

    /// Details plus photo for one location. Only a failed details call is an
    /// error; the photo degrades to `None`.
    pub async fn location(&self, location_id: &str) -> Result<Location, ProviderError> {
        let details = self.details(location_id).await?;

        let photo_url = match self.first_photo_url(location_id).await {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Photo lookup failed for location {}: {}", location_id, e);
                None
            }
        };

        Ok(normalize_location(location_id, &details, photo_url))
    }

    pub async fn locations_for_queries(
        &self,
        queries: &[String],
        category: Option<&str>,
        limit: usize,
    ) -> Vec<Location> {
        let mut locations = Vec::new();

        for query in queries {
            let ids = match self.search(query, category, limit).await {
                Ok(ids) => ids,
                Err(e) => {
                    log::error!("Location search failed for {:?}: {}", query, e);
                    continue;
                }
            };

            for id in ids {
                log::debug!("Getting details for location {}", id);
                match self.location(&id).await {
                    Ok(location) => locations.push(location),
                    Err(e) => log::error!("Failed to get details for location {}: {}", id, e),
                }
            }
        }

        locations
    }
}

/// Normalizes a details payload, degrading to a minimal record when the
/// payload is not a usable location object.
pub fn normalize_location(
    requested_id: &str,
    details: &Value,
    photo_url: Option<String>,
) -> Location {
    match try_normalize_location(details, photo_url) {
        Some(location) => location,
        None => {
            log::warn!("Unusable details payload for location {}", requested_id);
            let id = id_string(details.get("location_id"))
                .unwrap_or_else(|| requested_id.to_string());
            Location::minimal(id, details.get("name").and_then(Value::as_str))
        }
    }
}

fn try_normalize_location(details: &Value, photo_url: Option<String>) -> Option<Location> {
    let object = details.as_object()?;
    if object.contains_key("error") {
        return None;
    }

    Some(Location {
        location_id: id_string(details.get("location_id")).unwrap_or_default(),
        name: string_field(details, "name").unwrap_or_default(),
        category: category(details.get("category")),
        description: string_field(details, "description"),
        address: address(details.get("address_obj")),
        phone: string_field(details, "phone"),
        price_level: string_field(details, "price_level"),
        rating: rating(details.get("rating")),
        amenities: string_list(details.get("amenities")),
        styles: named_list(details.get("styles")),
        trip_types: named_list(details.get("trip_types")),
        web_url: string_field(details, "web_url"),
        photo_url,
    })
}

fn id_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn category(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(name)) => name.clone(),
        Some(object) => object
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        None => String::new(),
    }
}

fn address(value: Option<&Value>) -> Option<String> {
    let address = value?;
    if let Some(formatted) = string_field(address, "address_string") {
        return Some(formatted);
    }

    let parts: Vec<String> = ["street1", "city", "state", "country"]
        .iter()
        .filter_map(|key| string_field(address, key))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn rating(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Each element becomes its localized name, else its name, else "".
fn named_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| match item {
                    Value::String(name) => name.clone(),
                    other => other
                        .get("localized_name")
                        .and_then(Value::as_str)
                        .or_else(|| other.get("name").and_then(Value::as_str))
                        .unwrap_or_default()
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn first_photo_url(body: &Value) -> Option<String> {
    body.get("data")?
        .as_array()?
        .first()?
        .get("images")?
        .get("original")?
        .get("url")?
        .as_str()
        .map(str::to_string)
}
