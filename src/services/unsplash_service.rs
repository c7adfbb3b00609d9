use serde_json::Value;

use crate::config::{ProviderConfig, MAX_IMAGE_BATCH_SIZE};
use crate::error::ProviderError;
use crate::models::image::Image;
use crate::services::http::{build_client, endpoint, read_json, require_key};
use crate::services::image_cache::ImageSource;

const SEARCH_PAGE_SIZE: usize = 20;

/// Client for the Unsplash image search API.
#[derive(Clone)]
pub struct UnsplashService {
    http_client: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
}

impl UnsplashService {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: build_client(config.timeout)?,
            base_url: config.base_url.clone(),
            access_key: config.api_key.clone(),
        })
    }

    async fn get(&self, path: &[&str], query: &[(&str, String)]) -> Result<Value, ProviderError> {
        let key = require_key(&self.access_key, "UNSPLASH_ACCESS_KEY")?;
        let response = self
            .http_client
            .get(endpoint(&self.base_url, path)?)
            .header("Accept-Version", "v1")
            .query(&[("client_id", key)])
            .query(query)
            .send()
            .await?;
        read_json(response).await
    }

    /// Random photos, `count` capped at the provider maximum.
    pub async fn random_photos(&self, count: usize) -> Result<Vec<Image>, ProviderError> {
        let count = count.clamp(1, MAX_IMAGE_BATCH_SIZE);
        let body = self
            .get(&["photos", "random"], &[("count", count.to_string())])
            .await?;

        let photos = body
            .as_array()
            .ok_or_else(|| ProviderError::Decode("expected an array of photos".to_string()))?;
        Ok(normalize_photos(photos))
    }

    pub async fn search_photos(&self, query: &str) -> Result<Vec<Image>, ProviderError> {
        let body = self
            .get(
                &["search", "photos"],
                &[
                    ("query", query.to_string()),
                    ("per_page", SEARCH_PAGE_SIZE.to_string()),
                ],
            )
            .await?;

        let results = body
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::Decode("missing search results".to_string()))?;
        Ok(normalize_photos(results))
    }

    /// Fetches the tag titles of one photo. Never called during bulk listing.
    pub async fn photo_tags(&self, photo_id: &str) -> Result<Vec<String>, ProviderError> {
        let body = self.get(&["photos", photo_id], &[]).await?;
        Ok(extract_tags(&body))
    }

    pub async fn download(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                body: format!("download of {} failed", url),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

impl ImageSource for UnsplashService {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<Image>, ProviderError> {
        self.random_photos(count).await
    }

    async fn fetch_bytes(&self, image: &Image) -> Result<Vec<u8>, ProviderError> {
        self.download(&image.url).await
    }
}

fn normalize_photos(photos: &[Value]) -> Vec<Image> {
    photos
        .iter()
        .filter_map(|photo| {
            let image = normalize_photo(photo);
            if image.is_none() {
                log::warn!("Skipping photo without id or display url");
            }
            image
        })
        .collect()
}

/// Maps one raw photo object to an `Image`. Tags are left empty.
pub fn normalize_photo(photo: &Value) -> Option<Image> {
    let id = photo.get("id").and_then(Value::as_str)?;
    let url = photo
        .get("urls")
        .and_then(|urls| urls.get("regular"))
        .and_then(Value::as_str)?;

    Some(Image::new(
        id,
        url,
        non_empty_str(photo, "description"),
        non_empty_str(photo, "alt_description"),
    ))
}

pub fn extract_tags(photo: &Value) -> Vec<String> {
    photo
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(|tag| tag.get("title").and_then(Value::as_str))
                .filter(|title| !title.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn non_empty_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
