use reqwest::Response;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::error::ProviderError;

pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Reads a provider response as JSON, turning non-success statuses into errors.
pub async fn read_json(response: Response) -> Result<Value, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status { status, body });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ProviderError::Decode(e.to_string()))
}

/// Appends `segments` to the base URL path, percent-encoding each one so a
/// segment can never add path levels or a query string.
pub fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url, ProviderError> {
    let mut url = Url::parse(base_url).map_err(|e| ProviderError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| ProviderError::InvalidUrl(base_url.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn require_key<'a>(
    key: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, ProviderError> {
    key.as_deref().ok_or(ProviderError::MissingKey(name))
}
