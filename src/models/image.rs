use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Image {
    pub id: String,
    pub url: String,
    pub description: Option<String>,
    #[serde(rename = "altText", default)]
    pub alt_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Image {
    /// Builds an image whose alt text falls back to the description, then to "".
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        description: Option<String>,
        alt_text: Option<String>,
    ) -> Self {
        let alt_text = alt_text
            .or_else(|| description.clone())
            .unwrap_or_default();

        Self {
            id: id.into(),
            url: url.into(),
            description,
            alt_text,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PinImageRequest {
    #[serde(rename = "imageId")]
    pub image_id: String,
}

impl PinImageRequest {
    /// Photo ids are opaque provider slugs, e.g. `Dwu85P9SOIk`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.image_id.trim().is_empty() {
            return Err(ValidationError::Empty { field: "imageId" });
        }
        let is_slug = self
            .image_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !is_slug {
            return Err(ValidationError::InvalidId { field: "imageId" });
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageSearchQuery {
    pub query: Option<String>,
}
