use rand::seq::SliceRandom;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ImageCacheConfig;
use crate::error::{CacheError, ProviderError};
use crate::models::image::Image;

const ENTRY_PREFIX: &str = "image_";
const IMAGE_FILE: &str = "image.jpg";
const METADATA_FILE: &str = "metadata.json";

/// Where the cache pulls new images from.
pub trait ImageSource {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<Image>, ProviderError>;
    async fn fetch_bytes(&self, image: &Image) -> Result<Vec<u8>, ProviderError>;
}

/// Directory of cached images, one `image_<id>` folder per entry holding the
/// raw bytes and a `metadata.json` sidecar.
#[derive(Debug, Clone)]
pub struct ImageCache {
    root: PathBuf,
    target: usize,
    batch_size: usize,
}

impl ImageCache {
    pub fn new(config: &ImageCacheConfig) -> Self {
        Self {
            root: config.dir.clone(),
            target: config.target,
            batch_size: config.batch_size.max(1),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn entry_dir(&self, image_id: &str) -> PathBuf {
        self.root.join(entry_name(image_id))
    }

    pub fn contains(&self, image_id: &str) -> bool {
        self.entry_dir(image_id).is_dir()
    }

    pub fn count(&self) -> usize {
        self.entries().len()
    }

    fn entries(&self) -> Vec<PathBuf> {
        let read_dir = match fs::read_dir(&self.root) {
            Ok(read_dir) => read_dir,
            Err(_) => return Vec::new(),
        };

        read_dir
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(ENTRY_PREFIX))
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect()
    }

    /// Brings the cache up to its target size. Best effort: a failed batch
    /// stops the loop and the entries saved so far are kept.
    pub async fn top_up<S: ImageSource>(&self, source: &S) -> Result<usize, CacheError> {
        let mut count = self.count();
        if count >= self.target {
            log::info!("Image cache already holds {} of {} images", count, self.target);
            return Ok(count);
        }

        fs::create_dir_all(&self.root)?;

        while count < self.target {
            let wanted = (self.target - count).min(self.batch_size);
            let batch = match source.fetch_batch(wanted).await {
                Ok(batch) => batch,
                Err(e) => {
                    log::error!("Image batch failed, stopping top-up at {}: {}", count, e);
                    break;
                }
            };

            let mut added = 0;
            for image in batch {
                if count >= self.target {
                    break;
                }
                if self.contains(&image.id) {
                    continue;
                }

                let bytes = match source.fetch_bytes(&image).await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        log::warn!("Failed to download image {}: {}", image.id, e);
                        continue;
                    }
                };

                match self.save(&image, &bytes) {
                    Ok(()) => {
                        count += 1;
                        added += 1;
                    }
                    Err(e) => log::warn!("Failed to cache image {}: {}", image.id, e),
                }
            }

            log::info!("Cached {} new images ({}/{})", added, count, self.target);
            if added == 0 {
                break;
            }
        }

        Ok(count)
    }

    /// Writes one entry. A half-written entry is removed so that a directory
    /// always means a complete entry.
    pub fn save(&self, image: &Image, bytes: &[u8]) -> Result<(), CacheError> {
        let dir = self.entry_dir(&image.id);
        fs::create_dir_all(&dir)?;

        let result = write_entry(&dir, image, bytes);
        if result.is_err() {
            let _ = fs::remove_dir_all(&dir);
        }
        result
    }

    /// Random sample of up to `size` cached images, without replacement.
    pub fn sample(&self, size: usize) -> Vec<Image> {
        let entries = self.entries();
        let chosen: Vec<&PathBuf> = {
            let mut rng = rand::thread_rng();
            entries.choose_multiple(&mut rng, size).collect()
        };

        chosen
            .into_iter()
            .filter_map(|dir| match load_metadata(dir) {
                Ok(image) => Some(image),
                Err(e) => {
                    log::warn!("Skipping cache entry {}: {}", dir.display(), e);
                    None
                }
            })
            .collect()
    }
}

fn write_entry(dir: &Path, image: &Image, bytes: &[u8]) -> Result<(), CacheError> {
    fs::write(dir.join(IMAGE_FILE), bytes)?;

    let metadata = Image {
        tags: Vec::new(),
        ..image.clone()
    };
    fs::write(dir.join(METADATA_FILE), serde_json::to_vec_pretty(&metadata)?)?;
    Ok(())
}

fn load_metadata(dir: &Path) -> Result<Image, CacheError> {
    let raw = fs::read(dir.join(METADATA_FILE))?;
    Ok(serde_json::from_slice(&raw)?)
}

/// Directory name for an image id; characters outside `[A-Za-z0-9_-]` become `_`.
fn entry_name(image_id: &str) -> String {
    let sanitized: String = image_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}", ENTRY_PREFIX, sanitized)
}
