use std::{env, path::PathBuf, str::FromStr, time::Duration};

use url::Url;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8000;

pub const UNSPLASH_API_URL: &str = "https://api.unsplash.com";
pub const TRIPADVISOR_API_URL: &str = "https://api.content.tripadvisor.com/api/v1";
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1";

const OPENAI_MODEL: &str = "gpt-4o-mini";
const OPENAI_MAX_TOKENS: u32 = 1500;

const IMAGE_CACHE_DIR: &str = "saved_images";
pub const IMAGE_CACHE_TARGET: usize = 150;
/// Unsplash caps `/photos/random` at 30 photos per call.
pub const MAX_IMAGE_BATCH_SIZE: usize = 30;
const RANDOM_IMAGE_COUNT: usize = 30;

const PROVIDER_TIMEOUT_SECS: u64 = 10;
const COMPLETION_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub provider: ProviderConfig,
    pub model: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct ImageCacheConfig {
    pub dir: PathBuf,
    pub target: usize,
    pub batch_size: usize,
    pub sample_size: usize,
}

impl Default for ImageCacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(IMAGE_CACHE_DIR),
            target: IMAGE_CACHE_TARGET,
            batch_size: MAX_IMAGE_BATCH_SIZE,
            sample_size: RANDOM_IMAGE_COUNT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub unsplash: ProviderConfig,
    pub tripadvisor: ProviderConfig,
    pub openai: CompletionConfig,
    pub image_cache: ImageCacheConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment. Call `dotenv` first
    /// if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        let provider_timeout = Duration::from_secs(parse_var(
            "PROVIDER_TIMEOUT_SECS",
            PROVIDER_TIMEOUT_SECS,
        ));
        let completion_timeout = Duration::from_secs(parse_var(
            "COMPLETION_TIMEOUT_SECS",
            COMPLETION_TIMEOUT_SECS,
        ));

        let batch_size: usize = parse_var("IMAGE_BATCH_SIZE", MAX_IMAGE_BATCH_SIZE);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port: parse_var("PORT", PORT),
            unsplash: ProviderConfig {
                base_url: base_url_var("UNSPLASH_API_URL", UNSPLASH_API_URL),
                api_key: key_var("UNSPLASH_ACCESS_KEY"),
                timeout: provider_timeout,
            },
            tripadvisor: ProviderConfig {
                base_url: base_url_var("TRIPADVISOR_API_URL", TRIPADVISOR_API_URL),
                api_key: key_var("TRIPADVISOR_KEY"),
                timeout: provider_timeout,
            },
            openai: CompletionConfig {
                provider: ProviderConfig {
                    base_url: base_url_var("OPENAI_API_URL", OPENAI_API_URL),
                    api_key: key_var("OPENAI_KEY"),
                    timeout: completion_timeout,
                },
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| OPENAI_MODEL.to_string()),
                max_tokens: parse_var("OPENAI_MAX_TOKENS", OPENAI_MAX_TOKENS),
            },
            image_cache: ImageCacheConfig {
                dir: env::var("IMAGE_CACHE_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(IMAGE_CACHE_DIR)),
                target: parse_var("IMAGE_CACHE_TARGET", IMAGE_CACHE_TARGET),
                batch_size: batch_size.clamp(1, MAX_IMAGE_BATCH_SIZE),
                sample_size: parse_var("RANDOM_IMAGE_COUNT", RANDOM_IMAGE_COUNT),
            },
        }
    }

    /// Logs which provider keys are missing. Nothing here is fatal.
    pub fn log_missing_keys(&self) {
        let keys = [
            ("UNSPLASH_ACCESS_KEY", &self.unsplash.api_key),
            ("TRIPADVISOR_KEY", &self.tripadvisor.api_key),
            ("OPENAI_KEY", &self.openai.provider.api_key),
        ];
        for (name, value) in keys {
            if value.is_none() {
                log::warn!("{} not set, calls to that provider will fail", name);
            }
        }
    }
}

fn key_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}", name, raw);
            default
        }),
        Err(_) => default,
    }
}

fn base_url_var(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(raw) => match Url::parse(&raw) {
            Ok(_) => raw.trim_end_matches('/').to_string(),
            Err(e) => {
                log::warn!("Ignoring invalid {}={:?}: {}", name, raw, e);
                default.to_string()
            }
        },
        Err(_) => default.to_string(),
    }
}
