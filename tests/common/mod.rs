#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App};
use tempfile::TempDir;

use zola_api::config::{AppConfig, CompletionConfig, ImageCacheConfig, ProviderConfig};
use zola_api::models::image::Image;
use zola_api::routes;
use zola_api::services::plan_store::InMemoryPlanStore;
use zola_api::state::AppState;

/// App wired to a single fake provider host and a throwaway cache directory.
pub struct TestApp {
    pub state: web::Data<AppState>,
    cache_dir: TempDir,
}

impl TestApp {
    pub fn new(provider_url: &str) -> Self {
        Self::with_config(provider_url, |_| {})
    }

    pub fn with_config(provider_url: &str, customize: impl FnOnce(&mut AppConfig)) -> Self {
        let cache_dir = TempDir::new().expect("temp dir");
        let mut config = test_config(provider_url, cache_dir.path());
        customize(&mut config);

        let state = AppState::new(config, Arc::new(InMemoryPlanStore::new()))
            .expect("test state");

        Self {
            state: web::Data::new(state),
            cache_dir,
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .configure(routes::configure)
    }

    pub fn seed_cache(&self, count: usize) {
        for n in 0..count {
            let image = Image::new(
                format!("cached-{}", n),
                format!("https://images.example/cached-{}.jpg", n),
                Some(format!("Cached photo {}", n)),
                None,
            );
            self.state
                .image_cache
                .save(&image, b"\xff\xd8cached")
                .expect("seed cache entry");
        }
    }
}

pub fn test_config(provider_url: &str, cache_root: &Path) -> AppConfig {
    let provider = |key: &str| ProviderConfig {
        base_url: provider_url.trim_end_matches('/').to_string(),
        api_key: Some(key.to_string()),
        timeout: Duration::from_secs(5),
    };

    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        unsplash: provider("unsplash-key"),
        tripadvisor: provider("tripadvisor-key"),
        openai: CompletionConfig {
            provider: provider("openai-key"),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 200,
        },
        image_cache: ImageCacheConfig {
            dir: cache_root.join("saved_images"),
            target: 150,
            batch_size: 30,
            sample_size: 30,
        },
    }
}

pub fn unsplash_photo(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "description": format!("Description of {}", id),
        "alt_description": null,
        "urls": {
            "raw": format!("https://images.unsplash.com/{}?raw", id),
            "regular": format!("https://images.unsplash.com/{}?w=1080", id)
        },
        "user": { "name": "Someone" }
    })
}
