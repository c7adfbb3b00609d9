//! Populates the local image cache before the server is started for the
//! first time. Safe to re-run: existing entries are kept and only the
//! missing images are downloaded.

use env_logger::Env;

use zola_api::{
    config::AppConfig,
    services::{image_cache::ImageCache, unsplash_service::UnsplashService},
};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    if config.unsplash.api_key.is_none() {
        log::error!("UNSPLASH_ACCESS_KEY is not set, add it to .env before running setup");
        std::process::exit(1);
    }

    let cache = ImageCache::new(&config.image_cache);
    let unsplash = match UnsplashService::new(&config.unsplash) {
        Ok(unsplash) => unsplash,
        Err(e) => {
            log::error!("Failed to create Unsplash client: {}", e);
            std::process::exit(1);
        }
    };

    let existing = cache.count();
    log::info!(
        "Filling {} up to {} images ({} already cached)",
        cache.root().display(),
        cache.target(),
        existing
    );

    match cache.top_up(&unsplash).await {
        Ok(count) if count >= cache.target() => {
            log::info!("Setup complete, {} images cached", count);
        }
        Ok(count) => {
            log::warn!(
                "Setup stopped early with {} of {} images, re-run to continue",
                count,
                cache.target()
            );
        }
        Err(e) => {
            log::error!("Setup failed: {}", e);
            std::process::exit(1);
        }
    }
}
