use crate::client::ApiError;
use crate::data_provider::SettingsApi;
use cached::proc_macro::cached;

pub use cached::Cached;

/// Star count shown when GitHub cannot be reached
pub const FALLBACK_STARS: u64 = 172;

#[cfg(test)]
pub async fn clear_all_caches() {
    STARS_CACHE.lock().await.cache_clear();
}

#[allow(clippy::unused_unit)]
#[cached(
    name = "STARS_CACHE",
    type = "cached::TimedSizedCache<(), u64>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 3600) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_stars_cached(client: &dyn SettingsApi) -> Result<u64, ApiError> {
    client.swaparr_stars().await
}

/// Swaparr star count, cached for an hour, falling back to a known value
pub async fn swaparr_stars(client: &dyn SettingsApi) -> u64 {
    match fetch_stars_cached(client).await {
        Ok(stars) => stars,
        Err(e) => {
            tracing::warn!("Failed to fetch Swaparr star count: {}", e);
            FALLBACK_STARS
        }
    }
}
