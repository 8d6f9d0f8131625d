use moka::future::Cache;
use once_cell::sync::Lazy;
use std::time::Duration;

use crate::api::earnings::SummaryResponse;

/// Per-driver cache of the assembled summary payload. Entries are short
/// lived and invalidated eagerly when a new earnings record lands.
pub static SUMMARY_CACHE: Lazy<Cache<u64, SummaryResponse>> = Lazy::new(|| {
    Cache::builder()
        .max_capacity(100_000)
        .time_to_live(Duration::from_secs(30))
        .build()
});

pub async fn get(driver_id: u64) -> Option<SummaryResponse> {
    SUMMARY_CACHE.get(&driver_id).await
}

pub async fn put(driver_id: u64, summary: SummaryResponse) {
    SUMMARY_CACHE.insert(driver_id, summary).await;
}

pub async fn invalidate(driver_id: u64) {
    SUMMARY_CACHE.invalidate(&driver_id).await;
}
