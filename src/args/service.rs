//! `curio health`, `curio version` and `curio oembed`.

use curio::config::Settings;
use curio::sources::{HttpFetch, fetch_health, fetch_oembed, fetch_version};

use crate::args::utils::Result;

/// What: Print the service health check.
///
/// Output:
/// - `Ok(true)` only when every dependency is up.
///
/// # Errors
/// - Transport failures or an undecodable health body.
pub async fn handle_health<F: HttpFetch>(fetch: &F, settings: &Settings) -> Result<bool> {
    let health = fetch_health(fetch, &settings.api_base_url).await?;
    println!("alive    {}", health.alive);
    println!("iiif     {}", health.iiif);
    println!("tracksys {}", health.tracksys);
    Ok(health.is_healthy())
}

/// What: Print the service version banner.
///
/// # Errors
/// - Transport failures or non-success statuses.
pub async fn handle_version<F: HttpFetch>(fetch: &F, settings: &Settings) -> Result<bool> {
    let version = fetch_version(fetch, &settings.api_base_url).await?;
    println!("{version}");
    Ok(true)
}

/// What: Print the oEmbed document of an item URL as JSON.
///
/// # Errors
/// - Empty URL, transport failures, non-success statuses or bad JSON.
pub async fn handle_oembed<F: HttpFetch>(
    fetch: &F,
    settings: &Settings,
    url: &str,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Result<bool> {
    let doc = fetch_oembed(fetch, &settings.api_base_url, url, max_width, max_height).await?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(true)
}
