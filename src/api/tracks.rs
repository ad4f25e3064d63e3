// Catalog tracks endpoint (proxied by the local backend)
use crate::api::error::{extract_detail, ApiError};
use crate::config::Config;
use crate::models::{Track, TracksResponse};

/// Fetch a bounded page of catalog tracks matching `query`.
pub async fn fetch_tracks(
    config: &Config,
    query: &str,
    per_page: usize,
) -> Result<Vec<Track>, ApiError> {
    let url = format!(
        "{}/freepik/tracks?q={}&per_page={}",
        config.backend_url,
        urlencoding::encode(query),
        per_page
    );

    log::debug!("[Tracks] Fetching tracks: {}", url);

    let response = crate::utils::http::client().get(&url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = extract_detail(&body)
            .unwrap_or_else(|| format!("Tracks endpoint returned status {}", status));
        return Err(ApiError::Upstream(message));
    }

    let parsed: TracksResponse = serde_json::from_str(&body)?;
    log::debug!("[Tracks] Received {} tracks", parsed.tracks.len());
    Ok(parsed.tracks)
}
