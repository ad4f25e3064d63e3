// Curated radio streams endpoint (proxied by the local backend)
use crate::api::error::{extract_detail, ApiError};
use crate::config::Config;
use crate::models::Radio;

/// Fetch up to `limit` curated radio streams.
pub async fn fetch_radios(config: &Config, limit: usize) -> Result<Vec<Radio>, ApiError> {
    let url = format!("{}/jamendo/radios?limit={}", config.backend_url, limit);

    log::debug!("[Radios] Fetching radios: {}", url);

    let response = crate::utils::http::client().get(&url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = extract_detail(&body)
            .unwrap_or_else(|| format!("Radios endpoint returned status {}", status));
        return Err(ApiError::Upstream(message));
    }

    let radios: Vec<Radio> = serde_json::from_str(&body)?;
    log::debug!("[Radios] Received {} radios", radios.len());
    Ok(radios)
}
