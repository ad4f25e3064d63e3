// Music generation endpoint on the local backend
use crate::api::error::{extract_detail, ApiError};
use crate::config::Config;
use crate::models::{GenerateRequest, GenerateResponse};

/// Submit a generation request and wait for the synthesized clip.
///
/// Generation runs for tens of seconds on the backend; the shared client has
/// no timeout, so callers own cancellation (they don't: the worker thread
/// just reports whenever the backend answers).
pub async fn generate_music(
    config: &Config,
    request: &GenerateRequest,
) -> Result<GenerateResponse, ApiError> {
    let url = format!("{}/generate_music", config.backend_url);

    log::info!(
        "[Generate] Requesting {}s clip for description of {} chars",
        request.duration,
        request.description.chars().count()
    );

    let response = crate::utils::http::client()
        .post(&url)
        .json(request)
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = extract_detail(&body)
            .unwrap_or_else(|| format!("Generation backend returned status {}", status));
        return Err(ApiError::Upstream(message));
    }

    let mut parsed: GenerateResponse = serde_json::from_str(&body)?;
    parsed.audio_url = resolve_audio_url(config, &parsed);
    log::info!("[Generate] Clip ready: {}", parsed.file_name);
    Ok(parsed)
}

/// The backend may answer with a relative `audioUrl`, or with none at all
/// (older backends only return the file name, with the clip served under
/// `/generated/`). Resolve to an absolute URL either way.
fn resolve_audio_url(config: &Config, response: &GenerateResponse) -> String {
    if response.audio_url.starts_with("http://") || response.audio_url.starts_with("https://") {
        response.audio_url.clone()
    } else if !response.audio_url.is_empty() {
        format!(
            "{}/{}",
            config.backend_url,
            response.audio_url.trim_start_matches('/')
        )
    } else {
        format!("{}/generated/{}", config.backend_url, response.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            backend_url: "http://localhost:8000".to_string(),
            catalog_url: "https://api.example.com/v3.0".to_string(),
            catalog_client_id: None,
        }
    }

    fn response(file_name: &str, audio_url: &str) -> GenerateResponse {
        GenerateResponse {
            file_name: file_name.to_string(),
            audio_url: audio_url.to_string(),
        }
    }

    #[test]
    fn relative_audio_url_is_resolved_against_backend() {
        let resolved = resolve_audio_url(&config(), &response("x.wav", "/x.wav"));
        assert_eq!(resolved, "http://localhost:8000/x.wav");
    }

    #[test]
    fn absolute_audio_url_is_kept() {
        let url = "https://cdn.example/x.wav";
        let resolved = resolve_audio_url(&config(), &response("x.wav", url));
        assert_eq!(resolved, url);
    }

    #[test]
    fn missing_audio_url_falls_back_to_generated_path() {
        let resolved = resolve_audio_url(&config(), &response("calm_piano.wav", ""));
        assert_eq!(resolved, "http://localhost:8000/generated/calm_piano.wav");
    }
}
