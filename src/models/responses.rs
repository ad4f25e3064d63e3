use serde::{Deserialize, Serialize};

use crate::models::Track;

/// Body of the backend tracks endpoint: `{"tracks": [...]}`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TracksResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// One aggregated genre row from the top-genres query.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GenreSummary {
    pub name: String,
    /// Upstream track count for the genre tag.
    pub tracks: u64,
    pub image: String,
    pub color: String,
}

/// A curated radio stream from the backend's radios endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Radio {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, rename = "streamUrl")]
    pub stream_url: String,
}

/// Request body for `POST /generate_music`.
#[derive(Debug, Serialize, Clone)]
pub struct GenerateRequest {
    pub description: String,
    /// Seconds, 5-30.
    pub duration: f32,
    #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// Success body of `POST /generate_music`.
#[derive(Debug, Deserialize, Clone)]
pub struct GenerateResponse {
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// May be relative or absent; resolved to an absolute URL by the client.
    #[serde(default, rename = "audioUrl")]
    pub audio_url: String,
}
