use serde::{Deserialize, Serialize};

use crate::models::Track;

/// A track synthesized for the user by the generation backend.
///
/// Owned by the requesting user and append-only: never mutated after
/// creation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GeneratedTrack {
    pub file_name: String,
    pub description: String,
    /// Requested length in seconds.
    pub duration: u32,
    /// Derived display title: the description truncated to 50 characters.
    pub title: String,
    pub cover: String,
    pub color: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    pub audio_url: String,
}

impl From<&GeneratedTrack> for Track {
    /// View a generation as a playable track. The id is derived from the
    /// file name, which is unique per user.
    fn from(generated: &GeneratedTrack) -> Self {
        Track {
            id: format!("gen-{}", generated.file_name),
            title: generated.title.clone(),
            artist: "You".to_string(),
            duration: crate::utils::formatting::format_duration(generated.duration),
            cover: generated.cover.clone(),
            tags: Vec::new(),
            plays: String::new(),
            color: generated.color.clone(),
            audio_url: generated.audio_url.clone(),
            attribution: Default::default(),
        }
    }
}
