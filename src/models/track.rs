use serde::{Deserialize, Serialize};

/// Attribution requirement carried by some catalog tracks (license credit).
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Attribution {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link: String,
}

/// A catalog track as returned by the backend's tracks endpoint.
///
/// Read-only provider data; never persisted locally except when snapshotted
/// into the favorites table or the play-history log.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Display duration, "m:ss".
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display play count, e.g. "12.5K".
    #[serde(default)]
    pub plays: String,
    /// Gradient token resolved by the UI palette.
    #[serde(default)]
    pub color: String,
    #[serde(default, rename = "audioUrl")]
    pub audio_url: String,
    #[serde(default)]
    pub attribution: Attribution,
}

impl Track {
    /// Case-insensitive substring match against title, artist, or any tag.
    pub fn matches(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle_lower)
            || self.artist.to_lowercase().contains(needle_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle_lower))
    }
}
