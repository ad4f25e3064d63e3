use serde::{Deserialize, Serialize};

use crate::models::Track;

/// One entry of the append-only per-user play-history log.
///
/// Created exactly once per successful playback start. The timestamp is
/// assigned by the store on insert, so a freshly built event carries an
/// empty string until it is read back.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlayEvent {
    pub track_id: String,
    pub title: String,
    pub artist: String,
    pub cover: String,
    pub duration: String,
    pub color: String,
    pub audio_url: String,
    /// Store-assigned, ISO-8601. Empty until persisted.
    #[serde(default)]
    pub timestamp: String,
}

impl From<PlayEvent> for Track {
    /// Rebuild a playable track from a history snapshot, for replay from
    /// the dashboard.
    fn from(event: PlayEvent) -> Self {
        Track {
            id: event.track_id,
            title: event.title,
            artist: event.artist,
            duration: event.duration,
            cover: event.cover,
            tags: Vec::new(),
            plays: String::new(),
            color: event.color,
            audio_url: event.audio_url,
            attribution: Default::default(),
        }
    }
}

impl PlayEvent {
    /// Snapshot the fields of a track at the moment playback started.
    pub fn from_track(track: &Track) -> Self {
        Self {
            track_id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            cover: track.cover.clone(),
            duration: track.duration.clone(),
            color: track.color.clone(),
            audio_url: track.audio_url.clone(),
            timestamp: String::new(),
        }
    }
}
