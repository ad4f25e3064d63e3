use crate::models::{GeneratedTrack, GenreSummary, PlayEvent, Radio, Track, UserProfile};
use crate::store::FavoriteEntry;
use std::sync::mpsc::Receiver;

/// Channels for work running off the UI thread. Each field holds the
/// receiver of an in-flight task; the update loop polls them every frame
/// and clears the slot when the task reports.
#[derive(Default)]
pub struct BackgroundTasks {
    // Catalog: results carry the fetch sequence they were issued under
    pub tracks_rx: Option<Receiver<(u64, Result<Vec<Track>, String>)>>,

    // Dashboard
    pub genres_rx: Option<Receiver<Result<Vec<GenreSummary>, String>>>,
    pub radios_rx: Option<Receiver<Result<Vec<Radio>, String>>>,
    pub recent_plays_rx: Option<Receiver<Result<Vec<PlayEvent>, String>>>,

    // Auth & profile
    pub auth_rx: Option<Receiver<Result<(String, UserProfile), String>>>,
    pub profile_rx: Option<Receiver<Result<UserProfile, String>>>,

    // User collections
    pub favorites_rx: Option<Receiver<Result<Vec<FavoriteEntry>, String>>>,
    pub generated_rx: Option<Receiver<Result<Vec<GeneratedTrack>, String>>>,

    // Generation: the stored track plus the refreshed profile counters
    pub generation_rx: Option<Receiver<Result<(GeneratedTrack, UserProfile), String>>>,
}

impl BackgroundTasks {
    /// Drop every pending task. Used on logout so results for the previous
    /// user can never land in the next session.
    pub fn cancel_all(&mut self) {
        *self = Self::default();
    }
}
