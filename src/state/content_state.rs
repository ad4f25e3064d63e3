use crate::models::{GeneratedTrack, GenreSummary, PlayEvent, Radio, Track};
use crate::store::FavoriteEntry;
use std::collections::HashSet;

/// Everything fetched for display: catalog pages, dashboard aggregates, and
/// the user's own collections. Loading/error flags mirror each fetch so
/// screens can render loading, error, and empty states distinctly.
#[derive(Default)]
pub struct ContentState {
    // Tracks screen
    pub tracks: Vec<Track>,
    pub tracks_loading: bool,
    pub tracks_error: Option<String>,
    pub search_query: String,
    /// Query string the last fetch was issued for. A change triggers a
    /// refetch on the next frame.
    pub fetched_query: Option<String>,
    /// Monotonic fetch counter; results tagged with an older value are
    /// stale and dropped.
    pub tracks_fetch_seq: u64,

    // Dashboard
    pub dashboard_fetch_done: bool,
    pub genres: Vec<GenreSummary>,
    pub genres_loading: bool,
    pub genres_error: Option<String>,
    pub radios: Vec<Radio>,
    pub radios_loading: bool,
    pub radios_error: Option<String>,
    pub recent_plays: Vec<PlayEvent>,
    pub recent_plays_loading: bool,

    // Favorites screen
    pub favorites_fetch_done: bool,
    pub favorites: Vec<FavoriteEntry>,
    pub favorites_loading: bool,
    pub favorite_ids: HashSet<String>,

    // Generated-track library
    pub generated_fetch_done: bool,
    pub generated: Vec<GeneratedTrack>,
    pub generated_loading: bool,
}

impl ContentState {
    /// Forget per-user content on logout.
    pub fn clear_user_content(&mut self) {
        self.recent_plays.clear();
        self.favorites.clear();
        self.favorite_ids.clear();
        self.generated.clear();
        self.dashboard_fetch_done = false;
        self.favorites_fetch_done = false;
        self.generated_fetch_done = false;
    }
}
