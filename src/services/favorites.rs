//! Favorites service: optimistic heart toggling and favorites-page sorting.
//!
//! Consolidates the toggle logic shared by the dashboard, tracks, and
//! favorites screens.

use std::collections::HashSet;

use crate::models::Track;
use crate::store::{FavoriteEntry, UserStore};

/// Result of a toggle operation (for UI updates)
#[derive(Debug)]
pub struct ToggleResult {
    pub is_favorite: bool,
    pub message: String,
}

/// Toggle a track in the user's favorites.
///
/// The local set is updated immediately so the heart icon flips on this
/// frame; the store write runs in the background and failures are logged,
/// not surfaced.
pub fn toggle_favorite(
    track: &Track,
    favorite_ids: &mut HashSet<String>,
    store: &UserStore,
    uid: &str,
) -> ToggleResult {
    let was_favorite = favorite_ids.contains(&track.id);

    if was_favorite {
        log::info!("[Favorites] Removing {}", track.id);
        favorite_ids.remove(&track.id);
        spawn_remove_task(store.clone(), uid.to_string(), track.id.clone());
        ToggleResult {
            is_favorite: false,
            message: format!("Removed \"{}\" from favorites", track.title),
        }
    } else {
        log::info!("[Favorites] Adding {}", track.id);
        favorite_ids.insert(track.id.clone());
        spawn_add_task(store.clone(), uid.to_string(), track.clone());
        ToggleResult {
            is_favorite: true,
            message: format!("Added \"{}\" to favorites", track.title),
        }
    }
}

/// Remove a selection of favorites at once. The caller has already removed
/// them from its local list; the store delete is persisted in the
/// background.
pub fn remove_selected(store: &UserStore, uid: &str, track_ids: Vec<String>) {
    if track_ids.is_empty() {
        return;
    }
    let uid = uid.to_string();
    let store = store.clone();
    crate::utils::async_helper::spawn_fire_and_forget(move || {
        Box::pin(async move {
            store
                .remove_favorites(&uid, &track_ids)
                .map_err(|e| e.to_string())
        })
    });
}

fn spawn_add_task(store: UserStore, uid: String, track: Track) {
    crate::utils::async_helper::spawn_fire_and_forget(move || {
        Box::pin(async move {
            match store.add_favorite(&uid, &track) {
                Ok(()) => Ok(()),
                Err(e) => {
                    log::error!("[Favorites] Failed to add {}: {}", track.id, e);
                    Err(e.to_string())
                }
            }
        })
    });
}

fn spawn_remove_task(store: UserStore, uid: String, track_id: String) {
    crate::utils::async_helper::spawn_fire_and_forget(move || {
        Box::pin(async move {
            match store.remove_favorites(&uid, std::slice::from_ref(&track_id)) {
                Ok(()) => Ok(()),
                Err(e) => {
                    log::error!("[Favorites] Failed to remove {}: {}", track_id, e);
                    Err(e.to_string())
                }
            }
        })
    });
}

/// Sort order for the favorites screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Artist,
    DateAdded,
    Duration,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::DateAdded,
        SortKey::Name,
        SortKey::Artist,
        SortKey::Duration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Artist => "Artist",
            SortKey::DateAdded => "Date added",
            SortKey::Duration => "Duration",
        }
    }
}

/// Sort favorites in place. Date added sorts newest first; the text keys
/// sort ascending and case-insensitively.
pub fn sort_entries(entries: &mut [FavoriteEntry], key: SortKey) {
    match key {
        SortKey::Name => {
            entries.sort_by(|a, b| {
                a.track
                    .title
                    .to_lowercase()
                    .cmp(&b.track.title.to_lowercase())
            });
        }
        SortKey::Artist => {
            entries.sort_by(|a, b| {
                a.track
                    .artist
                    .to_lowercase()
                    .cmp(&b.track.artist.to_lowercase())
            });
        }
        SortKey::DateAdded => {
            entries.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        }
        SortKey::Duration => {
            entries.sort_by_key(|e| duration_secs(&e.track.duration));
        }
    }
}

/// Parse a display duration ("m:ss") back into seconds for sorting.
/// Unparseable values sort first.
fn duration_secs(display: &str) -> u32 {
    let mut parts = display.splitn(2, ':');
    let mins: u32 = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0);
    let secs: u32 = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0);
    mins * 60 + secs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribution;

    fn entry(id: &str, title: &str, artist: &str, duration: &str, added_at: &str) -> FavoriteEntry {
        FavoriteEntry {
            track: Track {
                id: id.to_string(),
                title: title.to_string(),
                artist: artist.to_string(),
                duration: duration.to_string(),
                cover: String::new(),
                tags: Vec::new(),
                plays: String::new(),
                color: String::new(),
                audio_url: String::new(),
                attribution: Attribution::default(),
            },
            added_at: added_at.to_string(),
        }
    }

    #[test]
    fn date_added_sorts_newest_first() {
        let mut entries = vec![
            entry("a", "A", "x", "1:00", "2026-01-01T00:00:00Z"),
            entry("b", "B", "x", "1:00", "2026-03-01T00:00:00Z"),
            entry("c", "C", "x", "1:00", "2026-02-01T00:00:00Z"),
        ];
        sort_entries(&mut entries, SortKey::DateAdded);
        let ids: Vec<_> = entries.iter().map(|e| e.track.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut entries = vec![
            entry("a", "zebra", "x", "1:00", ""),
            entry("b", "Alpha", "x", "1:00", ""),
            entry("c", "miDnight", "x", "1:00", ""),
        ];
        sort_entries(&mut entries, SortKey::Name);
        let ids: Vec<_> = entries.iter().map(|e| e.track.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn duration_sort_parses_display_strings() {
        let mut entries = vec![
            entry("a", "A", "x", "10:00", ""),
            entry("b", "B", "x", "2:05", ""),
            entry("c", "C", "x", "0:45", ""),
        ];
        sort_entries(&mut entries, SortKey::Duration);
        let ids: Vec<_> = entries.iter().map(|e| e.track.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn duration_parse_handles_garbage() {
        assert_eq!(duration_secs("3:21"), 201);
        assert_eq!(duration_secs(""), 0);
        assert_eq!(duration_secs("n/a"), 0);
    }
}
