//! Per-user profile cache on disk.
//!
//! Mirrors the last loaded profile into `userData_{uid}.json` so the
//! dashboard can render stats instantly on launch while a fresh copy loads
//! in the background. The cache is advisory: a corrupt or missing file just
//! means a slower first paint.

use crate::models::UserProfile;
use std::path::{Path, PathBuf};

fn cache_dir() -> PathBuf {
    let mut dir = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    dir.push("muse-rs");
    dir
}

fn cache_path(dir: &Path, uid: &str) -> PathBuf {
    dir.join(format!("userData_{}.json", uid))
}

pub fn load(uid: &str) -> Option<UserProfile> {
    load_from(&cache_dir(), uid)
}

fn load_from(dir: &Path, uid: &str) -> Option<UserProfile> {
    let path = cache_path(dir, uid);
    let raw = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(profile) => {
            log::debug!("[ProfileCache] Loaded cached profile for {}", uid);
            Some(profile)
        }
        Err(e) => {
            log::warn!("[ProfileCache] Discarding unreadable cache file: {}", e);
            let _ = std::fs::remove_file(path);
            None
        }
    }
}

pub fn save(uid: &str, profile: &UserProfile) {
    save_in(&cache_dir(), uid, profile);
}

fn save_in(dir: &Path, uid: &str, profile: &UserProfile) {
    if let Err(e) = std::fs::create_dir_all(dir) {
        log::warn!("[ProfileCache] Could not create cache dir: {}", e);
        return;
    }
    match serde_json::to_string_pretty(profile) {
        Ok(json) => {
            if let Err(e) = std::fs::write(cache_path(dir, uid), json) {
                log::warn!("[ProfileCache] Could not write cache file: {}", e);
            }
        }
        Err(e) => log::warn!("[ProfileCache] Could not encode profile: {}", e),
    }
}

/// Drop one user's cached profile, forcing the next load to hit the store.
pub fn invalidate(uid: &str) {
    invalidate_in(&cache_dir(), uid);
}

fn invalidate_in(dir: &Path, uid: &str) {
    let _ = std::fs::remove_file(cache_path(dir, uid));
}

/// Remove every cached profile. Called on logout.
pub fn clear_all() {
    clear_all_in(&cache_dir());
}

fn clear_all_in(dir: &Path) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("userData_") && name.ends_with(".json") {
            let _ = std::fs::remove_file(entry.path());
        }
    }
    log::debug!("[ProfileCache] Cleared all cached profiles");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache(tag: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("muse-cache-{}-{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn sample_profile(name: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            tracks_generated: 3,
            total_plays: 12,
            ..Default::default()
        }
    }

    #[test]
    fn saved_profile_loads_back() {
        let dir = temp_cache("roundtrip");
        save_in(&dir, "u1", &sample_profile("ada"));

        let loaded = load_from(&dir, "u1").unwrap();
        assert_eq!(loaded.name, "ada");
        assert_eq!(loaded.tracks_generated, 3);
        assert_eq!(loaded.total_plays, 12);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_cache_file_is_discarded() {
        let dir = temp_cache("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(cache_path(&dir, "u1"), "not json").unwrap();

        assert!(load_from(&dir, "u1").is_none());
        // The bad file is gone, so the next load misses cleanly
        assert!(!cache_path(&dir, "u1").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn invalidate_removes_only_that_user() {
        let dir = temp_cache("invalidate");
        save_in(&dir, "u1", &sample_profile("ada"));
        save_in(&dir, "u2", &sample_profile("grace"));

        invalidate_in(&dir, "u1");
        assert!(load_from(&dir, "u1").is_none());
        assert_eq!(load_from(&dir, "u2").unwrap().name, "grace");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn clear_all_leaves_unrelated_files_alone() {
        let dir = temp_cache("clear");
        save_in(&dir, "u1", &sample_profile("ada"));
        save_in(&dir, "u2", &sample_profile("grace"));
        let other = dir.join("settings.json");
        std::fs::write(&other, "{}").unwrap();

        clear_all_in(&dir);
        assert!(load_from(&dir, "u1").is_none());
        assert!(load_from(&dir, "u2").is_none());
        assert!(other.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
