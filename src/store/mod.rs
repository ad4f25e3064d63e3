//! Local SQLite persistence: accounts, favorites, generated tracks, and the
//! play-history log.

pub mod profile_cache;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Attribution, GeneratedTrack, PlayEvent, Track, UserProfile};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("could not prepare data directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Unknown user")]
    UnknownUser,
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    photo_url TEXT NOT NULL DEFAULT '',
    password_hash TEXT NOT NULL,
    salt TEXT NOT NULL,
    provider TEXT NOT NULL DEFAULT 'password',
    tracks_generated INTEGER NOT NULL DEFAULT 0,
    total_plays INTEGER NOT NULL DEFAULT 0,
    hours_created REAL NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    last_login_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS favorites (
    user_id TEXT NOT NULL,
    track_id TEXT NOT NULL,
    title TEXT NOT NULL,
    artist TEXT NOT NULL,
    duration TEXT NOT NULL,
    cover TEXT NOT NULL,
    tags TEXT NOT NULL,
    plays TEXT NOT NULL,
    color TEXT NOT NULL,
    audio_url TEXT NOT NULL,
    attribution TEXT NOT NULL,
    added_at TEXT NOT NULL,
    PRIMARY KEY (user_id, track_id)
);

CREATE TABLE IF NOT EXISTS generated_tracks (
    user_id TEXT NOT NULL,
    file_name TEXT NOT NULL,
    description TEXT NOT NULL,
    duration INTEGER NOT NULL,
    title TEXT NOT NULL,
    cover TEXT NOT NULL,
    color TEXT NOT NULL,
    audio_url TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS plays (
    user_id TEXT NOT NULL,
    track_id TEXT NOT NULL,
    title TEXT NOT NULL,
    artist TEXT NOT NULL,
    cover TEXT NOT NULL,
    duration TEXT NOT NULL,
    color TEXT NOT NULL,
    audio_url TEXT NOT NULL,
    played_at TEXT NOT NULL
);
";

/// A favorited track together with the moment it was added, for date sorting.
#[derive(Debug, Clone)]
pub struct FavoriteEntry {
    pub track: Track,
    pub added_at: String,
}

/// Handle to the on-disk user database.
///
/// Holds only the path; a fresh connection is opened per operation. All
/// methods are called from background threads, never from the frame loop.
#[derive(Clone)]
pub struct UserStore {
    db_path: PathBuf,
}

impl UserStore {
    /// Open the store at the platform data directory, creating it on first
    /// launch.
    pub fn new() -> Result<Self, StoreError> {
        let mut dir = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        dir.push("muse-rs");
        std::fs::create_dir_all(&dir)?;
        let db_path = dir.join("muse.db");
        log::info!("[UserStore] Using database at {}", db_path.display());
        Ok(Self { db_path })
    }

    /// Open a store at an explicit path.
    pub fn at_path(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    fn open(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }

    // ---- accounts ----

    /// Create an account. Email must be unused; the password is stored as a
    /// salted hash, never in plain text.
    pub fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(String, UserProfile), StoreError> {
        let conn = self.open()?;
        let email = email.trim().to_lowercase();

        let taken: Option<i64> = conn
            .query_row("SELECT 1 FROM users WHERE email = ?1", params![email], |r| {
                r.get(0)
            })
            .optional()?;
        if taken.is_some() {
            return Err(StoreError::EmailTaken);
        }

        let uid = random_hex(16);
        let salt = random_hex(16);
        let hash = hash_password(&salt, password);
        let now = chrono::Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO users (id, name, email, password_hash, salt, provider, created_at, last_login_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 'password', ?6, ?6)",
            params![uid, name.trim(), email, hash, salt, now],
        )?;
        log::info!("[UserStore] Created account for {}", email);

        let profile = self.load_profile(&uid)?;
        Ok((uid, profile))
    }

    /// Verify credentials and refresh the last-login timestamp.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<(String, UserProfile), StoreError> {
        let conn = self.open()?;
        let email = email.trim().to_lowercase();

        let row: Option<(String, String, String)> = conn
            .query_row(
                "SELECT id, password_hash, salt FROM users WHERE email = ?1",
                params![email],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .optional()?;

        let (uid, stored_hash, salt) = row.ok_or(StoreError::InvalidCredentials)?;
        if hash_password(&salt, password) != stored_hash {
            return Err(StoreError::InvalidCredentials);
        }

        let now = chrono::Utc::now().to_rfc3339();
        conn.execute(
            "UPDATE users SET last_login_at = ?1 WHERE id = ?2",
            params![now, uid],
        )?;

        let profile = self.load_profile(&uid)?;
        Ok((uid, profile))
    }

    /// Read the full profile, including the set of favorited track ids.
    pub fn load_profile(&self, uid: &str) -> Result<UserProfile, StoreError> {
        let conn = self.open()?;
        let mut profile: UserProfile = conn
            .query_row(
                "SELECT name, email, photo_url, provider, tracks_generated, total_plays,
                        hours_created, created_at, last_login_at
                 FROM users WHERE id = ?1",
                params![uid],
                |r| {
                    Ok(UserProfile {
                        name: r.get(0)?,
                        email: r.get(1)?,
                        photo_url: r.get(2)?,
                        provider: r.get(3)?,
                        tracks_generated: r.get::<_, i64>(4)? as u64,
                        total_plays: r.get::<_, i64>(5)? as u64,
                        hours_created: r.get(6)?,
                        created_at: r.get(7)?,
                        last_login_at: r.get(8)?,
                        favorites: HashSet::new(),
                    })
                },
            )
            .optional()?
            .ok_or(StoreError::UnknownUser)?;

        profile.favorites = self.favorite_ids_with(&conn, uid)?;
        Ok(profile)
    }

    // ---- generated tracks ----

    /// Persist a finished generation and bump the creator's stats. Returns
    /// the stored track with its assigned timestamp.
    pub fn record_generation(
        &self,
        uid: &str,
        track: &GeneratedTrack,
    ) -> Result<GeneratedTrack, StoreError> {
        let mut conn = self.open()?;
        let now = chrono::Utc::now().to_rfc3339();

        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO generated_tracks
                (user_id, file_name, description, duration, title, cover, color, audio_url, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                uid,
                track.file_name,
                track.description,
                track.duration,
                track.title,
                track.cover,
                track.color,
                track.audio_url,
                now
            ],
        )?;
        let updated = tx.execute(
            "UPDATE users
             SET tracks_generated = tracks_generated + 1,
                 hours_created = hours_created + ?1
             WHERE id = ?2",
            params![f64::from(track.duration) / 3600.0, uid],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownUser);
        }
        tx.commit()?;

        let mut stored = track.clone();
        stored.created_at = now;
        Ok(stored)
    }

    /// All tracks the user has generated, newest first.
    pub fn list_generated(&self, uid: &str) -> Result<Vec<GeneratedTrack>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT file_name, description, duration, title, cover, color, audio_url, created_at
             FROM generated_tracks WHERE user_id = ?1 ORDER BY rowid DESC",
        )?;
        let rows = stmt.query_map(params![uid], |r| {
            Ok(GeneratedTrack {
                file_name: r.get(0)?,
                description: r.get(1)?,
                duration: r.get::<_, i64>(2)? as u32,
                title: r.get(3)?,
                cover: r.get(4)?,
                color: r.get(5)?,
                audio_url: r.get(6)?,
                created_at: r.get(7)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    // ---- play history ----

    /// Append a play event and bump the listener's play counter.
    pub fn record_play(&self, uid: &str, event: &PlayEvent) -> Result<(), StoreError> {
        let mut conn = self.open()?;
        let now = chrono::Utc::now().to_rfc3339();

        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO plays
                (user_id, track_id, title, artist, cover, duration, color, audio_url, played_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                uid,
                event.track_id,
                event.title,
                event.artist,
                event.cover,
                event.duration,
                event.color,
                event.audio_url,
                now
            ],
        )?;
        tx.execute(
            "UPDATE users SET total_plays = total_plays + 1 WHERE id = ?1",
            params![uid],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// The user's most recent plays, newest first.
    pub fn recent_plays(&self, uid: &str, limit: usize) -> Result<Vec<PlayEvent>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT track_id, title, artist, cover, duration, color, audio_url, played_at
             FROM plays WHERE user_id = ?1 ORDER BY rowid DESC LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![uid, limit as i64], |r| {
            Ok(PlayEvent {
                track_id: r.get(0)?,
                title: r.get(1)?,
                artist: r.get(2)?,
                cover: r.get(3)?,
                duration: r.get(4)?,
                color: r.get(5)?,
                audio_url: r.get(6)?,
                timestamp: r.get(7)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    // ---- favorites ----

    /// Snapshot a track into the user's favorites. Idempotent.
    pub fn add_favorite(&self, uid: &str, track: &Track) -> Result<(), StoreError> {
        let conn = self.open()?;
        let now = chrono::Utc::now().to_rfc3339();
        conn.execute(
            "INSERT OR IGNORE INTO favorites
                (user_id, track_id, title, artist, duration, cover, tags, plays,
                 color, audio_url, attribution, added_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                uid,
                track.id,
                track.title,
                track.artist,
                track.duration,
                track.cover,
                serde_json::to_string(&track.tags)?,
                track.plays,
                track.color,
                track.audio_url,
                serde_json::to_string(&track.attribution)?,
                now
            ],
        )?;
        Ok(())
    }

    /// Remove a batch of favorites in one transaction.
    pub fn remove_favorites(&self, uid: &str, track_ids: &[String]) -> Result<(), StoreError> {
        if track_ids.is_empty() {
            return Ok(());
        }
        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("DELETE FROM favorites WHERE user_id = ?1 AND track_id = ?2")?;
            for id in track_ids {
                stmt.execute(params![uid, id])?;
            }
        }
        tx.commit()?;
        log::info!("[UserStore] Removed {} favorite(s)", track_ids.len());
        Ok(())
    }

    /// All favorites with their added-at timestamps, in insertion order.
    pub fn list_favorites(&self, uid: &str) -> Result<Vec<FavoriteEntry>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT track_id, title, artist, duration, cover, tags, plays,
                    color, audio_url, attribution, added_at
             FROM favorites WHERE user_id = ?1 ORDER BY rowid ASC",
        )?;
        let rows = stmt.query_map(params![uid], |r| {
            let tags_json: String = r.get(5)?;
            let attribution_json: String = r.get(9)?;
            Ok(FavoriteEntry {
                track: Track {
                    id: r.get(0)?,
                    title: r.get(1)?,
                    artist: r.get(2)?,
                    duration: r.get(3)?,
                    cover: r.get(4)?,
                    tags: serde_json::from_str(&tags_json).unwrap_or_default(),
                    plays: r.get(6)?,
                    color: r.get(7)?,
                    audio_url: r.get(8)?,
                    attribution: serde_json::from_str::<Attribution>(&attribution_json)
                        .unwrap_or_default(),
                },
                added_at: r.get(10)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// The set of favorited track ids, for heart-icon state.
    pub fn favorite_ids(&self, uid: &str) -> Result<HashSet<String>, StoreError> {
        let conn = self.open()?;
        self.favorite_ids_with(&conn, uid)
    }

    fn favorite_ids_with(
        &self,
        conn: &Connection,
        uid: &str,
    ) -> Result<HashSet<String>, StoreError> {
        let mut stmt = conn.prepare("SELECT track_id FROM favorites WHERE user_id = ?1")?;
        let rows = stmt.query_map(params![uid], |r| r.get::<_, String>(0))?;
        Ok(rows.collect::<Result<HashSet<_>, _>>()?)
    }
}

fn random_hex(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rand::rng().fill_bytes(&mut buf);
    buf.iter().map(|b| format!("{:02x}", b)).collect()
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    BASE64.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> UserStore {
        let mut path = std::env::temp_dir();
        path.push(format!("muse-store-{}-{}.db", tag, std::process::id()));
        let _ = std::fs::remove_file(&path);
        UserStore::at_path(path)
    }

    fn sample_track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            title: format!("Track {}", id),
            artist: "Artist".to_string(),
            duration: "3:21".to_string(),
            cover: String::new(),
            tags: vec!["lofi".to_string()],
            plays: "1.2K".to_string(),
            color: "blue-violet".to_string(),
            audio_url: format!("https://cdn.example/{}.mp3", id),
            attribution: Attribution::default(),
        }
    }

    #[test]
    fn sign_up_then_sign_in_roundtrip() {
        let store = temp_store("auth");
        let (uid, profile) = store.sign_up("Ada", "ada@example.com", "hunter2").unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.provider, "password");

        let (uid2, profile2) = store.sign_in("Ada@Example.com", "hunter2").unwrap();
        assert_eq!(uid, uid2);
        assert_eq!(profile2.email, "ada@example.com");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let store = temp_store("badpw");
        store.sign_up("Ada", "ada@example.com", "hunter2").unwrap();
        assert!(matches!(
            store.sign_in("ada@example.com", "wrong"),
            Err(StoreError::InvalidCredentials)
        ));
        assert!(matches!(
            store.sign_in("nobody@example.com", "hunter2"),
            Err(StoreError::InvalidCredentials)
        ));
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let store = temp_store("dup");
        store.sign_up("Ada", "ada@example.com", "hunter2").unwrap();
        assert!(matches!(
            store.sign_up("Other", "ada@example.com", "pw"),
            Err(StoreError::EmailTaken)
        ));
    }

    #[test]
    fn generation_bumps_creator_stats() {
        let store = temp_store("gen");
        let (uid, _) = store.sign_up("Ada", "ada@example.com", "pw").unwrap();

        let track = GeneratedTrack {
            file_name: "calm_piano".to_string(),
            description: "calm piano over rain".to_string(),
            duration: 15,
            title: "calm piano over rain".to_string(),
            cover: String::new(),
            color: "teal-green".to_string(),
            created_at: String::new(),
            audio_url: "https://backend/audio/calm_piano.wav".to_string(),
        };
        let stored = store.record_generation(&uid, &track).unwrap();
        assert!(!stored.created_at.is_empty());

        let profile = store.load_profile(&uid).unwrap();
        assert_eq!(profile.tracks_generated, 1);
        assert!((profile.hours_created - 15.0 / 3600.0).abs() < 1e-9);

        let listed = store.list_generated(&uid).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].file_name, "calm_piano");
    }

    #[test]
    fn plays_are_logged_newest_first() {
        let store = temp_store("plays");
        let (uid, _) = store.sign_up("Ada", "ada@example.com", "pw").unwrap();

        for id in ["a", "b", "c", "d"] {
            let event = PlayEvent::from_track(&sample_track(id));
            store.record_play(&uid, &event).unwrap();
        }

        let recent = store.recent_plays(&uid, 3).unwrap();
        assert_eq!(recent.len(), 3);
        let ids: Vec<_> = recent.iter().map(|e| e.track_id.as_str()).collect();
        assert_eq!(ids, vec!["d", "c", "b"]);
        assert!(recent.iter().all(|e| !e.timestamp.is_empty()));

        let profile = store.load_profile(&uid).unwrap();
        assert_eq!(profile.total_plays, 4);
    }

    #[test]
    fn favorites_add_is_idempotent_and_removal_is_bulk() {
        let store = temp_store("favs");
        let (uid, _) = store.sign_up("Ada", "ada@example.com", "pw").unwrap();

        store.add_favorite(&uid, &sample_track("a")).unwrap();
        store.add_favorite(&uid, &sample_track("a")).unwrap();
        store.add_favorite(&uid, &sample_track("b")).unwrap();
        store.add_favorite(&uid, &sample_track("c")).unwrap();

        let favorites = store.list_favorites(&uid).unwrap();
        assert_eq!(favorites.len(), 3);
        assert_eq!(favorites[0].track.tags, vec!["lofi".to_string()]);

        store
            .remove_favorites(&uid, &["a".to_string(), "c".to_string()])
            .unwrap();
        let ids = store.favorite_ids(&uid).unwrap();
        assert_eq!(ids.len(), 1);
        assert!(ids.contains("b"));
    }
}
