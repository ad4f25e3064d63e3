use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The per-user profile document, mirrored into a local cache file keyed by
/// user id and invalidated explicitly on refresh or logout.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub tracks_generated: u64,
    #[serde(default)]
    pub total_plays: u64,
    /// Accumulated generated audio, in hours.
    #[serde(default)]
    pub hours_created: f64,
    #[serde(default)]
    pub favorites: HashSet<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_login_at: String,
    /// Auth method that created this account ("password" for local accounts).
    #[serde(default)]
    pub provider: String,
}
