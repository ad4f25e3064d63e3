//! Application constants and configuration values

// === UI & Layout ===
pub const RECENT_PLAYS_LIMIT: usize = 3;
pub const REPAINT_INTERVAL_ACTIVE_MICROS: u64 = 33333; // 30 FPS while loading/playing
pub const REPAINT_INTERVAL_IDLE_MICROS: u64 = 50000; // 20 FPS when idle

// === Branding ===
pub const DOMINANT_COLOR_RGB: (u8, u8, u8) = (95, 133, 219); // MuseRS blue (#5F85DB)

// === Audio Playback ===
pub const DEFAULT_VOLUME: f32 = 1.0;
pub const DEFAULT_VOLUME_BEFORE_MUTE: f32 = 0.7;
/// Synthetic track ids for radio stations carry this prefix; they play as
/// live streams and never enter the play history.
pub const RADIO_ID_PREFIX: &str = "radio-";

// === Catalog & Content ===
pub const DEFAULT_TRACKS_LIMIT: usize = 20;
pub const DEFAULT_RADIOS_LIMIT: usize = 10;
pub const FACET_COUNT: usize = 4;

/// Genres queried for the "top genres" aggregation, one upstream request each.
/// Based on the catalog provider's suggested genre tags.
pub const GENRE_QUERY_LIST: [&str; 13] = [
    "electronic",
    "ambient",
    "jazz",
    "rock",
    "pop",
    "hiphop",
    "classical",
    "lounge",
    "relaxation",
    "songwriter",
    "world",
    "metal",
    "soundtrack",
];

/// Gradient tokens assigned to derived genre facets, cycled by index.
/// The token names are resolved to concrete colors in `ui_components::colors`.
pub const GRADIENT_PALETTE: [&str; 4] = [
    "blue-violet",  // #5F85DB -> #7B68EE
    "teal-green",   // #4ECDC4 -> #44A08D
    "coral-orange", // #FF6B6B -> #FF8E53
    "gold-red",     // #FFD93D -> #FF6B6B
];

// === Generation ===
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const GENERATED_TITLE_MAX_CHARS: usize = 50;
pub const GENERATION_DURATION_MIN_SECS: u32 = 5;
pub const GENERATION_DURATION_MAX_SECS: u32 = 30;
pub const GENERATION_DURATION_DEFAULT_SECS: u32 = 15;
