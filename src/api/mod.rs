// Backend and catalog API client modules

pub mod error;
pub mod generate;
pub mod genres;
pub mod radios;
pub mod tracks;

// Re-export commonly used functions
pub use error::ApiError;
pub use generate::generate_music;
pub use genres::fetch_top_genres;
pub use radios::fetch_radios;
pub use tracks::fetch_tracks;
