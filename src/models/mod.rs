// Data models for catalog, generation, and user entities

pub mod generated;
pub mod play_event;
pub mod responses;
pub mod track;
pub mod user;

// Re-export commonly used types
pub use generated::GeneratedTrack;
pub use play_event::PlayEvent;
pub use responses::{GenerateRequest, GenerateResponse, GenreSummary, Radio, TracksResponse};
pub use track::{Attribution, Track};
pub use user::UserProfile;
