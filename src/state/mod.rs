pub mod auth_state;
pub mod background_tasks;
pub mod content_state;
pub mod generator_state;
pub mod playback;
pub mod ui_state;

pub use auth_state::AuthState;
pub use background_tasks::BackgroundTasks;
pub use content_state::ContentState;
pub use generator_state::GeneratorState;
pub use playback::Playback;
pub use ui_state::UIState;
