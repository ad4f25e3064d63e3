pub mod studio_app;

pub use studio_app::MusicStudioApp;
