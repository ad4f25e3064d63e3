pub mod async_helper;
pub mod audio_controller;
pub mod error_handling;
pub mod formatting;
pub mod http;
pub mod mediaplay;
