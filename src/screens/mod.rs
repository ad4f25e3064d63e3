// Screen render functions, one per navigation target

pub mod dashboard;
pub mod favorites;
pub mod generate;
pub mod landing;
pub mod login;
pub mod settings;
pub mod tracks;
