// Shared app services used by multiple screens

pub mod catalog;
pub mod favorites;
pub mod generation;
