// src/config/mod.rs
pub mod brewery;
pub mod settings;

// Re-export commonly used types
pub use brewery::{BreweryRecord, BreweryList};
pub use settings::Settings;
