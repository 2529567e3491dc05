// src/api/mod.rs
use crate::config::BreweryRecord;

pub mod client;
pub mod error;
pub mod task;

pub use client::BreweryClient;
pub use error::FetchError;
pub use task::{FetchTask, Notify};

pub trait BreweryApi: Send + Sync {
    fn fetch_breweries(&self, per_page: usize) -> Result<Vec<BreweryRecord>, FetchError>;
    fn fetch_brewery(&self, id: &str) -> Result<BreweryRecord, FetchError>;
}
