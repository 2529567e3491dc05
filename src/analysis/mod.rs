// src/analysis/mod.rs
pub mod filter;
pub mod aggregate;

// Re-export commonly used types
pub use filter::{filter_breweries, unique_types};
pub use aggregate::{count_by_type, top_states_by_count, StateCount, TypeCountMap};
