// src/state/mod.rs
pub mod dashboard;
pub mod detail;
pub mod route;

pub use dashboard::{DashboardEvent, DashboardState, DashboardSummary, LoadStatus};
pub use detail::{DetailEvent, DetailState, DetailStatus};
pub use route::Route;

use crate::config::Settings;

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    // Screen data
    pub dashboard: DashboardState,
    pub detail: Option<DetailState>,

    // Navigation
    pub route: Route,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            dashboard: DashboardState::default(),
            detail: None,
            route: Route::List,
        }
    }

    pub fn dispatch(&mut self, event: DashboardEvent) {
        self.dashboard = std::mem::take(&mut self.dashboard).apply(event);
    }

    pub fn dispatch_detail(&mut self, event: DetailEvent) {
        self.detail = self.detail.take().map(|detail| detail.apply(event));
    }
}
