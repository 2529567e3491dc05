// src/ui/mod.rs
pub mod charts;
pub mod dashboard;
pub mod detail;

use crate::state::DashboardEvent;

/// What the user asked for during a frame; the app applies these after drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Dashboard(DashboardEvent),
    OpenDetail(String),
    Back,
    Refresh,
    RetryDetail,
}
