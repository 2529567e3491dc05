// src/state/dashboard.rs
use chrono::{DateTime, Local};

use crate::analysis::{
    count_by_type, filter_breweries, top_states_by_count, unique_types, StateCount, TypeCountMap,
};
use crate::config::{BreweryList, BreweryRecord};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

// Both empty means "show everything"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub filter_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    SearchChanged(String),
    FilterTypeChanged(String),
    FetchStarted,
    FetchSucceeded(BreweryList, DateTime<Local>),
    FetchFailed(String),
}

/// Immutable snapshot of the list screen. Every change goes through [`DashboardState::apply`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    breweries: BreweryList,
    filter: FilterState,
    status: LoadStatus,
    last_updated: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary<'a> {
    pub total: usize,
    pub filtered: Vec<&'a BreweryRecord>,
    pub unique_types: Vec<&'a str>,
    pub type_counts: TypeCountMap,
    pub top_states: Vec<StateCount>,
}

impl DashboardSummary<'_> {
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn type_count(&self) -> usize {
        self.unique_types.len()
    }
}

impl DashboardState {
    #[cfg(test)]
    pub fn breweries(&self) -> &[BreweryRecord] {
        &self.breweries
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    pub fn apply(self, event: DashboardEvent) -> Self {
        match event {
            DashboardEvent::SearchChanged(search_term) => Self {
                filter: FilterState { search_term, ..self.filter },
                ..self
            },
            DashboardEvent::FilterTypeChanged(filter_type) => Self {
                filter: FilterState { filter_type, ..self.filter },
                ..self
            },
            DashboardEvent::FetchStarted => Self {
                status: LoadStatus::Loading,
                ..self
            },
            DashboardEvent::FetchSucceeded(breweries, at) => Self {
                breweries,
                status: LoadStatus::Loaded,
                last_updated: Some(at),
                ..self
            },
            // Keep whatever list we had; the error is shown next to it.
            DashboardEvent::FetchFailed(message) => Self {
                status: LoadStatus::Failed(message),
                ..self
            },
        }
    }

    pub fn summary(&self, top_n: usize) -> DashboardSummary<'_> {
        DashboardSummary {
            total: self.breweries.len(),
            filtered: filter_breweries(
                &self.breweries,
                &self.filter.search_term,
                &self.filter.filter_type,
            ),
            unique_types: unique_types(&self.breweries),
            type_counts: count_by_type(&self.breweries),
            top_states: top_states_by_count(&self.breweries, top_n),
        }
    }
}
