// src/state/detail.rs
use crate::config::BreweryRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    Loading,
    Loaded(BreweryRecord),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    Retry,
    Loaded(BreweryRecord),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    id: String,
    status: DetailStatus,
}

impl DetailState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: DetailStatus::Loading,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, DetailStatus::Loading)
    }

    pub fn apply(self, event: DetailEvent) -> Self {
        let status = match event {
            DetailEvent::Retry => DetailStatus::Loading,
            DetailEvent::Loaded(record) => DetailStatus::Loaded(record),
            DetailEvent::Failed(message) => DetailStatus::Failed(message),
        };
        Self { status, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_then_loaded() {
        let state = DetailState::new("abc");
        assert!(state.is_loading());

        let record = BreweryRecord::new("abc");
        let state = state.apply(DetailEvent::Loaded(record.clone()));
        assert_eq!(state.status(), &DetailStatus::Loaded(record));
        assert_eq!(state.id(), "abc");
    }

    #[test]
    fn failure_then_retry_returns_to_loading() {
        let state = DetailState::new("abc").apply(DetailEvent::Failed("HTTP 404".to_string()));
        assert_eq!(state.status(), &DetailStatus::Failed("HTTP 404".to_string()));

        let state = state.apply(DetailEvent::Retry);
        assert!(state.is_loading());
    }
}
