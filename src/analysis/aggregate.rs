// src/analysis/aggregate.rs
use crate::config::BreweryRecord;

/// Count of records per raw `brewery_type`, in first-seen key order.
/// `None` and `Some("")` are keys like any other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeCountMap {
    entries: Vec<(Option<String>, usize)>,
}

impl TypeCountMap {
    #[cfg(test)]
    pub fn get(&self, brewery_type: Option<&str>) -> usize {
        self.entries.iter()
            .find(|(key, _)| key.as_deref() == brewery_type)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_deref(), *count))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    fn increment(&mut self, key: Option<&str>) {
        match self.entries.iter_mut().find(|(existing, _)| existing.as_deref() == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key.map(str::to_string), 1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCount {
    pub state: Option<String>,
    pub count: usize,
}

impl StateCount {
    pub fn label(&self) -> &str {
        self.state.as_deref().unwrap_or("Unknown")
    }
}

pub fn count_by_type(records: &[BreweryRecord]) -> TypeCountMap {
    let mut counts = TypeCountMap::default();
    for record in records {
        counts.increment(record.brewery_type.as_deref());
    }
    counts
}

// Ties keep the order in which the states were first seen
pub fn top_states_by_count(records: &[BreweryRecord], n: usize) -> Vec<StateCount> {
    let mut counts: Vec<StateCount> = Vec::new();
    for record in records {
        let state = record.state.as_deref();
        match counts.iter_mut().find(|c| c.state.as_deref() == state) {
            Some(entry) => entry.count += 1,
            None => counts.push(StateCount {
                state: state.map(str::to_string),
                count: 1,
            }),
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}
