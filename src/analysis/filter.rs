// src/analysis/filter.rs
use crate::config::BreweryRecord;

pub fn filter_breweries<'a>(
    records: &'a [BreweryRecord],
    search_term: &str,
    filter_type: &str,
) -> Vec<&'a BreweryRecord> {
    let needle = search_term.to_lowercase();

    records.iter()
        .filter(|record| name_matches(record, &needle) && type_matches(record, filter_type))
        .collect()
}

fn name_matches(record: &BreweryRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    match &record.name {
        Some(name) => name.to_lowercase().contains(needle),
        None => false,
    }
}

fn type_matches(record: &BreweryRecord, filter_type: &str) -> bool {
    filter_type.is_empty() || record.brewery_type.as_deref() == Some(filter_type)
}

// Absent and empty types are left out here, unlike count_by_type
pub fn unique_types(records: &[BreweryRecord]) -> Vec<&str> {
    let mut types: Vec<&str> = Vec::new();
    for brewery_type in records.iter().filter_map(|r| r.brewery_type.as_deref()) {
        if !brewery_type.is_empty() && !types.contains(&brewery_type) {
            types.push(brewery_type);
        }
    }
    types
}
