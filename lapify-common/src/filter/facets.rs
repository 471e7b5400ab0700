//! Facet lists for the filter choices

use std::collections::HashMap;

use crate::catalog::Laptop;

/// Distinct brands across the whole catalog, canonicalized and sorted
pub fn distinct_brands(laptops: &[Laptop]) -> Vec<String> {
    distinct_values(laptops.iter().map(|l| l.brand.as_str()))
}

/// Distinct segments across the whole catalog, canonicalized and sorted
pub fn distinct_segments(laptops: &[Laptop]) -> Vec<String> {
    distinct_values(laptops.iter().map(|l| l.segment.as_str()))
}

/// Deduplicate on the trimmed lowercase key; the first-seen raw value
/// supplies the displayed form
fn distinct_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, String> = HashMap::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        seen.entry(value.to_lowercase())
            .or_insert_with(|| capitalize(value));
    }
    let mut facets: Vec<String> = seen.into_values().collect();
    facets.sort();
    facets
}

/// First character upper-cased, remainder lower-cased
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
