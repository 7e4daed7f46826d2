use std::collections::HashMap;

use crate::domain::weather::Place;

/// Memoized geocoding results keyed by the exact trimmed query. Case matters
/// and nothing is evicted for the life of the session.
#[derive(Debug, Default)]
pub struct SuggestionCache {
    entries: HashMap<String, Vec<Place>>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, query: &str) -> Option<&[Place]> {
        self.entries.get(query.trim()).map(Vec::as_slice)
    }

    pub fn store(&mut self, query: &str, results: Vec<Place>) {
        self.entries.insert(query.trim().to_string(), results);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
