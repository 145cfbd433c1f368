//! Search suggestions for the search box.
//!
//! Suggestions come from facility names, crop labels and addresses of every
//! loaded record. Matching is a case-insensitive substring test, so typing
//! "fres" offers "Fresno Farms" as well as "1 Main St, Fresno".

use std::collections::BTreeSet;

use crate::record::RecordStore;

/// Shortest query that produces suggestions.
pub const MIN_QUERY_LEN: usize = 1;

/// Sorted, de-duplicated suggestion corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSuggestions {
    entries: Vec<String>,
    /// Lowercased copies of `entries`, index-aligned.
    folded: Vec<String>,
}

impl SearchSuggestions {
    pub fn from_records(store: &RecordStore) -> Self {
        let mut unique = BTreeSet::new();

        for record in store.records() {
            unique.insert(record.name.as_str());
            unique.extend(record.crops.iter().map(String::as_str));
            if let Some(address) = &record.address {
                unique.insert(address.as_str());
            }
        }

        let entries: Vec<String> = unique
            .into_iter()
            .filter(|entry| !entry.trim().is_empty())
            .map(str::to_string)
            .collect();
        let folded = entries.iter().map(|e| e.to_lowercase()).collect();

        Self { entries, folded }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to `limit` entries containing `query`, in corpus order.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.entries
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| folded.contains(&needle))
            .map(|(entry, _)| entry.as_str())
            .take(limit)
            .collect()
    }
}
