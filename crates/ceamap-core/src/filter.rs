//! Filter predicate and the visible set it produces.
//!
//! A record is visible when it has both coordinates and passes every
//! active clause:
//!
//! - **types**: at least one facility type is selected (or none are selected)
//! - **crops**: at least one crop is selected (or none are selected)
//! - **search**: the search text occurs, case-insensitively, in the name,
//!   any crop, or the address (or the search text is empty)
//!
//! The map and the table both consume the same [`VisibleSet`], so they can
//! never disagree about which records are shown.

use std::collections::BTreeSet;
use std::rc::Rc;

use crate::record::{FacilityRecord, RecordStore};

/// Current filter and search selection, rebuilt from the UI on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected_types: BTreeSet<String>,
    selected_crops: BTreeSet<String>,
    search_text: String,
}

impl FilterState {
    /// Creates an empty filter that lets every mappable record through.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_crops<I, S>(mut self, crops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_crops = crops.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the search text. It is trimmed and lowercased here so the
    /// predicate compares against a normalized needle.
    pub fn with_search(mut self, text: &str) -> Self {
        self.search_text = text.trim().to_lowercase();
        self
    }

    pub fn selected_types(&self) -> &BTreeSet<String> {
        &self.selected_types
    }

    pub fn selected_crops(&self) -> &BTreeSet<String> {
        &self.selected_crops
    }

    /// Normalized (trimmed, lowercase) search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// True when no clause restricts the result.
    pub fn is_unfiltered(&self) -> bool {
        self.selected_types.is_empty() && self.selected_crops.is_empty() && self.search_text.is_empty()
    }
}

/// Returns whether `record` belongs to the visible set under `filter`.
pub fn matches(record: &FacilityRecord, filter: &FilterState) -> bool {
    record.has_coordinates()
        && intersects(&record.facility_types, &filter.selected_types)
        && intersects(&record.crops, &filter.selected_crops)
        && matches_search(record, &filter.search_text)
}

/// An empty selection accepts everything.
fn intersects(labels: &[String], selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || labels.iter().any(|label| selected.contains(label))
}

fn matches_search(record: &FacilityRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&record.name)
        || record.crops.iter().any(|crop| contains(crop))
        || record.address.as_deref().is_some_and(contains)
}

/// Indices of the records passing `filter`, in store order.
pub fn visible_indices(records: &[FacilityRecord], filter: &FilterState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, filter))
        .map(|(index, _)| index)
        .collect()
}

// ============================================================================
// VisibleSet
// ============================================================================

/// The records passing the filter at one moment, in source order.
///
/// Holds a shared handle to the store plus matching indices, so cloning it
/// for the table and the marker pass is cheap.
#[derive(Debug, Clone)]
pub struct VisibleSet {
    store: Rc<RecordStore>,
    indices: Rc<[usize]>,
}

impl VisibleSet {
    pub fn compute(store: Rc<RecordStore>, filter: &FilterState) -> Self {
        let indices = visible_indices(store.records(), filter).into();
        Self { store, indices }
    }

    /// A visible set with no records, used before the dataset is loaded.
    pub fn empty() -> Self {
        Self {
            store: Rc::new(RecordStore::default()),
            indices: Rc::from([]),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Store indices of the visible records.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacilityRecord> {
        self.indices
            .iter()
            .filter_map(|&index| self.store.get(index))
    }

    /// Pairs each visible record with its store index (stable row key).
    pub fn entries(&self) -> impl Iterator<Item = (usize, &FacilityRecord)> {
        self.indices
            .iter()
            .filter_map(|&index| self.store.get(index).map(|record| (index, record)))
    }
}

impl PartialEq for VisibleSet {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.indices == other.indices
    }
}

impl Default for VisibleSet {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, types: &[&str], crops: &[&str], address: Option<&str>) -> FacilityRecord {
        FacilityRecord {
            name: name.to_string(),
            facility_types: types.iter().map(|s| s.to_string()).collect(),
            crops: crops.iter().map(|s| s.to_string()).collect(),
            address: address.map(str::to_string),
            latitude: Some(36.0),
            longitude: Some(-120.0),
            ..Default::default()
        }
    }

    fn sample() -> Vec<FacilityRecord> {
        let unmapped = FacilityRecord {
            latitude: None,
            ..record("Hidden Tomato Co", &["Greenhouse"], &["Tomatoes"], None)
        };
        vec![
            record("Valley Greens", &["Greenhouse"], &["Tomatoes"], Some("1 Main St, Fresno")),
            record("Tower Farms", &["Vertical Farming"], &["Lettuce", "Basil"], Some("9 Elm Ave, Oakland")),
            unmapped,
            record("Root Cellar", &["Indoor Farming", "Greenhouse"], &["Mushrooms"], None),
        ]
    }

    #[test]
    fn test_unfiltered_shows_all_mappable() {
        let records = sample();
        assert_eq!(visible_indices(&records, &FilterState::new()), vec![0, 1, 3]);
    }

    #[test]
    fn test_unmapped_never_visible() {
        let records = sample();
        let filters = [
            FilterState::new(),
            FilterState::new().with_search("tomato"),
            FilterState::new().with_types(["Greenhouse"]),
            FilterState::new().with_crops(["Tomatoes"]),
        ];
        for filter in &filters {
            assert!(!visible_indices(&records, filter).contains(&2));
        }
    }

    #[test]
    fn test_type_filter_intersects() {
        let records = sample();
        let filter = FilterState::new().with_types(["Greenhouse", "Aquaponics"]);
        assert_eq!(visible_indices(&records, &filter), vec![0, 3]);
    }

    #[test]
    fn test_type_and_crop_combine() {
        let records = sample();
        let filter = FilterState::new()
            .with_types(["Greenhouse"])
            .with_crops(["Mushrooms"]);
        assert_eq!(visible_indices(&records, &filter), vec![3]);
    }

    #[test]
    fn test_search_matches_crop_text() {
        let records = sample();
        let filter = FilterState::new().with_search("tomato");
        assert_eq!(visible_indices(&records, &filter), vec![0]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let records = sample();
        let filter = FilterState::new().with_search("  OAKLAND ");
        assert_eq!(filter.search_text(), "oakland");
        assert_eq!(visible_indices(&records, &filter), vec![1]);
    }

    #[test]
    fn test_search_missing_address_never_matches() {
        let records = sample();
        let filter = FilterState::new().with_search("st");
        // "Root Cellar" has no address; only Valley Greens' address contains "st"
        assert_eq!(visible_indices(&records, &filter), vec![0]);
    }

    #[test]
    fn test_visible_set_is_deterministic() {
        let store = Rc::new(RecordStore::new(sample()));
        let filter = FilterState::new().with_types(["Greenhouse"]);
        let first = VisibleSet::compute(store.clone(), &filter);
        let second = VisibleSet::compute(store, &filter);
        assert_eq!(first, second);
        let names: Vec<_> = first.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Valley Greens", "Root Cellar"]);
    }
}
