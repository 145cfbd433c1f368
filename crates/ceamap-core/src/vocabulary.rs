//! Filter vocabulary discovered from the loaded records.

use std::collections::BTreeSet;

use crate::icon::icon_file;
use crate::record::RecordStore;

/// One facility type checkbox option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOption {
    pub label: String,
    /// Icon file name from the type table, if the type has one.
    pub icon_file: Option<&'static str>,
}

/// Distinct type and crop labels across records that have coordinates,
/// sorted lexicographically for stable display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterVocabulary {
    pub types: Vec<TypeOption>,
    pub crops: Vec<String>,
}

impl FilterVocabulary {
    pub fn from_records(store: &RecordStore) -> Self {
        let mut types = BTreeSet::new();
        let mut crops = BTreeSet::new();

        for record in store.mappable() {
            types.extend(record.facility_types.iter().cloned());
            crops.extend(record.crops.iter().cloned());
        }

        Self {
            types: types
                .into_iter()
                .map(|label| TypeOption {
                    icon_file: icon_file(&label),
                    label,
                })
                .collect(),
            crops: crops.into_iter().collect(),
        }
    }
}
