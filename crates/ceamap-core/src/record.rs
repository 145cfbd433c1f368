//! Facility records and the read-only record store.
//!
//! Records are deserialized straight from the published dataset, which uses
//! spreadsheet-style column names. Field values in that file are not always
//! well typed (phone numbers exported as numbers, coordinates as strings,
//! blank cells as empty strings), so the deserializers here are lenient:
//! anything that cannot be read as a value is treated as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::DatasetError;

/// Fallback text for optional fields that are missing.
pub const MISSING_FIELD: &str = "N/A";

/// One growing facility from the dataset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FacilityRecord {
    #[serde(rename = "Name of Facility", default, deserialize_with = "lenient::name")]
    pub name: String,
    /// Facility type labels in dataset order.
    #[serde(rename = "Facility Type", default, deserialize_with = "lenient::labels")]
    pub facility_types: Vec<String>,
    #[serde(rename = "Crops", default, deserialize_with = "lenient::labels")]
    pub crops: Vec<String>,
    #[serde(rename = "Contact Number", default, deserialize_with = "lenient::text")]
    pub contact: Option<String>,
    #[serde(rename = "E-mail address", default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(rename = "Address", default, deserialize_with = "lenient::text")]
    pub address: Option<String>,
    #[serde(rename = "Website", default, deserialize_with = "lenient::text")]
    pub website: Option<String>,
    #[serde(rename = "Latitude", default, deserialize_with = "lenient::coordinate")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default, deserialize_with = "lenient::coordinate")]
    pub longitude: Option<f64>,
}

impl FacilityRecord {
    /// Returns `(latitude, longitude)` when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Records without both coordinates are never mapped or tabulated.
    pub fn has_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }

    pub fn types_display(&self) -> String {
        self.facility_types.join(", ")
    }

    pub fn crops_display(&self) -> String {
        self.crops.join(", ")
    }
}

/// Returns the field value or [`MISSING_FIELD`].
pub fn or_missing(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(MISSING_FIELD)
}

/// All records loaded for the session.
///
/// The store is populated once from the dataset and never mutated afterwards.
/// Records lacking coordinates stay in the store; they still contribute to
/// search suggestions but are filtered out of every visible set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<FacilityRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<FacilityRecord>) -> Self {
        Self { records }
    }

    /// Parse the dataset JSON (an array of facility objects).
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<FacilityRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&FacilityRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that have both coordinates.
    pub fn mappable(&self) -> impl Iterator<Item = &FacilityRecord> {
        self.records.iter().filter(|r| r.has_coordinates())
    }
}

mod lenient {
    use super::*;

    fn non_blank(s: &str) -> Option<String> {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) => non_blank(&s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(text(d)?.unwrap_or_default())
    }

    /// A list of labels; a bare string is read as a one-element list.
    pub fn labels<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().and_then(non_blank))
                .collect(),
            Some(Value::String(s)) => non_blank(&s).into_iter().collect(),
            _ => Vec::new(),
        })
    }

    pub fn coordinate<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let value = match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(value.filter(|v| v.is_finite()))
    }
}
