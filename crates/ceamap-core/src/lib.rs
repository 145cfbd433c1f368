//! Browser-independent core of the CEA facility map.
//!
//! - [`RecordStore`], [`FacilityRecord`] - the loaded dataset
//! - [`FilterState`], [`matches`], [`VisibleSet`] - the filter predicate
//! - [`FilterVocabulary`] - checkbox options discovered from the data
//! - [`SearchSuggestions`] - autocomplete corpus for the search box
//! - [`IconCompositor`] - memoized multi-type marker icons
//! - [`Preferences`] - the persisted dark-mode flag
//! - [`ViewController`], [`RenderPort`] - the render state machine

pub mod error;
pub mod filter;
pub mod icon;
pub mod markup;
pub mod prefs;
pub mod record;
pub mod suggest;
pub mod view;
pub mod vocabulary;

pub use error::{DatasetError, IconError, PreferenceError, ViewError};
pub use filter::{FilterState, VisibleSet, matches, visible_indices};
pub use icon::{IconCompositor, ImageSource, MarkerIcon, SourceImage, cache_key, icon_file};
pub use prefs::{KeyValueStore, MemoryStore, Preferences, theme_glyph};
pub use record::{FacilityRecord, MISSING_FIELD, RecordStore};
pub use suggest::SearchSuggestions;
pub use view::{MarkerSpec, RefreshOutcome, RenderPort, ViewController, ViewPhase};
pub use vocabulary::{FilterVocabulary, TypeOption};
