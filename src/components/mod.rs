//! UI components built with Leptos.
//!
//! - [`FilterPanel`] - collapsible facility type and crop checkboxes
//! - [`SearchBox`] - free-text search with suggestions
//! - [`MapView`] - the element Leaflet mounts into
//! - [`FacilityTable`] - visible facilities with sortable columns
//! - [`DarkModeToggle`] - theme switch
//! - [`LoadFailure`] - blocking notice when the dataset cannot be loaded

mod filters;
mod hooks;
mod icons;
mod map_view;
mod notice;
mod search;
mod table;
mod theme;

pub use filters::FilterPanel;
pub use map_view::MapView;
pub use notice::LoadFailure;
pub use search::SearchBox;
pub use table::FacilityTable;
pub use theme::DarkModeToggle;
