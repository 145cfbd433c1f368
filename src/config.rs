//! Application configuration.
//!
//! Centralizes the constants used throughout the web app. Icon geometry and
//! the facility type to icon table live in `ceamap-core` next to the
//! compositor that uses them.

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the header.
pub const APP_TITLE: &str = "CEA Facilities";

/// Subtitle shown under the title.
pub const APP_TAGLINE: &str = "Controlled environment agriculture in California";

// =============================================================================
// Data Sources
// =============================================================================

/// Dataset path, relative to the page.
pub const DATASET_URL: &str = "CEA_Facilities_geocoded.json";

/// Directory holding the facility type icon images.
pub const ICON_DIR: &str = "icons";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

// =============================================================================
// Search
// =============================================================================

/// Maximum number of autocomplete suggestions shown at once.
pub const MAX_SUGGESTIONS: usize = 10;

// =============================================================================
// Theme
// =============================================================================

/// Body class toggled by the dark-mode switch.
pub const DARK_MODE_CLASS: &str = "dark-mode";

// =============================================================================
// Map Configuration
// =============================================================================

/// Map view and base layer settings.
pub mod map {
    /// Id of the element Leaflet mounts into.
    pub const ELEMENT_ID: &str = "map";

    /// Initial center (California).
    pub const CENTER: (f64, f64) = (36.7783, -119.4179);

    pub const INITIAL_ZOOM: u8 = 6;

    /// Corner for the zoom buttons.
    pub const ZOOM_CONTROL_POSITION: &str = "topright";

    /// A user-selectable tile layer.
    pub struct BaseLayer {
        pub name: &'static str,
        pub url: &'static str,
        pub attribution: Option<&'static str>,
        pub max_zoom: Option<u8>,
        pub subdomains: &'static [&'static str],
    }

    /// Base layers in layer-control order. The first one is shown initially.
    pub const BASE_LAYERS: &[BaseLayer] = &[
        BaseLayer {
            name: "Map",
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            attribution: Some("&copy; OpenStreetMap contributors"),
            max_zoom: None,
            subdomains: &[],
        },
        BaseLayer {
            name: "Satellite",
            url: "https://{s}.google.com/vt/lyrs=s&x={x}&y={y}&z={z}",
            attribution: None,
            max_zoom: Some(20),
            subdomains: &["mt0", "mt1", "mt2", "mt3"],
        },
        BaseLayer {
            name: "Topography",
            url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            attribution: Some(
                "Map data: &copy; OpenStreetMap contributors, SRTM | Map style: &copy; OpenTopoMap",
            ),
            max_zoom: Some(17),
            subdomains: &[],
        },
    ];
}
