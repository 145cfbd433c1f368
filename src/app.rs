//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! effect that re-renders the map and table whenever a filter changes.

use std::collections::BTreeSet;
use std::rc::Rc;

use ceamap_core::{FilterState, FilterVocabulary, SearchSuggestions, VisibleSet};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::boot;
use crate::components::{DarkModeToggle, FacilityTable, FilterPanel, LoadFailure, MapView, SearchBox};
use crate::config::{APP_TAGLINE, APP_TITLE, DARK_MODE_CLASS};
use crate::render::Renderer;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// LoadStatus
// ============================================================================

/// Dataset load progress, mirrored from the view controller for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

// ============================================================================
// FilterControls
// ============================================================================

/// Signals behind the filter checkboxes and the search box.
#[derive(Clone, Copy)]
pub struct FilterControls {
    pub types: RwSignal<BTreeSet<String>>,
    pub crops: RwSignal<BTreeSet<String>>,
    pub search: RwSignal<String>,
}

impl FilterControls {
    pub fn new() -> Self {
        Self {
            types: RwSignal::new(BTreeSet::new()),
            crops: RwSignal::new(BTreeSet::new()),
            search: RwSignal::new(String::new()),
        }
    }

    /// Current filter state. Tracks all three signals when read reactively.
    pub fn state(&self) -> FilterState {
        FilterState::new()
            .with_types(self.types.get())
            .with_crops(self.crops.get())
            .with_search(&self.search.get())
    }
}

impl Default for FilterControls {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Dataset**: load status, filter vocabulary, search suggestions
/// - **Filters**: checkbox selections and search text
/// - **Outputs**: the visible rows (markers are owned by the renderer)
/// - **Chrome**: theme and filter panel state
#[derive(Clone, Copy)]
pub struct AppContext {
    pub status: RwSignal<LoadStatus>,
    pub vocabulary: RwSignal<FilterVocabulary>,
    pub suggestions: RwSignal<SearchSuggestions>,
    pub filters: FilterControls,
    /// Rows currently shown in the table (same set as the markers).
    pub rows: RwSignal<VisibleSet, LocalStorage>,
    pub dark_mode: RwSignal<bool>,
    pub filters_open: RwSignal<bool>,
    /// Set once the map is mounted; the status signal announces it.
    pub renderer: StoredValue<Option<Rc<Renderer>>, LocalStorage>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(LoadStatus::Loading),
            vocabulary: RwSignal::new(FilterVocabulary::default()),
            suggestions: RwSignal::new(SearchSuggestions::default()),
            filters: FilterControls::new(),
            rows: RwSignal::new_local(VisibleSet::empty()),
            dark_mode: RwSignal::new(false),
            filters_open: RwSignal::new(false),
            renderer: StoredValue::new_local(None),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-render whenever the filters change once the dataset is ready.
///
/// Each change starts a new pass; the controller drops passes that are
/// overtaken by a newer one.
fn setup_render_effect(ctx: AppContext) {
    Effect::new(move || {
        let filter = ctx.filters.state();
        if ctx.status.get() != LoadStatus::Ready {
            return;
        }
        let Some(renderer) = ctx.renderer.get_value() else {
            return;
        };
        spawn_local(async move {
            renderer.refresh(filter).await;
        });
    });
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the boot sequence once mounted
/// - Shows the map, filters and table, or a blocking notice if the dataset
///   could not be loaded
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let boot_started = StoredValue::new(false);
    Effect::new(move || {
        if !boot_started.get_value() {
            boot_started.set_value(true);
            boot::run(ctx);
        }
    });

    Effect::new(move || {
        dom::set_body_class(DARK_MODE_CLASS, ctx.dark_mode.get());
    });

    setup_render_effect(ctx);

    let failure = move || match ctx.status.get() {
        LoadStatus::Failed(message) => Some(message),
        _ => None,
    };

    view! {
        <Show
            when=move || failure().is_none()
            fallback=move || view! { <LoadFailure message=failure().unwrap_or_default() /> }
        >
            <div class=css::app>
                <header class=css::header>
                    <div class=css::titles>
                        <h1 class=css::title>{APP_TITLE}</h1>
                        <span class=css::tagline>{APP_TAGLINE}</span>
                    </div>
                    <SearchBox />
                    <DarkModeToggle />
                </header>
                <main class=css::main>
                    <div class=css::mapPane>
                        <MapView />
                        <FilterPanel />
                    </div>
                    <FacilityTable />
                </main>
            </div>
        </Show>
    }
}
