//! Boot sequence
//!
//! Mounts the map, restores the theme preference and loads the dataset.

use std::rc::Rc;

use ceamap_core::{Preferences, RecordStore, SearchSuggestions};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::{AppContext, LoadStatus};
use crate::config::{DATASET_URL, map};
use crate::map::LeafletMap;
use crate::render::Renderer;
use crate::utils::{LocalStore, fetch_text};

/// Run the boot sequence.
///
/// 1. Restore the dark-mode preference
/// 2. Mount the Leaflet map
/// 3. Fetch and parse the dataset
/// 4. Publish vocabulary, suggestions and the renderer, then flip the status
///    to ready, which triggers the first render
///
/// Any failure in steps 2-3 is fatal for the session.
pub fn run(ctx: AppContext) {
    ctx.dark_mode
        .set(Preferences::new(LocalStore).load_dark_mode());

    spawn_local(async move {
        let leaflet = match LeafletMap::mount(map::ELEMENT_ID) {
            Ok(leaflet) => leaflet,
            Err(err) => {
                log::error!("map unavailable: {err}");
                ctx.status.set(LoadStatus::Failed(err.to_string()));
                return;
            }
        };
        let renderer = Rc::new(Renderer::new(leaflet, ctx.rows));

        let store = match fetch_text(DATASET_URL).await {
            Ok(text) => RecordStore::from_json(&text).map_err(|e| e.to_string()),
            Err(err) => Err(err.to_string()),
        };

        let loaded = store.and_then(|store| {
            let suggestions = SearchSuggestions::from_records(&store);
            let vocabulary = renderer.load(store).map_err(|e| e.to_string())?;
            Ok((vocabulary, suggestions))
        });

        match loaded {
            Ok((vocabulary, suggestions)) => {
                ctx.vocabulary.set(vocabulary);
                ctx.suggestions.set(suggestions);
                ctx.renderer.set_value(Some(renderer));
                ctx.status.set(LoadStatus::Ready);
            }
            Err(message) => {
                renderer.fail(&message);
                ctx.status.set(LoadStatus::Failed(message));
            }
        }
    });
}
