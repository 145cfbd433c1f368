//! Render port backed by the Leaflet map and the table's row signal.

use std::rc::Rc;

use ceamap_core::{MarkerSpec, RenderPort, VisibleSet};
use leptos::prelude::*;

use super::LeafletMap;

pub struct MapPort {
    map: Rc<LeafletMap>,
    rows: RwSignal<VisibleSet, LocalStorage>,
}

impl MapPort {
    pub fn new(map: Rc<LeafletMap>, rows: RwSignal<VisibleSet, LocalStorage>) -> Self {
        Self { map, rows }
    }
}

impl RenderPort for MapPort {
    fn show_rows(&self, rows: &VisibleSet) {
        self.rows.set(rows.clone());
    }

    fn clear_markers(&self) {
        if let Err(err) = self.map.clear_markers() {
            log::error!("failed to clear markers: {err}");
        }
    }

    fn add_marker(&self, marker: MarkerSpec) {
        if let Err(err) = self.map.add_marker(&marker) {
            log::warn!("failed to add marker: {err}");
        }
    }
}
