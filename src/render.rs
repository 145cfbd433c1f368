//! Ties the core view controller to the browser outputs.

use std::rc::Rc;

use ceamap_core::{
    FilterState, FilterVocabulary, IconCompositor, RecordStore, RefreshOutcome, ViewController,
    ViewError, VisibleSet,
};
use leptos::prelude::*;

use crate::map::{HttpImageSource, LeafletMap, MapPort};

/// Controller, icon compositor and map port for one page session.
pub struct Renderer {
    controller: ViewController,
    icons: IconCompositor<HttpImageSource>,
    port: MapPort,
    map: Rc<LeafletMap>,
}

impl Renderer {
    pub fn new(map: LeafletMap, rows: RwSignal<VisibleSet, LocalStorage>) -> Self {
        let map = Rc::new(map);
        Self {
            controller: ViewController::new(),
            icons: IconCompositor::new(HttpImageSource),
            port: MapPort::new(Rc::clone(&map), rows),
            map,
        }
    }

    pub fn load(&self, store: RecordStore) -> Result<FilterVocabulary, ViewError> {
        self.controller.load(store)
    }

    /// Record the load failure and take the map down.
    pub fn fail(&self, message: &str) {
        if let Err(err) = self.controller.fail(message) {
            log::warn!("{err}");
        }
        self.map.remove();
    }

    /// Redraw the table and markers for `filter`.
    pub async fn refresh(&self, filter: FilterState) {
        match self
            .controller
            .refresh(&filter, &self.icons, &self.port)
            .await
        {
            Ok(RefreshOutcome::Completed { visible, markers }) => {
                log::debug!("rendered {visible} facilities ({markers} markers)");
            }
            Ok(RefreshOutcome::Superseded) => {}
            Err(err) => log::warn!("render skipped: {err}"),
        }
    }
}
