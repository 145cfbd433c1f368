//! View controller: the state machine between the dataset and the outputs.
//!
//! ```text
//! Idle --load--> Loaded --refresh--> Rendering --done--> Loaded
//!   \
//!    --fail--> Failed (terminal)
//! ```
//!
//! Rendering goes through a [`RenderPort`], so the controller runs without a
//! browser. Each refresh takes a new generation number. A pass that finds a
//! newer generation after awaiting an icon stops adding markers, so passes
//! whose icon loads finish out of order never interleave on the map.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::ViewError;
use crate::filter::{FilterState, VisibleSet};
use crate::icon::{IconCompositor, ImageSource, MarkerIcon};
use crate::markup::popup_html;
use crate::record::RecordStore;
use crate::vocabulary::FilterVocabulary;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    /// No dataset yet.
    Idle,
    Loaded,
    /// A refresh pass is drawing.
    Rendering,
    /// The dataset could not be loaded; nothing else happens this session.
    Failed(String),
}

/// Everything the map needs to draw one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub latitude: f64,
    pub longitude: f64,
    pub icon: Rc<MarkerIcon>,
    pub popup_html: String,
}

/// Output side of the controller: the map markers and the table rows.
pub trait RenderPort {
    /// Replace the table contents with `rows`.
    fn show_rows(&self, rows: &VisibleSet);
    fn clear_markers(&self);
    fn add_marker(&self, marker: MarkerSpec);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Completed { visible: usize, markers: usize },
    /// A newer refresh started before this one finished.
    Superseded,
}

pub struct ViewController {
    phase: RefCell<ViewPhase>,
    store: RefCell<Option<Rc<RecordStore>>>,
    generation: Cell<u64>,
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            phase: RefCell::new(ViewPhase::Idle),
            store: RefCell::new(None),
            generation: Cell::new(0),
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase.borrow().clone()
    }

    pub fn store(&self) -> Option<Rc<RecordStore>> {
        self.store.borrow().clone()
    }

    /// `Idle -> Loaded`. Returns the filter vocabulary for the new records.
    pub fn load(&self, store: RecordStore) -> Result<FilterVocabulary, ViewError> {
        self.expect_idle()?;

        let vocabulary = FilterVocabulary::from_records(&store);
        log::info!(
            "loaded {} facilities ({} mappable, {} types, {} crops)",
            store.len(),
            store.mappable().count(),
            vocabulary.types.len(),
            vocabulary.crops.len()
        );

        *self.store.borrow_mut() = Some(Rc::new(store));
        *self.phase.borrow_mut() = ViewPhase::Loaded;
        Ok(vocabulary)
    }

    /// `Idle -> Failed`.
    pub fn fail(&self, message: impl Into<String>) -> Result<(), ViewError> {
        self.expect_idle()?;
        let message = message.into();
        log::error!("facility data unavailable: {message}");
        *self.phase.borrow_mut() = ViewPhase::Failed(message);
        Ok(())
    }

    fn expect_idle(&self) -> Result<(), ViewError> {
        match self.phase() {
            ViewPhase::Idle => Ok(()),
            other => Err(ViewError::AlreadyLoaded(other)),
        }
    }

    /// Visible set for `filter` without drawing anything.
    pub fn visible(&self, filter: &FilterState) -> Result<VisibleSet, ViewError> {
        let store = self.loaded_store()?;
        Ok(VisibleSet::compute(store, filter))
    }

    fn loaded_store(&self) -> Result<Rc<RecordStore>, ViewError> {
        match (self.phase(), self.store()) {
            (ViewPhase::Loaded | ViewPhase::Rendering, Some(store)) => Ok(store),
            (phase, _) => Err(ViewError::NotLoaded(phase)),
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// `Loaded -> Rendering -> Loaded`: recompute the visible set and redraw
    /// the table and every marker.
    pub async fn refresh<S, P>(
        &self,
        filter: &FilterState,
        icons: &IconCompositor<S>,
        port: &P,
    ) -> Result<RefreshOutcome, ViewError>
    where
        S: ImageSource,
        P: RenderPort,
    {
        let store = self.loaded_store()?;
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        *self.phase.borrow_mut() = ViewPhase::Rendering;

        let visible = VisibleSet::compute(store, filter);
        port.show_rows(&visible);
        port.clear_markers();

        let mut markers = 0;
        for record in visible.iter() {
            let Some((latitude, longitude)) = record.coordinates() else {
                continue;
            };

            let icon = icons.icon_for(&record.facility_types).await;
            if !self.is_current(generation) {
                log::debug!("render pass {generation} superseded");
                return Ok(RefreshOutcome::Superseded);
            }

            match icon {
                Ok(icon) => {
                    port.add_marker(MarkerSpec {
                        latitude,
                        longitude,
                        icon,
                        popup_html: popup_html(record),
                    });
                    markers += 1;
                }
                Err(err) => log::warn!("skipping marker for {:?}: {err}", record.name),
            }
        }

        *self.phase.borrow_mut() = ViewPhase::Loaded;
        Ok(RefreshOutcome::Completed {
            visible: visible.len(),
            markers,
        })
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}
