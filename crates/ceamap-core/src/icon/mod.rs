//! Marker icon compositor.
//!
//! Turns a set of facility type labels into one marker image. Every distinct
//! label set is composited once and cached for the session under a key built
//! from the sorted labels, so `["Greenhouse", "Vertical Farming"]` and
//! `["Vertical Farming", "Greenhouse"]` share the same icon.
//!
//! Source images are fetched through an [`ImageSource`]. Every lookup yields a
//! tagged [`SourceImage`]; unmapped labels and failed loads are dropped from
//! the composite (and logged) instead of failing the marker.

pub mod layout;
pub mod raster;

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures_util::future::join_all;
use image::RgbaImage;

use crate::error::IconError;

/// Facility type label to icon file name.
pub const TYPE_ICONS: &[(&str, &str)] = &[
    ("Greenhouse", "GH.png"),
    ("Indoor Farming", "IF.png"),
    ("Vertical Farming", "VF.png"),
];

/// Separator between sorted labels in a cache key.
///
/// Labels are joined as-is, so a single label containing `-` (e.g. `"A-B"`)
/// gets the same key as the pair `["A", "B"]`. None of the mapped types
/// contain the separator.
pub const KEY_SEPARATOR: &str = "-";

/// Icon file for a facility type, if the type has one.
pub fn icon_file(label: &str) -> Option<&'static str> {
    TYPE_ICONS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, file)| *file)
}

/// Cache key for a label set: labels sorted, then joined.
pub fn cache_key<S: AsRef<str>>(labels: &[S]) -> String {
    let mut sorted: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    sorted.join(KEY_SEPARATOR)
}

/// Async byte source for icon files.
pub trait ImageSource {
    /// Fetch the raw bytes of `file` (a name from [`TYPE_ICONS`]).
    fn load(&self, file: &str) -> impl Future<Output = Result<Vec<u8>, IconError>>;
}

/// Outcome of resolving one label to a source image.
#[derive(Debug)]
pub enum SourceImage {
    Loaded(RgbaImage),
    /// The label has no entry in [`TYPE_ICONS`].
    Unmapped,
    Failed(IconError),
}

/// A composited marker image plus the geometry a map needs to place it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    /// PNG data URL.
    pub data_url: String,
    pub size: [u32; 2],
    /// Point of the image placed on the marker's coordinates.
    pub anchor: [i32; 2],
    /// Popup tip position relative to `anchor`.
    pub popup_anchor: [i32; 2],
}

/// Memoizing icon compositor.
///
/// The cache is append-only for the session. Two concurrent requests for the
/// same uncached key both composite; the output is deterministic, so whichever
/// writes last leaves an equivalent icon behind.
pub struct IconCompositor<S> {
    source: S,
    cache: RefCell<HashMap<String, Rc<MarkerIcon>>>,
}

impl<S: ImageSource> IconCompositor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the cached icon for this label set, if any.
    pub fn cached<L: AsRef<str>>(&self, labels: &[L]) -> Option<Rc<MarkerIcon>> {
        self.cache.borrow().get(&cache_key(labels)).cloned()
    }

    /// Number of distinct label sets composited so far.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Icon for `labels`, compositing and caching it on first request.
    ///
    /// Images are drawn in sorted label order, so the picture does not depend
    /// on the order the labels were given in. Only PNG encoding can fail.
    pub async fn icon_for<L: AsRef<str>>(&self, labels: &[L]) -> Result<Rc<MarkerIcon>, IconError> {
        let key = cache_key(labels);
        if let Some(icon) = self.cache.borrow().get(&key) {
            return Ok(Rc::clone(icon));
        }

        let mut sorted: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
        sorted.sort_unstable();

        let outcomes = join_all(sorted.iter().map(|label| self.resolve(label))).await;
        let images: Vec<RgbaImage> = outcomes
            .into_iter()
            .zip(&sorted)
            .filter_map(|(outcome, label)| match outcome {
                SourceImage::Loaded(image) => Some(image),
                SourceImage::Unmapped => {
                    log::debug!("no icon mapped for facility type {label:?}");
                    None
                }
                SourceImage::Failed(err) => {
                    log::warn!("dropping icon for facility type {label:?}: {err}");
                    None
                }
            })
            .collect();

        let canvas = raster::composite(&images);
        let icon = Rc::new(MarkerIcon {
            data_url: raster::to_data_url(&canvas)?,
            size: [layout::CANVAS_SIZE, layout::CANVAS_SIZE],
            anchor: layout::anchor(),
            popup_anchor: layout::popup_anchor(),
        });

        self.cache.borrow_mut().insert(key, Rc::clone(&icon));
        Ok(icon)
    }

    async fn resolve(&self, label: &str) -> SourceImage {
        let Some(file) = icon_file(label) else {
            return SourceImage::Unmapped;
        };

        match self.source.load(file).await {
            Ok(bytes) => match raster::decode(file, &bytes) {
                Ok(image) => SourceImage::Loaded(image),
                Err(err) => SourceImage::Failed(err),
            },
            Err(err) => SourceImage::Failed(err),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use super::raster::tests::png_bytes;
    use super::*;

    /// In-memory icon files; counts loads to prove cache hits skip the source.
    #[derive(Default)]
    pub(crate) struct MemorySource {
        files: HashMap<&'static str, Vec<u8>>,
        pub(crate) loads: Cell<usize>,
    }

    impl MemorySource {
        pub(crate) fn with_all_types() -> Self {
            let mut files = HashMap::new();
            files.insert("GH.png", png_bytes([0, 160, 0, 255], 60));
            files.insert("IF.png", png_bytes([120, 60, 0, 255], 60));
            files.insert("VF.png", png_bytes([0, 0, 200, 255], 60));
            Self {
                files,
                loads: Cell::new(0),
            }
        }

        pub(crate) fn without(mut self, file: &str) -> Self {
            self.files.remove(file);
            self
        }

        pub(crate) fn corrupt(mut self, file: &'static str) -> Self {
            self.files.insert(file, b"garbage".to_vec());
            self
        }
    }

    impl ImageSource for MemorySource {
        async fn load(&self, file: &str) -> Result<Vec<u8>, IconError> {
            self.loads.set(self.loads.get() + 1);
            self.files.get(file).cloned().ok_or_else(|| IconError::Load {
                file: file.to_string(),
                reason: "404".to_string(),
            })
        }
    }

    #[test]
    fn test_cache_key_sorted() {
        assert_eq!(cache_key(&["Vertical Farming", "Greenhouse"]), "Greenhouse-Vertical Farming");
        assert_eq!(cache_key(&["Greenhouse", "Vertical Farming"]), "Greenhouse-Vertical Farming");
        assert_eq!(cache_key::<&str>(&[]), "");
    }

    #[test]
    fn test_cache_key_hyphenated_label_matches_pair() {
        // Labels are joined verbatim; the type table has no hyphenated labels.
        assert_eq!(cache_key(&["A-B"]), cache_key(&["A", "B"]));
        assert!(TYPE_ICONS.iter().all(|(label, _)| !label.contains(KEY_SEPARATOR)));
    }

    #[test]
    fn test_icon_file_table() {
        assert_eq!(icon_file("Greenhouse"), Some("GH.png"));
        assert_eq!(icon_file("Indoor Farming"), Some("IF.png"));
        assert_eq!(icon_file("Vertical Farming"), Some("VF.png"));
        assert_eq!(icon_file("Aquaponics"), None);
    }

    #[tokio::test]
    async fn test_order_independent_cache_hit() {
        let compositor = IconCompositor::new(MemorySource::with_all_types());

        let first = compositor.icon_for(&["Greenhouse", "Vertical Farming"]).await.unwrap();
        let second = compositor.icon_for(&["Vertical Farming", "Greenhouse"]).await.unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(compositor.cache_len(), 1);
        assert_eq!(compositor.source.loads.get(), 2);
    }

    #[tokio::test]
    async fn test_uncached_order_gives_identical_pixels() {
        let a = IconCompositor::new(MemorySource::with_all_types());
        let b = IconCompositor::new(MemorySource::with_all_types());

        let forward = a.icon_for(&["Greenhouse", "Indoor Farming"]).await.unwrap();
        let reverse = b.icon_for(&["Indoor Farming", "Greenhouse"]).await.unwrap();

        assert_eq!(forward.data_url, reverse.data_url);
    }

    #[tokio::test]
    async fn test_icon_geometry() {
        let compositor = IconCompositor::new(MemorySource::with_all_types());
        let icon = compositor.icon_for(&["Greenhouse"]).await.unwrap();

        assert_eq!(icon.size, [50, 50]);
        assert_eq!(icon.anchor, [25, 25]);
        assert_eq!(icon.popup_anchor, [0, -25]);
    }

    #[tokio::test]
    async fn test_failed_image_dropped() {
        let broken = IconCompositor::new(MemorySource::with_all_types().without("VF.png"));
        let single = IconCompositor::new(MemorySource::with_all_types());

        let degraded = broken.icon_for(&["Greenhouse", "Vertical Farming"]).await.unwrap();
        let greenhouse = single.icon_for(&["Greenhouse"]).await.unwrap();

        // Only the greenhouse image survived, so it is drawn as a single icon
        assert_eq!(degraded.data_url, greenhouse.data_url);
    }

    #[tokio::test]
    async fn test_all_failed_yields_empty_icon() {
        let compositor = IconCompositor::new(MemorySource::with_all_types().corrupt("GH.png"));
        let empty = IconCompositor::new(MemorySource::default());

        let broken = compositor.icon_for(&["Greenhouse", "Aquaponics"]).await.unwrap();
        let nothing = empty.icon_for::<&str>(&[]).await.unwrap();

        assert_eq!(broken.data_url, nothing.data_url);
        assert_eq!(compositor.cache_len(), 1);
    }
}
