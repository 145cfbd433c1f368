//! End-to-end: dataset JSON through the view controller to a recording port.

use std::cell::RefCell;
use std::collections::HashMap;

use ceamap_core::{
    FilterState, IconCompositor, IconError, ImageSource, MarkerSpec, RecordStore, RefreshOutcome,
    RenderPort, SearchSuggestions, ViewController, VisibleSet,
};
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage, codecs::png::PngEncoder};

const DATASET: &str = r#"[
    {"Name of Facility": "Harvest Dome", "Facility Type": ["Greenhouse"],
     "Crops": ["Tomatoes"], "Contact Number": "555-0100", "Address": "4 Farm Ln, Salinas",
     "Latitude": 36.67, "Longitude": -121.65},
    {"Name of Facility": "Stacked Leaf", "Facility Type": ["Vertical Farming", "Indoor Farming"],
     "Crops": ["Lettuce"], "E-mail address": "grow@stacked.example", "Address": "77 Dock St, Oakland",
     "Website": "stacked.example", "Latitude": "37.80", "Longitude": "-122.27"},
    {"Name of Facility": "Tomato Barn", "Facility Type": ["Greenhouse"],
     "Crops": ["Peppers"], "Latitude": null, "Longitude": -120.1},
    {"Name of Facility": "Basement Greens", "Facility Type": ["Indoor Farming"],
     "Crops": ["Microgreens"], "Latitude": 34.05, "Longitude": -118.24}
]"#;

struct PngSource(HashMap<&'static str, Vec<u8>>);

impl PngSource {
    fn new() -> Self {
        let files = ["GH.png", "IF.png", "VF.png"]
            .into_iter()
            .enumerate()
            .map(|(i, file)| {
                let shade = 60 * (i as u8 + 1);
                let image = RgbaImage::from_pixel(40, 40, Rgba([shade, 255 - shade, 0, 255]));
                let mut png = Vec::new();
                PngEncoder::new(&mut png)
                    .write_image(image.as_raw(), 40, 40, ExtendedColorType::Rgba8)
                    .unwrap();
                (file, png)
            })
            .collect();
        Self(files)
    }
}

impl ImageSource for PngSource {
    async fn load(&self, file: &str) -> Result<Vec<u8>, IconError> {
        self.0.get(file).cloned().ok_or_else(|| IconError::Load {
            file: file.to_string(),
            reason: "missing".to_string(),
        })
    }
}

#[derive(Default)]
struct Outputs {
    rows: RefCell<Vec<String>>,
    markers: RefCell<Vec<MarkerSpec>>,
}

impl RenderPort for Outputs {
    fn show_rows(&self, rows: &VisibleSet) {
        *self.rows.borrow_mut() = rows.iter().map(|r| r.name.clone()).collect();
    }

    fn clear_markers(&self) {
        self.markers.borrow_mut().clear();
    }

    fn add_marker(&self, marker: MarkerSpec) {
        self.markers.borrow_mut().push(marker);
    }
}

fn loaded() -> ViewController {
    let controller = ViewController::new();
    controller
        .load(RecordStore::from_json(DATASET).expect("dataset parses"))
        .expect("first load succeeds");
    controller
}

#[tokio::test]
async fn unfiltered_view_shows_every_mappable_record() {
    let controller = loaded();
    let icons = IconCompositor::new(PngSource::new());
    let outputs = Outputs::default();

    let outcome = controller
        .refresh(&FilterState::new(), &icons, &outputs)
        .await
        .unwrap();

    assert_eq!(outcome, RefreshOutcome::Completed { visible: 3, markers: 3 });
    assert_eq!(
        *outputs.rows.borrow(),
        vec!["Harvest Dome", "Stacked Leaf", "Basement Greens"]
    );
    let markers = outputs.markers.borrow();
    let marker_lats: Vec<f64> = markers.iter().map(|m| m.latitude).collect();
    assert_eq!(marker_lats, vec![36.67, 37.80, 34.05]);
}

#[tokio::test]
async fn search_matches_crops_but_not_unmapped_names() {
    let controller = loaded();
    let icons = IconCompositor::new(PngSource::new());
    let outputs = Outputs::default();

    let filter = FilterState::new().with_search("tomato");
    controller.refresh(&filter, &icons, &outputs).await.unwrap();

    // "Tomato Barn" matches by name but lacks a latitude
    assert_eq!(*outputs.rows.borrow(), vec!["Harvest Dome"]);
    assert_eq!(outputs.markers.borrow().len(), 1);
}

#[tokio::test]
async fn popups_and_icons_follow_the_record() {
    let controller = loaded();
    let icons = IconCompositor::new(PngSource::new());
    let outputs = Outputs::default();

    let filter = FilterState::new().with_types(["Vertical Farming"]);
    controller.refresh(&filter, &icons, &outputs).await.unwrap();

    let markers = outputs.markers.borrow();
    assert_eq!(markers.len(), 1);
    assert!(markers[0].popup_html.contains("<b>Contact:</b> N/A"));
    assert!(markers[0].popup_html.contains(r#"href="https://stacked.example""#));
    assert!(markers[0].icon.data_url.starts_with("data:image/png;base64,"));

    let reordered = icons
        .cached(&["Indoor Farming", "Vertical Farming"])
        .expect("icon cached under the sorted key");
    assert!(std::rc::Rc::ptr_eq(&reordered, &markers[0].icon));
}

#[test]
fn suggestions_include_unmapped_records() {
    let store = RecordStore::from_json(DATASET).unwrap();
    let suggestions = SearchSuggestions::from_records(&store);
    assert_eq!(suggestions.suggest("tomato", 10), vec!["Tomato Barn", "Tomatoes"]);
}
