//! Leaflet interop via the Reflect API.
//!
//! Leaflet is loaded as a plain script (`window.L`). Calls go through
//! [`call`], which looks a method up on its receiver and applies it, and
//! option objects are serialized with `serde-wasm-bindgen`.

use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

use ceamap_core::{MarkerIcon, MarkerSpec};

use crate::config::map::{self as map_config, BaseLayer};
use crate::error::MapError;
use crate::utils::dom;

/// Get the `L` namespace object injected by the Leaflet script.
fn leaflet() -> Result<Object, MapError> {
    let window = dom::window().ok_or(MapError::LeafletMissing)?;
    Reflect::get(&window, &"L".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(MapError::LeafletMissing)
}

/// Call `target[method](...args)`.
fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, MapError> {
    let function = Reflect::get(target, &method.into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| MapError::CallFailed(method.to_string()))?;

    let args: Array = args.iter().collect();
    function
        .apply(target, &args)
        .map_err(|_| MapError::CallFailed(method.to_string()))
}

fn options<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| MapError::Options(e.to_string()))
}

fn lat_lng(latitude: f64, longitude: f64) -> JsValue {
    let pair = Array::new();
    pair.push(&latitude.into());
    pair.push(&longitude.into());
    pair.into()
}

// =============================================================================
// Option Objects
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    zoom_control: bool,
}

#[derive(Serialize)]
struct ZoomOptions {
    position: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    attribution: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_zoom: Option<u8>,
    #[serde(skip_serializing_if = "no_subdomains")]
    subdomains: &'static [&'static str],
}

fn no_subdomains(subdomains: &&[&str]) -> bool {
    subdomains.is_empty()
}

impl From<&BaseLayer> for TileLayerOptions {
    fn from(layer: &BaseLayer) -> Self {
        Self {
            attribution: layer.attribution,
            max_zoom: layer.max_zoom,
            subdomains: layer.subdomains,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconOptions<'a> {
    icon_url: &'a str,
    icon_size: [u32; 2],
    icon_anchor: [i32; 2],
    popup_anchor: [i32; 2],
}

impl<'a> From<&'a MarkerIcon> for IconOptions<'a> {
    fn from(icon: &'a MarkerIcon) -> Self {
        Self {
            icon_url: &icon.data_url,
            icon_size: icon.size,
            icon_anchor: icon.anchor,
            popup_anchor: icon.popup_anchor,
        }
    }
}

// =============================================================================
// LeafletMap
// =============================================================================

/// A mounted Leaflet map with one layer group holding the facility markers.
pub struct LeafletMap {
    leaflet: Object,
    map: JsValue,
    markers: JsValue,
}

impl LeafletMap {
    /// Create the map inside the element with id `element_id`.
    ///
    /// Sets the initial view, moves the zoom control, adds the base layers
    /// with a layer switcher, and creates the marker layer group.
    pub fn mount(element_id: &str) -> Result<Self, MapError> {
        let leaflet = leaflet()?;

        let map = call(
            &leaflet,
            "map",
            &[
                element_id.into(),
                options(&MapOptions {
                    zoom_control: false,
                })?,
            ],
        )?;
        let (lat, lng) = map_config::CENTER;
        call(
            &map,
            "setView",
            &[lat_lng(lat, lng), map_config::INITIAL_ZOOM.into()],
        )?;

        let control = Reflect::get(&leaflet, &"control".into())
            .map_err(|_| MapError::CallFailed("control".to_string()))?;
        let zoom = call(
            &control,
            "zoom",
            &[options(&ZoomOptions {
                position: map_config::ZOOM_CONTROL_POSITION,
            })?],
        )?;
        call(&zoom, "addTo", &[map.clone()])?;

        let layers = Object::new();
        for (index, base) in map_config::BASE_LAYERS.iter().enumerate() {
            let layer = call(
                &leaflet,
                "tileLayer",
                &[base.url.into(), options(&TileLayerOptions::from(base))?],
            )?;
            if index == 0 {
                call(&layer, "addTo", &[map.clone()])?;
            }
            Reflect::set(&layers, &base.name.into(), &layer)
                .map_err(|_| MapError::CallFailed("layers".to_string()))?;
        }
        let switcher = call(&control, "layers", &[layers.into()])?;
        call(&switcher, "addTo", &[map.clone()])?;

        let markers = call(&leaflet, "layerGroup", &[])?;
        call(&markers, "addTo", &[map.clone()])?;

        Ok(Self {
            leaflet,
            map,
            markers,
        })
    }

    pub fn clear_markers(&self) -> Result<(), MapError> {
        call(&self.markers, "clearLayers", &[]).map(|_| ())
    }

    /// Add one marker with its composited icon and popup.
    pub fn add_marker(&self, spec: &MarkerSpec) -> Result<(), MapError> {
        let icon = call(
            &self.leaflet,
            "icon",
            &[options(&IconOptions::from(spec.icon.as_ref()))?],
        )?;

        let marker_options = Object::new();
        Reflect::set(&marker_options, &"icon".into(), &icon)
            .map_err(|_| MapError::CallFailed("marker".to_string()))?;

        let marker = call(
            &self.leaflet,
            "marker",
            &[lat_lng(spec.latitude, spec.longitude), marker_options.into()],
        )?;
        call(&marker, "bindPopup", &[spec.popup_html.as_str().into()])?;
        call(&marker, "addTo", &[self.markers.clone()])?;
        Ok(())
    }

    /// Tear the map down (used when the dataset fails to load).
    pub fn remove(&self) {
        if let Err(err) = call(&self.map, "remove", &[]) {
            log::warn!("{err}");
        }
    }
}
