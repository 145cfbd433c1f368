//! Map container.

use leptos::prelude::*;

use crate::config::map::ELEMENT_ID;

stylance::import_crate_style!(css, "src/components/map_view.module.css");

/// Element the Leaflet map is mounted into during boot.
#[component]
pub fn MapView() -> impl IntoView {
    view! { <div id=ELEMENT_ID class=css::map></div> }
}
