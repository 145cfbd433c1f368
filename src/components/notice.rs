//! Blocking notice for a failed dataset load.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::icons as ic;

stylance::import_crate_style!(css, "src/components/notice.module.css");

/// Replaces the application when the dataset could not be loaded.
#[component]
pub fn LoadFailure(message: String) -> impl IntoView {
    view! {
        <div class=css::notice role="alert">
            <span class=css::icon><Icon icon=ic::WARNING /></span>
            <h2 class=css::title>"Unable to load facility data"</h2>
            <p class=css::detail>{message}</p>
            <p class=css::hint>"Reload the page to try again."</p>
        </div>
    }
}
