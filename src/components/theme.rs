//! Dark-mode toggle.

use ceamap_core::{Preferences, theme_glyph};
use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::utils::LocalStore;

stylance::import_crate_style!(css, "src/components/theme.module.css");

/// Flips the theme and persists the choice.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let dark_mode = ctx.dark_mode;

    let toggle = move |_: ev::MouseEvent| {
        let dark = !dark_mode.get_untracked();
        dark_mode.set(dark);
        if let Err(err) = Preferences::new(LocalStore).save_dark_mode(dark) {
            log::warn!("dark mode not saved: {err}");
        }
    };

    let title = move || {
        if dark_mode.get() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            type="button"
            class=css::toggle
            title=title
            aria-label=title
            aria-pressed=move || dark_mode.get().to_string()
            on:click=toggle
        >
            {move || theme_glyph(dark_mode.get())}
        </button>
    }
}
