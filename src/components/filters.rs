//! Collapsible filter overlay on top of the map.

use std::collections::BTreeSet;

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::config::ICON_DIR;

stylance::import_crate_style!(css, "src/components/filters.module.css");

/// Facility type and crop checkbox groups.
///
/// Options come from the loaded dataset. The overlay swallows wheel events so
/// scrolling a long crop list does not zoom the map underneath.
#[component]
pub fn FilterPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let open = ctx.filters_open;

    let toggle = move |_: ev::MouseEvent| open.update(|o| *o = !*o);
    let toggle_label = move || if open.get() { "Filters ▲" } else { "Filters ▼" };

    view! {
        <div class=css::overlay on:wheel=|ev: ev::WheelEvent| ev.stop_propagation()>
            <button
                type="button"
                class=css::toggle
                aria-expanded=move || open.get().to_string()
                aria-controls="filter-groups"
                on:click=toggle
            >
                {toggle_label}
            </button>
            <Show when=move || open.get()>
                <div id="filter-groups" class=css::groups>
                    <fieldset class=css::group>
                        <legend class=css::legend>"Facility Type"</legend>
                        <For
                            each=move || ctx.vocabulary.with(|v| v.types.clone())
                            key=|option| option.label.clone()
                            let:option
                        >
                            <OptionCheckbox
                                label=option.label
                                icon=option.icon_file
                                selected=ctx.filters.types
                            />
                        </For>
                    </fieldset>
                    <fieldset class=css::group>
                        <legend class=css::legend>"Crops"</legend>
                        <For
                            each=move || ctx.vocabulary.with(|v| v.crops.clone())
                            key=|crop| crop.clone()
                            let:crop
                        >
                            <OptionCheckbox label=crop icon=None selected=ctx.filters.crops />
                        </For>
                    </fieldset>
                </div>
            </Show>
        </div>
    }
}

/// One checkbox bound to membership of `label` in `selected`.
#[component]
fn OptionCheckbox(
    label: String,
    icon: Option<&'static str>,
    selected: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    let checked = {
        let label = label.clone();
        move || selected.with(|s| s.contains(&label))
    };

    let on_change = {
        let label = label.clone();
        move |ev: ev::Event| {
            let on = event_target_checked(&ev);
            selected.update(|s| {
                if on {
                    s.insert(label.clone());
                } else {
                    s.remove(&label);
                }
            });
        }
    };

    view! {
        <label class=css::option>
            <input type="checkbox" prop:checked=checked on:change=on_change />
            {icon.map(|file| {
                view! { <img class=css::typeIcon src=format!("{ICON_DIR}/{file}") alt="" /> }
            })}
            <span>{label}</span>
        </label>
    }
}
