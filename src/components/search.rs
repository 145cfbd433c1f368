//! Search input with autocomplete suggestions.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::hooks::SuggestionState;
use super::icons as ic;
use crate::app::AppContext;
use crate::config::MAX_SUGGESTIONS;

stylance::import_crate_style!(css, "src/components/search.module.css");

/// Free-text search box.
///
/// Every keystroke updates the search text (and so the rendered set).
/// Suggestions come from facility names, crop labels and addresses.
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let search = ctx.filters.search;
    let state = SuggestionState::new();

    let refresh_suggestions = move |query: &str| {
        let items = ctx.suggestions.with(|suggestions| {
            suggestions
                .suggest(query, MAX_SUGGESTIONS)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        });
        state.show(items);
    };

    let select = move |value: String| {
        search.set(value);
        state.clear();
    };

    let handle_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        refresh_suggestions(&value);
        search.set(value);
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "ArrowDown" if state.is_open() => {
            ev.prevent_default();
            state.next();
        }
        "ArrowUp" if state.is_open() => {
            ev.prevent_default();
            state.previous();
        }
        "Enter" => {
            if let Some(value) = state.current() {
                ev.prevent_default();
                select(value);
            } else {
                state.clear();
            }
        }
        "Escape" => state.clear(),
        _ => {}
    };

    let suggestions_view = move || {
        let items = state.items.get();
        let active = state.active.get();
        (!items.is_empty()).then(|| {
            view! {
                <ul class=css::suggestions role="listbox">
                    {items
                        .into_iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let class_name = if active == Some(i) {
                                format!("{} {}", css::suggestion, css::suggestionActive)
                            } else {
                                css::suggestion.to_string()
                            };
                            let value = item.clone();
                            // mousedown fires before the input loses focus
                            view! {
                                <li
                                    class=class_name
                                    role="option"
                                    aria-selected=(active == Some(i)).to_string()
                                    on:mousedown=move |ev: ev::MouseEvent| {
                                        ev.prevent_default();
                                        select(value.clone());
                                    }
                                >
                                    {item}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
        })
    };

    view! {
        <div class=css::search>
            <span class=css::icon><Icon icon=ic::SEARCH /></span>
            <input
                type="search"
                class=css::input
                placeholder="Search by name, crop or address"
                autocomplete="off"
                spellcheck="false"
                prop:value=move || search.get()
                on:input=handle_input
                on:keydown=handle_keydown
                on:blur=move |_: ev::FocusEvent| state.clear()
            />
            {suggestions_view}
        </div>
    }
}
