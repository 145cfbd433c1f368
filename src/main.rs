mod app;
mod boot;
mod components;
mod config;
mod error;
mod map;
mod render;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Route `log` records from both crates to the browser console.
fn init_logging() -> log::Level {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    level
}

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_logging_installs_console_backend() {
        let level = init_logging();
        assert_eq!(log::max_level(), level.to_level_filter());
        // a second install is ignored
        assert_eq!(init_logging(), level);
        log::info!("console logger ready");
    }
}
