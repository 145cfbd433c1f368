//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Add or remove a class on `<body>`. Returns whether the change was applied.
pub fn set_body_class(class: &str, enabled: bool) -> bool {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        log::warn!("no <body> to set class {class:?} on");
        return false;
    };
    match body.class_list().toggle_with_force(class, enabled) {
        Ok(_) => true,
        Err(err) => {
            log::warn!("failed to set body class {class:?}: {err:?}");
            false
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_has(class: &str) -> bool {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .is_some_and(|b| b.class_list().contains(class))
    }

    #[wasm_bindgen_test]
    fn test_body_class_toggles() {
        assert!(set_body_class("dark-mode", true));
        assert!(body_has("dark-mode"));
        assert!(set_body_class("dark-mode", false));
        assert!(!body_has("dark-mode"));
    }

    #[wasm_bindgen_test]
    fn test_invalid_class_reports_failure() {
        // DOMTokenList rejects tokens containing whitespace
        assert!(!set_body_class("dark mode", true));
    }
}
