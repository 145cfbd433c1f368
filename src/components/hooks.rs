//! Custom hooks for components.

use leptos::prelude::*;

/// Open suggestion list and the keyboard-highlighted entry.
#[derive(Clone, Copy)]
pub struct SuggestionState {
    pub items: RwSignal<Vec<String>>,
    /// Highlighted index; `None` until the user moves with the arrow keys.
    pub active: RwSignal<Option<usize>>,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(vec![]),
            active: RwSignal::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.items.with(|items| !items.is_empty())
    }

    pub fn clear(&self) {
        self.items.set(vec![]);
        self.active.set(None);
    }

    /// Replace the list, dropping any highlight.
    pub fn show(&self, items: Vec<String>) {
        self.items.set(items);
        self.active.set(None);
    }

    /// Move the highlight down, wrapping to the top.
    pub fn next(&self) {
        let len = self.items.with(Vec::len);
        if len == 0 {
            return;
        }
        self.active.update(|active| {
            *active = Some(match *active {
                Some(i) => (i + 1) % len,
                None => 0,
            });
        });
    }

    /// Move the highlight up, wrapping to the bottom.
    pub fn previous(&self) {
        let len = self.items.with(Vec::len);
        if len == 0 {
            return;
        }
        self.active.update(|active| {
            *active = Some(match *active {
                Some(0) | None => len - 1,
                Some(i) => i - 1,
            });
        });
    }

    pub fn current(&self) -> Option<String> {
        let index = self.active.get()?;
        self.items.with(|items| items.get(index).cloned())
    }
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self::new()
    }
}
