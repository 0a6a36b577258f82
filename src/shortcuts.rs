//! Scoped document-level keyboard shortcuts.
//!
//! Registering a global `keydown` listener is a process-wide side effect,
//! so it is modeled here as an owned subscription: the listener is added
//! when a [`DocumentShortcut`] is constructed and removed when the handle
//! is dropped, never left behind as ambient state.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// A key plus its expected Ctrl/Cmd modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    key: &'static str,
    meta_or_ctrl: bool,
}

impl KeyCombo {
    /// A combo that fires on Ctrl+key or Cmd+key (either platform
    /// modifier counts).
    pub const fn meta_or_ctrl(key: &'static str) -> Self {
        Self {
            key,
            meta_or_ctrl: true,
        }
    }

    /// Whether a keyboard event with this `key` and modifier state
    /// triggers the combo.
    pub fn matches(&self, key: &str, meta: bool, ctrl: bool) -> bool {
        if !key.eq_ignore_ascii_case(self.key) {
            return false;
        }
        if self.meta_or_ctrl {
            meta || ctrl
        } else {
            !(meta || ctrl)
        }
    }
}

/// An owned `keydown` subscription on the page's document.
///
/// Dropping the handle removes the listener.
pub struct DocumentShortcut {
    _listener: EventListener,
}

impl DocumentShortcut {
    /// Starts listening for `combo` on the document, invoking
    /// `on_trigger` and suppressing the browser default on every match.
    ///
    /// Returns `None` outside a browser context.
    pub fn new<F>(combo: KeyCombo, mut on_trigger: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let document = web_sys::window()?.document()?;
        let listener = EventListener::new(&document, "keydown", move |event| {
            let event = match event.dyn_ref::<KeyboardEvent>() {
                Some(event) => event,
                None => return,
            };
            if combo.matches(&event.key(), event.meta_key(), event.ctrl_key()) {
                event.prevent_default();
                on_trigger();
            }
        });
        Some(Self {
            _listener: listener,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_combo_requires_meta_or_ctrl() {
        let combo = KeyCombo::meta_or_ctrl("n");
        assert!(combo.matches("n", true, false));
        assert!(combo.matches("n", false, true));
        assert!(combo.matches("N", true, false));
        assert!(!combo.matches("n", false, false));
        assert!(!combo.matches("m", true, false));
    }
}
