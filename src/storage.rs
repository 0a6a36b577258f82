//! Best-effort persistence of small UI preferences in localStorage.
//!
//! Only conveniences live here (the last used filename, the active tab),
//! never document or note content, so every failure degrades silently.

use web_sys::Storage;

const STORAGE_PREFIX: &str = "marknotes-";

/// Key for the filename last saved or loaded in the editor.
pub const KEY_LAST_FILENAME: &str = "filename";
/// Key for the top-level tab that was active last.
pub const KEY_ACTIVE_VIEW: &str = "view";

/// Reads a stored preference.
pub fn get(key: &str) -> Option<String> {
    let storage = local_storage()?;
    match storage.get_item(&prefixed(key)) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!("could not read {key} from local storage: {error:?}");
            None
        }
    }
}

/// Writes a stored preference, ignoring failures.
pub fn set(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(error) = storage.set_item(&prefixed(key), value) {
        tracing::warn!("could not write {key} to local storage: {error:?}");
    }
}

fn prefixed(key: &str) -> String {
    format!("{STORAGE_PREFIX}{key}")
}

fn local_storage() -> Option<Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(error) => {
            tracing::warn!("local storage is not available: {error:?}");
            None
        }
    }
}

#[cfg(all(test, target_family = "wasm"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn set_then_get_round_trips() {
        set("test-key", "value");
        assert_eq!(get("test-key"), Some("value".to_string()));
    }
}
