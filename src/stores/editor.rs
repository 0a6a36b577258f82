//! Client-side state for the markdown editor.
//!
//! The editor owns exactly one named document: the content lives in
//! memory until an explicit save, and a load destructively replaces it
//! with whatever the server holds. Failures surface as blocking alerts,
//! unlike the daily-notes view's inline banner.

use crate::api::{self, ApiError, SaveDocumentRequest};
use crate::storage;
use leptos::prelude::*;

const DEFAULT_FILENAME: &str = "untitled.md";

/// Reactive handle over the editor's document and server-reachability
/// state.
#[derive(Clone, Copy)]
pub struct EditorStore {
    base_url: StoredValue<String>,
    filename: RwSignal<String>,
    content: RwSignal<String>,
    /// `None` until the reachability probe resolves.
    server_available: RwSignal<Option<bool>>,
    probe_started: StoredValue<bool>,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorStore {
    /// Creates a store talking to the backend on the page's own host,
    /// restoring the last used filename when one was persisted.
    pub fn new() -> Self {
        Self::with_base_url(api::base_url())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let filename = storage::get(storage::KEY_LAST_FILENAME)
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        Self {
            base_url: StoredValue::new(base_url),
            filename: RwSignal::new(filename),
            content: RwSignal::new(String::new()),
            server_available: RwSignal::new(None),
            probe_started: StoredValue::new(false),
        }
    }

    // ── Observed state ──────────────────────────────────────────────

    pub fn filename(&self) -> String {
        self.filename.get()
    }

    pub fn set_filename(&self, filename: String) {
        self.filename.set(filename);
    }

    pub fn content(&self) -> String {
        self.content.get()
    }

    pub fn set_content(&self, content: String) {
        self.content.set(content);
    }

    /// `None` while the probe is pending, then the probe's verdict.
    pub fn server_available(&self) -> Option<bool> {
        self.server_available.get()
    }

    // ── Operations ──────────────────────────────────────────────────

    /// Runs the reachability probe once per application start.
    ///
    /// Save and load are gated behind the resulting verdict: an
    /// unreachable server produces one blocking warning here instead of
    /// a failure on every attempt.
    pub async fn run_probe(self) {
        if self.probe_started.get_value() {
            return;
        }
        self.probe_started.set_value(true);

        let base_url = self.base_url.get_value();
        let reachable = api::probe_server(&base_url).await;
        self.server_available.set(Some(reachable));
        if !reachable {
            alert(&unreachable_message(&base_url));
        }
    }

    /// Persists the current content under the current filename.
    pub async fn save(self) {
        if self.gated("Cannot save") {
            return;
        }
        let filename = match api::require_filename(&self.filename.get_untracked()) {
            Ok(name) => name.to_string(),
            Err(_) => {
                alert("Error saving file:\n\nPlease enter a filename before saving");
                return;
            }
        };

        let request = SaveDocumentRequest {
            content: self.content.get_untracked(),
            filename: filename.clone(),
        };
        match api::save_document(&self.base_url.get_value(), &request).await {
            Ok(()) => {
                storage::set(storage::KEY_LAST_FILENAME, &filename);
                alert("File saved successfully!");
            }
            Err(error) => alert(&format!("Error saving file:\n\n{}", describe(&error))),
        }
    }

    /// Replaces the in-memory content with the named document's server
    /// state. There is no merge and, unlike daily notes, no
    /// empty-document synthesis on 404.
    pub async fn load(self) {
        if self.gated("Cannot load") {
            return;
        }
        let filename = match api::require_filename(&self.filename.get_untracked()) {
            Ok(name) => name.to_string(),
            Err(_) => {
                alert("Error loading file:\n\nPlease enter a filename to load");
                return;
            }
        };

        match api::load_document(&self.base_url.get_value(), &filename).await {
            Ok(content) => {
                self.content.set(content);
                storage::set(storage::KEY_LAST_FILENAME, &filename);
            }
            Err(error) => alert(&format!("Error loading file:\n\n{}", describe(&error))),
        }
    }

    fn gated(&self, action: &str) -> bool {
        if self.server_available.get_untracked() == Some(false) {
            alert(&format!(
                "{action}: Server is not accessible. Please check your connection and ensure the backend server is running."
            ));
            true
        } else {
            false
        }
    }
}

/// Context hook for components under the application shell.
pub fn use_editor() -> EditorStore {
    expect_context::<EditorStore>()
}

fn describe(error: &ApiError) -> String {
    match error {
        ApiError::Network(message) => format!(
            "Network error - Please check:\n\
             1. Backend server is running\n\
             2. You are connected to the correct network\n\
             3. The server IP address is correct\n\n\
             Technical details: {message}"
        ),
        other => other.to_string(),
    }
}

fn unreachable_message(base_url: &str) -> String {
    format!(
        "Unable to connect to the server at {base_url}.\n\n\
         Please check:\n\
         1. The backend server is running\n\
         2. You are connected to the same network as the server\n\
         3. You are using the correct IP address\n\n\
         If accessing from a phone:\n\
         - Use your computer's IP address instead of \"localhost\"\n\
         - Make sure your computer's firewall allows incoming connections\n\
         - Both devices should be on the same network"
    )
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
