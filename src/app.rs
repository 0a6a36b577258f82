//! The application shell.

use crate::components::{DailyNotesView, MarkdownEditor};
use crate::storage;
use crate::stores::{DailyNotesStore, EditorStore};
use leptos::prelude::*;

/// The two mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    DailyNotes,
    Editor,
}

impl AppView {
    fn name(self) -> &'static str {
        match self {
            AppView::DailyNotes => "daily",
            AppView::Editor => "editor",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "daily" => Some(AppView::DailyNotes),
            "editor" => Some(AppView::Editor),
            _ => None,
        }
    }
}

/// Root component: provides both stores, remembers the selected tab, and
/// renders exactly one of the two views.
#[component]
pub fn App() -> impl IntoView {
    // Stores are created once here, so switching tabs never discards
    // either view's state even though only one view is mounted at a time.
    provide_context(DailyNotesStore::new());
    provide_context(EditorStore::new());

    let active = RwSignal::new(
        storage::get(storage::KEY_ACTIVE_VIEW)
            .as_deref()
            .and_then(AppView::from_name)
            .unwrap_or(AppView::DailyNotes),
    );

    let select = move |view: AppView| {
        active.set(view);
        storage::set(storage::KEY_ACTIVE_VIEW, view.name());
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Markdown Notes"</h1>
                <nav class="app-tabs">
                    <button
                        class="tab-btn"
                        class:active=move || active.get() == AppView::DailyNotes
                        on:click=move |_| select(AppView::DailyNotes)
                    >
                        "Daily Notes"
                    </button>
                    <button
                        class="tab-btn"
                        class:active=move || active.get() == AppView::Editor
                        on:click=move |_| select(AppView::Editor)
                    >
                        "Editor"
                    </button>
                </nav>
            </header>

            <main class="app-main">
                {move || match active.get() {
                    AppView::DailyNotes => view! { <DailyNotesView /> }.into_any(),
                    AppView::Editor => view! { <MarkdownEditor /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_names_round_trip() {
        for view in [AppView::DailyNotes, AppView::Editor] {
            assert_eq!(AppView::from_name(view.name()), Some(view));
        }
        assert_eq!(AppView::from_name("bogus"), None);
    }
}
