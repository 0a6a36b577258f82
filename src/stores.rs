//! Reactive state containers shared through the component tree.
//!
//! Each store is a `Copy` handle over Leptos signals, created once
//! at the application shell and provided via context, so switching
//! between top-level views never loses either view's state.

mod daily_notes;
mod editor;

pub use daily_notes::{use_daily_notes, DailyNotesStore, FetchGate};
pub use editor::{use_editor, EditorStore};
