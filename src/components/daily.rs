use super::entry::DailyNoteEntry;
use super::history::DailyNoteHistory;
use super::modal::QuickNoteModal;
use crate::daily::DailyNote;
use crate::dates;
use crate::shortcuts::{DocumentShortcut, KeyCombo};
use crate::stores::use_daily_notes;
use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The daily-notes sub-views. `Today` is the initial state; selecting a
/// history row or the Today nav both land here, History switches without
/// a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubView {
    Today,
    History,
}

/// Top-level daily-notes view: header, inline error banner, Today/History
/// navigation, the active sub-view, and the quick-note modal.
#[component]
pub fn DailyNotesView() -> impl IntoView {
    let store = use_daily_notes();
    let sub_view = RwSignal::new(SubView::Today);
    let modal_open = RwSignal::new(false);

    // Initial load: the full history list plus today's note.
    spawn_local(async move { store.fetch_notes().await });
    spawn_local(async move { store.todays_note().await });

    // Ctrl/Cmd+N opens the composer. The listener handle is owned by this
    // component's scope, so the subscription is released on unmount.
    let shortcut = DocumentShortcut::new(KeyCombo::meta_or_ctrl("n"), move || {
        modal_open.set(true)
    });
    let _shortcut = StoredValue::new_local(shortcut);

    let select_date = Callback::new(move |date: NaiveDate| {
        spawn_local(async move { store.fetch_note(date).await });
        sub_view.set(SubView::Today);
    });

    let show_today = move |_| {
        spawn_local(async move { store.todays_note().await });
        sub_view.set(SubView::Today);
    };

    let show_history = move |_| sub_view.set(SubView::History);

    view! {
        <div class="daily-note-creator">
            <div class="daily-note-header">
                <div class="daily-note-title">
                    <h2>"Daily Notes"</h2>
                    <span class="daily-note-subtitle">"Your personal memo manager"</span>
                </div>

                <div class="daily-note-actions">
                    <button
                        class="quick-note-btn"
                        title="Create quick note (Ctrl/Cmd + N)"
                        on:click=move |_| modal_open.set(true)
                    >
                        "Quick Note"
                    </button>
                </div>
            </div>

            {move || {
                store
                    .error()
                    .map(|message| {
                        view! {
                            <div class="daily-note-error">
                                <span>{message}</span>
                                <button on:click=move |_| store.clear_error()>"×"</button>
                            </div>
                        }
                    })
            }}

            <div class="daily-note-nav">
                <button
                    class="nav-btn"
                    class:active=move || sub_view.get() == SubView::Today
                    on:click=show_today
                >
                    "Today"
                    {move || {
                        store
                            .current()
                            .filter(|note| dates::is_today(note.date) && !note.entries.is_empty())
                            .map(|note| {
                                view! { <span class="nav-badge">{note.entries.len()}</span> }
                            })
                    }}
                </button>

                <button
                    class="nav-btn"
                    class:active=move || sub_view.get() == SubView::History
                    on:click=show_history
                >
                    "History"
                    {move || {
                        let count = store.notes().len();
                        (count > 0).then(|| view! { <span class="nav-badge">{count}</span> })
                    }}
                </button>
            </div>

            <div class="daily-note-content">
                {move || match sub_view.get() {
                    SubView::Today => view! { <TodayPane modal_open=modal_open /> }.into_any(),
                    SubView::History => {
                        view! { <DailyNoteHistory on_select=select_date /> }.into_any()
                    }
                }}
            </div>

            <QuickNoteModal open=modal_open />
        </div>
    }
}

/// The current note: its entries in creation order, an empty-state prompt
/// when the day has none yet, or a loading indicator until the first
/// fetch lands.
#[component]
fn TodayPane(modal_open: RwSignal<bool>) -> impl IntoView {
    let store = use_daily_notes();

    view! {
        <div class="daily-note-today-view">
            {move || match store.current() {
                Some(note) => current_note_view(note, modal_open).into_any(),
                None => {
                    view! {
                        <div class="daily-note-loading">
                            <div class="loading-spinner"></div>
                            <span>"Loading today's notes..."</span>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn current_note_view(note: DailyNote, modal_open: RwSignal<bool>) -> impl IntoView {
    let title = if dates::is_today(note.date) {
        "Today".to_string()
    } else {
        note.date.to_string()
    };
    let count = note.entries.len();
    let count_label = format!("{count} {}", if count == 1 { "entry" } else { "entries" });

    view! {
        <div class="daily-note-current">
            <div class="daily-note-current-header">
                <h3>{title}</h3>
                <span class="entry-count">{count_label}</span>
            </div>

            {if note.entries.is_empty() {
                view! {
                    <div class="daily-note-empty">
                        <div class="empty-state">
                            <h4>"No entries yet"</h4>
                            <p>"Start your day by creating your first note!"</p>
                            <button
                                class="create-first-note-btn"
                                on:click=move |_| modal_open.set(true)
                            >
                                "Create First Note"
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="daily-note-entries">
                        {note
                            .entries
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                let is_latest = index + 1 == count;
                                view! { <DailyNoteEntry entry=entry is_latest=is_latest /> }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
