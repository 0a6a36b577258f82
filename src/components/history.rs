use crate::daily::DailyNote;
use crate::dates;
use crate::stores::use_daily_notes;
use chrono::NaiveDate;
use leptos::prelude::*;

/// Longest latest-entry preview shown on a history row.
const PREVIEW_MAX_CHARS: usize = 80;

/// The list of every known daily note, newest server entry previews
/// included. Clicking a row selects that date.
#[component]
pub fn DailyNoteHistory(#[prop(into)] on_select: Callback<NaiveDate>) -> impl IntoView {
    let store = use_daily_notes();

    view! {
        <div class="daily-note-history">
            <div class="daily-note-history-header">
                <h3>"History"</h3>
                {move || {
                    let count = store.notes().len();
                    (count > 0 && !store.is_loading()).then(|| {
                        view! {
                            <span class="daily-note-count">{format!("{count} notes")}</span>
                        }
                    })
                }}
            </div>

            {move || {
                if store.is_loading() {
                    view! {
                        <div class="daily-note-history-loading">
                            <div class="loading-spinner"></div>
                            <span>"Loading notes..."</span>
                        </div>
                    }
                    .into_any()
                } else if store.notes().is_empty() {
                    view! {
                        <div class="daily-note-history-empty">
                            <p>"No daily notes yet. Create your first note!"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="daily-note-history-list">
                            {store
                                .notes()
                                .into_iter()
                                .map(|note| view! { <HistoryItem note=note on_select=on_select /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn HistoryItem(note: DailyNote, on_select: Callback<NaiveDate>) -> impl IntoView {
    let store = use_daily_notes();
    let date = note.date;
    let is_active = move || store.current().map(|current| current.date) == Some(date);

    let short_label = if dates::is_today(date) {
        "Today".to_string()
    } else {
        dates::format_date_short(date)
    };
    let entry_count = note.entries.len();
    let latest = note.latest().cloned();

    view! {
        <div class="daily-note-history-item" class:active=is_active on:click=move |_| on_select.run(date)>
            <div class="daily-note-history-item-header">
                <div class="daily-note-date-info">
                    <span class="daily-note-date-short">{short_label}</span>
                    <span class="daily-note-date-relative">{dates::relative_date(date)}</span>
                </div>
                <div class="daily-note-entry-count">
                    {format!("{entry_count} {}", entries_label(entry_count))}
                </div>
            </div>

            <div class="daily-note-date-full">{dates::format_date(date)}</div>

            {match latest {
                Some(entry) => {
                    let more = entry_count - 1;
                    let preview = preview_text(&entry.content);
                    view! {
                        <div class="daily-note-preview">
                            <div class="daily-note-latest-entry">
                                <span class="entry-time">{entry.time}</span>
                                <span class="entry-content">{preview}</span>
                            </div>
                            {(more > 0).then(|| {
                                view! {
                                    <div class="daily-note-more-entries">
                                        {format!("+{more} more {}", entries_label(more))}
                                    </div>
                                }
                            })}
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <div class="daily-note-empty-preview">
                        <span>"No entries yet"</span>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

fn entries_label(count: usize) -> &'static str {
    if count == 1 { "entry" } else { "entries" }
}

fn preview_text(content: &str) -> String {
    if content.chars().count() > PREVIEW_MAX_CHARS {
        let truncated: String = content.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{truncated}...")
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_content() {
        let short = "a".repeat(80);
        assert_eq!(preview_text(&short), short);

        let long = "b".repeat(81);
        let preview = preview_text(&long);
        assert_eq!(preview.chars().count(), 83);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let long: String = "é".repeat(90);
        let preview = preview_text(&long);
        assert_eq!(preview.chars().count(), 83);
    }

    #[test]
    fn entry_label_pluralizes() {
        assert_eq!(entries_label(1), "entry");
        assert_eq!(entries_label(0), "entries");
        assert_eq!(entries_label(2), "entries");
    }
}
