use crate::daily::DailyEntry;
use leptos::prelude::*;

/// One timestamped entry row in the today view.
#[component]
pub fn DailyNoteEntry(entry: DailyEntry, #[prop(optional)] is_latest: bool) -> impl IntoView {
    let DailyEntry { time, content } = entry;

    view! {
        <div class="daily-note-entry" class:latest=move || is_latest>
            <div class="entry-time-marker">
                <span class="entry-time">{time}</span>
                <div class="entry-line"></div>
            </div>

            <div class="entry-content-wrapper">
                <div class="entry-content">{content}</div>
                <Show when=move || is_latest>
                    <div class="entry-latest-indicator">
                        <span>"Latest"</span>
                    </div>
                </Show>
            </div>
        </div>
    }
}
