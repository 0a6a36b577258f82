//! Client-side state for the daily-notes feature.
//!
//! [`DailyNotesStore`] is the single source of truth the UI observes and
//! the only path to the daily-notes endpoints. It holds the note list as
//! the server last sent it (never re-sorted), the currently displayed
//! note, the last error message, and a busy flag.
//!
//! Two deliberate departures from a naive fetch-and-set loop:
//!
//! * every list fetch and every current-note fetch is tagged through a
//!   [`FetchGate`], so a slow response that was overtaken by a newer one
//!   is discarded instead of clobbering fresher state;
//! * the busy flag is an in-flight counter, so overlapping operations
//!   cannot clear each other's loading indication early.

use crate::api::{self, ApiError};
use crate::daily::{CreateEntryAck, CreateEntryRequest, DailyNote};
use crate::dates;
use chrono::NaiveDate;
use leptos::prelude::*;

/// Orders responses of one kind of fetch.
///
/// `begin` tags an outgoing request with the next sequence number;
/// `commit` accepts a response only if nothing newer has been applied
/// yet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchGate {
    issued: u64,
    applied: u64,
}

impl FetchGate {
    /// Tags the next outgoing request.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether the response tagged `tag` may be applied. Accepting a
    /// response blocks every response tagged earlier.
    pub fn commit(&mut self, tag: u64) -> bool {
        if tag > self.applied {
            self.applied = tag;
            true
        } else {
            false
        }
    }
}

/// Reactive handle over all daily-notes state.
#[derive(Clone, Copy)]
pub struct DailyNotesStore {
    base_url: StoredValue<String>,
    notes: RwSignal<Vec<DailyNote>>,
    current: RwSignal<Option<DailyNote>>,
    error: RwSignal<Option<String>>,
    inflight: RwSignal<u32>,
    list_gate: RwSignal<FetchGate>,
    note_gate: RwSignal<FetchGate>,
}

impl Default for DailyNotesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DailyNotesStore {
    /// Creates a store talking to the backend on the page's own host.
    pub fn new() -> Self {
        Self::with_base_url(api::base_url())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: StoredValue::new(base_url),
            notes: RwSignal::new(Vec::new()),
            current: RwSignal::new(None),
            error: RwSignal::new(None),
            inflight: RwSignal::new(0),
            list_gate: RwSignal::new(FetchGate::default()),
            note_gate: RwSignal::new(FetchGate::default()),
        }
    }

    // ── Observed state ──────────────────────────────────────────────

    /// All known daily notes, in the order the server sent them.
    pub fn notes(&self) -> Vec<DailyNote> {
        self.notes.get()
    }

    /// The note currently displayed, if one has been fetched or
    /// synthesized.
    pub fn current(&self) -> Option<DailyNote> {
        self.current.get()
    }

    /// The last error message, until overwritten or cleared.
    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    /// True while any daily-notes operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.inflight.get() > 0
    }

    /// Clears the error banner.
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    // ── Operations ──────────────────────────────────────────────────

    /// Fetches the full note list, replacing the held list verbatim on
    /// success. On failure the previous list is kept and the error
    /// message recorded.
    pub async fn fetch_notes(self) {
        let tag = self.list_gate.try_update(FetchGate::begin).unwrap_or(0);
        self.begin_request();
        let result = api::list_daily_notes(&self.base_url.get_value()).await;
        match result {
            Ok(notes) => {
                if self.accept(self.list_gate, tag) {
                    self.notes.set(notes);
                } else {
                    tracing::debug!("discarding overtaken note-list response");
                }
            }
            Err(error) => self.record_error("Failed to fetch daily notes", &error),
        }
        self.end_request();
    }

    /// Fetches the note for one date and makes it current.
    ///
    /// A date the backend has nothing for yields the empty placeholder
    /// note, not an error; any other failure leaves the current note
    /// untouched and records the error message.
    pub async fn fetch_note(self, date: NaiveDate) {
        let tag = self.note_gate.try_update(FetchGate::begin).unwrap_or(0);
        self.begin_request();
        let result = api::get_daily_note(&self.base_url.get_value(), date).await;
        match result {
            Ok(note) => {
                if self.accept(self.note_gate, tag) {
                    self.current.set(Some(note));
                } else {
                    tracing::debug!("discarding overtaken response for {date}");
                }
            }
            Err(error) => self.record_error("Failed to fetch daily note", &error),
        }
        self.end_request();
    }

    /// Fetches the note for the current local date.
    pub async fn todays_note(self) {
        self.fetch_note(dates::today()).await;
    }

    /// Appends one entry to `date`'s note (today when `None`).
    ///
    /// Content must already be trimmed and non-empty; that validation
    /// belongs to the caller. On success the refresh-after-write step
    /// runs before returning, so the UI observes the appended entry.
    pub async fn create_entry(
        self,
        content: String,
        date: Option<NaiveDate>,
    ) -> Result<CreateEntryAck, ApiError> {
        let request = CreateEntryRequest {
            content,
            date: Some(date.unwrap_or_else(dates::today)),
        };
        self.begin_request();
        let result = api::create_daily_entry(&self.base_url.get_value(), &request).await;
        match &result {
            Ok(ack) => self.refresh_after_write(ack.date).await,
            Err(error) => self.record_error("Failed to create daily entry", error),
        }
        self.end_request();
        result
    }

    /// The one mechanism keeping client state consistent with the
    /// backend after a mutation: re-fetch the list, and re-fetch the
    /// current note when the write touched the displayed date.
    async fn refresh_after_write(self, date: NaiveDate) {
        self.fetch_notes().await;
        let displayed = self.current.get_untracked().map(|note| note.date);
        if should_refresh_current(displayed, date) {
            self.fetch_note(date).await;
        }
    }

    // ── Internals ───────────────────────────────────────────────────

    fn begin_request(&self) {
        self.inflight.update(|count| *count += 1);
        self.error.set(None);
    }

    fn end_request(&self) {
        self.inflight.update(|count| *count = count.saturating_sub(1));
    }

    fn accept(&self, gate: RwSignal<FetchGate>, tag: u64) -> bool {
        gate.try_update(|gate| gate.commit(tag)).unwrap_or(false)
    }

    fn record_error(&self, context: &str, error: &ApiError) {
        tracing::warn!("{context}: {error}");
        self.error.set(Some(format!("{context}: {error}")));
    }
}

/// Context hook for components under the application shell.
pub fn use_daily_notes() -> DailyNotesStore {
    expect_context::<DailyNotesStore>()
}

/// A write refreshes the current note only when it touched the displayed
/// date.
fn should_refresh_current(displayed: Option<NaiveDate>, affected: NaiveDate) -> bool {
    displayed == Some(affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_accepts_responses_in_order() {
        let mut gate = FetchGate::default();
        let first = gate.begin();
        let second = gate.begin();
        assert!(gate.commit(first));
        assert!(gate.commit(second));
    }

    #[test]
    fn gate_discards_overtaken_responses() {
        let mut gate = FetchGate::default();
        let slow = gate.begin();
        let fast = gate.begin();
        // The later request resolves first; the earlier one must lose.
        assert!(gate.commit(fast));
        assert!(!gate.commit(slow));
    }

    #[test]
    fn gate_rejects_duplicate_commits() {
        let mut gate = FetchGate::default();
        let tag = gate.begin();
        assert!(gate.commit(tag));
        assert!(!gate.commit(tag));
    }

    #[test]
    fn gate_tags_are_strictly_monotonic() {
        let mut gate = FetchGate::default();
        let tags: Vec<u64> = (0..5).map(|_| gate.begin()).collect();
        assert_eq!(tags, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn writes_refresh_only_the_displayed_date() {
        let displayed: NaiveDate = "2024-01-01".parse().unwrap();
        let other: NaiveDate = "2024-01-02".parse().unwrap();

        assert!(should_refresh_current(Some(displayed), displayed));
        assert!(!should_refresh_current(Some(displayed), other));
        assert!(!should_refresh_current(None, displayed));
    }
}
