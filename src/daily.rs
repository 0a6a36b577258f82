//! Data model for daily notes.
//!
//! A [`DailyNote`] is the aggregate of journal entries for one calendar
//! date; a [`DailyEntry`] is one timestamped block of free text inside it.
//! Entries are append-only and arrive in creation order, so the last
//! element is always the most recent one. Both structs mirror the wire
//! format of the notes backend verbatim.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One timestamped journal entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Creation time in `HH:mm` form, as carried on the wire.
    pub time: String,
    /// The free-text body of the entry.
    pub content: String,
}

/// The daily note for one calendar date.
///
/// A note with zero entries is a valid state, not an error: it is what the
/// client synthesizes when the backend has nothing stored for a date yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyNote {
    pub date: NaiveDate,
    pub filename: String,
    /// Entries in creation order. The backend serializes an empty note's
    /// entry list as JSON `null` (a Go nil slice), so `null`, a missing
    /// field and `[]` all deserialize to an empty vector.
    #[serde(default, deserialize_with = "entries_or_empty")]
    pub entries: Vec<DailyEntry>,
    #[serde(default)]
    pub uid: String,
}

impl DailyNote {
    /// The placeholder for a date the backend has no note for yet.
    ///
    /// This is the only place an empty note is constructed; every
    /// `current` note held by the client comes from either a fetch or
    /// this synthesis.
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            date,
            filename: format!("{date}.md"),
            entries: Vec::new(),
            uid: String::new(),
        }
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&DailyEntry> {
        self.entries.last()
    }

    /// Whether the entry at `index` is the most recent one. Exactly one
    /// index satisfies this for a non-empty note; none do for an empty
    /// note.
    pub fn is_latest(&self, index: usize) -> bool {
        !self.entries.is_empty() && index + 1 == self.entries.len()
    }
}

fn entries_or_empty<'de, D>(deserializer: D) -> Result<Vec<DailyEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DailyEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /api/daily/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEntryRequest {
    pub content: String,
    /// Target date; the backend defaults to today when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Acknowledgement of a created entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEntryAck {
    pub message: String,
    /// The date the entry was appended to.
    pub date: NaiveDate,
    /// The `HH:mm` timestamp the backend stamped the entry with.
    pub time: String,
}

/// Body of `GET /api/daily/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteListResponse {
    pub notes: Vec<DailyNote>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date literal")
    }

    #[test]
    fn placeholder_is_empty_and_named_after_the_date() {
        let note = DailyNote::placeholder(date("2024-05-20"));
        assert_eq!(note.date, date("2024-05-20"));
        assert_eq!(note.filename, "2024-05-20.md");
        assert!(note.entries.is_empty());
        assert!(note.uid.is_empty());
        assert_eq!(note.latest(), None);
    }

    #[test]
    fn entries_accept_null_missing_and_empty() {
        for body in [
            r#"{"date":"2024-01-02","filename":"2024-01-02.md","entries":null,"uid":""}"#,
            r#"{"date":"2024-01-02","filename":"2024-01-02.md","uid":""}"#,
            r#"{"date":"2024-01-02","filename":"2024-01-02.md","entries":[],"uid":""}"#,
        ] {
            let note: DailyNote = serde_json::from_str(body).expect("deserializes");
            assert!(note.entries.is_empty(), "for {body}");
        }
    }

    #[test]
    fn latest_is_the_final_entry_exactly_once() {
        let mut note = DailyNote::placeholder(date("2024-01-01"));
        assert!(!note.is_latest(0));

        note.entries.push(DailyEntry {
            time: "09:00".into(),
            content: "Woke up".into(),
        });
        note.entries.push(DailyEntry {
            time: "12:30".into(),
            content: "Lunch".into(),
        });

        let latest_flags: Vec<bool> = (0..note.entries.len()).map(|i| note.is_latest(i)).collect();
        assert_eq!(latest_flags, vec![false, true]);
        assert_eq!(note.latest().map(|e| e.time.as_str()), Some("12:30"));
    }

    #[test]
    fn create_request_omits_absent_date() {
        let request = CreateEntryRequest {
            content: "note to self".into(),
            date: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"content":"note to self"}"#
        );

        let request = CreateEntryRequest {
            content: "note to self".into(),
            date: Some(date("2024-01-02")),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"content":"note to self","date":"2024-01-02"}"#
        );
    }

    #[test]
    fn list_response_preserves_server_order() {
        let body = r#"{"notes":[
            {"date":"2024-01-01","filename":"2024-01-01.md","entries":[{"time":"09:00","content":"Woke up"}],"uid":"202401010900"},
            {"date":"2024-01-02","filename":"2024-01-02.md","entries":null,"uid":""}
        ]}"#;
        let response: NoteListResponse = serde_json::from_str(body).expect("deserializes");
        assert_eq!(response.notes.len(), 2);
        assert_eq!(response.notes[0].date, date("2024-01-01"));
        assert_eq!(response.notes[0].entries.len(), 1);
        assert!(response.notes[0].is_latest(0));
        assert_eq!(response.notes[1].date, date("2024-01-02"));
        assert!(response.notes[1].entries.is_empty());
    }
}
