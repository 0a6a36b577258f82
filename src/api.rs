//! HTTP bindings for the notes backend.
//!
//! The backend lives on the same host as the page, on a fixed port. All
//! payloads are JSON. There are no retries anywhere: every failure is
//! terminal for that operation and surfaces to the caller as an
//! [`ApiError`].

use crate::daily::{CreateEntryAck, CreateEntryRequest, DailyNote, NoteListResponse};
use chrono::NaiveDate;
use futures::future::{select, Either};
use futures::pin_mut;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, Response};

/// Port the backend listens on; the host is taken from the page itself.
pub const DEFAULT_API_PORT: u16 = 8080;

/// Filename used by the reachability probe. The probe only classifies the
/// server as up or down, so a 404 for this file is as good as a hit.
const PROBE_FILENAME: &str = "test.md";

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// What can go wrong talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    /// A response arrived but its payload did not parse.
    #[error("invalid response payload: {0}")]
    Decode(String),
    /// Caught locally before any network call was made.
    #[error("{0}")]
    Validation(String),
}

/// Base URL of the backend, derived from the page's own hostname.
pub fn base_url() -> String {
    let hostname = web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .filter(|hostname| !hostname.is_empty())
        .unwrap_or_else(|| "localhost".to_string());
    base_url_for(&hostname)
}

fn base_url_for(hostname: &str) -> String {
    format!("http://{hostname}:{DEFAULT_API_PORT}")
}

/// Requires a usable filename, trimming surrounding whitespace.
///
/// An empty name is a validation failure that must never reach the
/// network.
pub fn require_filename(raw: &str) -> Result<&str, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ApiError::Validation("filename must not be empty".into()))
    } else {
        Ok(trimmed)
    }
}

// ── Daily notes ─────────────────────────────────────────────────────────

/// `GET /api/daily/list`: every daily note the backend knows about, in
/// server order.
pub async fn list_daily_notes(base_url: &str) -> Result<Vec<DailyNote>, ApiError> {
    let url = format!("{base_url}/api/daily/list");
    let (status, body) = send("GET", &url, None).await?;
    let body = ensure_success(status, body)?;
    decode::<NoteListResponse>(&body).map(|response| response.notes)
}

/// `GET /api/daily/get?date=...`: the note for one date.
///
/// A 404 here is not an error: a day without a note yet is a valid,
/// expected state, so it yields [`DailyNote::placeholder`].
pub async fn get_daily_note(base_url: &str, date: NaiveDate) -> Result<DailyNote, ApiError> {
    let url = format!("{base_url}/api/daily/get?date={date}");
    let (status, body) = send("GET", &url, None).await?;
    classify_note_response(status, &body, date)
}

/// `POST /api/daily/create`: appends one entry to a date's note.
pub async fn create_daily_entry(
    base_url: &str,
    request: &CreateEntryRequest,
) -> Result<CreateEntryAck, ApiError> {
    let url = format!("{base_url}/api/daily/create");
    let payload = encode(request)?;
    let (status, body) = send("POST", &url, Some(&payload)).await?;
    let body = ensure_success(status, body)?;
    decode(&body)
}

// ── Documents ───────────────────────────────────────────────────────────

/// Body of `POST /api/save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveDocumentRequest {
    pub content: String,
    pub filename: String,
}

#[derive(Debug, Clone, Deserialize)]
struct LoadDocumentResponse {
    content: String,
}

/// `POST /api/save`: persists a document, fully overwriting any previous
/// content under that filename. Last writer wins; there is no conflict
/// detection.
pub async fn save_document(base_url: &str, request: &SaveDocumentRequest) -> Result<(), ApiError> {
    let url = format!("{base_url}/api/save");
    let payload = encode(request)?;
    let (status, body) = send("POST", &url, Some(&payload)).await?;
    ensure_success(status, body).map(|_ack| ())
}

/// `GET /api/get?filename=...`: loads a document's full content.
///
/// Unlike daily notes there is no empty-state synthesis: a 404 is a
/// failure like any other non-success status.
pub async fn load_document(base_url: &str, filename: &str) -> Result<String, ApiError> {
    let url = format!("{base_url}/api/get?filename={filename}");
    let (status, body) = send("GET", &url, None).await?;
    let body = ensure_success(status, body)?;
    decode::<LoadDocumentResponse>(&body).map(|response| response.content)
}

// ── Reachability probe ──────────────────────────────────────────────────

/// One bounded request that classifies the backend as reachable or not.
///
/// Success and 404 both count as reachable (the server is up, the probe
/// file just doesn't exist); anything else, including the 5-second
/// deadline elapsing, is unreachable. The in-flight request is aborted
/// when the deadline wins.
pub async fn probe_server(base_url: &str) -> bool {
    let url = format!("{base_url}/api/get?filename={PROBE_FILENAME}");

    let controller = AbortController::new().ok();
    let request = send_with_signal("GET", &url, None, controller.as_ref());
    pin_mut!(request);
    let deadline = sleep(PROBE_TIMEOUT);
    pin_mut!(deadline);

    match select(request, deadline).await {
        Either::Left((outcome, _)) => match outcome {
            Ok((status, _body)) => probe_status_reachable(status),
            Err(error) => {
                tracing::warn!("server probe failed: {error}");
                false
            }
        },
        Either::Right(((), _request)) => {
            if let Some(controller) = controller.as_ref() {
                controller.abort();
            }
            tracing::warn!("server probe timed out after {PROBE_TIMEOUT:?}");
            false
        }
    }
}

fn probe_status_reachable(status: u16) -> bool {
    is_success(status) || status == 404
}

// ── Transport plumbing ──────────────────────────────────────────────────

async fn send(method: &str, url: &str, body: Option<&str>) -> Result<(u16, String), ApiError> {
    send_with_signal(method, url, body, None).await
}

/// Issues one fetch and resolves to the status code and body text.
async fn send_with_signal(
    method: &str,
    url: &str,
    body: Option<&str>,
    abort: Option<&AbortController>,
) -> Result<(u16, String), ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(controller) = abort {
        init.set_signal(Some(&controller.signal()));
    }
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(network_error)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(network_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not yield a response".into()))?;

    let status = response.status();
    let text = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    Ok((status, text.as_string().unwrap_or_default()))
}

fn network_error(value: JsValue) -> ApiError {
    let message = value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"));
    ApiError::Network(message)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn ensure_success(status: u16, body: String) -> Result<String, ApiError> {
    if is_success(status) {
        Ok(body)
    } else {
        Err(ApiError::Status { status, body })
    }
}

fn classify_note_response(status: u16, body: &str, date: NaiveDate) -> Result<DailyNote, ApiError> {
    if status == 404 {
        return Ok(DailyNote::placeholder(date));
    }
    if !is_success(status) {
        return Err(ApiError::Status {
            status,
            body: body.to_string(),
        });
    }
    decode(body)
}

fn encode<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|error| ApiError::Decode(error.to_string()))
}

fn decode<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|error| ApiError::Decode(error.to_string()))
}

/// Sleeps for `duration` without blocking the event loop in the browser.
async fn sleep(duration: Duration) {
    #[cfg(target_family = "wasm")]
    {
        if let Err(error) = wasm_timer::Delay::new(duration).await {
            tracing::warn!("timer error while sleeping: {error}");
        }
    }
    #[cfg(not(target_family = "wasm"))]
    {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date literal")
    }

    #[test]
    fn base_url_uses_fixed_port() {
        assert_eq!(base_url_for("localhost"), "http://localhost:8080");
        assert_eq!(base_url_for("192.168.1.20"), "http://192.168.1.20:8080");
    }

    #[test]
    fn require_filename_trims_and_rejects_empty() {
        assert_eq!(require_filename(" notes.md "), Ok("notes.md"));
        assert!(matches!(
            require_filename("   "),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(require_filename(""), Err(ApiError::Validation(_))));
    }

    #[test]
    fn missing_note_becomes_a_placeholder_not_an_error() {
        let d = date("2024-01-02");
        let note = classify_note_response(404, "not found", d).expect("valid empty state");
        assert_eq!(note, DailyNote::placeholder(d));
    }

    #[test]
    fn other_failures_keep_status_and_body() {
        let result = classify_note_response(500, "backend on fire", date("2024-01-02"));
        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 500,
                body: "backend on fire".to_string(),
            })
        );
    }

    #[test]
    fn successful_note_response_is_decoded() {
        let body = r#"{"date":"2024-01-01","filename":"2024-01-01.md","entries":[{"time":"09:00","content":"Woke up"}],"uid":"202401010900"}"#;
        let note = classify_note_response(200, body, date("2024-01-01")).expect("decodes");
        assert_eq!(note.entries.len(), 1);
        assert_eq!(note.entries[0].content, "Woke up");
    }

    #[test]
    fn probe_treats_missing_file_as_reachable() {
        assert!(probe_status_reachable(200));
        assert!(probe_status_reachable(204));
        assert!(probe_status_reachable(404));
        assert!(!probe_status_reachable(500));
        assert!(!probe_status_reachable(302));
    }

    #[test]
    fn ensure_success_passes_body_through() {
        assert_eq!(ensure_success(200, "ok".into()), Ok("ok".to_string()));
        assert_eq!(
            ensure_success(503, "down".into()),
            Err(ApiError::Status {
                status: 503,
                body: "down".to_string(),
            })
        );
    }
}
