//! A browser-based markdown note editor with a daily-notes journaling mode.
//!
//! marknotes renders a markdown editor with a live HTML preview and a
//! "daily notes" journal of timestamped entries, persisting both through a
//! small file/notes HTTP backend on the page's own host. This crate is the
//! client: it is meant to be compiled to WebAssembly and mounted in the
//! browser (see `main.rs`), while the pure parts (the data model, date
//! helpers and response classification) stay testable on the host target.

pub mod api;
pub mod app;
pub mod components;
pub mod daily;
pub mod dates;
pub mod markdown;
pub mod shortcuts;
pub mod storage;
pub mod stores;

pub use app::{App, AppView};
