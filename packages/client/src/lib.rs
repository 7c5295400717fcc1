//! # Folio Client
//!
//! Typed async access to the reports backend.
//!
//! ```text
//! ReportsClient ──HTTP/JSON──▶ /reports, /sample-data, /initialize-sample-data
//!       │
//!       └── implements folio_editor::ReportStore (PUT /reports/{id} {layout})
//! ```
//!
//! Calls are single-shot: no retry, no timeout, no request deduplication.
//! The backend is last-writer-wins.

mod client;
mod config;
mod errors;
mod requests;

pub use client::ReportsClient;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use errors::ClientError;
pub use requests::{Message, NewReport, ReportUpdate};
