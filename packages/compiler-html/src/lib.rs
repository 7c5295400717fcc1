//! # Folio HTML Compiler
//!
//! Read-only projection of a report into a preview tree and a standalone,
//! print-ready HTML document.
//!
//! ```text
//! Report ──build_preview──▶ PreviewDocument ──compile_to_html──▶ HTML
//!             │                                                   │
//!        SamplePool (optional substitution)        host print-to-PDF
//! ```
//!
//! PDF export is the host's job: the HTML carries `@media print` rules and
//! the host prints it (browser print dialog, or opening the file).

mod chart;
mod compiler;
mod preview;
mod samples;

pub use chart::{fallback_series, normalize_chart_data, normalize_points, NO_DATA};
pub use compiler::{compile_to_html, CompileError, CompileOptions};
pub use preview::{build_preview, PreviewBlock, PreviewDocument, PreviewNode, PreviewOptions};
pub use samples::SamplePool;
