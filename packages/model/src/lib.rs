//! # Folio Model
//!
//! Document model shared by every Folio crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Report → Element[] → ElementContent  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: builder state + actions             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: preview tree → printable HTML│
//! └─────────────────────────────────────────────┘
//! ```
//!
//! A report's layout is an ordered list of [`Element`]s. Each element
//! carries exactly one [`ElementContent`] variant; the variant is the
//! element's type and never changes after creation.
//!
//! The JSON shape matches what the reports backend stores verbatim:
//!
//! ```json
//! { "id": "element-1", "type": "text", "position": 0,
//!   "content": { "text": "Hi", "fontSize": 16, "fontWeight": "normal", "color": "#000000" } }
//! ```

mod content;
mod element;
mod errors;
mod report;
mod sample;

pub use content::{
    clamp_font_size, ChartContent, ChartKind, DataPoint, ElementContent, FontWeight,
    ImageContent, TableContent, TextContent, DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
pub use element::{Element, ElementKind};
pub use errors::ContentError;
pub use report::Report;
pub use sample::SampleRecord;
