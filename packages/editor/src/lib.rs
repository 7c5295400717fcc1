//! # Folio Editor
//!
//! Editing engine for report layouts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ views: ElementEditor, SortableList          │
//! │  - read-only borrows of builder state       │
//! │  - produce Actions, never mutate            │
//! └─────────────────────────────────────────────┘
//!                     ↓ Action
//! ┌─────────────────────────────────────────────┐
//! │ reduce: (&BuilderState, &Action) → state    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ Builder: canonical state + report + save    │
//! └─────────────────────────────────────────────┘
//!                     ↓ save_layout
//! ┌─────────────────────────────────────────────┐
//! │ ReportStore (REST client, in-memory, ...)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Builder owns the layout**: views only read and emit actions
//! 2. **Pure transitions**: `reduce` returns a new state, the input is untouched
//! 3. **Whole-content replacement**: edits merge into a full content value
//! 4. **Dense positions**: every add/delete/reorder renumbers from zero
//! 5. **Optimistic saves**: a failed save never rolls back local edits
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_editor::{Builder, ContentEdit, TableEdit};
//! use folio_model::{ElementKind, Report};
//!
//! let mut builder = Builder::new(Report::new("1", "Quarterly"));
//! let id = builder.add(ElementKind::Table)?;
//!
//! let action = builder.editor(&id).unwrap().edit(ContentEdit::Table(TableEdit::AddColumn))?;
//! builder.dispatch(action)?;
//!
//! builder.save(&client).await?;
//! ```

mod actions;
mod builder;
mod element_editor;
mod errors;
mod ids;
mod sample_layout;
mod sortable;
mod state;
mod store;

pub use actions::{reduce, Action, ActionError};
pub use builder::{Builder, SaveStatus};
pub use element_editor::{
    ChartEdit, ContentEdit, Control, EditError, ElementEditor, Field, ImageEdit, SelectOption,
    TableEdit, TextEdit,
};
pub use errors::BuilderError;
pub use ids::next_element_id;
pub use sample_layout::sample_layout;
pub use sortable::{array_move, renumber, ItemPreview, ItemSummary, SortableList};
pub use state::{BuilderState, Panel};
pub use store::ReportStore;

// Re-export model types for convenience
pub use folio_model::{Element, ElementContent, ElementKind, Report};
