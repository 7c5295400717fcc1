//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Action error: {0}")]
    Action(#[from] crate::actions::ActionError),

    #[error("Edit error: {0}")]
    Edit(#[from] crate::element_editor::EditError),

    #[error("Save failed: {0}")]
    Save(String),
}
