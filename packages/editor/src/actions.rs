//! # Builder Actions
//!
//! Every change to a layout is an [`Action`] applied by [`reduce`].
//!
//! ## Action Semantics
//!
//! ### AddElement
//! - Appends an element with default content at `position = len`
//! - Selects the new element; the active panel is left alone
//! - Fails on a duplicate id
//!
//! ### SelectElement
//! - Selects the element and switches to the properties panel
//! - Unknown ids are a no-op
//!
//! ### UpdateContent
//! - Atomic replacement of the whole content value
//! - Id, type and position are preserved
//! - Unknown ids are a no-op; a different content variant is rejected
//!
//! ### DeleteElement
//! - Removes the element and renumbers the rest
//! - Clears the selection only if the deleted element was selected
//!
//! ### ReorderElement
//! - Array move from the active element's index to the target's index
//! - Every position is rewritten afterwards
//!
//! ### ReplaceLayout
//! - Replaces the entire layout (sample layout loader) and clears selection

use crate::sortable::{array_move, renumber};
use crate::state::{sanitized, BuilderState, Panel};
use folio_model::{ContentError, Element, ElementContent, ElementKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Action {
    /// Append a new element of `kind` with default content
    AddElement { id: String, kind: ElementKind },

    /// Make an element the active selection
    SelectElement { element_id: String },

    /// Replace an element's content
    UpdateContent {
        element_id: String,
        content: ElementContent,
    },

    /// Remove an element
    DeleteElement { element_id: String },

    /// Move the dragged element to where `over_id` currently sits
    ReorderElement { active_id: String, over_id: String },

    /// Replace the whole layout
    ReplaceLayout { elements: Vec<Element> },

    /// Switch the sidebar panel
    SetPanel { panel: Panel },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    #[error("Cannot change element {element_id} from {expected} to {found}")]
    KindMismatch {
        element_id: String,
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("Invalid content: {0}")]
    InvalidContent(#[from] ContentError),
}

impl Action {
    /// Apply action to state with validation
    pub fn apply(&self, state: &mut BuilderState) -> Result<(), ActionError> {
        // Validate first
        self.validate(state)?;

        match self {
            Action::AddElement { id, kind } => {
                let position = state.elements.len();
                state
                    .elements
                    .push(Element::with_defaults(id.clone(), *kind, position));
                state.selected = Some(id.clone());
            }

            Action::SelectElement { element_id } => {
                if state.contains(element_id) {
                    state.selected = Some(element_id.clone());
                    state.panel = Panel::Properties;
                }
            }

            Action::UpdateContent {
                element_id,
                content,
            } => {
                if let Some(index) = state.index_of(element_id) {
                    state.elements[index].content = content.clone().sanitize();
                }
            }

            Action::DeleteElement { element_id } => {
                if let Some(index) = state.index_of(element_id) {
                    state.elements.remove(index);
                    renumber(&mut state.elements);

                    if state.is_selected(element_id) {
                        state.selected = None;
                    }
                }
            }

            Action::ReorderElement { active_id, over_id } => {
                if let (Some(from), Some(to)) = (state.index_of(active_id), state.index_of(over_id)) {
                    if from != to {
                        array_move(&mut state.elements, from, to);
                        renumber(&mut state.elements);
                    }
                }
            }

            Action::ReplaceLayout { elements } => {
                state.elements = sanitized(elements.clone());
                renumber(&mut state.elements);
                state.selected = None;
            }

            Action::SetPanel { panel } => {
                state.panel = *panel;
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, state: &BuilderState) -> Result<(), ActionError> {
        match self {
            Action::AddElement { id, .. } => {
                if state.contains(id) {
                    return Err(ActionError::DuplicateId(id.clone()));
                }
                Ok(())
            }

            Action::UpdateContent {
                element_id,
                content,
            } => {
                let Some(element) = state.find(element_id) else {
                    return Ok(());
                };

                if element.kind() != content.kind() {
                    return Err(ActionError::KindMismatch {
                        element_id: element_id.clone(),
                        expected: element.kind(),
                        found: content.kind(),
                    });
                }

                content.validate()?;
                Ok(())
            }

            Action::ReplaceLayout { elements } => {
                let mut seen = HashSet::new();
                for element in elements {
                    if !seen.insert(element.id.as_str()) {
                        return Err(ActionError::DuplicateId(element.id.clone()));
                    }
                }
                Ok(())
            }

            Action::SelectElement { .. }
            | Action::DeleteElement { .. }
            | Action::ReorderElement { .. }
            | Action::SetPanel { .. } => Ok(()),
        }
    }

    /// Get a debug name for this action
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddElement { .. } => "add_element",
            Action::SelectElement { .. } => "select_element",
            Action::UpdateContent { .. } => "update_content",
            Action::DeleteElement { .. } => "delete_element",
            Action::ReorderElement { .. } => "reorder_element",
            Action::ReplaceLayout { .. } => "replace_layout",
            Action::SetPanel { .. } => "set_panel",
        }
    }
}

/// Pure state transition: returns the next state, leaving `state` untouched
pub fn reduce(state: &BuilderState, action: &Action) -> Result<BuilderState, ActionError> {
    let mut next = state.clone();
    action.apply(&mut next)?;
    Ok(next)
}
