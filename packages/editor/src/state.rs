//! # Builder State
//!
//! The explicit state object every action transitions. It holds the
//! canonical layout plus view state (selection, active sidebar panel) that
//! the builder coordinates with the editor surface.

use folio_model::Element;
use serde::{Deserialize, Serialize};

/// Sidebar tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    /// Element palette and quick actions
    #[default]
    Elements,

    /// Property editor for the selected element
    Properties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuilderState {
    /// Ordered layout; `elements[i].position == i`
    pub elements: Vec<Element>,

    /// Id of the selected element, if any
    pub selected: Option<String>,

    pub panel: Panel,
}

impl BuilderState {
    /// State over an existing layout, positions renumbered to match order
    /// and content brought back into range
    pub fn from_layout(elements: Vec<Element>) -> Self {
        let mut elements = sanitized(elements);
        crate::sortable::renumber(&mut elements);
        Self {
            elements,
            selected: None,
            panel: Panel::default(),
        }
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.as_deref().and_then(|id| self.find(id))
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether positions are the identity permutation of indices
    pub fn is_dense(&self) -> bool {
        self.elements
            .iter()
            .enumerate()
            .all(|(index, element)| element.position == index)
    }
}

pub(crate) fn sanitized(elements: Vec<Element>) -> Vec<Element> {
    elements
        .into_iter()
        .map(|element| Element {
            content: element.content.sanitize(),
            ..element
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{ElementContent, ElementKind, TextContent, MAX_FONT_SIZE};

    #[test]
    fn test_from_layout_renumbers() {
        let state = BuilderState::from_layout(vec![
            Element::with_defaults("a", ElementKind::Text, 4),
            Element::with_defaults("b", ElementKind::Chart, 9),
        ]);

        assert!(state.is_dense());
        assert_eq!(state.elements[1].position, 1);
        assert_eq!(state.panel, Panel::Elements);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_from_layout_clamps_font_size() {
        let oversized = ElementContent::Text(TextContent {
            font_size: 200,
            ..TextContent::default()
        });
        let state = BuilderState::from_layout(vec![Element::new("a", oversized, 0)]);

        match &state.elements[0].content {
            ElementContent::Text(text) => assert_eq!(text.font_size, MAX_FONT_SIZE),
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[test]
    fn test_selected_element_lookup() {
        let mut state = BuilderState::from_layout(vec![Element::with_defaults(
            "a",
            ElementKind::Image,
            0,
        )]);
        assert!(state.selected_element().is_none());

        state.selected = Some("a".to_string());
        assert_eq!(state.selected_element().unwrap().id, "a");
        assert!(state.is_selected("a"));

        state.selected = Some("gone".to_string());
        assert!(state.selected_element().is_none());
    }
}
