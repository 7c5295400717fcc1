//! # Sortable List
//!
//! Drag-start / drag-end contract over the ordered element ids.
//!
//! Collision detection and axis locking belong to the host's drag-and-drop
//! layer. This controller only sees which element was picked up and which
//! element it was dropped over, and turns that into a reorder action.

use crate::actions::Action;
use folio_model::{Element, ElementContent, ElementKind, FontWeight};
use serde::Serialize;

const PREVIEW_MAX_WIDTH: u32 = 200;
const PREVIEW_MAX_HEIGHT: u32 = 100;

/// Move the item at `from` to `to`, shifting the items in between by one
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// Rewrite every position to match its index
pub fn renumber(elements: &mut [Element]) {
    for (index, element) in elements.iter_mut().enumerate() {
        element.position = index;
    }
}

/// Reorderable view over builder-owned elements
pub struct SortableList<'a> {
    elements: &'a [Element],
    selected: Option<&'a str>,
    active: Option<String>,
}

impl<'a> SortableList<'a> {
    pub fn new(elements: &'a [Element], selected: Option<&'a str>) -> Self {
        Self {
            elements,
            selected,
            active: None,
        }
    }

    /// Pick up an element. Returns false for unknown ids.
    pub fn drag_start(&mut self, id: &str) -> bool {
        if self.elements.iter().any(|e| e.id == id) {
            self.active = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Drop the dragged element over `over_id`
    ///
    /// Yields a reorder action only when the drop target differs from the
    /// dragged element. Dropping outside the list (`None`) cancels.
    pub fn drag_end(&mut self, over_id: Option<&str>) -> Option<Action> {
        let active_id = self.active.take()?;
        let over_id = over_id?;

        if active_id == over_id || !self.elements.iter().any(|e| e.id == over_id) {
            return None;
        }

        Some(Action::ReorderElement {
            active_id,
            over_id: over_id.to_string(),
        })
    }

    pub fn drag_cancel(&mut self) {
        self.active = None;
    }

    /// Summaries for rendering the list, in layout order
    pub fn items(&self) -> Vec<ItemSummary> {
        self.elements
            .iter()
            .map(|element| ItemSummary {
                id: element.id.clone(),
                kind: element.kind(),
                selected: self.selected == Some(element.id.as_str()),
                dragging: self.active.as_deref() == Some(element.id.as_str()),
                preview: ItemPreview::of(&element.content),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    pub id: String,
    pub kind: ElementKind,
    pub selected: bool,
    pub dragging: bool,
    pub preview: ItemPreview,
}

/// Compact in-list rendering of an element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemPreview {
    Text {
        text: String,
        font_size: u32,
        font_weight: FontWeight,
        color: String,
    },
    Image {
        src: String,
        alt: String,
        width: u32,
        height: u32,
    },
    Table {
        summary: String,
        headers: String,
    },
    Chart {
        title: String,
        caption: String,
    },
}

impl ItemPreview {
    fn of(content: &ElementContent) -> Self {
        match content {
            ElementContent::Text(text) => ItemPreview::Text {
                text: text.text.clone(),
                font_size: text.font_size,
                font_weight: text.font_weight,
                color: text.color.clone(),
            },
            ElementContent::Image(image) => ItemPreview::Image {
                src: if image.src.is_empty() {
                    "/placeholder.svg".to_string()
                } else {
                    image.src.clone()
                },
                alt: image.alt.clone(),
                width: image.width.min(PREVIEW_MAX_WIDTH),
                height: image.height.min(PREVIEW_MAX_HEIGHT),
            },
            ElementContent::Table(table) => ItemPreview::Table {
                summary: format!(
                    "Table ({} columns, {} rows)",
                    table.headers.len(),
                    table.rows.len()
                ),
                headers: table.headers.join(", "),
            },
            ElementContent::Chart(chart) => ItemPreview::Chart {
                title: chart.title.clone(),
                caption: format!("{} chart", chart.kind),
            },
        }
    }
}
