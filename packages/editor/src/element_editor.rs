//! # Element Editor
//!
//! Property editor for a single element.
//!
//! The editor holds no draft state. Each field change is merged into a copy
//! of the element's current content and handed back as a full
//! [`Action::UpdateContent`], so the builder's store is the only place an
//! edit ever lands.
//!
//! ```text
//! ContentEdit ──merge(current)──▶ ElementContent ──▶ Action::UpdateContent
//! ```

use crate::actions::Action;
use folio_model::{
    ChartContent, ChartKind, ContentError, DataPoint, Element, ElementContent, ElementKind,
    FontWeight, ImageContent, TableContent, TextContent, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Cannot apply a {found} edit to a {expected} element")]
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },

    #[error(transparent)]
    Content(#[from] ContentError),
}

/// A single form-field change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "edit", rename_all = "lowercase")]
pub enum ContentEdit {
    Text(TextEdit),
    Image(ImageEdit),
    Table(TableEdit),
    Chart(ChartEdit),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TextEdit {
    SetText(String),
    /// Clamped into the supported font size range
    SetFontSize(i64),
    SetFontWeight(FontWeight),
    SetColor(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImageEdit {
    SetSrc(String),
    SetAlt(String),
    SetWidth(u32),
    SetHeight(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableEdit {
    SetHeader { index: usize, value: String },
    SetCell { row: usize, column: usize, value: String },
    AddColumn,
    RemoveColumn(usize),
    AddRow,
    RemoveRow(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEdit {
    SetTitle(String),
    SetKind(ChartKind),
    AddPoint,
    SetPointName { index: usize, name: String },
    SetPointValue { index: usize, value: f64 },
    RemovePoint(usize),
}

impl ContentEdit {
    /// Element type this edit applies to
    pub fn kind(&self) -> ElementKind {
        match self {
            ContentEdit::Text(_) => ElementKind::Text,
            ContentEdit::Image(_) => ElementKind::Image,
            ContentEdit::Table(_) => ElementKind::Table,
            ContentEdit::Chart(_) => ElementKind::Chart,
        }
    }

    /// Merge this change into `content`, producing the full replacement
    pub fn merge(&self, content: &ElementContent) -> Result<ElementContent, EditError> {
        match (self, content) {
            (ContentEdit::Text(edit), ElementContent::Text(text)) => {
                let mut next = text.clone();
                edit.apply(&mut next);
                Ok(ElementContent::Text(next))
            }
            (ContentEdit::Image(edit), ElementContent::Image(image)) => {
                let mut next = image.clone();
                edit.apply(&mut next);
                Ok(ElementContent::Image(next))
            }
            (ContentEdit::Table(edit), ElementContent::Table(table)) => {
                let mut next = table.clone();
                edit.apply(&mut next)?;
                Ok(ElementContent::Table(next))
            }
            (ContentEdit::Chart(edit), ElementContent::Chart(chart)) => {
                let mut next = chart.clone();
                edit.apply(&mut next)?;
                Ok(ElementContent::Chart(next))
            }
            _ => Err(EditError::KindMismatch {
                expected: content.kind(),
                found: self.kind(),
            }),
        }
    }
}

impl TextEdit {
    fn apply(&self, text: &mut TextContent) {
        match self {
            TextEdit::SetText(value) => text.text = value.clone(),
            TextEdit::SetFontSize(size) => text.set_font_size(*size),
            TextEdit::SetFontWeight(weight) => text.font_weight = *weight,
            TextEdit::SetColor(color) => text.color = color.clone(),
        }
    }
}

impl ImageEdit {
    fn apply(&self, image: &mut ImageContent) {
        match self {
            ImageEdit::SetSrc(src) => image.src = src.clone(),
            ImageEdit::SetAlt(alt) => image.alt = alt.clone(),
            ImageEdit::SetWidth(width) => image.width = *width,
            ImageEdit::SetHeight(height) => image.height = *height,
        }
    }
}

impl TableEdit {
    fn apply(&self, table: &mut TableContent) -> Result<(), ContentError> {
        match self {
            TableEdit::SetHeader { index, value } => table.set_header(*index, value.clone()),
            TableEdit::SetCell { row, column, value } => {
                table.set_cell(*row, *column, value.clone())
            }
            TableEdit::AddColumn => {
                table.add_column();
                Ok(())
            }
            TableEdit::RemoveColumn(index) => table.remove_column(*index),
            TableEdit::AddRow => {
                table.add_row();
                Ok(())
            }
            TableEdit::RemoveRow(index) => table.remove_row(*index),
        }
    }
}

impl ChartEdit {
    fn apply(&self, chart: &mut ChartContent) -> Result<(), ContentError> {
        match self {
            ChartEdit::SetTitle(title) => {
                chart.title = title.clone();
                Ok(())
            }
            ChartEdit::SetKind(kind) => {
                chart.kind = *kind;
                Ok(())
            }
            ChartEdit::AddPoint => {
                chart.add_point();
                Ok(())
            }
            ChartEdit::SetPointName { index, name } => chart.set_point_name(*index, name.clone()),
            ChartEdit::SetPointValue { index, value } => chart.set_point_value(*index, *value),
            ChartEdit::RemovePoint(index) => chart.remove_point(*index),
        }
    }
}

/// One form control in the property panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub id: &'static str,
    pub label: &'static str,
    pub control: Control,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "camelCase")]
pub enum Control {
    TextArea {
        value: String,
        placeholder: &'static str,
    },
    Input {
        value: String,
        placeholder: &'static str,
    },
    Number {
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    },
    Select {
        value: &'static str,
        options: Vec<SelectOption>,
    },
    Color {
        value: String,
    },
    /// Editable list of table headers
    Headers {
        headers: Vec<String>,
        can_remove: bool,
    },
    /// Editable table body
    Rows {
        rows: Vec<Vec<String>>,
        can_remove: bool,
    },
    /// Editable chart series
    Series {
        points: Vec<DataPoint>,
        can_remove: bool,
    },
}

/// Editor view over one builder-owned element
pub struct ElementEditor<'a> {
    element: &'a Element,
}

impl<'a> ElementEditor<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        self.element
    }

    /// Panel heading, e.g. "Table Properties"
    pub fn title(&self) -> String {
        format!("{} Properties", self.element.kind().label())
    }

    /// Compute the merged content for `edit` without producing an action
    pub fn merged(&self, edit: &ContentEdit) -> Result<ElementContent, EditError> {
        edit.merge(&self.element.content)
    }

    /// Turn a field change into the full-content update for the builder
    pub fn edit(&self, edit: ContentEdit) -> Result<Action, EditError> {
        let content = self.merged(&edit)?;
        Ok(Action::UpdateContent {
            element_id: self.element.id.clone(),
            content,
        })
    }

    pub fn delete(&self) -> Action {
        Action::DeleteElement {
            element_id: self.element.id.clone(),
        }
    }

    /// Type-specific form controls with current values
    pub fn fields(&self) -> Vec<Field> {
        match &self.element.content {
            ElementContent::Text(text) => vec![
                Field {
                    id: "text",
                    label: "Text Content",
                    control: Control::TextArea {
                        value: text.text.clone(),
                        placeholder: "Enter your text",
                    },
                },
                Field {
                    id: "fontSize",
                    label: "Font Size",
                    control: Control::Number {
                        value: text.font_size as f64,
                        min: Some(MIN_FONT_SIZE as f64),
                        max: Some(MAX_FONT_SIZE as f64),
                    },
                },
                Field {
                    id: "fontWeight",
                    label: "Font Weight",
                    control: Control::Select {
                        value: text.font_weight.as_str(),
                        options: FontWeight::ALL
                            .iter()
                            .map(|w| SelectOption {
                                value: w.as_str(),
                                label: w.label(),
                            })
                            .collect(),
                    },
                },
                Field {
                    id: "color",
                    label: "Text Color",
                    control: Control::Color {
                        value: text.color.clone(),
                    },
                },
            ],

            ElementContent::Image(image) => vec![
                Field {
                    id: "src",
                    label: "Image URL",
                    control: Control::Input {
                        value: image.src.clone(),
                        placeholder: "Enter image URL",
                    },
                },
                Field {
                    id: "alt",
                    label: "Alt Text",
                    control: Control::Input {
                        value: image.alt.clone(),
                        placeholder: "Enter alt text",
                    },
                },
                Field {
                    id: "width",
                    label: "Width",
                    control: Control::Number {
                        value: image.width as f64,
                        min: None,
                        max: None,
                    },
                },
                Field {
                    id: "height",
                    label: "Height",
                    control: Control::Number {
                        value: image.height as f64,
                        min: None,
                        max: None,
                    },
                },
            ],

            ElementContent::Table(table) => vec![
                Field {
                    id: "headers",
                    label: "Headers",
                    control: Control::Headers {
                        headers: table.headers.clone(),
                        can_remove: table.headers.len() > 1,
                    },
                },
                Field {
                    id: "rows",
                    label: "Rows",
                    control: Control::Rows {
                        rows: table.rows.clone(),
                        can_remove: table.rows.len() > 1,
                    },
                },
            ],

            ElementContent::Chart(chart) => vec![
                Field {
                    id: "title",
                    label: "Chart Title",
                    control: Control::Input {
                        value: chart.title.clone(),
                        placeholder: "Enter chart title",
                    },
                },
                Field {
                    id: "chartType",
                    label: "Chart Type",
                    control: Control::Select {
                        value: chart.kind.as_str(),
                        options: ChartKind::ALL
                            .iter()
                            .map(|k| SelectOption {
                                value: k.as_str(),
                                label: k.label(),
                            })
                            .collect(),
                    },
                },
                Field {
                    id: "data",
                    label: "Data Points",
                    control: Control::Series {
                        points: chart.data.clone(),
                        can_remove: chart.data.len() > 1,
                    },
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_element(headers: &[&str], rows: &[&[&str]]) -> Element {
        let table = TableContent::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        );
        Element::new("t", ElementContent::Table(table), 0)
    }

    fn table_of(action: Action) -> TableContent {
        match action {
            Action::UpdateContent {
                content: ElementContent::Table(table),
                ..
            } => table,
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_remove_header_removes_cells() {
        let element = table_element(&["H1", "H2", "H3"], &[&["a", "b", "c"]]);
        let editor = ElementEditor::new(&element);

        let table = table_of(editor.edit(ContentEdit::Table(TableEdit::RemoveColumn(1))).unwrap());

        assert_eq!(table.headers, vec!["H1", "H3"]);
        assert_eq!(table.rows, vec![vec!["a", "c"]]);
    }

    #[test]
    fn test_row_length_tracks_headers() {
        let mut element = table_element(&["A", "B"], &[&["1", "2"], &["3", "4"]]);

        let edits = [
            TableEdit::AddColumn,
            TableEdit::AddColumn,
            TableEdit::RemoveColumn(0),
            TableEdit::AddRow,
            TableEdit::RemoveColumn(2),
            TableEdit::AddColumn,
        ];

        for edit in edits {
            let action = ElementEditor::new(&element)
                .edit(ContentEdit::Table(edit))
                .unwrap();
            let table = table_of(action);
            assert!(table.rows.iter().all(|row| row.len() == table.headers.len()));
            element.content = ElementContent::Table(table);
        }
    }

    #[test]
    fn test_new_row_sized_to_headers() {
        let element = table_element(&["A", "B", "C", "D"], &[&["1", "2", "3", "4"]]);
        let table = table_of(
            ElementEditor::new(&element)
                .edit(ContentEdit::Table(TableEdit::AddRow))
                .unwrap(),
        );
        assert_eq!(table.rows[1], vec!["", "", "", ""]);
    }

    #[test]
    fn test_edit_does_not_touch_element() {
        let element = Element::with_defaults("x", ElementKind::Text, 0);
        let before = element.clone();

        let action = ElementEditor::new(&element)
            .edit(ContentEdit::Text(TextEdit::SetFontSize(500)))
            .unwrap();

        assert_eq!(element, before);
        match action {
            Action::UpdateContent {
                element_id,
                content: ElementContent::Text(text),
            } => {
                assert_eq!(element_id, "x");
                assert_eq!(text.font_size, MAX_FONT_SIZE);
                assert_eq!(text.text, "Enter your text here");
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_kind_mismatch() {
        let element = Element::with_defaults("x", ElementKind::Image, 0);
        let result = ElementEditor::new(&element).edit(ContentEdit::Chart(ChartEdit::AddPoint));

        assert_eq!(
            result,
            Err(EditError::KindMismatch {
                expected: ElementKind::Image,
                found: ElementKind::Chart
            })
        );
    }

    #[test]
    fn test_chart_point_floor() {
        let chart = ChartContent {
            data: vec![DataPoint::new("only", 1.0)],
            ..ChartContent::default()
        };
        let element = Element::new("c", ElementContent::Chart(chart), 0);
        let editor = ElementEditor::new(&element);

        assert_eq!(
            editor.edit(ContentEdit::Chart(ChartEdit::RemovePoint(0))),
            Err(EditError::Content(ContentError::LastDataPoint))
        );

        let fields = editor.fields();
        match &fields[2].control {
            Control::Series { can_remove, .. } => assert!(!can_remove),
            other => panic!("unexpected control {:?}", other),
        }
    }

    #[test]
    fn test_text_fields() {
        let element = Element::with_defaults("x", ElementKind::Text, 0);
        let editor = ElementEditor::new(&element);
        let fields = editor.fields();

        assert_eq!(editor.title(), "Text Properties");
        assert_eq!(
            fields.iter().map(|f| f.id).collect::<Vec<_>>(),
            vec!["text", "fontSize", "fontWeight", "color"]
        );
        match &fields[1].control {
            Control::Number { min, max, .. } => {
                assert_eq!(*min, Some(8.0));
                assert_eq!(*max, Some(72.0));
            }
            other => panic!("unexpected control {:?}", other),
        }
    }

    #[test]
    fn test_delete_action() {
        let element = Element::with_defaults("x", ElementKind::Chart, 0);
        assert_eq!(
            ElementEditor::new(&element).delete(),
            Action::DeleteElement {
                element_id: "x".to_string()
            }
        );
    }
}
