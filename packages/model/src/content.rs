//! # Content Variants
//!
//! Type-specific payloads for the four element types.
//!
//! Every variant implements `Default` with the content a freshly added
//! element starts with. Content structs decode with `#[serde(default)]` so a
//! persisted layout missing a field still loads; the missing field takes the
//! variant's default value.
//!
//! ## Invariants
//!
//! - Text: `font_size` stays within `[MIN_FONT_SIZE, MAX_FONT_SIZE]`. Decoding
//!   clamps it; a null or non-numeric size decodes as the default.
//! - Image: a null or non-numeric dimension decodes as the default, a
//!   negative one as 0.
//! - Table: at least one header, every row exactly `headers.len()` cells.
//! - Chart: at least one data point.

use crate::{ContentError, ElementKind};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 72;
pub const DEFAULT_FONT_SIZE: u32 = 16;

const DEFAULT_IMAGE_WIDTH: u32 = 400;
const DEFAULT_IMAGE_HEIGHT: u32 = 200;

/// Clamp an arbitrary requested size into the supported font size range
pub fn clamp_font_size(size: i64) -> u32 {
    size.clamp(MIN_FONT_SIZE as i64, MAX_FONT_SIZE as i64) as u32
}

/// Payload of an element, tagged by element type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ElementContent {
    Text(TextContent),
    Image(ImageContent),
    Table(TableContent),
    Chart(ChartContent),
}

impl ElementContent {
    /// Content a new element of `kind` starts with
    pub fn default_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => ElementContent::Text(TextContent::default()),
            ElementKind::Image => ElementContent::Image(ImageContent::default()),
            ElementKind::Table => ElementContent::Table(TableContent::default()),
            ElementKind::Chart => ElementContent::Chart(ChartContent::default()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Image(_) => ElementKind::Image,
            ElementContent::Table(_) => ElementKind::Table,
            ElementContent::Chart(_) => ElementKind::Chart,
        }
    }

    /// Check structural invariants without modifying anything
    pub fn validate(&self) -> Result<(), ContentError> {
        match self {
            ElementContent::Text(_) | ElementContent::Image(_) => Ok(()),
            ElementContent::Table(table) => table.validate(),
            ElementContent::Chart(chart) => chart.validate(),
        }
    }

    /// Bring range-limited fields back into range
    pub fn sanitize(self) -> Self {
        match self {
            ElementContent::Text(mut text) => {
                text.font_size = clamp_font_size(text.font_size as i64);
                ElementContent::Text(text)
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Lighter,
}

impl FontWeight {
    pub const ALL: [FontWeight; 3] = [FontWeight::Normal, FontWeight::Bold, FontWeight::Lighter];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
            FontWeight::Lighter => "lighter",
        }
    }

    /// Human-readable option label
    pub fn label(&self) -> &'static str {
        match self {
            FontWeight::Normal => "Normal",
            FontWeight::Bold => "Bold",
            FontWeight::Lighter => "Light",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            "lighter" => Ok(FontWeight::Lighter),
            other => Err(format!("unknown font weight: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextContent {
    pub text: String,

    #[serde(deserialize_with = "lenient_font_size")]
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub color: String,
}

impl TextContent {
    pub fn new(text: impl Into<String>, font_size: u32, font_weight: FontWeight, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: clamp_font_size(font_size as i64),
            font_weight,
            color: color.into(),
        }
    }

    pub fn set_font_size(&mut self, size: i64) {
        self.font_size = clamp_font_size(size);
    }
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            text: "Enter your text here".to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_weight: FontWeight::Normal,
            color: "#000000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageContent {
    pub src: String,
    pub alt: String,

    #[serde(deserialize_with = "lenient_width")]
    pub width: u32,

    #[serde(deserialize_with = "lenient_height")]
    pub height: u32,
}

impl Default for ImageContent {
    fn default() -> Self {
        Self {
            src: "/placeholder.svg?height=200&width=400".to_string(),
            alt: "Placeholder image".to_string(),
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableContent {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableContent {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.headers.is_empty() {
            return Err(ContentError::EmptyHeaders);
        }

        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != self.headers.len() {
                return Err(ContentError::RaggedRow {
                    row,
                    expected: self.headers.len(),
                    found: cells.len(),
                });
            }
        }

        Ok(())
    }

    /// Append a header and one blank cell to every row
    pub fn add_column(&mut self) {
        self.headers.push(format!("Column {}", self.headers.len() + 1));
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Remove header `index` and the matching cell from every row
    pub fn remove_column(&mut self, index: usize) -> Result<(), ContentError> {
        check_index(index, self.headers.len())?;
        if self.headers.len() == 1 {
            return Err(ContentError::LastColumn);
        }

        self.headers.remove(index);
        for row in &mut self.rows {
            if index < row.len() {
                row.remove(index);
            }
        }
        Ok(())
    }

    /// Append a row of blank cells sized to the current header count
    pub fn add_row(&mut self) {
        self.rows.push(vec![String::new(); self.headers.len()]);
    }

    /// Remove row `index`. The last remaining row cannot be removed.
    pub fn remove_row(&mut self, index: usize) -> Result<(), ContentError> {
        check_index(index, self.rows.len())?;
        if self.rows.len() == 1 {
            return Err(ContentError::LastRow);
        }
        self.rows.remove(index);
        Ok(())
    }

    pub fn set_header(&mut self, index: usize, value: impl Into<String>) -> Result<(), ContentError> {
        check_index(index, self.headers.len())?;
        self.headers[index] = value.into();
        Ok(())
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> Result<(), ContentError> {
        check_index(row, self.rows.len())?;
        let cells = &mut self.rows[row];
        check_index(column, cells.len())?;
        cells[column] = value.into();
        Ok(())
    }
}

impl Default for TableContent {
    fn default() -> Self {
        let headers = (1..=3).map(|c| format!("Column {}", c)).collect();
        let rows = (1..=2)
            .map(|r| (1..=3).map(|c| format!("Row {} Col {}", r, c)).collect())
            .collect();
        Self { headers, rows }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Pie => "Pie Chart",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "pie" => Ok(ChartKind::Pie),
            other => Err(format!("unknown chart type: {}", other)),
        }
    }
}

/// One `{name, value}` point of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_number")]
    pub value: f64,
}

impl DataPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartContent {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    pub data: Vec<DataPoint>,
}

impl ChartContent {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.data.is_empty() {
            return Err(ContentError::EmptySeries);
        }
        Ok(())
    }

    pub fn add_point(&mut self) {
        self.data
            .push(DataPoint::new(format!("Item {}", self.data.len() + 1), 0.0));
    }

    /// Remove point `index`. The last remaining point cannot be removed.
    pub fn remove_point(&mut self, index: usize) -> Result<(), ContentError> {
        check_index(index, self.data.len())?;
        if self.data.len() == 1 {
            return Err(ContentError::LastDataPoint);
        }
        self.data.remove(index);
        Ok(())
    }

    pub fn set_point_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), ContentError> {
        check_index(index, self.data.len())?;
        self.data[index].name = name.into();
        Ok(())
    }

    pub fn set_point_value(&mut self, index: usize, value: f64) -> Result<(), ContentError> {
        check_index(index, self.data.len())?;
        self.data[index].value = value;
        Ok(())
    }
}

impl Default for ChartContent {
    fn default() -> Self {
        Self {
            kind: ChartKind::Bar,
            title: "Sample Chart".to_string(),
            data: vec![
                DataPoint::new("Jan", 400.0),
                DataPoint::new("Feb", 300.0),
                DataPoint::new("Mar", 500.0),
                DataPoint::new("Apr", 200.0),
            ],
        }
    }
}

fn check_index(index: usize, len: usize) -> Result<(), ContentError> {
    if index >= len {
        return Err(ContentError::IndexOutOfRange { index, len });
    }
    Ok(())
}

// Non-numeric values (strings, null) decode as 0
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

// Integer-like JSON value, or None for null, strings and other shapes
fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|n| n.is_finite())
        .map(|n| n.clamp(i64::MIN as f64, i64::MAX as f64) as i64))
}

fn lenient_font_size<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer(deserializer)?.map_or(DEFAULT_FONT_SIZE, clamp_font_size))
}

fn lenient_width<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer(deserializer)?.map_or(DEFAULT_IMAGE_WIDTH, dimension))
}

fn lenient_height<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer(deserializer)?.map_or(DEFAULT_IMAGE_HEIGHT, dimension))
}

fn dimension(n: i64) -> u32 {
    n.clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_rectangular() {
        let table = TableContent::default();
        assert_eq!(table.headers, vec!["Column 1", "Column 2", "Column 3"]);
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.iter().all(|row| row.len() == 3));
        assert_eq!(table.rows[1][2], "Row 2 Col 3");
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_remove_middle_column() {
        let mut table = TableContent::new(
            vec!["H1".into(), "H2".into(), "H3".into()],
            vec![vec!["a".into(), "b".into(), "c".into()]],
        );

        table.remove_column(1).unwrap();

        assert_eq!(table.headers, vec!["H1", "H3"]);
        assert_eq!(table.rows[0], vec!["a", "c"]);
    }

    #[test]
    fn test_add_column_extends_every_row() {
        let mut table = TableContent::default();
        table.add_column();

        assert_eq!(table.headers.last().unwrap(), "Column 4");
        assert!(table.rows.iter().all(|row| row.len() == 4));
        assert_eq!(table.rows[0][3], "");
    }

    #[test]
    fn test_last_column_and_row_are_kept() {
        let mut table = TableContent::new(vec!["Only".into()], vec![vec!["x".into()]]);

        assert_eq!(table.remove_column(0), Err(ContentError::LastColumn));
        assert_eq!(table.remove_row(0), Err(ContentError::LastRow));
        assert_eq!(
            table.remove_column(3),
            Err(ContentError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_ragged_table_rejected() {
        let table = TableContent::new(
            vec!["A".into(), "B".into()],
            vec![vec!["1".into(), "2".into()], vec!["3".into()]],
        );

        assert_eq!(
            table.validate(),
            Err(ContentError::RaggedRow { row: 1, expected: 2, found: 1 })
        );
    }

    #[test]
    fn test_font_size_clamped() {
        let mut text = TextContent::default();
        text.set_font_size(200);
        assert_eq!(text.font_size, MAX_FONT_SIZE);
        text.set_font_size(-4);
        assert_eq!(text.font_size, MIN_FONT_SIZE);

        let sanitized = ElementContent::Text(TextContent {
            font_size: 4,
            ..TextContent::default()
        })
        .sanitize();
        match sanitized {
            ElementContent::Text(text) => assert_eq!(text.font_size, 8),
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[test]
    fn test_chart_keeps_one_point() {
        let mut chart = ChartContent::default();
        chart.add_point();
        assert_eq!(chart.data.len(), 5);
        assert_eq!(chart.data[4], DataPoint::new("Item 5", 0.0));

        for _ in 0..4 {
            chart.remove_point(0).unwrap();
        }
        assert_eq!(chart.remove_point(0), Err(ContentError::LastDataPoint));
        assert_eq!(chart.data.len(), 1);
    }

    #[test]
    fn test_text_content_uses_camel_case() {
        let json = serde_json::to_value(TextContent::default()).unwrap();
        assert_eq!(json["fontSize"], 16);
        assert_eq!(json["fontWeight"], "normal");
        assert_eq!(json["color"], "#000000");
    }

    #[test]
    fn test_chart_point_value_is_lenient() {
        let chart: ChartContent = serde_json::from_str(
            r#"{"type": "pie", "title": "T", "data": [{"name": "a", "value": "oops"}, {"name": "b"}]}"#,
        )
        .unwrap();

        assert_eq!(chart.kind, ChartKind::Pie);
        assert_eq!(chart.data[0].value, 0.0);
        assert_eq!(chart.data[1].value, 0.0);
    }

    #[test]
    fn test_out_of_range_numbers_are_tolerated() {
        let text: TextContent =
            serde_json::from_str(r#"{"text": "Hi", "fontSize": null}"#).unwrap();
        assert_eq!(text.font_size, DEFAULT_FONT_SIZE);

        let text: TextContent = serde_json::from_str(r#"{"fontSize": 200}"#).unwrap();
        assert_eq!(text.font_size, MAX_FONT_SIZE);

        let text: TextContent = serde_json::from_str(r#"{"fontSize": -3}"#).unwrap();
        assert_eq!(text.font_size, MIN_FONT_SIZE);

        let image: ImageContent =
            serde_json::from_str(r#"{"src": "/a.png", "width": null, "height": -5}"#).unwrap();
        assert_eq!(image.width, 400);
        assert_eq!(image.height, 0);
    }

    #[test]
    fn test_layout_with_null_and_negative_numbers_loads() {
        let layout: Vec<crate::Element> = serde_json::from_str(
            r##"[
                {"id": "t", "type": "text", "content": {"text": "Hi", "fontSize": null, "fontWeight": "bold", "color": "#111111"}, "position": 0},
                {"id": "i", "type": "image", "content": {"src": "/a.png", "alt": "A", "width": -5, "height": null}, "position": 1}
            ]"##,
        )
        .unwrap();

        match &layout[0].content {
            ElementContent::Text(text) => {
                assert_eq!(text.font_size, DEFAULT_FONT_SIZE);
                assert_eq!(text.font_weight, FontWeight::Bold);
            }
            other => panic!("unexpected content {:?}", other),
        }
        match &layout[1].content {
            ElementContent::Image(image) => {
                assert_eq!(image.width, 0);
                assert_eq!(image.height, 200);
            }
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let image: ImageContent = serde_json::from_str(r#"{"src": "/logo.png"}"#).unwrap();
        assert_eq!(image.src, "/logo.png");
        assert_eq!(image.width, 400);
        assert_eq!(image.height, 200);
    }
}
