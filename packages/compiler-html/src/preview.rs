//! Preview tree
//!
//! A `PreviewDocument` is what the user sees in the preview pane and what
//! gets exported. It is derived from a report snapshot and never written
//! back.

use crate::chart::{normalize_chart_data, normalize_points};
use crate::samples::SamplePool;
use folio_model::{
    clamp_font_size, ChartContent, ChartKind, DataPoint, Element, ElementContent, FontWeight, ImageContent, Report,
    TableContent, TextContent,
};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

const FALLBACK_SRC: &str = "/placeholder.svg";
const FALLBACK_ALT: &str = "Image";
const FALLBACK_WIDTH: u32 = 400;
const FALLBACK_HEIGHT: u32 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Replace element content with picks from the sample pool
    pub sample_data: bool,
}

impl PreviewOptions {
    pub fn with_sample_data() -> Self {
        Self { sample_data: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewDocument {
    pub title: String,
    pub description: String,
    pub blocks: Vec<PreviewBlock>,
}

impl PreviewDocument {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One rendered element, in layout order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewBlock {
    pub id: String,
    pub node: PreviewNode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PreviewNode {
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
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Chart {
        kind: ChartKind,
        title: String,
        series: Vec<DataPoint>,
    },
}

/// Project `report` into a preview tree
///
/// With `options.sample_data` each block draws fresh content from `pool`;
/// styling, chart kind and title always come from the element itself.
pub fn build_preview<R: Rng + ?Sized>(
    report: &Report,
    options: &PreviewOptions,
    pool: &SamplePool,
    rng: &mut R,
) -> PreviewDocument {
    debug!(
        report_id = %report.id,
        elements = report.layout.len(),
        sample_data = options.sample_data,
        "building preview"
    );

    let mut elements: Vec<&Element> = report.layout.iter().collect();
    elements.sort_by_key(|e| e.position);

    let blocks = elements
        .into_iter()
        .map(|element| PreviewBlock {
            id: element.id.clone(),
            node: if options.sample_data {
                sample_node(&element.content, pool, rng)
            } else {
                element_node(&element.content)
            },
        })
        .collect();

    PreviewDocument {
        title: report.name.clone(),
        description: report.description.clone(),
        blocks,
    }
}

fn element_node(content: &ElementContent) -> PreviewNode {
    match content {
        ElementContent::Text(text) => text_node(text, &text.text),
        ElementContent::Image(image) => image_node(image, image),
        ElementContent::Table(table) => table_node(table),
        ElementContent::Chart(chart) => PreviewNode::Chart {
            kind: chart.kind,
            title: chart.title.clone(),
            series: normalize_points(&chart.data),
        },
    }
}

fn sample_node<R: Rng + ?Sized>(content: &ElementContent, pool: &SamplePool, rng: &mut R) -> PreviewNode {
    match content {
        ElementContent::Text(text) => match pool.pick_text(rng) {
            Some(sample) => text_node(text, sample),
            None => text_node(text, &text.text),
        },
        ElementContent::Image(image) => match pool.pick_image(rng) {
            Some(sample) => image_node(image, sample),
            None => image_node(image, image),
        },
        ElementContent::Table(table) => table_node(pool.pick_table(rng).unwrap_or(table)),
        ElementContent::Chart(chart) => sample_chart(chart, pool, rng),
    }
}

fn text_node(style: &TextContent, text: &str) -> PreviewNode {
    PreviewNode::Text {
        text: text.to_string(),
        font_size: clamp_font_size(style.font_size as i64),
        font_weight: style.font_weight,
        color: style.color.clone(),
    }
}

// Element dimensions win over the source's when set
fn image_node(element: &ImageContent, source: &ImageContent) -> PreviewNode {
    let non_empty = |value: &str, fallback: &str| {
        if value.trim().is_empty() {
            fallback.to_string()
        } else {
            value.to_string()
        }
    };
    let dimension = |own: u32, other: u32, fallback: u32| {
        [own, other].into_iter().find(|d| *d > 0).unwrap_or(fallback)
    };

    PreviewNode::Image {
        src: non_empty(&source.src, FALLBACK_SRC),
        alt: non_empty(&source.alt, FALLBACK_ALT),
        width: dimension(element.width, source.width, FALLBACK_WIDTH),
        height: dimension(element.height, source.height, FALLBACK_HEIGHT),
    }
}

fn table_node(table: &TableContent) -> PreviewNode {
    PreviewNode::Table {
        headers: table.headers.clone(),
        rows: table.rows.clone(),
    }
}

fn sample_chart<R: Rng + ?Sized>(chart: &ChartContent, pool: &SamplePool, rng: &mut R) -> PreviewNode {
    let series = match pool.pick_chart(rng) {
        Some(raw) => normalize_chart_data(raw),
        None => normalize_points(&chart.data),
    };

    PreviewNode::Chart {
        kind: chart.kind,
        title: chart.title.clone(),
        series,
    }
}
