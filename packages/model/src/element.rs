use crate::ElementContent;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Element type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Table,
    Chart,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::Table,
        ElementKind::Chart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Table => "table",
            ElementKind::Chart => "chart",
        }
    }

    /// Capitalized name, as shown on palette buttons
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Image => "Image",
            ElementKind::Table => "Table",
            ElementKind::Chart => "Chart",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ElementKind::Text),
            "image" => Ok(ElementKind::Image),
            "table" => Ok(ElementKind::Table),
            "chart" => Ok(ElementKind::Chart),
            other => Err(format!("unknown element type: {}", other)),
        }
    }
}

/// One typed content block within a report layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,

    /// Serialized as sibling `type` and `content` keys
    #[serde(flatten)]
    pub content: ElementContent,

    pub position: usize,
}

impl Element {
    pub fn new(id: impl Into<String>, content: ElementContent, position: usize) -> Self {
        Self {
            id: id.into(),
            content,
            position,
        }
    }

    /// New element with the default content for `kind`
    pub fn with_defaults(id: impl Into<String>, kind: ElementKind, position: usize) -> Self {
        Self::new(id, ElementContent::default_for(kind), position)
    }

    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }
}
