use crate::ElementKind;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Placeholder content record served by `GET /sample-data`
///
/// `data` is kept as raw JSON; its shape depends on `data_type`
/// (`{text}`, an image object, a table object, or a chart object).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub data_type: ElementKind,

    pub category: String,

    pub data: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl SampleRecord {
    pub fn new(data_type: ElementKind, category: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: None,
            data_type,
            category: category.into(),
            data,
            created_at: None,
        }
    }
}
