use folio_model::Element;
use serde::{Deserialize, Serialize};

/// Body of `POST /reports`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReport {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub layout: Vec<Element>,
}

impl NewReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            layout: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Body of `PUT /reports/{id}`; absent fields are left alone by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Vec<Element>>,
}

impl ReportUpdate {
    pub fn layout(layout: Vec<Element>) -> Self {
        Self {
            layout: Some(layout),
            ..Default::default()
        }
    }
}

/// `{"message": ...}` acknowledgement returned by delete and initialize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}
