use folio_compiler_html::{
    build_preview, compile_to_html, normalize_chart_data, CompileOptions, PreviewOptions, SamplePool,
};
use folio_editor::{Builder, ContentEdit, ElementContent, ElementKind, Panel, Report};
use folio_model::SampleRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Edit session over one report, driven from the browser
///
/// Persisting is left to the host: it reads `layoutJson()` and sends it to
/// the backend itself.
#[wasm_bindgen]
pub struct ReportBuilder {
    inner: Builder,
}

#[wasm_bindgen]
impl ReportBuilder {
    /// Start editing a report given as backend JSON
    #[wasm_bindgen(constructor)]
    pub fn new(report_json: &str) -> Result<ReportBuilder, JsValue> {
        Self::from_json(report_json).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.inner.version() as f64
    }

    /// Id of the selected element, if any
    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> Option<String> {
        self.inner.selected().map(|element| element.id.clone())
    }

    /// Append an element of `kind` and return its id
    #[wasm_bindgen(js_name = addElement)]
    pub fn add_element(&mut self, kind: &str) -> Result<String, JsValue> {
        self.add(kind).map_err(to_js)
    }

    #[wasm_bindgen(js_name = selectElement)]
    pub fn select_element(&mut self, element_id: &str) -> Result<(), JsValue> {
        self.inner.select(element_id).map_err(to_js)
    }

    /// Replace an element's content with `content_json`
    #[wasm_bindgen(js_name = updateContent)]
    pub fn update_content(&mut self, element_id: &str, content_json: &str) -> Result<(), JsValue> {
        self.update(element_id, content_json).map_err(to_js)
    }

    /// Apply one property-panel change to an element
    #[wasm_bindgen(js_name = applyEdit)]
    pub fn apply_edit(&mut self, element_id: &str, edit_json: &str) -> Result<(), JsValue> {
        self.edit(element_id, edit_json).map_err(to_js)
    }

    #[wasm_bindgen(js_name = deleteElement)]
    pub fn delete_element(&mut self, element_id: &str) -> Result<(), JsValue> {
        self.inner.delete(element_id).map_err(to_js)
    }

    /// Finish a drag of `active_id`; `over_id` is absent when dropped outside the list
    #[wasm_bindgen(js_name = dropElement)]
    pub fn drop_element(&mut self, active_id: &str, over_id: Option<String>) -> Result<(), JsValue> {
        self.drop_on(active_id, over_id.as_deref()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setPanel)]
    pub fn set_panel(&mut self, panel: &str) -> Result<(), JsValue> {
        let panel: Panel = serde_json::from_value(serde_json::Value::String(panel.to_string()))
            .map_err(|e| JsValue::from_str(&format!("Unknown panel: {}", e)))?;
        self.inner.set_panel(panel).map_err(to_js)
    }

    #[wasm_bindgen(js_name = loadSample)]
    pub fn load_sample(&mut self) -> Result<(), JsValue> {
        self.inner.load_sample().map_err(to_js)
    }

    /// Ordered layout, as sent to `PUT /reports/{id}`
    #[wasm_bindgen(js_name = layoutJson)]
    pub fn layout_json(&self) -> Result<String, JsValue> {
        to_json(self.inner.elements()).map_err(to_js)
    }

    /// Elements, selection and active panel
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        to_json(self.inner.state()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = reportJson)]
    pub fn report_json(&self) -> Result<String, JsValue> {
        to_json(&self.inner.report()).map_err(to_js)
    }

    /// List rows for the sortable sidebar
    #[wasm_bindgen(js_name = itemsJson)]
    pub fn items_json(&self) -> Result<String, JsValue> {
        to_json(&self.inner.sortable().items()).map_err(to_js)
    }

    /// Property-panel fields for an element
    #[wasm_bindgen(js_name = fieldsJson)]
    pub fn fields_json(&self, element_id: &str) -> Result<String, JsValue> {
        self.fields(element_id).map_err(to_js)
    }
}

impl ReportBuilder {
    fn from_json(report_json: &str) -> Result<Self, String> {
        let report: Report =
            serde_json::from_str(report_json).map_err(|e| format!("Invalid report: {}", e))?;
        Ok(Self {
            inner: Builder::new(report),
        })
    }

    fn add(&mut self, kind: &str) -> Result<String, String> {
        let kind: ElementKind = kind.parse()?;
        self.inner.add(kind).map_err(|e| e.to_string())
    }

    fn update(&mut self, element_id: &str, content_json: &str) -> Result<(), String> {
        let content: ElementContent =
            serde_json::from_str(content_json).map_err(|e| format!("Invalid content: {}", e))?;
        self.inner.update(element_id, content).map_err(|e| e.to_string())
    }

    fn edit(&mut self, element_id: &str, edit_json: &str) -> Result<(), String> {
        let edit: ContentEdit =
            serde_json::from_str(edit_json).map_err(|e| format!("Invalid edit: {}", e))?;
        let action = match self.inner.editor(element_id) {
            Some(editor) => editor.edit(edit).map_err(|e| e.to_string())?,
            None => return Ok(()),
        };
        self.inner.dispatch(action).map_err(|e| e.to_string())
    }

    fn drop_on(&mut self, active_id: &str, over_id: Option<&str>) -> Result<(), String> {
        let mut list = self.inner.sortable();
        if !list.drag_start(active_id) {
            return Ok(());
        }
        match list.drag_end(over_id) {
            Some(action) => self.inner.dispatch(action).map_err(|e| e.to_string()),
            None => Ok(()),
        }
    }

    fn fields(&self, element_id: &str) -> Result<String, String> {
        let editor = self
            .inner
            .editor(element_id)
            .ok_or_else(|| format!("Element not found: {}", element_id))?;
        to_json(&editor.fields())
    }
}

/// Render a report to print-ready HTML
///
/// `sample_records_json` is the optional `GET /sample-data` payload; without
/// it sample picks come from the built-in pool.
#[wasm_bindgen(js_name = renderPreviewHtml)]
pub fn render_preview_html(
    report_json: &str,
    sample_data: bool,
    seed: u32,
    sample_records_json: Option<String>,
) -> Result<String, JsValue> {
    render(report_json, sample_data, seed, sample_records_json.as_deref()).map_err(to_js)
}

/// Normalize a raw chart series payload into `[{name, value}]`
#[wasm_bindgen(js_name = normalizeChartData)]
pub fn normalize_chart_data_js(data_json: &str) -> Result<String, JsValue> {
    normalize(data_json).map_err(to_js)
}

fn render(
    report_json: &str,
    sample_data: bool,
    seed: u32,
    sample_records_json: Option<&str>,
) -> Result<String, String> {
    let report: Report =
        serde_json::from_str(report_json).map_err(|e| format!("Invalid report: {}", e))?;

    let pool = match sample_records_json {
        Some(json) => {
            let records: Vec<SampleRecord> =
                serde_json::from_str(json).map_err(|e| format!("Invalid sample data: {}", e))?;
            SamplePool::from_records(&records)
        }
        None => SamplePool::builtin(),
    };

    let mut rng = StdRng::seed_from_u64(seed as u64);
    let document = build_preview(&report, &PreviewOptions { sample_data }, &pool, &mut rng);
    compile_to_html(&document, CompileOptions::default()).map_err(|e| e.to_string())
}

fn normalize(data_json: &str) -> Result<String, String> {
    let raw: serde_json::Value =
        serde_json::from_str(data_json).map_err(|e| format!("Invalid chart data: {}", e))?;
    to_json(&normalize_chart_data(&raw))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "id": 3,
        "name": "Quarterly",
        "description": null,
        "layout": [],
        "created_at": "2024-05-01T09:30:00",
        "updated_at": "2024-05-01T09:30:00"
    }"#;

    fn ids(builder: &ReportBuilder) -> Vec<String> {
        builder.inner.elements().iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_builder_session() {
        let mut builder = ReportBuilder::from_json(REPORT).unwrap();
        let a = builder.add("text").unwrap();
        let b = builder.add("chart").unwrap();

        assert_eq!(builder.selected(), Some(b.clone()));
        assert!(builder.drop_on(&b, Some(&a)).is_ok());
        assert_eq!(ids(&builder), vec![b.clone(), a.clone()]);

        // dropped outside the list
        builder.drop_on(&a, None).unwrap();
        assert_eq!(ids(&builder), vec![b, a]);

        let layout: serde_json::Value = serde_json::from_str(&to_json(builder.inner.elements()).unwrap()).unwrap();
        assert_eq!(layout[0]["type"], "chart");
        assert_eq!(layout[1]["position"], 1);
    }

    #[test]
    fn test_apply_edit_json() {
        let mut builder = ReportBuilder::from_json(REPORT).unwrap();
        let id = builder.add("text").unwrap();

        builder
            .edit(&id, r#"{"type": "text", "edit": {"SetFontSize": 200}}"#)
            .unwrap();

        match &builder.inner.elements()[0].content {
            ElementContent::Text(text) => assert_eq!(text.font_size, 72),
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[test]
    fn test_bad_input_is_reported() {
        let mut builder = ReportBuilder::from_json(REPORT).unwrap();
        assert!(builder.add("video").is_err());
        assert!(ReportBuilder::from_json("{").is_err());

        let id = builder.add("table").unwrap();
        let err = builder
            .edit(&id, r#"{"type": "chart", "edit": "AddPoint"}"#)
            .unwrap_err();
        assert!(err.contains("chart"));
    }

    #[test]
    fn test_render_preview() {
        let mut builder = ReportBuilder::from_json(REPORT).unwrap();
        builder.inner.load_sample().unwrap();
        let report = to_json(&builder.inner.report()).unwrap();

        let html = render(&report, false, 1, None).unwrap();
        assert!(html.contains("Executive Summary Report"));
        assert!(html.contains("data-chart-type=\"bar\""));

        let sampled = render(&report, true, 1, None).unwrap();
        assert_eq!(sampled, render(&report, true, 1, None).unwrap());
    }

    #[test]
    fn test_normalize() {
        let json = normalize(r#"{"data": [{"name": "Q1"}]}"#).unwrap();
        assert_eq!(json, r#"[{"name":"Q1","value":0.0}]"#);
    }
}
