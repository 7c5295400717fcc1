//! Chart series normalization
//!
//! Series reach the renderer in several shapes: a bare array of points, an
//! object wrapping the array under `data` (a chart record), or that object
//! wrapped again (a sample data record). Whatever arrives, the charting
//! layer gets a non-empty `Vec<DataPoint>` with a name and a finite value
//! on every point.

use folio_model::DataPoint;
use serde_json::Value;

/// Name of the single point substituted for an empty series
pub const NO_DATA: &str = "No Data";

const MAX_WRAPPING: usize = 4;

/// Normalize a raw JSON series payload
pub fn normalize_chart_data(raw: &Value) -> Vec<DataPoint> {
    match extract_series(raw, 0) {
        Some(items) => normalize_items(items.iter().map(point_parts)),
        None => fallback_series(),
    }
}

/// Normalize an already typed series
pub fn normalize_points(points: &[DataPoint]) -> Vec<DataPoint> {
    normalize_items(
        points
            .iter()
            .map(|p| (Some(p.name.clone()), Some(p.value))),
    )
}

/// Series used when the payload has no recognizable shape at all
pub fn fallback_series() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Sample 1", 100.0),
        DataPoint::new("Sample 2", 200.0),
        DataPoint::new("Sample 3", 150.0),
    ]
}

fn extract_series(raw: &Value, depth: usize) -> Option<&[Value]> {
    match raw {
        Value::Array(items) => Some(items),
        Value::Object(map) => match map.get("data")? {
            Value::Array(items) => Some(items),
            nested @ Value::Object(_) if depth < MAX_WRAPPING => {
                Some(extract_series(nested, depth + 1).unwrap_or(&[]))
            }
            _ => Some(&[]),
        },
        _ => None,
    }
}

fn point_parts(item: &Value) -> (Option<String>, Option<f64>) {
    let name = match item.get("name") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    };
    let value = item.get("value").and_then(Value::as_f64);
    (name, value)
}

fn normalize_items<I>(items: I) -> Vec<DataPoint>
where
    I: Iterator<Item = (Option<String>, Option<f64>)>,
{
    let points: Vec<DataPoint> = items
        .enumerate()
        .map(|(index, (name, value))| {
            let name = name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| format!("Item {}", index + 1));
            let value = value.filter(|v| v.is_finite()).unwrap_or(0.0);
            DataPoint::new(name, value)
        })
        .collect();

    if points.is_empty() {
        vec![DataPoint::new(NO_DATA, 0.0)]
    } else {
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let series = normalize_chart_data(&json!([
            {"name": "Jan", "value": 10},
            {"name": "Feb", "value": 12.5}
        ]));

        assert_eq!(
            series,
            vec![DataPoint::new("Jan", 10.0), DataPoint::new("Feb", 12.5)]
        );
    }

    #[test]
    fn test_wrapped_and_nested_objects() {
        let chart = json!({"type": "line", "title": "Growth", "data": [{"name": "Q1", "value": 15}]});
        let record = json!({"data_type": "chart", "category": "growth", "data": chart.clone()});

        assert_eq!(normalize_chart_data(&chart), vec![DataPoint::new("Q1", 15.0)]);
        assert_eq!(normalize_chart_data(&record), vec![DataPoint::new("Q1", 15.0)]);
    }

    #[test]
    fn test_missing_fields_defaulted() {
        let series = normalize_chart_data(&json!([
            {"value": "not a number"},
            {"name": "", "value": 3},
            {"name": 2024}
        ]));

        assert_eq!(
            series,
            vec![
                DataPoint::new("Item 1", 0.0),
                DataPoint::new("Item 2", 3.0),
                DataPoint::new("2024", 0.0),
            ]
        );
    }

    #[test]
    fn test_empty_series_gets_placeholder() {
        assert_eq!(normalize_chart_data(&json!([])), vec![DataPoint::new(NO_DATA, 0.0)]);
        assert_eq!(
            normalize_chart_data(&json!({"data": "oops"})),
            vec![DataPoint::new(NO_DATA, 0.0)]
        );
        assert_eq!(normalize_points(&[]), vec![DataPoint::new(NO_DATA, 0.0)]);
    }

    #[test]
    fn test_unrecognized_shape_falls_back() {
        assert_eq!(normalize_chart_data(&Value::Null), fallback_series());
        assert_eq!(normalize_chart_data(&json!({"rows": []})), fallback_series());
        assert_eq!(normalize_chart_data(&json!(42)), fallback_series());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_chart_data(&json!([{"name": "A"}, {"value": 7}, {"name": "C", "value": 1.5}]));
        let twice = normalize_chart_data(&serde_json::to_value(&once).unwrap());

        assert_eq!(once, twice);
        assert_eq!(normalize_points(&once), once);
    }
}
