//! Placeholder content pool for sample-data previews

use folio_model::{ElementKind, ImageContent, SampleRecord, TableContent};
use rand::Rng;
use serde_json::{json, Value};

/// Content the renderer draws from when sample substitution is on
///
/// Each list is non-empty for a pool built through [`SamplePool::builtin`]
/// or [`SamplePool::from_records`].
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePool {
    pub texts: Vec<String>,
    pub images: Vec<ImageContent>,
    pub tables: Vec<TableContent>,
    /// Raw chart payloads; normalized at render time
    pub charts: Vec<Value>,
}

impl SamplePool {
    pub fn builtin() -> Self {
        Self {
            texts: builtin_texts(),
            images: builtin_images(),
            tables: builtin_tables(),
            charts: builtin_charts(),
        }
    }

    /// Build a pool from backend sample records
    ///
    /// Any type with no usable record falls back to the built-in entries.
    pub fn from_records(records: &[SampleRecord]) -> Self {
        let of_type = |kind: ElementKind| records.iter().filter(move |r| r.data_type == kind);

        let texts: Vec<String> = of_type(ElementKind::Text)
            .filter_map(|r| r.data.get("text").and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        let images: Vec<ImageContent> = of_type(ElementKind::Image)
            .filter_map(|r| serde_json::from_value::<ImageContent>(r.data.clone()).ok())
            .filter(|image| has_src(image))
            .collect();

        let tables: Vec<TableContent> = of_type(ElementKind::Table)
            .filter_map(|r| serde_json::from_value::<TableContent>(r.data.clone()).ok())
            .filter(|table| !table.headers.is_empty())
            .collect();

        let charts: Vec<Value> = of_type(ElementKind::Chart).map(|r| r.data.clone()).collect();

        Self {
            texts: or_else(texts, builtin_texts),
            images: or_else(images, builtin_images),
            tables: or_else(tables, builtin_tables),
            charts: or_else(charts, builtin_charts),
        }
    }

    pub fn pick_text<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        pick(&self.texts, rng).map(String::as_str)
    }

    pub fn pick_image<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&ImageContent> {
        pick(&self.images, rng)
    }

    pub fn pick_table<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&TableContent> {
        pick(&self.tables, rng)
    }

    pub fn pick_chart<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Value> {
        pick(&self.charts, rng)
    }
}

impl Default for SamplePool {
    fn default() -> Self {
        Self::builtin()
    }
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.random_range(0..items.len()))
    }
}

fn or_else<T>(items: Vec<T>, fallback: fn() -> Vec<T>) -> Vec<T> {
    if items.is_empty() {
        fallback()
    } else {
        items
    }
}

fn has_src(image: &ImageContent) -> bool {
    !image.src.trim().is_empty()
}

fn builtin_texts() -> Vec<String> {
    [
        "Q4 2024 Performance Report",
        "Executive Summary: Our company achieved exceptional growth this quarter.",
        "Key Highlights: Revenue increased by 25% compared to last quarter.",
        "Market Analysis: Strong performance across all segments.",
        "Financial Overview: Profit margins improved significantly.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn builtin_images() -> Vec<ImageContent> {
    let image = |src: &str, alt: &str, width: u32, height: u32| ImageContent {
        src: src.to_string(),
        alt: alt.to_string(),
        width,
        height,
    };

    vec![
        image(
            "https://via.placeholder.com/800x400/4F46E5/FFFFFF?text=Q4+Revenue+Chart",
            "Quarterly revenue performance chart",
            800,
            400,
        ),
        image(
            "https://via.placeholder.com/600x800/059669/FFFFFF?text=Growth+Metrics+Infographic",
            "Company growth metrics infographic",
            600,
            800,
        ),
        image(
            "https://via.placeholder.com/400x200/DC2626/FFFFFF?text=Company+Logo",
            "Company logo and branding",
            400,
            200,
        ),
        image(
            "https://via.placeholder.com/700x500/7C3AED/FFFFFF?text=Process+Flow+Diagram",
            "Business process flow diagram",
            700,
            500,
        ),
        image(
            "https://via.placeholder.com/800x600/EA580C/FFFFFF?text=Product+Mockup",
            "Product design mockup",
            800,
            600,
        ),
    ]
}

fn builtin_tables() -> Vec<TableContent> {
    let table = |headers: [&str; 4], rows: [[&str; 4]; 4]| {
        TableContent::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    };

    vec![
        table(
            ["Month", "Revenue", "Growth %", "Target"],
            [
                ["January", "$125,000", "15%", "$120,000"],
                ["February", "$142,000", "22%", "$130,000"],
                ["March", "$158,000", "18%", "$140,000"],
                ["April", "$175,000", "28%", "$150,000"],
            ],
        ),
        table(
            ["Department", "Employees", "New Hires", "Retention %"],
            [
                ["Engineering", "45", "8", "94%"],
                ["Sales", "32", "5", "91%"],
                ["Marketing", "18", "3", "96%"],
                ["Support", "25", "4", "89%"],
            ],
        ),
        table(
            ["Department", "Budget", "Actual", "Variance"],
            [
                ["Marketing", "$50,000", "$48,500", "-$1,500"],
                ["Sales", "$75,000", "$78,200", "+$3,200"],
                ["Operations", "$60,000", "$62,100", "+$2,100"],
                ["R&D", "$40,000", "$39,800", "-$200"],
            ],
        ),
    ]
}

fn builtin_charts() -> Vec<Value> {
    vec![
        json!([
            {"name": "Jan", "value": 125000},
            {"name": "Feb", "value": 142000},
            {"name": "Mar", "value": 158000},
            {"name": "Apr", "value": 175000},
            {"name": "May", "value": 192000},
            {"name": "Jun", "value": 208000}
        ]),
        json!([
            {"name": "Engineering", "value": 45},
            {"name": "Sales", "value": 32},
            {"name": "Marketing", "value": 18},
            {"name": "Support", "value": 25}
        ]),
        json!([
            {"name": "Q1", "value": 15},
            {"name": "Q2", "value": 22},
            {"name": "Q3", "value": 18},
            {"name": "Q4", "value": 28}
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_pool_is_complete() {
        let pool = SamplePool::builtin();
        assert_eq!(pool.texts.len(), 5);
        assert_eq!(pool.images.len(), 5);
        assert_eq!(pool.tables.len(), 3);
        assert_eq!(pool.charts.len(), 3);

        for table in &pool.tables {
            assert!(table.validate().is_ok());
        }
    }

    #[test]
    fn test_from_records_mixes_backend_and_builtin() {
        let records = vec![
            SampleRecord::new(ElementKind::Text, "headline", json!({"text": "Backend headline"})),
            SampleRecord::new(
                ElementKind::Image,
                "logo",
                json!({"src": "", "alt": "no source", "width": 10, "height": 10}),
            ),
            SampleRecord::new(
                ElementKind::Table,
                "inventory",
                json!({"headers": ["Item", "Qty"], "rows": [["Bolts", "40"]]}),
            ),
        ];

        let pool = SamplePool::from_records(&records);

        assert_eq!(pool.texts, vec!["Backend headline".to_string()]);
        // image without a src is unusable, so the built-in images stay
        assert_eq!(pool.images, SamplePool::builtin().images);
        assert_eq!(pool.tables.len(), 1);
        assert_eq!(pool.tables[0].headers, vec!["Item", "Qty"]);
        assert_eq!(pool.charts, SamplePool::builtin().charts);
    }

    #[test]
    fn test_picks_are_reproducible_with_seed() {
        let pool = SamplePool::builtin();
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);

        for _ in 0..10 {
            assert_eq!(pool.pick_text(&mut a), pool.pick_text(&mut b));
            assert_eq!(pool.pick_table(&mut a), pool.pick_table(&mut b));
        }
    }

    #[test]
    fn test_pick_from_empty_list() {
        let pool = SamplePool {
            texts: Vec::new(),
            ..SamplePool::builtin()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pool.pick_text(&mut rng).is_none());
    }
}
