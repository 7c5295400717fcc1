use folio_model::{
    ChartContent, ChartKind, DataPoint, Element, ElementContent, FontWeight, TableContent,
    TextContent,
};

/// Six-element demonstration layout spanning all four element types
///
/// `next_id` is called once per element, in layout order.
pub fn sample_layout(mut next_id: impl FnMut() -> String) -> Vec<Element> {
    let contents = vec![
        text("Executive Summary Report", 24, FontWeight::Bold, "#000000"),
        text(
            "This report provides an overview of our quarterly performance and key metrics.",
            16,
            FontWeight::Normal,
            "#333333",
        ),
        ElementContent::Chart(ChartContent {
            kind: ChartKind::Bar,
            title: "Quarterly Revenue Growth".to_string(),
            data: vec![
                DataPoint::new("Q1", 45000.0),
                DataPoint::new("Q2", 52000.0),
                DataPoint::new("Q3", 48000.0),
                DataPoint::new("Q4", 61000.0),
            ],
        }),
        ElementContent::Table(TableContent::new(
            strings(&["Department", "Budget", "Actual", "Variance"]),
            vec![
                strings(&["Marketing", "$50,000", "$48,500", "-$1,500"]),
                strings(&["Sales", "$75,000", "$78,200", "+$3,200"]),
                strings(&["Operations", "$60,000", "$62,100", "+$2,100"]),
                strings(&["R&D", "$40,000", "$39,800", "-$200"]),
            ],
        )),
        text("Key Insights", 20, FontWeight::Bold, "#000000"),
        text(
            "• Sales exceeded budget by 4.3%, indicating strong market performance\n\
             • Marketing came in under budget while maintaining lead generation targets\n\
             • Overall quarterly performance shows positive growth trajectory",
            14,
            FontWeight::Normal,
            "#444444",
        ),
    ];

    contents
        .into_iter()
        .enumerate()
        .map(|(position, content)| Element::new(next_id(), content, position))
        .collect()
}

fn text(value: &str, size: u32, weight: FontWeight, color: &str) -> ElementContent {
    ElementContent::Text(TextContent::new(value, size, weight, color))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
