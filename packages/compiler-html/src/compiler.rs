use crate::preview::{PreviewBlock, PreviewDocument, PreviewNode};
use folio_model::{ChartKind, DataPoint};
use thiserror::Error;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Failed to encode chart series: {0}")]
    Series(#[from] serde_json::Error),
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Emit the stylesheet, including `@media print` rules
    pub print_styles: bool,
    /// Emit a data table under every chart figure
    pub chart_tables: bool,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            print_styles: true,
            chart_tables: true,
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

pub(crate) const EMPTY_NOTICE: &str = "This report is empty. Add some elements to see the preview.";

const STYLESHEET: &[&str] = &[
    "body { margin: 0; background: #f9fafb; font-family: system-ui, -apple-system, sans-serif; color: #111827; }",
    ".folio-report { max-width: 56rem; margin: 2rem auto; padding: 2rem; background: #ffffff; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); border-radius: 0.5rem; }",
    ".folio-title { font-size: 1.5rem; margin: 0 0 0.5rem; }",
    ".folio-description { color: #4b5563; margin: 0 0 2rem; }",
    ".folio-block { margin-bottom: 2rem; break-inside: avoid; page-break-inside: avoid; }",
    ".folio-text { line-height: 1.6; white-space: pre-line; }",
    ".folio-image { text-align: center; }",
    ".folio-image img { max-width: 100%; height: auto; border-radius: 0.5rem; }",
    ".folio-table { width: 100%; border-collapse: collapse; background: #ffffff; }",
    ".folio-table th, .folio-table td { border: 1px solid #d1d5db; padding: 0.75rem 1rem; text-align: left; }",
    ".folio-table th { font-weight: 600; background: #f9fafb; }",
    ".folio-table tr.odd { background: #f9fafb; }",
    ".folio-chart { margin: 0; padding: 1.5rem; border: 1px solid #e5e7eb; border-radius: 0.5rem; background: #ffffff; }",
    ".folio-chart figcaption { font-size: 1.125rem; font-weight: 600; text-align: center; margin-bottom: 1rem; }",
    ".folio-empty { text-align: center; padding: 3rem 0; color: #6b7280; }",
    "@media print {",
    "  body { background: #ffffff; print-color-adjust: exact; -webkit-print-color-adjust: exact; }",
    "  .folio-report { margin: 0; padding: 20px; box-shadow: none; }",
    "}",
];

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a preview document to a standalone HTML page
pub fn compile_to_html(
    document: &PreviewDocument,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    compile_head(document, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<main class=\"folio-report\">");
    ctx.indent();

    compile_header(document, &mut ctx);

    for block in &document.blocks {
        compile_block(block, &mut ctx)?;
    }

    if document.is_empty() {
        ctx.add_line(&format!("<p class=\"folio-empty\">{}</p>", EMPTY_NOTICE));
    }

    ctx.dedent();
    ctx.add_line("</main>");
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    Ok(ctx.get_output())
}

fn compile_head(document: &PreviewDocument, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&document.title)));

    if ctx.options.print_styles {
        ctx.add_line("<style>");
        ctx.indent();
        for rule in STYLESHEET {
            ctx.add_line(rule);
        }
        ctx.dedent();
        ctx.add_line("</style>");
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_header(document: &PreviewDocument, ctx: &mut Context) {
    ctx.add_line("<header>");
    ctx.indent();
    ctx.add_line(&format!(
        "<h1 class=\"folio-title\">{}</h1>",
        escape_html(&document.title)
    ));
    if !document.description.is_empty() {
        ctx.add_line(&format!(
            "<p class=\"folio-description\">{}</p>",
            escape_html(&document.description)
        ));
    }
    ctx.dedent();
    ctx.add_line("</header>");
}

fn compile_block(block: &PreviewBlock, ctx: &mut Context) -> Result<(), CompileError> {
    let class = match &block.node {
        PreviewNode::Text { .. } => "folio-text",
        PreviewNode::Image { .. } => "folio-image",
        PreviewNode::Table { .. } => "folio-table-wrapper",
        PreviewNode::Chart { .. } => "folio-chart-wrapper",
    };

    ctx.add_line(&format!(
        "<section class=\"folio-block {}\" data-element-id=\"{}\">",
        class,
        escape_html(&block.id)
    ));
    ctx.indent();

    match &block.node {
        PreviewNode::Text {
            text,
            font_size,
            font_weight,
            color,
        } => {
            ctx.add_line(&format!(
                "<div style=\"font-size: {}px; font-weight: {}; color: {};\">{}</div>",
                font_size,
                font_weight.as_str(),
                escape_html(color),
                escape_html(text)
            ));
        }

        PreviewNode::Image {
            src,
            alt,
            width,
            height,
        } => {
            ctx.add_line(&format!(
                "<img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\" />",
                escape_html(src),
                escape_html(alt),
                width,
                height
            ));
        }

        PreviewNode::Table { headers, rows } => compile_table(headers, rows, ctx),

        PreviewNode::Chart {
            kind,
            title,
            series,
        } => compile_chart(*kind, title, series, ctx)?,
    }

    ctx.dedent();
    ctx.add_line("</section>");
    Ok(())
}

fn compile_table(headers: &[String], rows: &[Vec<String>], ctx: &mut Context) {
    ctx.add_line("<table class=\"folio-table\">");
    ctx.indent();

    ctx.add_line("<thead>");
    ctx.indent();
    ctx.add_line(&format!("<tr>{}</tr>", cells("th", headers)));
    ctx.dedent();
    ctx.add_line("</thead>");

    ctx.add_line("<tbody>");
    ctx.indent();
    for (index, row) in rows.iter().enumerate() {
        let parity = if index % 2 == 0 { "even" } else { "odd" };
        ctx.add_line(&format!("<tr class=\"{}\">{}</tr>", parity, cells("td", row)));
    }
    ctx.dedent();
    ctx.add_line("</tbody>");

    ctx.dedent();
    ctx.add_line("</table>");
}

// The figure carries kind and series for a host charting library
fn compile_chart(
    kind: ChartKind,
    title: &str,
    series: &[DataPoint],
    ctx: &mut Context,
) -> Result<(), CompileError> {
    let encoded = serde_json::to_string(series)?;

    ctx.add_line(&format!(
        "<figure class=\"folio-chart\" data-chart-type=\"{}\" data-series=\"{}\">",
        kind.as_str(),
        escape_html(&encoded)
    ));
    ctx.indent();
    ctx.add_line(&format!("<figcaption>{}</figcaption>", escape_html(title)));

    if ctx.options.chart_tables {
        let total: f64 = series.iter().map(|p| p.value).sum();
        let mut headers = vec!["Name".to_string(), "Value".to_string()];
        if kind == ChartKind::Pie {
            headers.push("Share".to_string());
        }

        let rows: Vec<Vec<String>> = series
            .iter()
            .map(|point| {
                let mut row = vec![point.name.clone(), format_value(point.value)];
                if kind == ChartKind::Pie {
                    row.push(format_share(point.value, total));
                }
                row
            })
            .collect();

        compile_table(&headers, &rows, ctx);
    }

    ctx.dedent();
    ctx.add_line("</figure>");
    Ok(())
}

fn cells(tag: &str, values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("<{tag}>{}</{tag}>", escape_html(value)))
        .collect()
}

pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn format_share(value: f64, total: f64) -> String {
    if total == 0.0 {
        "0%".to_string()
    } else {
        format!("{:.0}%", value / total * 100.0)
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
