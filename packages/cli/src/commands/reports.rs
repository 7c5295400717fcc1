use super::Context;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_client::NewReport;
use folio_editor::{Builder, ItemPreview, ItemSummary};
use folio_model::Report;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print raw JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Report id
    pub id: String,

    /// Print raw JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Report name
    #[arg(short, long)]
    pub name: String,

    /// Report description
    #[arg(short, long, default_value = "")]
    pub description: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Report id
    pub id: String,
}

pub async fn list(args: ListArgs, ctx: &Context) -> Result<()> {
    let reports = ctx.client.list_reports().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!("{}", "No reports yet".yellow());
        return Ok(());
    }

    for report in &reports {
        println!(
            "{:>4}  {}  {}",
            report.id.bright_white(),
            report.name.bold(),
            format!("({} elements)", report.layout.len()).dimmed()
        );
    }

    Ok(())
}

pub async fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let report = ctx.client.get_report(&args.id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

pub async fn create(args: CreateArgs, ctx: &Context) -> Result<()> {
    let request = NewReport::new(args.name).with_description(args.description);
    let report = ctx.client.create_report(&request).await?;

    println!(
        "{} Created report {} ({})",
        "✓".green(),
        report.name.bold(),
        report.id
    );
    Ok(())
}

pub async fn delete(args: DeleteArgs, ctx: &Context) -> Result<()> {
    let ack = ctx.client.delete_report(&args.id).await?;
    println!("{} {}", "✓".green(), ack.message);
    Ok(())
}

pub(crate) fn print_report(report: &Report) {
    println!("{} {}", report.name.bold(), format!("#{}", report.id).dimmed());
    if !report.description.is_empty() {
        println!("{}", report.description);
    }
    println!();

    let builder = Builder::new(report.clone());
    let items = builder.sortable().items();
    if items.is_empty() {
        println!("{}", "This report is empty.".dimmed());
        return;
    }

    for (position, item) in items.iter().enumerate() {
        println!("{}", describe(position, item));
    }
}

fn describe(position: usize, item: &ItemSummary) -> String {
    let detail = match &item.preview {
        ItemPreview::Text { text, font_size, .. } => {
            format!("{} ({}px)", first_line(text), font_size)
        }
        ItemPreview::Image { alt, width, height, .. } => format!("{} [{}x{}]", alt, width, height),
        ItemPreview::Table { summary, headers } => format!("{}: {}", summary, headers),
        ItemPreview::Chart { title, caption } => format!("{} ({})", title, caption),
    };

    format!(
        "{:>3}. {:<6} {}  {}",
        position,
        item.kind.as_str().cyan(),
        detail,
        item.id.dimmed()
    )
}

fn first_line(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > 60 {
        format!("{}…", line.chars().take(60).collect::<String>())
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_editor::ElementKind;

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("Title\nbody"), "Title");
        assert_eq!(first_line(""), "");
        assert!(first_line(&"x".repeat(80)).ends_with('…'));
    }

    #[test]
    fn test_describe_table() {
        colored::control::set_override(false);

        let mut builder = Builder::new(Report::new("1", "R"));
        builder.add(ElementKind::Table).unwrap();
        let items = builder.sortable().items();

        let line = describe(0, &items[0]);
        assert!(line.contains("table"));
        assert!(line.contains("Table (3 columns, 2 rows)"));
    }
}
