use super::Context;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_client::ReportsClient;
use folio_compiler_html::{build_preview, compile_to_html, CompileOptions, PreviewOptions, SamplePool};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Report id
    pub id: String,

    /// Fill elements with sample content instead of their own
    #[arg(long)]
    pub sample_data: bool,

    /// Output file (defaults to <outDir>/<report-name>.html)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Open the exported file in the default browser for printing
    #[arg(long)]
    pub open: bool,

    /// Seed for sample picks, for reproducible exports
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write minified HTML
    #[arg(long)]
    pub compact: bool,
}

pub async fn export(args: ExportArgs, ctx: &Context) -> Result<()> {
    let report = ctx.client.get_report(&args.id).await?;

    let pool = if args.sample_data {
        load_sample_pool(&ctx.client).await
    } else {
        SamplePool::builtin()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let options = PreviewOptions {
        sample_data: args.sample_data,
    };
    let document = build_preview(&report, &options, &pool, &mut rng);
    let html = compile_to_html(
        &document,
        CompileOptions {
            pretty: !args.compact,
            ..Default::default()
        },
    )?;

    let path = match args.out {
        Some(path) => path,
        None => ctx
            .config
            .get_out_dir(&ctx.cwd)
            .join(format!("{}.html", file_stem(&report.name, &report.id))),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&path, html)?;

    info!(report_id = %report.id, path = %path.display(), "exported report");
    println!("{} Exported {}", "✓".green(), path.display());

    if args.open {
        open::that(&path)?;
        println!("  Use the browser's print dialog to save as PDF");
    }

    Ok(())
}

/// Backend sample records, or the built-in pool when the backend has none
async fn load_sample_pool(client: &ReportsClient) -> SamplePool {
    if let Err(err) = client.initialize_sample_data().await {
        warn!(error = %err, "could not initialize sample data");
    }

    match client.sample_data().await {
        Ok(records) => SamplePool::from_records(&records),
        Err(err) => {
            warn!(error = %err, "error fetching sample data, using built-in samples");
            SamplePool::builtin()
        }
    }
}

fn file_stem(name: &str, id: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        format!("report-{}", id)
    } else {
        slug
    }
}
