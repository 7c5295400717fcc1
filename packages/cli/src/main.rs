mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, create, delete, export, list, move_element, remove, sample_layout, show, AddArgs,
    Context, CreateArgs, DeleteArgs, ExportArgs, ListArgs, MoveArgs, RemoveArgs, SampleLayoutArgs,
    ShowArgs,
};
use config::Config;

/// Folio CLI - build and export reports against a Folio backend
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides folio.config.json)
    #[arg(long, global = true, env = "FOLIO_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all reports
    List(ListArgs),

    /// Show one report and its layout
    Show(ShowArgs),

    /// Create an empty report
    Create(CreateArgs),

    /// Delete a report
    Delete(DeleteArgs),

    /// Append an element with default content
    Add(AddArgs),

    /// Delete an element from a report's layout
    Remove(RemoveArgs),

    /// Move an element into another element's slot
    Move(MoveArgs),

    /// Replace a report's layout with the demonstration layout
    SampleLayout(SampleLayoutArgs),

    /// Export a report as print-ready HTML
    Export(ExportArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();
    let config = Config::load(&cwd)?;
    let ctx = Context::new(cwd, config, cli.api_url.as_deref());

    match cli.command {
        Command::List(args) => list(args, &ctx).await,
        Command::Show(args) => show(args, &ctx).await,
        Command::Create(args) => create(args, &ctx).await,
        Command::Delete(args) => delete(args, &ctx).await,
        Command::Add(args) => add(args, &ctx).await,
        Command::Remove(args) => remove(args, &ctx).await,
        Command::Move(args) => move_element(args, &ctx).await,
        Command::SampleLayout(args) => sample_layout(args, &ctx).await,
        Command::Export(args) => export(args, &ctx).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use folio_model::ElementKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["folio", "add", "3", "chart"]).unwrap();
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.id, "3");
                assert_eq!(args.kind, ElementKind::Chart);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["folio", "add", "3", "video"]).is_err());
    }

    #[test]
    fn test_parse_export_flags() {
        let cli = Cli::try_parse_from([
            "folio",
            "--api-url",
            "http://backend:8000",
            "export",
            "9",
            "--sample-data",
            "--seed",
            "7",
            "--out",
            "q3.html",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://backend:8000"));
        match cli.command {
            Command::Export(args) => {
                assert!(args.sample_data);
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.out, Some(std::path::PathBuf::from("q3.html")));
                assert!(!args.open);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
