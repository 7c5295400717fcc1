use super::reports::print_report;
use super::Context;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use folio_editor::{Builder, BuilderError, ElementKind};
use tracing::debug;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Report id
    pub id: String,

    /// Element type (text, image, table, chart)
    pub kind: ElementKind,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Report id
    pub id: String,

    /// Element id to delete
    pub element_id: String,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Report id
    pub id: String,

    /// Element to move
    pub element_id: String,

    /// Element whose slot it moves into
    pub over_id: String,
}

#[derive(Debug, Args)]
pub struct SampleLayoutArgs {
    /// Report id
    pub id: String,
}

pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut added = String::new();
    edit_report(ctx, &args.id, |builder| {
        added = builder.add(args.kind)?;
        Ok(())
    })
    .await?;

    println!("{} Added {} element {}", "✓".green(), args.kind, added.dimmed());
    Ok(())
}

pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    edit_report(ctx, &args.id, |builder| {
        require_element(builder, &args.element_id)?;
        builder.delete(&args.element_id)?;
        Ok(())
    })
    .await?;

    println!("{} Removed {}", "✓".green(), args.element_id);
    Ok(())
}

pub async fn move_element(args: MoveArgs, ctx: &Context) -> Result<()> {
    edit_report(ctx, &args.id, |builder| {
        require_element(builder, &args.element_id)?;
        require_element(builder, &args.over_id)?;
        builder.reorder(&args.element_id, &args.over_id)?;
        Ok(())
    })
    .await?;

    println!("{} Moved {}", "✓".green(), args.element_id);
    Ok(())
}

pub async fn sample_layout(args: SampleLayoutArgs, ctx: &Context) -> Result<()> {
    edit_report(ctx, &args.id, |builder| {
        builder.load_sample()?;
        Ok(())
    })
    .await?;

    println!("{} Loaded sample layout", "✓".green());
    Ok(())
}

/// Load a report, apply `edit` to it, save, then print the result
async fn edit_report<F>(ctx: &Context, report_id: &str, edit: F) -> Result<()>
where
    F: FnOnce(&mut Builder) -> Result<()>,
{
    let report = ctx.client.get_report(report_id).await?;
    let mut builder = Builder::new(report);

    edit(&mut builder)?;
    debug!(report_id, version = builder.version(), "saving edited layout");

    builder.save(&ctx.client).await.map_err(|err| match err {
        BuilderError::Save(message) => anyhow!("Failed to save report {}: {}", report_id, message),
        other => other.into(),
    })?;

    print_report(&builder.into_report());
    Ok(())
}

// The builder treats unknown ids as no-ops
fn require_element(builder: &Builder, element_id: &str) -> Result<()> {
    if builder.state().contains(element_id) {
        Ok(())
    } else {
        Err(anyhow!("Element not found: {}", element_id))
    }
}
