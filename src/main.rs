//! Entry point: parse CLI, set up logging and run the export.

use anyhow::Context;
use clap::Parser;
use nhl_stats_export::{cli::ExportArgs, commands::export::handle_export};
use tracing::Level;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ExportArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    handle_export(args.into_options())
        .await
        .context("NHL statistics export failed")?;

    Ok(())
}
