use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsheet")]
#[command(about = "Batch RSS news collector that syncs new articles into a Google Sheet")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all sources and append new items to the sheet
    Run {
        /// Show what would be inserted without writing to the sheet
        #[arg(long)]
        dry_run: bool,
    },

    /// List the configured feed sources
    Sources,
}
