use chrono::Local;
use clap::Parser;

use newsheet::cli::{Cli, Commands};
use newsheet::config::Config;
use newsheet::domain::SinkSchema;
use newsheet::errors::CollectorResult;
use newsheet::services::CollectService;
use newsheet::sink::{GoogleWorksheet, SinkSynchronizer};
use newsheet::sources::{FeedFetcher, SourceRegistry};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> CollectorResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sources => cmd_sources(),
        Commands::Run { dry_run } => cmd_run(dry_run),
    }
}

fn cmd_sources() -> CollectorResult<()> {
    println!("Configured feed sources:\n");
    for source in SourceRegistry::new().sources() {
        match &source.tag {
            Some(tag) => println!("  [{}] {}", tag, source.endpoint),
            None => println!("  {}", source.endpoint),
        }
    }
    Ok(())
}

fn cmd_run(dry_run: bool) -> CollectorResult<()> {
    let config = Config::from_env()?;
    let schema = SinkSchema::new(config.layout, config.link_style);

    let worksheet = GoogleWorksheet::open(&config, schema.column_count())?;
    let synchronizer = SinkSynchronizer::new(worksheet, schema);
    let service = CollectService::new(
        synchronizer,
        SourceRegistry::new(),
        FeedFetcher::new(),
        config.dedup_window,
    );

    let inserted = if dry_run {
        let items = service.preview();
        for item in &items {
            println!("  [DRY RUN] {} | {} | {}", item.timestamp, item.title, item.link);
        }
        println!("Dry run complete. Would insert {} items.", items.len());
        0
    } else {
        service.collect()?
    };

    println!(
        "[{}] inserted={}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        inserted
    );

    Ok(())
}
