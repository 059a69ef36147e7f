mod progress;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use defdump::{
    Consumer, DefinitionRegistry, DirectoryByteSource, DumpAll, DumpSettings, JsonSink,
    Properties, Scheduler, core::RecordKind,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::progress::ProgressSink;

#[derive(Parser)]
#[command(name = "dumpdefs", about = "Decode cache definitions and dump them as JSON")]
struct Cli {
    /// The revision you wish to dump
    #[arg(long, default_value_t = 0)]
    rev: u32,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    let settings = load_settings(cli.rev)?;
    let cache_dir = settings.cache_dir();
    info!(revision = cli.rev, cache = %cache_dir.display(), "loading definitions");

    let source = DirectoryByteSource::new(&cache_dir);
    let scheduler = Scheduler::new(&source, DefinitionRegistry::new());
    scheduler
        .run_all()
        .with_context(|| format!("failed to load definitions from {}", cache_dir.display()))?;

    let pb = ProgressBar::new(RecordKind::ALL.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("=>-"),
    );
    let sink = ProgressSink::new(JsonSink::new(&settings.output), pb.clone());
    let records = DumpAll::new(sink)
        .consume(scheduler.registry())
        .with_context(|| format!("failed to write dump to {}", settings.output.display()))?;
    pb.finish_with_message("done");

    info!(
        records,
        output = %settings.output.display(),
        "dump completed in {:.2?}",
        started.elapsed()
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load `./app.toml`, recording default paths for keys it lacks.
fn load_settings(revision: u32) -> Result<DumpSettings> {
    let path = Properties::DEFAULT_PATH;
    let mut properties = Properties::load(path)?;
    let mut changed = properties.set_default(
        DumpSettings::CACHE_PATH_KEY,
        DumpSettings::DEFAULT_CACHE_PATH,
    );
    changed |= properties.set_default(
        DumpSettings::OUTPUT_PATH_KEY,
        DumpSettings::DEFAULT_OUTPUT_PATH,
    );
    if changed {
        properties.save(path)?;
    }
    Ok(DumpSettings::from_properties(&properties, revision))
}
