//! `yakshop` — run the herd simulation offline and print the result.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use yakshop_core::Days;
use yakshop_herd::{HerdFormat, parse_herd};
use yakshop_observability::LogFormat;
use yakshop_shop::Shop;

mod output;

use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "yakshop")]
#[command(version, about = "Simulate a herd for a number of days and report stock and herd")]
struct Cli {
    /// Herd description (XML or JSON)
    herd_file: PathBuf,

    /// Number of days to simulate
    days: u32,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    format: OutputFormat,

    /// Highest number of days accepted
    #[arg(long, env = "YAKSHOP_MAX_DAY", default_value_t = 100_000)]
    max_day: u32,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    yakshop_observability::init_with(LogFormat::Pretty, default_filter);

    if cli.days > cli.max_day {
        bail!("{} days is beyond the limit of {} days", cli.days, cli.max_day);
    }

    let body = std::fs::read_to_string(&cli.herd_file)
        .with_context(|| format!("cannot read herd file {}", cli.herd_file.display()))?;
    let format = HerdFormat::from_path(&cli.herd_file).unwrap_or_else(|| HerdFormat::detect(None, &body));
    let herd = parse_herd(format, &body)
        .with_context(|| format!("cannot load herd from {}", cli.herd_file.display()))?;

    tracing::debug!(animals = herd.len(), days = cli.days, "starting simulation");

    let mut shop = Shop::with_herd(herd);
    shop.advance_to(Days::new(cli.days));

    let mut stdout = std::io::stdout().lock();
    output::render(&mut stdout, &shop, cli.format)?;
    Ok(())
}
