//! Wavescope command line
//!
//! Reads one Wi-Fi scan snapshot and prints an aggregated view as JSON.
//!
//! - `list`: grouped, sorted list under the view settings
//! - `channels`: records indexed by channel
//! - `connection`: the scan record of the active link, or `null`
//! - In `--simulate` mode, generates a fake neighbourhood for local dev

mod scanner;
mod view;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wavescope_core::{
    Aggregator, BandFilter, GroupBy, OuiVendorTable, ScanSource, Settings, SortBy,
};

use scanner::{FileScanSource, SimulatedScanSource};

/// Aggregate a Wi-Fi scan into grouped, sorted views.
#[derive(Parser, Debug)]
#[command(name = "wavescope", about = "Wi-Fi scan aggregation")]
struct Cli {
    /// Scan snapshot as JSON.
    #[arg(long, required_unless_present = "simulate", conflicts_with = "simulate")]
    scan: Option<PathBuf>,

    /// Generate a simulated scan instead of reading one.
    #[arg(long, default_value_t = false)]
    simulate: bool,

    /// View settings TOML.
    #[arg(long)]
    config: Option<PathBuf>,

    /// OUI vendor table TOML (`[vendors]` prefix = name).
    #[arg(long)]
    vendors: Option<PathBuf>,

    /// Grouping key override: none, ssid or channel.
    #[arg(long)]
    group_by: Option<GroupBy>,

    /// Display order override: strength, ssid or channel.
    #[arg(long)]
    sort_by: Option<SortBy>,

    /// Band filter override: all, ghz2 or ghz5.
    #[arg(long)]
    band: Option<BandFilter>,

    /// Hide weak signals from the list view.
    #[arg(long, default_value_t = false)]
    hide_weak: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Grouped, sorted access point list.
    List,
    /// Access points indexed by channel.
    Channels,
    /// The access point of the active connection.
    Connection,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(group_by) = self.group_by {
            settings.group_by = group_by;
        }
        if let Some(sort_by) = self.sort_by {
            settings.sort_by = sort_by;
        }
        if let Some(band) = self.band {
            settings.band = band;
        }
        if self.hide_weak {
            settings.hide_weak = true;
        }
        Ok(settings)
    }

    fn source(&self) -> anyhow::Result<Box<dyn ScanSource>> {
        match &self.scan {
            Some(path) => Ok(Box::new(FileScanSource::open(path)?)),
            None => Ok(Box::new(SimulatedScanSource)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    let vendors = match &cli.vendors {
        Some(path) => OuiVendorTable::load(path)?,
        None => OuiVendorTable::new(),
    };

    tracing::info!(
        command = ?cli.command,
        simulate = cli.simulate,
        group_by = %settings.group_by,
        sort_by = %settings.sort_by,
        band = %settings.band,
        hide_weak = settings.hide_weak,
        vendors = vendors.len(),
        "wavescope starting"
    );

    let snapshot = cli.source()?.snapshot();
    let aggregator = Aggregator::new(vendors, settings);

    let output = match cli.command {
        Command::List => {
            let records = aggregator.list(&snapshot)?;
            serde_json::to_string_pretty(&view::list(&records))
        }
        Command::Channels => {
            let channels = aggregator.channels(&snapshot)?;
            serde_json::to_string_pretty(&view::channels(&channels))
        }
        Command::Connection => {
            let record = aggregator.connection(&snapshot);
            serde_json::to_string_pretty(&record.as_ref().map(view::DetailView::from))
        }
    }
    .context("failed to serialize view")?;

    println!("{output}");
    Ok(())
}
