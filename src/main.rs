//! Strictly Hanoi - command-line solver
//!
//! Solves the Tower of Hanoi and prints the report on stdout. Logs go to
//! stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_hanoi::{HanoiConfig, OutputFormat, SolveReport, expected_moves, validate_disk_count};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            disks,
            format,
            config,
            hide_state,
        } => {
            let mut settings = match config {
                Some(path) => HanoiConfig::from_file(&path)
                    .with_context(|| format!("Loading config from {}", path.display()))?,
                None => HanoiConfig::default(),
            };
            if let Some(disks) = disks {
                settings = settings.with_disks(disks);
            }
            if let Some(format) = format {
                settings = settings.with_format(format);
            }
            if hide_state {
                settings = settings.with_show_state(false);
            }
            init_tracing(settings.log_filter());
            run_solve(&settings)
        }
        Command::Moves { disks } => {
            init_tracing("warn");
            run_moves(disks)
        }
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the configured filter.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Solve a puzzle and print the report
#[instrument(skip(settings), fields(disks = *settings.disks()))]
fn run_solve(settings: &HanoiConfig) -> Result<()> {
    let disks = settings.disk_count().context("Invalid disk count")?;
    info!(disks, "Starting Strictly Hanoi solver");

    let report = SolveReport::run(disks).context("Solve failed")?;

    let output = match settings.format() {
        OutputFormat::Text => report.render_text(*settings.show_state()),
        OutputFormat::Json => report.render_json().context("Serializing report")?,
    };
    println!("{}", output);

    info!(moves = *report.move_count(), "Done");
    Ok(())
}

/// Print the optimal move count
fn run_moves(disks: i64) -> Result<()> {
    let disks = validate_disk_count(disks).context("Invalid disk count")?;
    let moves = expected_moves(disks)
        .with_context(|| format!("Move count for {} disks does not fit in 64 bits", disks))?;
    println!("{}", moves);
    Ok(())
}
