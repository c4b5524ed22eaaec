//! Command-line interface for strictly_hanoi.

use clap::{Parser, Subcommand};
use strictly_hanoi::OutputFormat;

/// Strictly Hanoi - Tower of Hanoi solver with checked moves
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Solve the Tower of Hanoi with validated moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a puzzle and print every move
    Solve {
        /// Number of disks (overrides the config file)
        #[arg(short, long, allow_negative_numbers = true)]
        disks: Option<i64>,

        /// Report format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Skip the initial and final state dumps
        #[arg(long)]
        hide_state: bool,
    },

    /// Print the optimal move count for a number of disks
    Moves {
        /// Number of disks
        #[arg(short, long, allow_negative_numbers = true)]
        disks: i64,
    },
}
