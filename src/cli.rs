use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// launch-confirm - confirm a launch configuration before it is applied
#[derive(Parser)]
#[command(name = "launch-confirm")]
#[command(about = "Review a launch configuration summary and confirm it interactively")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the summary and ask for confirmation
    Confirm {
        /// Path to the JSON launch summary
        #[arg(short, long)]
        summary: PathBuf,

        /// Allow moving up into the summary to pick a row to edit
        #[arg(long)]
        allow_edit: bool,

        /// Milliseconds between idle ticks
        #[arg(long, default_value_t = 250)]
        tick_ms: u64,
    },
    /// Validate a launch summary file
    Validate {
        /// Path to the JSON launch summary
        summary: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
