//! launch-confirm - main entry point
//!
//! Loads a launch summary and asks the user to confirm it in the terminal.

use anyhow::Context;
use launch_confirm::cli::{Cli, Commands};
use launch_confirm::question::Confirmation;
use launch_confirm::runtime::{run_question, RuntimeConfig};
use launch_confirm::LaunchSummary;
use std::path::Path;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();

    match cli.command {
        Commands::Validate { summary } => {
            let summary = load_summary(&summary)?;
            println!("✓ Summary file is valid ({} rows)", summary.rows.len());
        }
        Commands::Confirm {
            summary,
            allow_edit,
            tick_ms,
        } => {
            let summary = load_summary(&summary)?;
            let mut confirmation = Confirmation::new(&summary.to_question_input());
            confirmation.set_allow_edit(allow_edit);

            let config = RuntimeConfig {
                tick_rate: Duration::from_millis(tick_ms),
                ..RuntimeConfig::default()
            };
            let choice = run_question(&mut confirmation, &config)
                .context("Confirmation question did not complete")?;
            log::info!("Confirmation answered: {}", choice);
            println!("{}", choice);
        }
    }

    Ok(())
}

fn load_summary(path: &Path) -> anyhow::Result<LaunchSummary> {
    let summary = LaunchSummary::load_from_file(path)?;
    summary
        .validate()
        .with_context(|| format!("Invalid summary file {}", path.display()))?;
    Ok(summary)
}
