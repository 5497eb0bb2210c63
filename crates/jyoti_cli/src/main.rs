mod cli;
mod commands;
mod forecast;
mod logging;
mod render;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use jyoti_config::Settings;
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    let report = commands::run(cli.command, &settings)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, format!("{report}\n"))
                .with_context(|| format!("writing report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{report}"),
    }
    Ok(())
}
