use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use sched_core::Date;
use tracing_subscriber::EnvFilter;

use sched_cli::commands::{expand, merge, overlaps, util, validate};
use sched_cli::{Cli, Commands, Config};

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // try_init so a subscriber installed by a test harness is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Expand { file, until, json }) => {
            let config = load_config(cli.config.as_deref())?;
            let calendar = util::read_calendar(file)?;
            let limit = expand::resolve_limit(*until, Date::today(), &config)?;
            expand::run(&mut stdout, &calendar, limit, *json, &config)?;
        }
        Some(Commands::Merge { file, json }) => {
            let calendar = util::read_calendar(file)?;
            merge::run(&mut stdout, &calendar, *json)?;
        }
        Some(Commands::Validate { file }) => {
            let calendar = util::read_calendar(file)?;
            validate::run(&mut stdout, &calendar)?;
        }
        Some(Commands::Overlaps { a, b }) => {
            overlaps::run(&mut stdout, a, b)?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
