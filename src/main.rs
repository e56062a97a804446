//! Larder CLI - Recipe Idea Generator
//!
//! Command-line interface for the Larder recipe idea generator.

use std::io;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use larder::cli::{commands, Cli, Commands};
use larder::config::{validate_time, Preferences};
use larder::session::Session;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Larder v{}", env!("CARGO_PKG_VERSION"));

    let prefs = Preferences::resolve(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!(e.friendly_message()))
        .context("failed to load preferences")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Generate {
            ingredients,
            time,
            diet,
            no_pantry,
            ai,
            json,
        }) => {
            let mut options = prefs.to_options();
            if let Some(minutes) = time {
                options.time_minutes = validate_time(minutes)?;
            }
            if let Some(diet) = diet {
                options.diet = diet;
            }
            if no_pantry {
                options.pantry_basics = false;
            }
            commands::generate(&ingredients, options, ai, json, &mut out)?;
        }
        Some(Commands::Normalize { raw }) => commands::normalize(&raw, &mut out)?,
        Some(Commands::Interactive) | None => {
            let mut session = Session::new(prefs.to_options());
            commands::interactive(&mut session, io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}
