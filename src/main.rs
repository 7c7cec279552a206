//! Hearth CLI
//!
//! Usage: hearth [--json] [-v...] [--home PATH] [--config PATH] <COMMAND>
//!
//! Commands:
//!   scan    Discover assets and report what is missing from home
//!   status  Show synced/tracked status of every discovered asset
//!   import  Copy assets from sources into the home store

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use cli::{Cli, Commands};
use commands::{cmd_import, cmd_scan, cmd_status, GlobalArgs};

/// Checked before `RUST_LOG`
const LOG_ENV_VAR: &str = "HEARTH_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let global = GlobalArgs {
        json: cli.json,
        ascii: cli.ascii,
        verbose: cli.verbose,
        home: cli.home,
        config: cli.config,
    };

    match cli.command {
        Commands::Scan { sources, conflicts } => cmd_scan(&global, sources, conflicts),
        Commands::Status { sources } => cmd_status(&global, sources),
        Commands::Import {
            sources,
            all,
            kind,
            id,
            from,
            overwrite,
        } => {
            let request = commands::ImportRequest {
                all,
                kind: kind.map(Into::into),
                id,
                from,
                overwrite,
            };
            let summary = cmd_import(&global, sources, request)?;
            if !summary.is_success() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "warn,hearth=info",
        2 => "info,hearth=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.json {
        // JSON log lines; stdout stays reserved for the report
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
