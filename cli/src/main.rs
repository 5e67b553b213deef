mod cli;
mod config;
mod dashboard;
mod error;
mod progress;
mod render;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use config::Overrides;
use dashboard::OutputMode;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> error::Result<()> {
    let overrides = Overrides {
        base_url: cli.base_url,
        timeout: cli.timeout,
    };
    let output = OutputMode { json: cli.json };

    match cli.command {
        Commands::Init { force } => dashboard::init(&cli.config, force),
        Commands::Analyze { text } => {
            let config = config::resolve(&cli.config, &overrides)?;
            dashboard::analyze(config, text, output)
        }
        Commands::History => {
            let config = config::resolve(&cli.config, &overrides)?;
            dashboard::history(config, output)
        }
        Commands::Dashboard => {
            let config = config::resolve(&cli.config, &overrides)?;
            dashboard::interactive(config, output)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        ui::error_message(&err.user_message());
        process::exit(1);
    }
}
