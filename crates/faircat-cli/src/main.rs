//! Faircat CLI - Integrate and FAIR-score research-software metadata records.

use clap::Parser;
use faircat_cli::{commands, config, Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let pipeline_config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Score(args) => {
            commands::execute_score(&args, &pipeline_config, cli.output.as_deref())?;
        }
        Command::Integrate(args) => {
            commands::execute_integrate(&args, &pipeline_config, cli.output.as_deref())?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
