//! Roster CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use roster_cli::cli::Cli;
use roster_cli::commands;
use roster_persistence::RecordStore;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let store = RecordStore::new(cli.records_file());
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    if let Err(e) = commands::execute(cli.command, &store, &mut stdout, &mut stderr) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
