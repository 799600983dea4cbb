use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use matchplay_cli::config::CliConfig;
use matchplay_cli::{Cli, run};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load();

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(?e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}
