use std::path::PathBuf;

use clap::Parser;

use matchplay_cli::config::CliConfig;
use matchplay_cli::error::CliError;
use matchplay_cli::{Cli, run};

/// Path to a fixture under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the CLI with the given arguments (without the binary name) and
/// capture what it prints.
pub fn run_with(config: &CliConfig, args: &[&str]) -> Result<String, CliError> {
    let cli = Cli::parse_from(std::iter::once("matchplay").chain(args.iter().copied()));
    let mut out = Vec::new();
    run(&cli, config, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

pub fn run_default(args: &[&str]) -> Result<String, CliError> {
    run_with(&CliConfig::default(), args)
}

/// Run `status --json` on a fixture and parse the output.
pub fn status_json(fixture: &str, edits: &[&str]) -> serde_json::Value {
    let path = fixture_path(fixture);
    let path = path.to_string_lossy().into_owned();
    let mut args = vec!["status", path.as_str(), "--json"];
    for edit in edits {
        args.push("--set");
        args.push(*edit);
    }
    let text = run_default(&args).unwrap();
    serde_json::from_str(&text).unwrap()
}
