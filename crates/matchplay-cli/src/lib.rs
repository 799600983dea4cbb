//! Console scoreboard for match-play fixtures.

pub mod config;
pub mod error;
pub mod render;

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use matchplay_core::allowance::Allowance;
use matchplay_core::course::{self, HoleInfo, TeeSet};
use matchplay_core::fixture::Fixture;
use matchplay_core::player::Side;
use matchplay_core::score::{CellRef, Score, Scorecard};
use matchplay_core::store::{MemoryScoreStore, ScoreStore};
use matchplay_core::summary;
use matchplay_core::{MatchReport, evaluate};

use config::{CliConfig, OutputFormat};
use error::CliError;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "matchplay", about = "Match-play scoreboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// Evaluate a match fixture and print the scorecard and status
    Status {
        /// match fixture (TOML)
        file: PathBuf,

        /// print the report as JSON
        #[arg(long)]
        json: bool,

        /// overwrite a score before evaluating, as HOLE:SIDE[:PLAYER]=VALUE
        #[arg(long = "set", value_name = "EDIT")]
        set: Vec<String>,
    },
    /// Print par, stroke index and yardage for a set of tees
    Holes {
        /// men or ladies; defaults to the configured tee
        #[arg(long)]
        tee: Option<TeeSet>,

        #[arg(long)]
        json: bool,
    },
    /// Print handicaps, allowances and strokes received for a fixture
    Allowance {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// Combine several fixtures into match results and team standings
    Summary {
        /// match fixtures (TOML)
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        #[arg(long)]
        json: bool,
    },
}

/// Parse a `HOLE:SIDE[:PLAYER]=VALUE` edit. Hole and player are 1-based.
/// An empty value clears the cell and `P` or `0` records a pick-up.
pub fn parse_cell_edit(edit: &str) -> Result<(CellRef, Score), CliError> {
    let bad = |why: &str| CliError::BadEdit(format!("{edit}: {why}"));
    let (target, value) = edit.split_once('=').ok_or_else(|| bad("missing '='"))?;
    let mut parts = target.split(':');
    let hole = parts
        .next()
        .and_then(|h| h.trim().parse::<usize>().ok())
        .filter(|h| *h >= 1)
        .ok_or_else(|| bad("hole must be a number from 1"))?;
    let side = parts
        .next()
        .ok_or_else(|| bad("missing side"))?
        .parse::<Side>()
        .map_err(|e| bad(&e))?;
    let player = match parts.next() {
        Some(p) => p
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|p| (1..=2).contains(p))
            .ok_or_else(|| bad("player must be 1 or 2"))?,
        None => 1,
    };
    if parts.next().is_some() {
        return Err(bad("too many fields"));
    }
    let score = match value.trim() {
        "P" | "p" => Score::PickedUp,
        other => Score::parse(other),
    };
    Ok((CellRef::new(hole - 1, side, player - 1), score))
}

/// A fixture's scores with any command-line edits applied.
fn edited_scorecard(fixture: &Fixture, edits: &[String]) -> Result<Scorecard, CliError> {
    let mut store = MemoryScoreStore::new();
    store.insert_fixture(fixture);
    let cards = fixture.meta.players_per_card();
    for edit in edits {
        let (cell, score) = parse_cell_edit(edit)?;
        if cell.player >= cards || !store.set_cell(&fixture.id, cell, score) {
            return Err(CliError::CellOutOfRange(edit.clone()));
        }
    }
    Ok(store
        .snapshot(&fixture.id)
        .unwrap_or_else(|| fixture.scorecard()))
}

#[derive(Debug, Serialize)]
struct StatusOutput<'a> {
    id: &'a str,
    side_a: String,
    side_b: String,
    report: &'a MatchReport,
}

fn wants_json(flag: bool, config: &CliConfig) -> bool {
    flag || config.output.format == OutputFormat::Json
}

pub fn run(cli: &Cli, config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    match &cli.command {
        Command::Status { file, json, set } => {
            let fixture = Fixture::load(file)?;
            let card = edited_scorecard(&fixture, set)?;
            let report = evaluate(&fixture.meta, &fixture.sides, &card);
            if wants_json(*json, config) {
                let output = StatusOutput {
                    id: &fixture.id,
                    side_a: fixture.sides.a.display_name(),
                    side_b: fixture.sides.b.display_name(),
                    report: &report,
                };
                serde_json::to_writer_pretty(&mut *out, &output)?;
                writeln!(out)?;
            } else {
                writeln!(
                    out,
                    "{} ({}, {} holes, {} tees)",
                    fixture.id,
                    fixture.meta.format,
                    fixture.meta.total_holes(),
                    fixture.meta.si_set
                )?;
                let table = render::tabulate_scorecard(&fixture, &card, &report, &config.output);
                writeln!(out, "{}", render::render(&table))?;
                writeln!(out, "{}", render::status_line(&fixture, &report))?;
            }
        },
        Command::Holes { tee, json } => {
            let tee = tee.unwrap_or(config.course.default_tee);
            if wants_json(*json, config) {
                let holes: &[HoleInfo] = course::holes(tee);
                serde_json::to_writer_pretty(&mut *out, holes)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{tee} tees")?;
                writeln!(out, "{}", render::render(&render::tabulate_holes(tee)))?;
            }
        },
        Command::Allowance { file, json } => {
            let fixture = Fixture::load(file)?;
            let allowance = Allowance::compute(&fixture.meta, &fixture.sides);
            let rows = render::allowance_rows(&fixture, &allowance);
            if wants_json(*json, config) {
                serde_json::to_writer_pretty(&mut *out, &rows)?;
                writeln!(out)?;
            } else {
                let table = render::tabulate_allowances(&rows);
                writeln!(out, "{}", render::render(&table))?;
            }
        },
        Command::Summary { files, json } => {
            let fixtures = files
                .iter()
                .map(|file| Fixture::load(file))
                .collect::<Result<Vec<_>, _>>()?;
            let competition = summary::summarise(&fixtures);
            if wants_json(*json, config) {
                serde_json::to_writer_pretty(&mut *out, &competition)?;
                writeln!(out)?;
            } else {
                let results = render::tabulate_results(&competition);
                writeln!(out, "{}", render::render(&results))?;
                let standings = render::tabulate_standings(&competition);
                writeln!(out, "{}", render::render(&standings))?;
            }
        },
    }
    Ok(())
}
