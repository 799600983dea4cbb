use serde::Serialize;
use stanza::renderer::Renderer;
use stanza::renderer::console::Console;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Cell, Col, Row, Table};

use matchplay_core::allowance::Allowance;
use matchplay_core::course::{self, HOLES_PER_ROUND, TeeSet};
use matchplay_core::fixture::Fixture;
use matchplay_core::outcome::HoleOutcome;
use matchplay_core::player::Side;
use matchplay_core::score::{CellRef, Scorecard};
use matchplay_core::summary::Summary;
use matchplay_core::{HoleReport, MatchReport};

use crate::config::OutputConfig;

/// One printed score column: a side and the card slot within it.
#[derive(Debug, Clone)]
struct CardColumn {
    side: Side,
    player: usize,
    title: String,
}

fn card_columns(fixture: &Fixture) -> Vec<CardColumn> {
    let cards = fixture.meta.players_per_card();
    let mut columns = Vec::with_capacity(cards * 2);
    for side in Side::BOTH {
        let match_side = fixture.sides.side(side);
        for player in 0..cards {
            let title = if cards == 1 {
                match_side.display_name()
            } else {
                match_side
                    .player(player)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| format!("{side}{}", player + 1))
            };
            columns.push(CardColumn {
                side,
                player,
                title: format!("{side}: {title}"),
            });
        }
    }
    columns
}

fn side_index(side: Side) -> usize {
    match side {
        Side::A => 0,
        Side::B => 1,
    }
}

fn score_cell(
    card: &Scorecard,
    hole: &HoleReport,
    column: &CardColumn,
    output: &OutputConfig,
) -> Cell {
    let s = side_index(column.side);
    let score = card.get(CellRef::new(hole.number - 1, column.side, column.player));
    let mut text = score.to_string();
    if output.show_strokes && hole.strokes[s][column.player] > 0 {
        text.push('*');
    }
    if output.show_net
        && let Some(net) = hole.net[s][column.player]
    {
        text.push_str(&format!(" ({net})"));
    }
    text.into()
}

fn outcome_text(outcome: Option<HoleOutcome>) -> String {
    match outcome {
        Some(HoleOutcome::A) => "A".into(),
        Some(HoleOutcome::B) => "B".into(),
        Some(HoleOutcome::Halved) => "Half".into(),
        Some(HoleOutcome::Undecided) => "?".into(),
        None => "".into(),
    }
}

fn numeric_col(width: usize) -> Col {
    Col::new(Styles::default().with(MinWidth(width)).with(HAlign::Right))
}

/// Scorecard laid out one hole per row, with gross totals underneath.
pub fn tabulate_scorecard(
    fixture: &Fixture,
    card: &Scorecard,
    report: &MatchReport,
    output: &OutputConfig,
) -> Table {
    let columns = card_columns(fixture);
    let mut cols = vec![numeric_col(4), numeric_col(3), numeric_col(3)];
    for (i, column) in columns.iter().enumerate() {
        let mut styles = Styles::default()
            .with(MinWidth(column.title.len().max(6)))
            .with(HAlign::Right);
        if i == 0 {
            styles = styles.with(Separator(true));
        }
        cols.push(Col::new(styles));
    }
    cols.push(Col::new(
        Styles::default()
            .with(Separator(true))
            .with(MinWidth(6))
            .with(HAlign::Centred),
    ));

    let mut header: Vec<Cell> = vec!["Hole".into(), "Par".into(), "SI".into()];
    header.extend(columns.iter().map(|c| Cell::from(c.title.clone())));
    header.push("Result".into());
    let mut table = Table::default()
        .with_cols(cols)
        .with_row(Row::new(Styles::default().with(Header(true)), header));

    for hole in &report.holes {
        let mut cells: Vec<Cell> = vec![
            format!("{}", hole.number).into(),
            format!("{}", hole.par).into(),
            format!("{}", hole.stroke_index).into(),
        ];
        for column in &columns {
            cells.push(score_cell(card, hole, column, output));
        }
        cells.push(outcome_text(hole.outcome).into());
        table.push_row(Row::new(Styles::default(), cells));
    }

    type GrossFn = fn(&Scorecard, Side, usize) -> u32;
    let mut totals: Vec<(&str, GrossFn)> = Vec::new();
    if card.len() >= HOLES_PER_ROUND {
        totals.push(("Out", Scorecard::gross_out));
        totals.push(("In", Scorecard::gross_in));
    }
    totals.push(("Total", Scorecard::gross_total));
    for (i, (label, total)) in totals.iter().enumerate() {
        let mut cells: Vec<Cell> = vec![(*label).into(), "".into(), "".into()];
        for column in &columns {
            cells.push(format!("{}", total(card, column.side, column.player)).into());
        }
        cells.push("".into());
        let mut styles = Styles::default().with(Header(true));
        if i == 0 {
            styles = styles.with(Separator(true));
        }
        table.push_row(Row::new(styles, cells));
    }
    table
}

/// Reference table for one set of tees.
pub fn tabulate_holes(tee: TeeSet) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            numeric_col(4),
            numeric_col(3),
            numeric_col(3),
            numeric_col(6),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Hole".into(), "Par".into(), "SI".into(), "Yards".into()],
        ));
    for hole in course::holes(tee) {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", hole.number).into(),
                format!("{}", hole.par).into(),
                format!("{}", hole.stroke_index).into(),
                format!("{}", hole.yards).into(),
            ],
        ));
    }
    table.push_row(Row::new(
        Styles::default().with(Header(true)).with(Separator(true)),
        vec![
            "Total".into(),
            format!("{}", course::par_total(tee)).into(),
            "".into(),
            format!("{}", course::yards_total(tee)).into(),
        ],
    ));
    table
}

/// One player's line in the allowance summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllowanceRow {
    pub side: Side,
    pub name: String,
    pub handicap: i32,
    pub allowance: i32,
    /// Strokes received over the whole match.
    pub strokes: u32,
}

pub fn allowance_rows(fixture: &Fixture, allowance: &Allowance) -> Vec<AllowanceRow> {
    let holes = fixture.meta.total_holes();
    let tee = fixture.meta.si_set;
    let mut rows = Vec::new();
    for side in Side::BOTH {
        for (player, info) in fixture.sides.side(side).players.iter().enumerate().take(2) {
            // Singles and foursomes share one card per side, carried on slot 0.
            let slot = match allowance {
                Allowance::Individual(_) => player,
                Allowance::HeadToHead(_) => 0,
            };
            rows.push(AllowanceRow {
                side,
                name: info.name.clone(),
                handicap: info.handicap,
                allowance: allowance.allowance_for(side, slot),
                strokes: allowance.total_strokes(side, slot, holes, tee),
            });
        }
    }
    rows
}

pub fn tabulate_allowances(rows: &[AllowanceRow]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(4)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Left)),
            numeric_col(8),
            numeric_col(9),
            numeric_col(7),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Side".into(),
                "Player".into(),
                "Handicap".into(),
                "Allowance".into(),
                "Strokes".into(),
            ],
        ));
    for row in rows {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", row.side).into(),
                row.name.clone().into(),
                format!("{}", row.handicap).into(),
                format!("{}", row.allowance).into(),
                format!("{}", row.strokes).into(),
            ],
        ));
    }
    table
}

/// One row per match with its current label.
pub fn tabulate_results(summary: &Summary) -> Table {
    let left = |width: usize| Col::new(Styles::default().with(MinWidth(width)).with(HAlign::Left));
    let mut table = Table::default()
        .with_cols(vec![
            left(6),
            left(12),
            left(12),
            left(16),
            numeric_col(4),
            numeric_col(9),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Match".into(),
                "Side A".into(),
                "Side B".into(),
                "Result".into(),
                "Thru".into(),
                "Gross".into(),
            ],
        ));
    for result in &summary.matches {
        let [a, b] = &result.teams;
        table.push_row(Row::new(
            Styles::default(),
            vec![
                result.id.clone().into(),
                a.clone().into(),
                b.clone().into(),
                result.label.clone().into(),
                format!("{}", result.through).into(),
                format!("{}-{}", result.gross[0], result.gross[1]).into(),
            ],
        ));
    }
    table
}

/// Team leaderboard, best first.
pub fn tabulate_standings(summary: &Summary) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Left)),
            numeric_col(3),
            numeric_col(3),
            numeric_col(3),
            numeric_col(3),
            numeric_col(4),
            numeric_col(4),
            numeric_col(6),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Team".into(),
                "P".into(),
                "W".into(),
                "H".into(),
                "L".into(),
                "Live".into(),
                "Pts".into(),
                "Gross".into(),
            ],
        ));
    for standing in &summary.standings {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                standing.team.clone().into(),
                format!("{}", standing.played()).into(),
                format!("{}", standing.won).into(),
                format!("{}", standing.halved).into(),
                format!("{}", standing.lost).into(),
                format!("{}", standing.in_progress).into(),
                format!("{}", standing.points()).into(),
                format!("{}", standing.gross).into(),
            ],
        ));
    }
    table
}

pub fn render(table: &Table) -> String {
    format!("{}", Console::default().render(table))
}

/// Status line shown under the scorecard, e.g. "A 2 UP (thru 9 of 18)".
pub fn status_line(fixture: &Fixture, report: &MatchReport) -> String {
    let leader = report
        .status
        .leader()
        .map(|side| format!(" [{}]", fixture.sides.side(side).display_name()))
        .unwrap_or_default();
    format!(
        "{}{leader} (thru {} of {})",
        report.label, report.state.through, report.state.total
    )
}
