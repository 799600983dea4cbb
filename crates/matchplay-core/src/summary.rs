//! Competition summary across several matches.
//!
//! Each side scores 1 point for a match won and half a point for a match
//! halved. Matches still in play count towards gross totals but not points.

use serde::{Deserialize, Serialize};

use crate::fixture::Fixture;
use crate::player::Side;
use crate::status::MatchStatus;

/// Result of one match as it stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    /// Team names, side A first.
    pub teams: [String; 2],
    pub status: MatchStatus,
    pub label: String,
    pub through: u32,
    /// Gross strokes over every card of each side, side A first.
    pub gross: [u32; 2],
}

impl MatchResult {
    pub fn from_fixture(fixture: &Fixture) -> Self {
        let card = fixture.scorecard();
        let report = fixture.evaluate();
        let cards = fixture.meta.players_per_card();
        let gross = Side::BOTH.map(|side| {
            (0..cards)
                .map(|p| card.gross_total(side, p))
                .sum::<u32>()
        });
        Self {
            id: fixture.id.clone(),
            teams: Side::BOTH.map(|side| fixture.sides.side(side).team_name(side)),
            status: report.status,
            label: report.label,
            through: report.state.through,
            gross,
        }
    }
}

/// One team's line in the leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: String,
    pub won: u32,
    pub halved: u32,
    pub lost: u32,
    /// Matches not yet decided.
    pub in_progress: u32,
    pub gross: u32,
}

impl TeamStanding {
    fn new(team: String) -> Self {
        Self {
            team,
            ..Self::default()
        }
    }

    pub fn played(&self) -> u32 {
        self.won + self.halved + self.lost
    }

    /// Points doubled, so a half stays an integer.
    pub fn half_points(&self) -> u32 {
        self.won * 2 + self.halved
    }

    pub fn points(&self) -> f64 {
        f64::from(self.half_points()) / 2.0
    }

    fn record(&mut self, side: Side, result: &MatchResult) {
        let slot = match side {
            Side::A => 0,
            Side::B => 1,
        };
        self.gross += result.gross[slot];
        match result.status {
            MatchStatus::Won { side: winner, .. } if winner == side => self.won += 1,
            MatchStatus::Won { .. } => self.lost += 1,
            MatchStatus::Halved => self.halved += 1,
            MatchStatus::AllSquare | MatchStatus::Up { .. } => self.in_progress += 1,
        }
    }
}

/// Per-match results and the team leaderboard built from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub matches: Vec<MatchResult>,
    /// Most points first, then lowest gross total, then team name.
    pub standings: Vec<TeamStanding>,
}

fn standing_mut<'s>(standings: &'s mut Vec<TeamStanding>, team: &str) -> &'s mut TeamStanding {
    let index = match standings.iter().position(|s| s.team == team) {
        Some(index) => index,
        None => {
            standings.push(TeamStanding::new(team.to_string()));
            standings.len() - 1
        },
    };
    &mut standings[index]
}

pub fn summarise<'a, I>(fixtures: I) -> Summary
where
    I: IntoIterator<Item = &'a Fixture>,
{
    let matches: Vec<MatchResult> = fixtures.into_iter().map(MatchResult::from_fixture).collect();

    let mut standings = Vec::new();
    for result in &matches {
        for (slot, side) in Side::BOTH.into_iter().enumerate() {
            standing_mut(&mut standings, &result.teams[slot]).record(side, result);
        }
    }
    standings.sort_by(|a, b| {
        b.half_points()
            .cmp(&a.half_points())
            .then(a.gross.cmp(&b.gross))
            .then_with(|| a.team.cmp(&b.team))
    });

    tracing::debug!(
        matches = matches.len(),
        teams = standings.len(),
        "Summarised competition"
    );
    Summary { matches, standings }
}
