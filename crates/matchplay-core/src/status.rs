//! Running match-play status.
//!
//! The state is rebuilt from hole 1 on every call; nothing is carried over
//! between evaluations.

use serde::{Deserialize, Serialize};

use crate::outcome::HoleOutcome;
use crate::player::Side;

/// Display classification of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchStatus {
    /// Level with holes still to play (including before the first hole).
    AllSquare,
    /// One side ahead with holes to play. `dormie` when the lead equals
    /// the holes remaining.
    Up { side: Side, margin: u32, dormie: bool },
    /// Lead greater than the holes remaining.
    Won { side: Side, margin: u32, remaining: u32 },
    /// Level after the last hole.
    Halved,
}

impl MatchStatus {
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Halved)
    }

    pub fn leader(&self) -> Option<Side> {
        match self {
            Self::Up { side, .. } | Self::Won { side, .. } => Some(*side),
            Self::AllSquare | Self::Halved => None,
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllSquare => write!(f, "AS"),
            Self::Up {
                side,
                margin,
                dormie,
            } => {
                write!(f, "{side} {margin} UP")?;
                if *dormie {
                    write!(f, " (Dormie)")?;
                }
                Ok(())
            },
            Self::Won {
                side,
                margin,
                remaining,
            } => write!(f, "{side} wins {margin}&{remaining}"),
            Self::Halved => write!(f, "Halved"),
        }
    }
}

/// Holes won by each side and how far the match has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub a_won: u32,
    pub b_won: u32,
    /// Holes resolved so far, in order from the first.
    pub through: u32,
    pub total: u32,
}

impl MatchState {
    pub fn new(total: u32) -> Self {
        Self {
            a_won: 0,
            b_won: 0,
            through: 0,
            total,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.through)
    }

    pub fn margin(&self) -> u32 {
        self.a_won.abs_diff(self.b_won)
    }

    pub fn leader(&self) -> Option<Side> {
        match self.a_won.cmp(&self.b_won) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The trailing side can no longer catch up.
    pub fn is_clinched(&self) -> bool {
        self.margin() > self.remaining()
    }

    /// No further holes can change the result.
    pub fn is_complete(&self) -> bool {
        self.is_clinched() || self.remaining() == 0
    }

    /// Apply one resolved hole. Returns false for an undecided hole, which
    /// leaves the state untouched and ends aggregation.
    pub fn record(&mut self, outcome: HoleOutcome) -> bool {
        match outcome {
            HoleOutcome::A => self.a_won += 1,
            HoleOutcome::B => self.b_won += 1,
            HoleOutcome::Halved => {},
            HoleOutcome::Undecided => return false,
        }
        self.through += 1;
        true
    }

    pub fn status(&self) -> MatchStatus {
        let margin = self.margin();
        let remaining = self.remaining();
        match self.leader() {
            None if remaining == 0 => MatchStatus::Halved,
            None => MatchStatus::AllSquare,
            Some(side) if margin > remaining => MatchStatus::Won {
                side,
                margin,
                remaining,
            },
            Some(side) => MatchStatus::Up {
                side,
                margin,
                dormie: margin == remaining,
            },
        }
    }
}

/// Walk hole outcomes in order until the match is clinched, every hole is
/// played, or a hole is undecided. Outcomes past the stopping point are
/// never pulled from the iterator.
pub fn aggregate<I>(total: u32, outcomes: I) -> MatchState
where
    I: IntoIterator<Item = HoleOutcome>,
{
    let mut state = MatchState::new(total);
    let mut outcomes = outcomes.into_iter();
    while !state.is_complete() {
        let Some(outcome) = outcomes.next() else {
            break;
        };
        if !state.record(outcome) {
            break;
        }
    }
    state
}

/// Status label straight from hole counts.
pub fn match_status(a_won: u32, b_won: u32, through: u32, total: u32) -> MatchStatus {
    MatchState {
        a_won,
        b_won,
        through,
        total,
    }
    .status()
}
