use serde::{Deserialize, Serialize};

use crate::meta::MatchFormat;
use crate::net::{net_or_infinite, net_score};
use crate::player::Side;
use crate::score::{HoleEntry, Score};

/// Result of a single hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoleOutcome {
    A,
    B,
    Halved,
    /// Not enough scores entered to decide the hole yet.
    Undecided,
}

impl HoleOutcome {
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::A => Self::A,
            Side::B => Self::B,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Self::A => Some(Side::A),
            Self::B => Some(Side::B),
            Self::Halved | Self::Undecided => None,
        }
    }

    pub fn is_decided(self) -> bool {
        self != Self::Undecided
    }
}

impl std::fmt::Display for HoleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::Halved => write!(f, "Halved"),
            Self::Undecided => write!(f, "Undecided"),
        }
    }
}

fn lower_wins<T: PartialOrd>(a: T, b: T) -> HoleOutcome {
    if a < b {
        HoleOutcome::A
    } else if b < a {
        HoleOutcome::B
    } else {
        HoleOutcome::Halved
    }
}

/// Singles and foursomes: one card per side.
///
/// A pick-up (0) loses to any real score, two pick-ups halve, and an empty
/// cell leaves the hole undecided.
pub fn resolve_pair(a: Score, b: Score, strokes_a: u8, strokes_b: u8) -> HoleOutcome {
    match (a, b) {
        (Score::PickedUp, Score::PickedUp) => HoleOutcome::Halved,
        (Score::PickedUp, Score::Strokes(_)) => HoleOutcome::B,
        (Score::Strokes(_), Score::PickedUp) => HoleOutcome::A,
        (Score::Strokes(_), Score::Strokes(_)) => {
            match (net_score(a, strokes_a), net_score(b, strokes_b)) {
                (Some(net_a), Some(net_b)) => lower_wins(net_a, net_b),
                _ => HoleOutcome::Undecided,
            }
        },
        (Score::Absent, _) | (_, Score::Absent) => HoleOutcome::Undecided,
    }
}

/// Fourball: each side counts its better net score.
///
/// A card that is empty or picked up is out of the hole. A side with no real
/// score loses to a side with one, two sides without a real score halve once
/// anything has been entered, and a hole with no entries at all is undecided.
pub fn resolve_fourball(a: [Score; 2], b: [Score; 2], strokes: [[u8; 2]; 2]) -> HoleOutcome {
    if a.iter().chain(b.iter()).all(|s| s.is_absent()) {
        return HoleOutcome::Undecided;
    }

    let a_in = a.iter().any(|s| s.strokes().is_some());
    let b_in = b.iter().any(|s| s.strokes().is_some());
    match (a_in, b_in) {
        (false, false) => HoleOutcome::Halved,
        (true, false) => HoleOutcome::A,
        (false, true) => HoleOutcome::B,
        (true, true) => {
            let best = |cards: [Score; 2], received: [u8; 2]| {
                net_or_infinite(cards[0], received[0]).min(net_or_infinite(cards[1], received[1]))
            };
            lower_wins(best(a, strokes[0]), best(b, strokes[1]))
        },
    }
}

/// Resolve one hole for any format. `strokes` is indexed `[side][player]`.
pub fn resolve_hole(format: MatchFormat, entry: &HoleEntry, strokes: [[u8; 2]; 2]) -> HoleOutcome {
    match format {
        MatchFormat::Singles | MatchFormat::Foursomes => {
            resolve_pair(entry.a[0], entry.b[0], strokes[0][0], strokes[1][0])
        },
        MatchFormat::Fourball => resolve_fourball(entry.a, entry.b, strokes),
    }
}
