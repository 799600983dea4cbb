//! Match-play scoring for the Danum Cup scoreboard.
//!
//! Everything here is a pure function of a match's configuration and the
//! scores entered so far: [`evaluate::evaluate`] recomputes the whole match
//! from hole 1 on each call.

pub mod allowance;
pub mod course;
pub mod evaluate;
pub mod fixture;
pub mod meta;
pub mod net;
pub mod outcome;
pub mod player;
pub mod score;
pub mod status;
pub mod store;
pub mod summary;

pub use evaluate::{HoleReport, MatchReport, evaluate};
pub use status::MatchStatus;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::player::{MatchSide, MatchSides, Player};
    use crate::score::{Score, Scorecard};

    /// Singles sides with the given handicaps.
    pub fn singles_sides(handicap_a: i32, handicap_b: i32) -> MatchSides {
        MatchSides::new(
            MatchSide::single(Player::new("Player A", handicap_a)),
            MatchSide::single(Player::new("Player B", handicap_b)),
        )
    }

    /// Two-player sides with the given handicaps.
    pub fn fourball_sides(a: [i32; 2], b: [i32; 2]) -> MatchSides {
        MatchSides::new(
            MatchSide::pair(Player::new("A1", a[0]), Player::new("A2", a[1])),
            MatchSide::pair(Player::new("B1", b[0]), Player::new("B2", b[1])),
        )
    }

    /// Build a card from raw per-player rows. Values go through the same
    /// normalisation as scorer input, so -1 gives an empty cell.
    pub fn card_from_rows(a: &[&[i64]], b: &[&[i64]], holes: usize) -> Scorecard {
        let rows = |side: &[&[i64]]| -> Vec<Vec<Score>> {
            side.iter()
                .map(|row| row.iter().map(|v| Score::from_raw(*v)).collect())
                .collect()
        };
        Scorecard::from_cards(&rows(a), &rows(b), holes)
    }
}
