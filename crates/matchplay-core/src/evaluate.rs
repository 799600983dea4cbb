use serde::{Deserialize, Serialize};

use crate::allowance::Allowance;
use crate::course::hole_info;
use crate::meta::{MatchFormat, MatchMeta};
use crate::net::net_score;
use crate::outcome::{HoleOutcome, resolve_hole};
use crate::player::{MatchSides, Side};
use crate::score::{HoleEntry, Scorecard};
use crate::status::{MatchState, MatchStatus, aggregate};

/// Per-hole detail for display: stroke dots, net previews and the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleReport {
    /// 1-based position in the match, so 19..=36 for the second loop.
    pub number: usize,
    pub par: u8,
    pub stroke_index: u8,
    /// Strokes received, indexed `[side][player]`.
    pub strokes: [[u8; 2]; 2],
    /// Net score per card where a real score is entered.
    pub net: [[Option<i32>; 2]; 2],
    /// `None` for holes after the point where aggregation stopped.
    pub outcome: Option<HoleOutcome>,
}

/// Everything derived from one snapshot of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub format: MatchFormat,
    pub allowance: Allowance,
    pub state: MatchState,
    pub status: MatchStatus,
    /// `status` rendered as the scoreboard label, e.g. "A 2 UP".
    pub label: String,
    pub holes: Vec<HoleReport>,
}

impl MatchReport {
    pub fn hole(&self, number: usize) -> Option<&HoleReport> {
        number.checked_sub(1).and_then(|i| self.holes.get(i))
    }

    /// Holes won so far by `side`.
    pub fn holes_won(&self, side: Side) -> u32 {
        match side {
            Side::A => self.state.a_won,
            Side::B => self.state.b_won,
        }
    }
}

fn strokes_for_hole(meta: &MatchMeta, allowance: &Allowance, hole: usize) -> [[u8; 2]; 2] {
    let cards = meta.players_per_card();
    Side::BOTH.map(|side| {
        [0, 1].map(|player| {
            if player < cards {
                allowance.strokes_on_hole(side, player, hole, meta.si_set)
            } else {
                0
            }
        })
    })
}

fn net_for_hole(entry: &HoleEntry, strokes: &[[u8; 2]; 2], cards: usize) -> [[Option<i32>; 2]; 2] {
    let sides = [entry.a, entry.b];
    [0, 1].map(|s| {
        [0, 1].map(|p| {
            if p < cards {
                net_score(sides[s][p], strokes[s][p])
            } else {
                None
            }
        })
    })
}

/// Run the full scoring pipeline over a snapshot of a match.
///
/// The allowance is computed once, then holes are resolved in order until
/// the match is decided, every hole is played, or a hole is undecided.
/// Stroke and net previews are filled in for every hole regardless.
pub fn evaluate(meta: &MatchMeta, sides: &MatchSides, card: &Scorecard) -> MatchReport {
    let total = meta.total_holes();
    let cards = meta.players_per_card();
    let allowance = Allowance::compute(meta, sides);

    let entries: Vec<HoleEntry> = (0..total)
        .map(|i| card.entry(i).copied().unwrap_or_default())
        .collect();
    let strokes: Vec<[[u8; 2]; 2]> = (0..total)
        .map(|i| strokes_for_hole(meta, &allowance, i))
        .collect();

    let mut resolved = Vec::with_capacity(total);
    let state = aggregate(
        total as u32,
        entries
            .iter()
            .zip(&strokes)
            .map(|(entry, received)| resolve_hole(meta.format, entry, *received))
            .inspect(|outcome| resolved.push(*outcome)),
    );

    let holes = (0..total)
        .map(|i| {
            let info = hole_info(i, meta.si_set);
            HoleReport {
                number: i + 1,
                par: info.par,
                stroke_index: info.stroke_index,
                strokes: strokes[i],
                net: net_for_hole(&entries[i], &strokes[i], cards),
                outcome: resolved.get(i).copied(),
            }
        })
        .collect();

    let status = state.status();
    tracing::debug!(
        format = %meta.format,
        through = state.through,
        a_won = state.a_won,
        b_won = state.b_won,
        status = %status,
        "Evaluated match"
    );

    MatchReport {
        format: meta.format,
        allowance,
        state,
        status,
        label: status.to_string(),
        holes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::TeeSet;
    use crate::meta::HandicapMode;
    use crate::player::{MatchSide, Player};
    use crate::score::{CellRef, Score};
    use crate::test_helpers::{card_from_rows, fourball_sides, singles_sides};

    fn singles_meta() -> MatchMeta {
        MatchMeta::new(MatchFormat::Singles, 18, TeeSet::Men)
    }

    #[test]
    fn stroke_on_hardest_hole_halves_it() {
        // A plays off 10, B off 4: A receives on SI 1..=6. Men's 5th is SI 1.
        let sides = singles_sides(10, 4);
        let mut card = Scorecard::new(18);
        for hole in 0..4 {
            // Men's 2nd is SI 5, so A needs a 5 there to halve.
            let a = if hole == 1 { 5 } else { 4 };
            card.set(CellRef::new(hole, Side::A, 0), Score::Strokes(a));
            card.set(CellRef::new(hole, Side::B, 0), Score::Strokes(4));
        }
        card.set(CellRef::new(4, Side::A, 0), Score::Strokes(5));
        card.set(CellRef::new(4, Side::B, 0), Score::Strokes(4));

        let report = evaluate(&singles_meta(), &sides, &card);
        let fifth = report.hole(5).unwrap();
        assert_eq!(fifth.stroke_index, 1);
        assert_eq!(fifth.strokes, [[1, 0], [0, 0]]);
        assert_eq!(fifth.net[0][0], Some(4));
        assert_eq!(fifth.net[1][0], Some(4));
        assert_eq!(fifth.outcome, Some(HoleOutcome::Halved));
        assert_eq!(report.state.through, 5);
        assert_eq!(report.label, "AS");
    }

    #[test]
    fn gross_singles_ignores_handicaps() {
        let meta = MatchMeta {
            handicap_mode: HandicapMode::Gross,
            ..singles_meta()
        };
        let card = card_from_rows(&[&[5]], &[&[4]], 18);
        let report = evaluate(&meta, &singles_sides(10, 4), &card);
        assert_eq!(report.hole(1).unwrap().outcome, Some(HoleOutcome::B));
        assert_eq!(report.label, "B 1 UP");
    }

    #[test]
    fn undecided_hole_halts_aggregation() {
        let card = card_from_rows(&[&[4, 4, 4, -1, 3]], &[&[5, 5, 5, 4, 9]], 18);
        let report = evaluate(&singles_meta(), &singles_sides(0, 0), &card);
        assert_eq!(report.state.through, 3);
        assert_eq!(report.label, "A 3 UP");
        assert_eq!(report.hole(4).unwrap().outcome, Some(HoleOutcome::Undecided));
        assert_eq!(report.hole(5).unwrap().outcome, None);
        // Net preview is still shown for the later hole.
        assert_eq!(report.hole(5).unwrap().net[0][0], Some(3));
    }

    #[test]
    fn early_clinch_ignores_later_holes() {
        let a: Vec<i64> = [3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 9, 9, 9, 9, 9].to_vec();
        let b: Vec<i64> = [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 1, 1, 1, 1, 1].to_vec();
        let card = card_from_rows(&[&a], &[&b], 18);
        let report = evaluate(&singles_meta(), &singles_sides(0, 0), &card);
        assert_eq!(report.state.through, 13);
        assert_eq!(report.label, "A wins 6&5");
        assert!(report.holes[13..].iter().all(|h| h.outcome.is_none()));
    }

    #[test]
    fn dormie_label() {
        let card = card_from_rows(
            &[&[3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4]],
            &[&[4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4]],
            18,
        );
        let report = evaluate(&singles_meta(), &singles_sides(0, 0), &card);
        assert_eq!(report.state.through, 15);
        assert_eq!(report.label, "A 3 UP (Dormie)");
    }

    #[test]
    fn thirty_six_holes_reuse_stroke_indexes() {
        let meta = MatchMeta::new(MatchFormat::Singles, 36, TeeSet::Men);
        let report = evaluate(&meta, &singles_sides(10, 4), &Scorecard::new(36));
        assert_eq!(report.holes.len(), 36);
        assert_eq!(report.hole(23).unwrap().stroke_index, 1);
        assert_eq!(report.hole(23).unwrap().strokes[0][0], 1);
        assert_eq!(report.label, "AS");
    }

    #[test]
    fn fourball_match() {
        let meta = MatchMeta::new(MatchFormat::Fourball, 18, TeeSet::Men);
        // Allowances: A1 0, A2 9, B1 4, B2 18.
        let sides = fourball_sides([2, 12], [6, 22]);
        let card = card_from_rows(&[&[4, 5], &[5, 4]], &[&[4, 6], &[6, 6]], 18);
        let report = evaluate(&meta, &sides, &card);

        let first = report.hole(1).unwrap();
        // SI 11: only B2 receives.
        assert_eq!(first.strokes, [[0, 0], [0, 1]]);
        assert_eq!(first.outcome, Some(HoleOutcome::Halved));

        let second = report.hole(2).unwrap();
        // SI 5: A2 and B2 receive, B1's allowance of 4 stops short.
        assert_eq!(second.strokes, [[0, 1], [0, 1]]);
        assert_eq!(second.net[0][1], Some(3));
        assert_eq!(second.outcome, Some(HoleOutcome::A));
        assert_eq!(report.label, "A 1 UP");
    }

    #[test]
    fn foursomes_uses_first_card_only() {
        let meta = MatchMeta::new(MatchFormat::Foursomes, 18, TeeSet::Ladies);
        let sides = MatchSides::new(
            MatchSide::pair(Player::new("A1", 18), Player::new("A2", 10)),
            MatchSide::pair(Player::new("B1", 8), Player::new("B2", 6)),
        );
        // Combined 14 vs 7: A receives on SI 1..=7. Ladies' 1st is SI 5.
        let card = card_from_rows(&[&[5], &[1]], &[&[4], &[1]], 18);
        let report = evaluate(&meta, &sides, &card);
        let first = report.hole(1).unwrap();
        assert_eq!(first.strokes, [[1, 0], [0, 0]]);
        assert_eq!(first.net[0][1], None);
        assert_eq!(first.outcome, Some(HoleOutcome::Halved));
    }

    #[test]
    fn short_card_is_padded() {
        let card = Scorecard::new(3);
        let report = evaluate(&singles_meta(), &singles_sides(0, 0), &card);
        assert_eq!(report.holes.len(), 18);
        assert_eq!(report.state.through, 0);
        assert_eq!(report.status, MatchStatus::AllSquare);
    }

    #[test]
    fn report_serialises() {
        let report = evaluate(&singles_meta(), &singles_sides(3, 3), &Scorecard::new(18));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["label"], "AS");
        assert_eq!(json["holes"].as_array().unwrap().len(), 18);
        assert_eq!(json["holes"][0]["outcome"], "Undecided");
        assert_eq!(json["holes"][1]["outcome"], serde_json::Value::Null);
    }
}
