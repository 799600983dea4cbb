//! Handicap strokes: who receives them, how many, and on which holes.
//!
//! Allowances are a function of the match configuration only. Compute one
//! [`Allowance`] per configuration change and reuse it for every hole.

use serde::{Deserialize, Serialize};

use crate::course::{TeeSet, stroke_index};
use crate::meta::{HandicapMode, MatchFormat, MatchMeta};
use crate::player::{MatchSides, Side};

/// Fourball players receive this share of their difference from the lowest handicap.
pub const FOURBALL_ALLOWANCE: f64 = 0.9;

/// Round half toward positive infinity, so 2.5 -> 3 and -2.5 -> -2.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// The side that receives strokes in a head-to-head allowance, and how many.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeReceiver {
    /// `None` for a scratch match.
    pub receiver: Option<Side>,
    pub diff: i32,
}

impl StrokeReceiver {
    pub fn scratch() -> Self {
        Self::default()
    }

    /// The higher of two playing handicaps receives the difference.
    pub fn between(a: i32, b: i32) -> Self {
        match a.cmp(&b) {
            std::cmp::Ordering::Equal => Self::scratch(),
            std::cmp::Ordering::Greater => Self {
                receiver: Some(Side::A),
                diff: a.saturating_sub(b),
            },
            std::cmp::Ordering::Less => Self {
                receiver: Some(Side::B),
                diff: b.saturating_sub(a),
            },
        }
    }

    /// A single stroke on every hole whose index is within the difference.
    /// A difference above 18 still only gives one stroke per hole.
    pub fn strokes_for(&self, side: Side, stroke_index: u8) -> u8 {
        match self.receiver {
            Some(receiver) if receiver == side && i32::from(stroke_index) <= self.diff => 1,
            _ => 0,
        }
    }
}

/// Singles: full difference between the two players' handicaps.
pub fn singles_diff_and_receiver(handicap_a: i32, handicap_b: i32) -> StrokeReceiver {
    StrokeReceiver::between(handicap_a, handicap_b)
}

/// Half the pair's combined handicap, rounded half up.
pub fn foursomes_combined(first: i32, second: i32) -> i32 {
    first.saturating_add(second).saturating_add(1).div_euclid(2)
}

/// Foursomes: difference between the two sides' combined handicaps.
pub fn foursomes_diff_and_receiver(sides: &MatchSides) -> StrokeReceiver {
    let combined_a = foursomes_combined(sides.a.handicap(0), sides.a.handicap(1));
    let combined_b = foursomes_combined(sides.b.handicap(0), sides.b.handicap(1));
    StrokeReceiver::between(combined_a, combined_b)
}

/// Fourball: each of the four players gets 90% of their difference from the
/// lowest handicap in the group, rounded half up. Indexed `[side][player]`
/// with side A first.
pub fn fourball_allowances(sides: &MatchSides) -> [[i32; 2]; 2] {
    let handicaps = [
        [sides.a.handicap(0), sides.a.handicap(1)],
        [sides.b.handicap(0), sides.b.handicap(1)],
    ];
    let lowest = handicaps.iter().flatten().copied().min().unwrap_or(0);
    handicaps.map(|pair| {
        pair.map(|h| {
            let difference = h.saturating_sub(lowest);
            round_half_up(f64::from(difference) * FOURBALL_ALLOWANCE)
        })
    })
}

/// Strokes received in a match, resolved once from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allowance {
    /// Singles and foursomes: one side receives strokes on one card.
    HeadToHead(StrokeReceiver),
    /// Fourball: every player has an individual allowance.
    Individual([[i32; 2]; 2]),
}

impl Default for Allowance {
    fn default() -> Self {
        Self::HeadToHead(StrokeReceiver::scratch())
    }
}

fn side_slot(side: Side) -> usize {
    match side {
        Side::A => 0,
        Side::B => 1,
    }
}

impl Allowance {
    pub fn compute(meta: &MatchMeta, sides: &MatchSides) -> Self {
        let allowance = match meta.format {
            MatchFormat::Singles => match meta.handicap_mode {
                HandicapMode::Gross => Self::HeadToHead(StrokeReceiver::scratch()),
                HandicapMode::Nett => Self::HeadToHead(singles_diff_and_receiver(
                    sides.a.handicap(0),
                    sides.b.handicap(0),
                )),
            },
            MatchFormat::Foursomes => Self::HeadToHead(foursomes_diff_and_receiver(sides)),
            MatchFormat::Fourball => Self::Individual(fourball_allowances(sides)),
        };
        tracing::debug!(format = %meta.format, ?allowance, "Computed handicap allowance");
        allowance
    }

    /// Allowance value (number of stroke indexes covered) for one card.
    pub fn allowance_for(&self, side: Side, player: usize) -> i32 {
        match self {
            Self::HeadToHead(r) if player == 0 && r.receiver == Some(side) => r.diff,
            Self::HeadToHead(_) => 0,
            Self::Individual(table) => table[side_slot(side)].get(player).copied().unwrap_or(0),
        }
    }

    /// Strokes a card receives on the hole with the given stroke index: 0 or 1.
    pub fn strokes_at(&self, side: Side, player: usize, stroke_index: u8) -> u8 {
        match self {
            Self::HeadToHead(r) if player == 0 => r.strokes_for(side, stroke_index),
            Self::HeadToHead(_) => 0,
            Self::Individual(_) => {
                u8::from(i32::from(stroke_index) <= self.allowance_for(side, player))
            },
        }
    }

    /// Strokes a card receives on a hole, by 0-based hole index.
    pub fn strokes_on_hole(&self, side: Side, player: usize, hole: usize, tee: TeeSet) -> u8 {
        self.strokes_at(side, player, stroke_index(hole, tee))
    }

    /// Strokes received across the first `holes` holes.
    pub fn total_strokes(&self, side: Side, player: usize, holes: usize, tee: TeeSet) -> u32 {
        (0..holes)
            .map(|hole| u32::from(self.strokes_on_hole(side, player, hole, tee)))
            .sum()
    }
}
