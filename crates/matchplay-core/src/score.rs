use serde::{Deserialize, Serialize};

use crate::player::Side;

/// Highest stroke count accepted for a single hole.
pub const MAX_STROKES: u8 = 15;

/// One score cell as entered by a scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<RawScore>", into = "Option<u8>")]
pub enum Score {
    /// Nothing entered yet. Invalid input also lands here.
    #[default]
    Absent,
    /// Entered as 0: the hole was conceded or the ball picked up.
    PickedUp,
    /// Strokes taken, 1..=15.
    Strokes(u8),
}

impl Score {
    /// Normalise a raw number: 0 is a pick-up, 1..=15 is a score, anything
    /// else counts as not entered.
    pub fn from_raw(value: i64) -> Self {
        match value {
            0 => Self::PickedUp,
            n if (1..=i64::from(MAX_STROKES)).contains(&n) => Self::Strokes(n as u8),
            _ => Self::Absent,
        }
    }

    /// Parse a cell the way it arrives from a text input.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::Absent;
        }
        if let Ok(n) = text.parse::<i64>() {
            return Self::from_raw(n);
        }
        match text.parse::<f64>() {
            Ok(f) => Self::from_float(f),
            Err(_) => Self::Absent,
        }
    }

    fn from_float(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 {
            Self::from_raw(value as i64)
        } else {
            Self::Absent
        }
    }

    /// Strokes taken, if this cell holds a real score.
    pub fn strokes(self) -> Option<u8> {
        match self {
            Self::Strokes(n) => Some(n),
            Self::Absent | Self::PickedUp => None,
        }
    }

    pub fn is_absent(self) -> bool {
        self == Self::Absent
    }

    pub fn is_picked_up(self) -> bool {
        self == Self::PickedUp
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "-"),
            Self::PickedUp => write!(f, "P"),
            Self::Strokes(n) => write!(f, "{n}"),
        }
    }
}

/// Loosely typed cell as it appears in fixtures and JSON payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Int(i64),
    Float(f64),
    Text(String),
    /// Booleans, tables and anything else a scorer can't have meant.
    Other(serde::de::IgnoredAny),
}

impl From<Option<RawScore>> for Score {
    fn from(raw: Option<RawScore>) -> Self {
        match raw {
            None => Self::Absent,
            Some(RawScore::Int(n)) => Self::from_raw(n),
            Some(RawScore::Float(f)) => Self::from_float(f),
            Some(RawScore::Text(s)) => Self::parse(&s),
            Some(RawScore::Other(_)) => Self::Absent,
        }
    }
}

impl From<Score> for Option<u8> {
    fn from(score: Score) -> Self {
        match score {
            Score::Absent => None,
            Score::PickedUp => Some(0),
            Score::Strokes(n) => Some(n),
        }
    }
}

/// All cells for one hole. Singles and foursomes only use slot 0 of each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleEntry {
    pub a: [Score; 2],
    pub b: [Score; 2],
}

impl HoleEntry {
    /// Entry for a singles or foursomes hole.
    pub fn pair(a: Score, b: Score) -> Self {
        Self {
            a: [a, Score::Absent],
            b: [b, Score::Absent],
        }
    }

    /// Entry for a fourball hole.
    pub fn fourball(a: [Score; 2], b: [Score; 2]) -> Self {
        Self { a, b }
    }

    pub fn side(&self, side: Side) -> &[Score; 2] {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut [Score; 2] {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }
}

/// Address of a single score cell. `hole` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub hole: usize,
    pub side: Side,
    pub player: usize,
}

impl CellRef {
    pub fn new(hole: usize, side: Side, player: usize) -> Self {
        Self { hole, side, player }
    }
}

/// Hole-by-hole scores for a whole match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub entries: Vec<HoleEntry>,
}

impl Scorecard {
    /// An empty card of `holes` holes.
    pub fn new(holes: usize) -> Self {
        Self {
            entries: vec![HoleEntry::default(); holes],
        }
    }

    /// Build from per-player rows, the shape scores are stored in. Rows
    /// longer than `holes` are truncated, shorter ones padded with absent
    /// cells, and rows beyond the second player are ignored.
    pub fn from_cards(a_cards: &[Vec<Score>], b_cards: &[Vec<Score>], holes: usize) -> Self {
        let mut card = Self::new(holes);
        for (side, rows) in [(Side::A, a_cards), (Side::B, b_cards)] {
            for (player, row) in rows.iter().take(2).enumerate() {
                for (hole, score) in row.iter().take(holes).enumerate() {
                    card.entries[hole].side_mut(side)[player] = *score;
                }
            }
        }
        card
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, hole: usize) -> Option<&HoleEntry> {
        self.entries.get(hole)
    }

    pub fn get(&self, cell: CellRef) -> Score {
        self.entries
            .get(cell.hole)
            .and_then(|e| e.side(cell.side).get(cell.player).copied())
            .unwrap_or_default()
    }

    /// Overwrite one cell. Returns false if the cell is outside the card.
    pub fn set(&mut self, cell: CellRef, score: Score) -> bool {
        match self
            .entries
            .get_mut(cell.hole)
            .and_then(|e| e.side_mut(cell.side).get_mut(cell.player))
        {
            Some(slot) => {
                *slot = score;
                true
            },
            None => false,
        }
    }

    /// Sum of strokes over a range of holes for one player's card. Picked-up
    /// and empty holes add nothing.
    pub fn gross_over(&self, side: Side, player: usize, holes: std::ops::Range<usize>) -> u32 {
        self.entries
            .iter()
            .enumerate()
            .filter(|(i, _)| holes.contains(i))
            .filter_map(|(_, e)| e.side(side).get(player).and_then(|s| s.strokes()))
            .map(u32::from)
            .sum()
    }

    pub fn gross_total(&self, side: Side, player: usize) -> u32 {
        self.gross_over(side, player, 0..self.entries.len())
    }

    /// Front nine of the first round.
    pub fn gross_out(&self, side: Side, player: usize) -> u32 {
        self.gross_over(side, player, 0..9)
    }

    /// Back nine of the first round.
    pub fn gross_in(&self, side: Side, player: usize) -> u32 {
        self.gross_over(side, player, 9..18)
    }
}
