use std::collections::HashMap;

use crate::fixture::Fixture;
use crate::score::{CellRef, Score, Scorecard};

/// Source of score snapshots, keyed by match id.
///
/// Writes are single cells and last write wins. Callers always evaluate the
/// latest snapshot in full; the store does no reconciliation.
pub trait ScoreStore {
    /// Current scores for a match, or `None` if the match is unknown.
    fn snapshot(&self, match_id: &str) -> Option<Scorecard>;

    /// Overwrite one cell. Returns false if the match or cell doesn't exist.
    fn set_cell(&mut self, match_id: &str, cell: CellRef, score: Score) -> bool;
}

/// In-memory score store.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    cards: HashMap<String, Scorecard>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a match, replacing any existing scores for it.
    pub fn insert(&mut self, match_id: impl Into<String>, card: Scorecard) {
        self.cards.insert(match_id.into(), card);
    }

    /// Seed the store with a fixture's scores.
    pub fn insert_fixture(&mut self, fixture: &Fixture) {
        self.insert(fixture.id.clone(), fixture.scorecard());
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn snapshot(&self, match_id: &str) -> Option<Scorecard> {
        self.cards.get(match_id).cloned()
    }

    fn set_cell(&mut self, match_id: &str, cell: CellRef, score: Score) -> bool {
        let Some(card) = self.cards.get_mut(match_id) else {
            tracing::warn!(match_id, "Score update for unknown match ignored");
            return false;
        };
        if !card.set(cell, score) {
            tracing::warn!(
                match_id,
                hole = cell.hole,
                side = %cell.side,
                player = cell.player,
                "Score update outside the card ignored"
            );
            return false;
        }
        tracing::debug!(
            match_id,
            hole = cell.hole,
            side = %cell.side,
            player = cell.player,
            %score,
            "Score updated"
        );
        true
    }
}
