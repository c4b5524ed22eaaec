//! History consistency invariant: the move log matches the move counter.

use super::super::HanoiGame;
use super::Invariant;

/// Invariant: history holds one entry per counted move, numbered `1..=n`.
pub struct HistoryConsistentInvariant;

impl Invariant<HanoiGame> for HistoryConsistentInvariant {
    fn holds(game: &HanoiGame) -> bool {
        let history = game.history();

        history.len() as u64 == game.move_count()
            && history
                .iter()
                .zip(1u64..)
                .all(|(mov, expected)| mov.number == expected)
    }

    fn description() -> &'static str {
        "History length and numbering match the move counter"
    }
}
