//! Ordering invariant: no ring rests on a smaller one.

use super::super::{HanoiGame, rules};
use super::Invariant;

/// Invariant: on every peg, sizes strictly decrease from bottom to top.
pub struct OrderingInvariant;

impl Invariant<HanoiGame> for OrderingInvariant {
    fn holds(game: &HanoiGame) -> bool {
        game.pegs()
            .iter()
            .all(|peg| rules::is_descending(&peg.sizes()))
    }

    fn description() -> &'static str {
        "Ring sizes strictly decrease from bottom to top on every peg"
    }
}
