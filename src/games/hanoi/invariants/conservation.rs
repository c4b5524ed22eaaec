//! Conservation invariant: every ring exists exactly once.

use super::super::HanoiGame;
use super::Invariant;

/// Invariant: the rings across all pegs are exactly sizes `1..=N`.
///
/// No ring is lost, duplicated or invented by a move.
pub struct ConservationInvariant;

impl Invariant<HanoiGame> for ConservationInvariant {
    fn holds(game: &HanoiGame) -> bool {
        let mut sizes: Vec<u32> = game.pegs().iter().flat_map(|p| p.sizes()).collect();
        sizes.sort_unstable();

        sizes.len() == game.num_disks()
            && sizes
                .iter()
                .zip(1u32..)
                .all(|(&size, expected)| size == expected)
    }

    fn description() -> &'static str {
        "Rings across all pegs are exactly 1..=N"
    }
}
