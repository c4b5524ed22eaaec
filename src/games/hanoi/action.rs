//! First-class move records and the error taxonomy for the puzzle.
//!
//! A [`Move`] is a domain event: it is recorded only after the engine has
//! validated and applied it, so the history of a game is always a legal
//! sequence.

use super::Tower;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A request to move the top ring of one tower onto another.
///
/// Requests carry intent only; they are validated by the move contract
/// before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct MoveRequest {
    /// Tower to take the ring from.
    pub from: Tower,
    /// Tower to place the ring on.
    pub to: Tower,
}

impl MoveRequest {
    /// Builds a request from raw zero-based peg indices.
    ///
    /// # Errors
    ///
    /// Returns [`HanoiError::InvalidPegIndex`] for the first index outside 0..=2.
    pub fn from_indices(from: usize, to: usize) -> Result<Self, HanoiError> {
        Ok(Self::new(Tower::try_from(from)?, Tower::try_from(to)?))
    }
}

/// One successful single-disk move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Sequence number of the move, starting at 1.
    pub number: u64,
    /// Size of the ring that moved.
    pub disk: u32,
    /// Display label of the ring that moved.
    pub label: String,
    /// Tower the ring was taken from.
    pub from: Tower,
    /// Tower the ring was placed on.
    pub to: Tower,
}

impl Move {
    /// Returns the source and destination towers as a pair.
    pub fn towers(&self) -> (Tower, Tower) {
        (self.from, self.to)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Move #{}: moved Ring(size={}, color={}) from {} to {}",
            self.number, self.disk, self.label, self.from, self.to
        )
    }
}

/// Errors raised by pegs and by the game engine.
///
/// Every failing operation leaves the game state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HanoiError {
    /// The requested number of disks is less than one.
    #[display("number of disks must be at least 1 (got {})", _0)]
    InvalidConfiguration(i64),

    /// A peg index outside 0..=2 was supplied.
    #[display("peg index must be 0, 1 or 2 (got {})", _0)]
    InvalidPegIndex(usize),

    /// Pop, peek or move against a peg with no rings.
    #[display("cannot move from an empty peg")]
    EmptyPeg,

    /// The move would put a larger ring on top of a smaller (or equal) one.
    #[display("cannot place a larger disk on a smaller one ({disk} onto {onto})")]
    IllegalMove {
        /// Size of the ring being moved.
        disk: u32,
        /// Size of the ring currently on top of the destination.
        onto: u32,
    },

    /// A postcondition check found corrupted game state.
    #[display("invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for HanoiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_uses_one_based_towers() {
        let mov = Move::new(1, 1, "red".to_string(), Tower::First, Tower::Third);
        assert_eq!(
            mov.to_string(),
            "Move #1: moved Ring(size=1, color=red) from tower 1 to tower 3"
        );
    }

    #[test]
    fn test_request_rejects_first_bad_index() {
        assert_eq!(
            MoveRequest::from_indices(7, 9),
            Err(HanoiError::InvalidPegIndex(7))
        );
        assert_eq!(
            MoveRequest::from_indices(0, 5),
            Err(HanoiError::InvalidPegIndex(5))
        );
        assert_eq!(
            MoveRequest::from_indices(1, 2),
            Ok(MoveRequest::new(Tower::Second, Tower::Third))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HanoiError::EmptyPeg.to_string(),
            "cannot move from an empty peg"
        );
        assert!(
            HanoiError::IllegalMove { disk: 2, onto: 1 }
                .to_string()
                .starts_with("cannot place a larger disk on a smaller one")
        );
        assert!(HanoiError::InvalidPegIndex(5).to_string().contains('5'));
    }
}
