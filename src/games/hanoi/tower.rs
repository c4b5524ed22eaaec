//! Tower identifiers for the three pegs of the puzzle.

use super::action::HanoiError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One of the three towers (pegs) of the puzzle.
///
/// Raw peg indices are zero-based (0, 1, 2). Display numbering is
/// one-based, so `Tower::First` is shown as "tower 1".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Tower {
    /// Starting tower (index 0).
    First,
    /// Auxiliary tower (index 1).
    Second,
    /// Destination tower (index 2).
    Third,
}

impl Tower {
    /// Returns the zero-based index of this tower.
    pub fn index(self) -> usize {
        match self {
            Tower::First => 0,
            Tower::Second => 1,
            Tower::Third => 2,
        }
    }

    /// Returns the one-based number used in console output.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Converts a zero-based index into a tower.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().find(|t| t.index() == index)
    }

    /// Returns all towers in index order.
    pub fn all() -> [Tower; 3] {
        [Tower::First, Tower::Second, Tower::Third]
    }
}

impl TryFrom<usize> for Tower {
    type Error = HanoiError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(HanoiError::InvalidPegIndex(index))
    }
}

impl std::fmt::Display for Tower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tower {}", self.number())
    }
}
