//! Stack-backed peg holding rings.

use super::action::HanoiError;
use super::ring::Ring;

/// A last-in-first-out stack of rings.
///
/// The last element of the underlying vector is the top of the peg.
/// Pegs do not check placement order; that rule lives in the game.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Peg {
    rings: Vec<Ring>,
}

impl Peg {
    /// Creates an empty peg.
    pub fn new() -> Self {
        Self { rings: Vec::new() }
    }

    /// Places a ring on top.
    pub fn push(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    /// Removes and returns the top ring.
    pub fn pop(&mut self) -> Result<Ring, HanoiError> {
        self.rings.pop().ok_or(HanoiError::EmptyPeg)
    }

    /// Returns the top ring without removing it.
    pub fn peek(&self) -> Result<&Ring, HanoiError> {
        self.rings.last().ok_or(HanoiError::EmptyPeg)
    }

    /// Returns true if the peg holds no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Number of rings on the peg.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Ring sizes from bottom to top.
    pub fn sizes(&self) -> Vec<u32> {
        self.rings.iter().map(Ring::size).collect()
    }

    /// Iterates rings from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Ring> {
        self.rings.iter()
    }

    /// Renders the rings bottom to top as a comma-joined list.
    pub fn describe(&self) -> String {
        self.rings
            .iter()
            .map(Ring::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
