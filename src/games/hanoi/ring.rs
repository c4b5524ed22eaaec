//! Rings (disks) of the puzzle.

/// Colors assigned to rings by size, smallest first.
const LABELS: [&str; 8] = [
    "red", "orange", "yellow", "green", "blue", "indigo", "violet", "black",
];

/// Label used once sizes run past the color table.
const FALLBACK_LABEL: &str = "gray";

/// Returns the display label for a ring of the given size.
pub fn label_for_size(size: u32) -> &'static str {
    (size as usize)
        .checked_sub(1)
        .and_then(|i| LABELS.get(i))
        .copied()
        .unwrap_or(FALLBACK_LABEL)
}

/// A single disk.
///
/// Rings are deliberately not `Clone`: a ring exists exactly once and
/// moves between pegs by ownership transfer.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Ring {
    size: u32,
    label: &'static str,
}

impl Ring {
    /// Creates a ring labelled from the color table.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            label: label_for_size(size),
        }
    }

    /// Returns the ring size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the cosmetic label.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl std::fmt::Display for Ring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ring(size={}, color={})", self.size, self.label)
    }
}
