//! Placement rules for the puzzle.
//!
//! Pure functions over pegs and ring sizes. Pegs store rings without
//! judgement; every legality decision in the engine goes through here.

use super::action::HanoiError;
use super::peg::Peg;
use tracing::instrument;

/// Returns true if a ring of size `moving` may rest on `onto`.
///
/// An empty destination accepts any ring.
pub fn can_place(moving: u32, onto: Option<u32>) -> bool {
    onto.is_none_or(|top| moving < top)
}

/// Checks that the top ring of `source` may be moved onto `destination`.
///
/// # Errors
///
/// - [`HanoiError::EmptyPeg`] if `source` holds no rings.
/// - [`HanoiError::IllegalMove`] if the destination top is not larger.
#[instrument(skip_all)]
pub fn check_placement(source: &Peg, destination: &Peg) -> Result<(), HanoiError> {
    let moving = source.peek()?.size();
    let onto = destination.peek().ok().map(|r| r.size());

    match onto {
        Some(top) if !can_place(moving, onto) => Err(HanoiError::IllegalMove {
            disk: moving,
            onto: top,
        }),
        _ => Ok(()),
    }
}

/// Returns true if sizes strictly decrease from bottom to top.
pub fn is_descending(sizes: &[u32]) -> bool {
    sizes.windows(2).all(|w| w[0] > w[1])
}

#[cfg(test)]
mod tests {
    use super::super::ring::Ring;
    use super::*;

    fn peg_of(sizes: &[u32]) -> Peg {
        let mut peg = Peg::new();
        for &size in sizes {
            peg.push(Ring::new(size));
        }
        peg
    }

    #[test]
    fn test_any_ring_fits_empty_peg() {
        assert!(can_place(7, None));
    }

    #[test]
    fn test_smaller_on_larger() {
        assert!(can_place(1, Some(2)));
        assert!(!can_place(2, Some(1)));
        assert!(!can_place(2, Some(2)));
    }

    #[test]
    fn test_check_placement_empty_source() {
        let source = Peg::new();
        let destination = peg_of(&[3]);
        assert_eq!(
            check_placement(&source, &destination),
            Err(HanoiError::EmptyPeg)
        );
    }

    #[test]
    fn test_check_placement_illegal() {
        let source = peg_of(&[2]);
        let destination = peg_of(&[3, 1]);
        assert_eq!(
            check_placement(&source, &destination),
            Err(HanoiError::IllegalMove { disk: 2, onto: 1 })
        );
    }

    #[test]
    fn test_check_placement_legal() {
        let source = peg_of(&[3, 1]);
        let destination = peg_of(&[2]);
        assert!(check_placement(&source, &destination).is_ok());
    }

    #[test]
    fn test_is_descending() {
        assert!(is_descending(&[]));
        assert!(is_descending(&[4]));
        assert!(is_descending(&[4, 2, 1]));
        assert!(!is_descending(&[1, 2]));
        assert!(!is_descending(&[2, 2]));
    }
}
