//! Contract-based validation for single-disk moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. The
//! precondition is the only gate through which the engine mutates pegs.

use super::HanoiGame;
use super::action::{HanoiError, MoveRequest};
use super::invariants::{InvariantSet, HanoiInvariants};
use super::rules;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), HanoiError>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), HanoiError>;
}

/// Precondition: the source tower holds at least one ring.
pub struct SourceNotEmpty;

impl SourceNotEmpty {
    /// Fails with [`HanoiError::EmptyPeg`] if the source is empty.
    #[instrument(skip(game))]
    pub fn check(request: &MoveRequest, game: &HanoiGame) -> Result<(), HanoiError> {
        if game.peg(request.from).is_empty() {
            Err(HanoiError::EmptyPeg)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the moving ring is smaller than the destination top.
pub struct SmallerOnLarger;

impl SmallerOnLarger {
    /// Fails with [`HanoiError::IllegalMove`] on a size violation.
    #[instrument(skip(game))]
    pub fn check(request: &MoveRequest, game: &HanoiGame) -> Result<(), HanoiError> {
        rules::check_placement(game.peg(request.from), game.peg(request.to))
    }
}

/// Composite precondition, checked in order: source first, then size.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(request: &MoveRequest, game: &HanoiGame) -> Result<(), HanoiError> {
        SourceNotEmpty::check(request, game)?;
        SmallerOnLarger::check(request, game)?;
        Ok(())
    }
}

/// Contract for move requests.
///
/// Preconditions:
/// - Source tower is not empty
/// - Moving ring is smaller than the destination top
///
/// Postconditions:
/// - Rings are conserved
/// - Every peg stays size-ordered
/// - History matches the move counter
pub struct MoveContract;

impl Contract<HanoiGame, MoveRequest> for MoveContract {
    fn pre(game: &HanoiGame, request: &MoveRequest) -> Result<(), HanoiError> {
        LegalMove::check(request, game)
    }

    fn post(after: &HanoiGame) -> Result<(), HanoiError> {
        HanoiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            HanoiError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::{Ring, Tower};

    #[test]
    fn test_precondition_legal_first_move() {
        let game = HanoiGame::new(3).expect("valid game");
        let request = MoveRequest::new(Tower::First, Tower::Third);
        assert!(MoveContract::pre(&game, &request).is_ok());
    }

    #[test]
    fn test_precondition_empty_source() {
        let game = HanoiGame::new(3).expect("valid game");
        let request = MoveRequest::new(Tower::Second, Tower::First);
        assert_eq!(
            MoveContract::pre(&game, &request),
            Err(HanoiError::EmptyPeg)
        );
    }

    #[test]
    fn test_precondition_larger_on_smaller() {
        let mut game = HanoiGame::new(2).expect("valid game");
        game.move_disk(0, 1).expect("legal");
        let request = MoveRequest::new(Tower::First, Tower::Second);
        assert_eq!(
            MoveContract::pre(&game, &request),
            Err(HanoiError::IllegalMove { disk: 2, onto: 1 })
        );
    }

    #[test]
    fn test_precondition_same_tower_rejected() {
        let game = HanoiGame::new(2).expect("valid game");
        let request = MoveRequest::new(Tower::First, Tower::First);
        assert_eq!(
            MoveContract::pre(&game, &request),
            Err(HanoiError::IllegalMove { disk: 1, onto: 1 })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut game = HanoiGame::new(3).expect("valid game");
        game.move_disk(0, 2).expect("legal");
        assert!(MoveContract::post(&game).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut game = HanoiGame::new(3).expect("valid game");
        game.pegs[Tower::Second.index()].push(Ring::new(1));
        assert!(matches!(
            MoveContract::post(&game),
            Err(HanoiError::InvariantViolation(_))
        ));
    }
}
