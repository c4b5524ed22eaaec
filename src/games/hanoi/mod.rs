//! Tower of Hanoi: rings, pegs, checked moves and the optimal solver.

mod action;
mod contracts;
mod game;
mod invariants;
mod peg;
mod report;
mod ring;
mod rules;
mod solver;
mod tower;

pub use action::{HanoiError, Move, MoveRequest};
pub use contracts::{Contract, LegalMove, MoveContract, SmallerOnLarger, SourceNotEmpty};
pub use game::{HanoiGame, validate_disk_count};
pub use invariants::{
    ConservationInvariant, HanoiInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, OrderingInvariant,
};
pub use peg::Peg;
pub use report::{SolveReport, StateDump};
pub use ring::{Ring, label_for_size};
pub use rules::{can_place, check_placement, is_descending};
pub use solver::{SolutionPlan, expected_moves};
pub use tower::Tower;
