//! Strictly Hanoi library - a type-checked Tower of Hanoi engine
//!
//! Rings live on three stack-backed pegs. Every move goes through a
//! contract that rejects empty sources and larger-on-smaller placements,
//! and the solver drives the classic recursive transfer.
//!
//! # Architecture
//!
//! - **Pegs and rings**: dumb LIFO storage, no rule checking
//! - **Game**: owns the pegs, validates moves, records history
//! - **Invariants**: conservation, ordering and history checks
//! - **Report**: console and JSON rendering of a full solve
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{HanoiGame, Tower};
//!
//! # fn example() -> Result<(), strictly_hanoi::HanoiError> {
//! let mut game = HanoiGame::new(3)?;
//! let moves = game.solve()?;
//! assert_eq!(moves, 7);
//! assert_eq!(game.peg(Tower::Third).sizes(), vec![3, 2, 1]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, HanoiConfig, OutputFormat};

// Crate-level exports - Game types (Tower of Hanoi)
pub use games::hanoi::{
    ConservationInvariant, Contract, HanoiError, HanoiGame, HanoiInvariants,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation, LegalMove, Move,
    MoveContract, MoveRequest, OrderingInvariant, Peg, Ring, SmallerOnLarger, SolutionPlan,
    SolveReport, SourceNotEmpty, StateDump, Tower, can_place, check_placement, expected_moves,
    is_descending, label_for_size, validate_disk_count,
};
