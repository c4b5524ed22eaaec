//! The puzzle engine: three pegs, checked moves and the optimal solver.

use super::action::{HanoiError, Move, MoveRequest};
use super::contracts::{Contract, MoveContract};
use super::peg::Peg;
use super::ring::Ring;
use super::solver::SolutionPlan;
use super::Tower;
use tracing::{debug, info, instrument};

/// Validates a signed disk count from user input.
///
/// # Errors
///
/// Returns [`HanoiError::InvalidConfiguration`] for zero, negative or
/// unrepresentable counts.
pub fn validate_disk_count(num_disks: i64) -> Result<usize, HanoiError> {
    match u32::try_from(num_disks) {
        Ok(n) if n >= 1 => Ok(n as usize),
        _ => Err(HanoiError::InvalidConfiguration(num_disks)),
    }
}

/// Tower of Hanoi game state.
///
/// The first tower starts with every ring, largest at the bottom. All
/// state changes go through [`HanoiGame::apply`], which checks the move
/// contract first and leaves the game untouched on failure.
#[derive(Debug)]
pub struct HanoiGame {
    pub(super) pegs: [Peg; 3],
    num_disks: usize,
    pub(super) move_count: u64,
    history: Vec<Move>,
}

impl HanoiGame {
    /// Creates a game with `num_disks` rings stacked on the first tower.
    ///
    /// # Errors
    ///
    /// Returns [`HanoiError::InvalidConfiguration`] if `num_disks` is zero.
    #[instrument]
    pub fn new(num_disks: usize) -> Result<Self, HanoiError> {
        let top = u32::try_from(num_disks)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| {
                HanoiError::InvalidConfiguration(i64::try_from(num_disks).unwrap_or(i64::MAX))
            })?;

        let mut first = Peg::new();
        for size in (1..=top).rev() {
            first.push(Ring::new(size));
        }

        debug!(num_disks, "Game initialized");
        Ok(Self {
            pegs: [first, Peg::new(), Peg::new()],
            num_disks,
            move_count: 0,
            history: Vec::new(),
        })
    }

    /// Creates a game and applies a sequence of raw index moves.
    ///
    /// Stops at the first move that fails and returns its error.
    #[instrument(skip(moves), fields(move_total = moves.len()))]
    pub fn replay(num_disks: usize, moves: &[(usize, usize)]) -> Result<Self, HanoiError> {
        let mut game = Self::new(num_disks)?;
        for &(from, to) in moves {
            game.move_disk(from, to)?;
        }
        Ok(game)
    }

    /// Moves the top ring between zero-based peg indices.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`HanoiError::InvalidPegIndex`] if either index is outside 0..=2
    /// - [`HanoiError::EmptyPeg`] if the source peg is empty
    /// - [`HanoiError::IllegalMove`] if the ring is not smaller than the destination top
    pub fn move_disk(&mut self, from: usize, to: usize) -> Result<(), HanoiError> {
        let request = MoveRequest::from_indices(from, to)?;
        self.apply(request)
    }

    /// Applies a typed move request.
    ///
    /// Preconditions are always checked; postconditions in debug builds.
    #[instrument(skip(self), fields(from = %request.from, to = %request.to))]
    pub fn apply(&mut self, request: MoveRequest) -> Result<(), HanoiError> {
        MoveContract::pre(self, &request)?;

        let ring = self.pegs[request.from.index()].pop()?;
        self.move_count += 1;
        let mov = Move::new(
            self.move_count,
            ring.size(),
            ring.label().to_string(),
            request.from,
            request.to,
        );
        info!(
            move_number = mov.number,
            disk = %ring,
            from = request.from.number(),
            to = request.to.number(),
            "Moved disk"
        );
        self.pegs[request.to.index()].push(ring);
        self.history.push(mov);

        #[cfg(debug_assertions)]
        MoveContract::post(self)?;

        Ok(())
    }

    /// Moves every ring from the first tower to the third via the second.
    ///
    /// Returns the total number of moves made by this game.
    #[instrument(skip(self), fields(num_disks = self.num_disks))]
    pub fn solve(&mut self) -> Result<u64, HanoiError> {
        info!("Starting solve");
        self.transfer(self.num_disks, Tower::First, Tower::Third, Tower::Second)?;
        info!(moves = self.move_count, "Solved");
        Ok(self.move_count)
    }

    fn transfer(
        &mut self,
        disks: usize,
        source: Tower,
        destination: Tower,
        auxiliary: Tower,
    ) -> Result<(), HanoiError> {
        if disks == 1 {
            return self.apply(MoveRequest::new(source, destination));
        }
        self.transfer(disks - 1, source, auxiliary, destination)?;
        self.apply(MoveRequest::new(source, destination))?;
        self.transfer(disks - 1, auxiliary, destination, source)
    }

    /// Same result as [`HanoiGame::solve`] without recursion.
    #[instrument(skip(self), fields(num_disks = self.num_disks))]
    pub fn solve_iterative(&mut self) -> Result<u64, HanoiError> {
        info!("Starting iterative solve");
        for (from, to) in SolutionPlan::standard(self.num_disks) {
            self.apply(MoveRequest::new(from, to))?;
        }
        info!(moves = self.move_count, "Solved");
        Ok(self.move_count)
    }

    /// Returns the number of rings in play.
    pub fn num_disks(&self) -> usize {
        self.num_disks
    }

    /// Returns the number of successful moves so far.
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Returns every successful move in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the peg for a tower.
    pub fn peg(&self, tower: Tower) -> &Peg {
        &self.pegs[tower.index()]
    }

    /// Returns all three pegs in index order.
    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// True once every ring sits on the third tower.
    pub fn is_solved(&self) -> bool {
        self.peg(Tower::First).is_empty()
            && self.peg(Tower::Second).is_empty()
            && self.peg(Tower::Third).len() == self.num_disks
    }

    /// Ring sizes per tower, bottom to top.
    pub fn snapshot(&self) -> [Vec<u32>; 3] {
        Tower::all().map(|tower| self.peg(tower).sizes())
    }

    /// Renders one line per tower listing its rings bottom to top.
    pub fn describe_state(&self) -> String {
        Tower::all()
            .iter()
            .map(|&tower| format!("Tower {}: [{}]", tower.number(), self.peg(tower)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_disk_count() {
        assert_eq!(validate_disk_count(3), Ok(3));
        assert_eq!(
            validate_disk_count(0),
            Err(HanoiError::InvalidConfiguration(0))
        );
        assert_eq!(
            validate_disk_count(-2),
            Err(HanoiError::InvalidConfiguration(-2))
        );
    }

    #[test]
    fn test_new_stacks_first_tower() {
        let game = HanoiGame::new(3).expect("valid game");
        assert_eq!(game.snapshot(), [vec![3, 2, 1], vec![], vec![]]);
        assert_eq!(game.move_count(), 0);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_zero_disks_rejected() {
        assert_eq!(
            HanoiGame::new(0).unwrap_err(),
            HanoiError::InvalidConfiguration(0)
        );
    }

    #[test]
    fn test_failed_move_changes_nothing() {
        let mut game = HanoiGame::new(2).expect("valid game");
        game.move_disk(0, 1).expect("legal");
        let before = game.snapshot();

        assert!(game.move_disk(0, 1).is_err());
        assert!(game.move_disk(2, 0).is_err());
        assert!(game.move_disk(3, 0).is_err());

        assert_eq!(game.snapshot(), before);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_describe_state() {
        let game = HanoiGame::new(2).expect("valid game");
        assert_eq!(
            game.describe_state(),
            "Tower 1: [Ring(size=2, color=orange), Ring(size=1, color=red)]\nTower 2: []\nTower 3: []"
        );
    }

    #[test]
    fn test_solve_single_disk() {
        let mut game = HanoiGame::new(1).expect("valid game");
        assert_eq!(game.solve(), Ok(1));
        assert!(game.is_solved());
    }
}
