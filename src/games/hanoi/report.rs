//! Console-style report of a full solve.

use super::action::{HanoiError, Move};
use super::game::HanoiGame;
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Ring labels per tower, bottom to top, as rendered in state dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateDump {
    /// One line per tower, e.g. `Tower 1: [Ring(size=1, color=red)]`.
    pub lines: Vec<String>,
    /// Ring sizes per tower, bottom to top.
    pub towers: [Vec<u32>; 3],
}

impl StateDump {
    /// Captures the current state of a game.
    pub fn capture(game: &HanoiGame) -> Self {
        Self {
            lines: game.describe_state().lines().map(str::to_string).collect(),
            towers: game.snapshot(),
        }
    }
}

/// Everything observable about one solve, in order.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct SolveReport {
    /// Number of rings.
    disks: usize,
    /// State before the first move.
    initial: StateDump,
    /// Every move made.
    moves: Vec<Move>,
    /// State after the last move.
    final_state: StateDump,
    /// Total moves.
    move_count: u64,
}

impl SolveReport {
    /// Builds a fresh game with `num_disks` rings, solves it and records the run.
    #[instrument]
    pub fn run(num_disks: usize) -> Result<Self, HanoiError> {
        let mut game = HanoiGame::new(num_disks)?;
        let initial = StateDump::capture(&game);
        let move_count = game.solve()?;

        Ok(Self {
            disks: num_disks,
            initial,
            moves: game.history().to_vec(),
            final_state: StateDump::capture(&game),
            move_count,
        })
    }

    /// Renders the report as console lines.
    ///
    /// With `show_state` the initial and final dumps frame the move lines.
    /// The summary line always comes last.
    pub fn render_text(&self, show_state: bool) -> String {
        let mut lines = Vec::with_capacity(self.moves.len() + 10);
        lines.push(format!("Solving Tower of Hanoi with {} disks", self.disks));
        if show_state {
            lines.push("Initial state:".to_string());
            lines.extend(self.initial.lines.iter().cloned());
        }
        lines.extend(self.moves.iter().map(Move::to_string));
        if show_state {
            lines.push("Final state:".to_string());
            lines.extend(self.final_state.lines.iter().cloned());
        }
        lines.push(format!("Solved in {} moves", self.move_count));
        lines.join("\n")
    }

    /// Renders the report as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_disk_text_report() {
        let report = SolveReport::run(2).expect("solvable");
        let expected = "\
Solving Tower of Hanoi with 2 disks
Initial state:
Tower 1: [Ring(size=2, color=orange), Ring(size=1, color=red)]
Tower 2: []
Tower 3: []
Move #1: moved Ring(size=1, color=red) from tower 1 to tower 2
Move #2: moved Ring(size=2, color=orange) from tower 1 to tower 3
Move #3: moved Ring(size=1, color=red) from tower 2 to tower 3
Final state:
Tower 1: []
Tower 2: []
Tower 3: [Ring(size=2, color=orange), Ring(size=1, color=red)]
Solved in 3 moves";
        assert_eq!(report.render_text(true), expected);
    }

    #[test]
    fn test_text_without_state() {
        let report = SolveReport::run(1).expect("solvable");
        assert_eq!(
            report.render_text(false),
            "Solving Tower of Hanoi with 1 disks\n\
             Move #1: moved Ring(size=1, color=red) from tower 1 to tower 3\n\
             Solved in 1 moves"
        );
    }

    #[test]
    fn test_json_report() {
        let report = SolveReport::run(3).expect("solvable");
        let json = report.render_json().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["move_count"], 7);
        assert_eq!(value["moves"].as_array().map(Vec::len), Some(7));
        assert_eq!(value["final_state"]["towers"][2], serde_json::json!([3, 2, 1]));
        assert_eq!(value["moves"][0]["from"], "First");
    }

    #[test]
    fn test_run_rejects_zero() {
        assert!(SolveReport::run(0).is_err());
    }
}
