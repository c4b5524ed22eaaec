//! Tests for the solver plan and invariants during a solve.

use strictly_hanoi::{
    HanoiGame, HanoiInvariants, InvariantSet, MoveRequest, SolutionPlan, Tower, expected_moves,
};

#[test]
fn test_iterative_matches_recursive() {
    for disks in 1..=9 {
        let mut recursive = HanoiGame::new(disks).expect("Valid game");
        let mut iterative = HanoiGame::new(disks).expect("Valid game");

        recursive.solve().expect("Solvable");
        iterative.solve_iterative().expect("Solvable");

        assert_eq!(recursive.history(), iterative.history());
        assert_eq!(recursive.snapshot(), iterative.snapshot());
    }
}

#[test]
fn test_invariants_hold_after_every_move() {
    let disks = 5;
    let mut game = HanoiGame::new(disks).expect("Valid game");

    for (from, to) in SolutionPlan::standard(disks) {
        game.apply(MoveRequest::new(from, to)).expect("Planned move is legal");
        assert!(HanoiInvariants::check_all(&game).is_ok());
    }

    assert!(game.is_solved());
    assert_eq!(Some(game.move_count()), expected_moves(disks));
}

#[test]
fn test_plan_between_arbitrary_towers() {
    let mut game = HanoiGame::new(3).expect("Valid game");
    for (from, to) in SolutionPlan::new(3, Tower::First, Tower::Second, Tower::Third) {
        game.apply(MoveRequest::new(from, to)).expect("Planned move is legal");
    }
    assert_eq!(game.peg(Tower::Second).sizes(), vec![3, 2, 1]);
    assert_eq!(game.move_count(), 7);
}

#[test]
fn test_solve_on_moved_game_fails_cleanly() {
    let mut game = HanoiGame::new(2).expect("Valid game");
    game.move_disk(0, 2).expect("Legal");

    assert!(game.solve().is_err());
    assert!(HanoiInvariants::check_all(&game).is_ok());
}
