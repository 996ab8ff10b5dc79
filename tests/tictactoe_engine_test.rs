//! Tests for the tic-tac-toe turn engine.

use strictly_tictactoe::{
    GameConfig, GameEngine, Mark, Phase, Player, Square, TurnOutcome, WINNING_LINES,
};

fn play_all(engine: &mut GameEngine, moves: &[i64]) {
    for &index in moves {
        engine.play_turn(index);
    }
}

#[test]
fn test_each_square_accepts_exactly_one_move() {
    for index in 0..9 {
        let mut engine = GameEngine::default();

        let first = engine.play_turn(index);
        assert!(first.is_accepted(), "square {index} should accept a move");
        let active = engine.active_player().clone();
        let board = engine.current_board();

        let second = engine.play_turn(index);
        assert_eq!(*second.outcome(), TurnOutcome::InvalidMove);
        assert_eq!(second.status(), "Invalid move.");
        assert_eq!(*second.combo(), None);
        assert_eq!(engine.active_player(), &active);
        assert_eq!(engine.current_board(), board);
    }
}

#[test]
fn test_out_of_range_rejected() {
    let mut engine = GameEngine::default();
    engine.play_turn(4);
    let before = engine.current_board();

    for index in [-1, -100, 9, 10, i64::MIN, i64::MAX] {
        let result = engine.play_turn(index);
        assert_eq!(*result.outcome(), TurnOutcome::InvalidMove);
        assert_eq!(engine.current_board(), before);
        assert_eq!(*engine.active_player().mark(), Mark::O);
    }
}

#[test]
fn test_strict_alternation() {
    let mut engine = GameEngine::default();
    let expected = [Mark::O, Mark::X, Mark::O, Mark::X];
    for (index, mark) in [0, 4, 8, 2].into_iter().zip(expected) {
        let result = engine.play_turn(index);
        assert_eq!(*result.outcome(), TurnOutcome::NextTurn(mark));
        assert_eq!(*engine.active_player().mark(), mark);
    }
}

#[test]
fn test_top_row_win() {
    let mut engine = GameEngine::new(Player::new("Ada", Mark::X), Player::new("Bo", Mark::O))
        .expect("distinct marks");

    play_all(&mut engine, &[0, 3, 1, 4]);
    let result = engine.play_turn(2);

    assert!(result.status().contains("Ada"));
    assert!(result.status().contains("wins"));
    assert_eq!(*result.outcome(), TurnOutcome::Won(Mark::X));
    assert_eq!(*result.combo(), Some([0, 1, 2]));
    assert_eq!(engine.phase(), Phase::Over);

    let board = engine.current_board();
    for index in [5, 8, 0] {
        let after = engine.play_turn(index);
        assert_eq!(*after.outcome(), TurnOutcome::AlreadyOver);
        assert_eq!(after.status(), "Game is already over.");
        assert_eq!(*after.combo(), None);
        assert_eq!(engine.current_board(), board);
    }
}

#[test]
fn test_second_player_wins_column() {
    let mut engine = GameEngine::default();
    play_all(&mut engine, &[0, 1, 2, 4, 3]);
    let result = engine.play_turn(7);

    assert_eq!(result.status(), "Player O wins!");
    assert_eq!(*result.outcome(), TurnOutcome::Won(Mark::O));
    assert_eq!(*result.combo(), Some([1, 4, 7]));
    assert_eq!(*engine.active_player().mark(), Mark::O);
}

#[test]
fn test_anti_diagonal_win() {
    let mut engine = GameEngine::default();
    play_all(&mut engine, &[2, 0, 4, 1]);
    let result = engine.play_turn(6);

    assert_eq!(*result.combo(), Some([2, 4, 6]));
    assert!(WINNING_LINES.contains(&[2, 4, 6]));
}

#[test]
fn test_tie() {
    let mut engine = GameEngine::default();
    // X O X / X O O / O X X
    play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7]);
    assert_eq!(engine.phase(), Phase::InProgress);
    engine.play_turn(6);
    let result = engine.play_turn(8);

    assert_eq!(result.status(), "It's a tie!");
    assert_eq!(*result.outcome(), TurnOutcome::Tie);
    assert_eq!(*result.combo(), None);
    assert!(engine.is_over());
    assert!(engine.current_board().iter().all(|s| *s != Square::Empty));
}

#[test]
fn test_reset_matches_fresh_session() {
    let moves = [4, 0, 8, 2, 1, 7, 5, 3, 6];

    let mut fresh = GameEngine::default();
    let expected: Vec<_> = moves.iter().map(|&i| fresh.play_turn(i)).collect();

    let mut reused = GameEngine::default();
    play_all(&mut reused, &[0, 3, 1, 4, 2]);
    assert!(reused.is_over());

    let reset = reused.reset_game();
    assert_eq!(*reset.outcome(), TurnOutcome::Reset);
    assert_eq!(*reset.combo(), None);
    assert_eq!(reused.current_board(), [Square::Empty; 9]);
    assert_eq!(*reused.active_player().mark(), Mark::X);
    assert_eq!(reused.phase(), Phase::InProgress);

    let actual: Vec<_> = moves.iter().map(|&i| reused.play_turn(i)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_reset_keeps_players() {
    let mut engine = GameEngine::from_config(&GameConfig::new("Ada", "Bo"));
    engine.play_turn(0);
    let players = engine.players().clone();
    engine.reset_game();
    assert_eq!(engine.players(), &players);
    assert_eq!(engine.active_player().name(), "Ada");
}

#[test]
fn test_board_copy_is_detached() {
    let mut engine = GameEngine::default();
    let mut snapshot = engine.current_board();
    snapshot[0] = Square::Occupied(Mark::O);
    snapshot[4] = Square::Occupied(Mark::O);

    let result = engine.play_turn(0);
    assert_eq!(*result.outcome(), TurnOutcome::NextTurn(Mark::O));
    assert_eq!(engine.current_board()[0], Square::Occupied(Mark::X));
    assert_eq!(engine.current_board()[4], Square::Empty);
}

#[test]
fn test_engine_is_send() {
    fn assert_send<T: Send + 'static>() {}
    assert_send::<GameEngine>();
}
