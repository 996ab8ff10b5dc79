//! Turn order invariant: the active player follows from the board.

use super::super::{GameEngine, Phase};
use super::{Invariant, count_marks};

/// Invariant: while in progress, player A is active exactly when both
/// players have placed the same number of marks.
///
/// Finished games are exempt; the last mover stays active.
pub struct TurnMatchesBoard;

impl Invariant<GameEngine> for TurnMatchesBoard {
    fn holds(engine: &GameEngine) -> bool {
        if engine.phase() == Phase::Over {
            return true;
        }
        let cells = engine.current_board();
        let [a, b] = engine.players();
        let a_to_move = engine.active_player() == a;
        let even = count_marks(&cells, *a.mark()) == count_marks(&cells, *b.mark());
        a_to_move == even
    }

    fn description() -> &'static str {
        "Player A moves exactly when mark counts are equal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_alternation() {
        let mut engine = GameEngine::default();
        assert!(TurnMatchesBoard::holds(&engine));
        for index in [0, 4, 8, 2] {
            engine.play_turn(index);
            assert!(TurnMatchesBoard::holds(&engine));
        }
    }

    #[test]
    fn test_detects_skipped_turn() {
        let mut engine = GameEngine::default();
        engine.play_turn(0);
        engine.active = 0;
        assert!(!TurnMatchesBoard::holds(&engine));
    }

    #[test]
    fn test_finished_game_exempt() {
        let mut engine = GameEngine::default();
        for index in [0, 3, 1, 4, 2] {
            engine.play_turn(index);
        }
        assert!(engine.is_over());
        assert!(TurnMatchesBoard::holds(&engine));
    }
}
