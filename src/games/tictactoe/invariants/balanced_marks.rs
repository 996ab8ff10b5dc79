//! Balanced marks invariant: player A has as many marks as B, or one more.

use super::super::GameEngine;
use super::{Invariant, count_marks};

/// Invariant: player A's marks equal player B's or exceed them by one.
pub struct BalancedMarks;

impl Invariant<GameEngine> for BalancedMarks {
    fn holds(engine: &GameEngine) -> bool {
        let cells = engine.current_board();
        let [a, b] = engine.players();
        let a_count = count_marks(&cells, *a.mark());
        let b_count = count_marks(&cells, *b.mark());
        a_count == b_count || a_count == b_count + 1
    }

    fn description() -> &'static str {
        "Player A has as many marks as player B, or one more"
    }
}
