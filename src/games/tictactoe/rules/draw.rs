//! Tie detection for tic-tac-toe.

use super::super::board::Cells;
use super::super::types::Square;

/// Checks if every square is occupied.
///
/// A full board with no winner is a tie.
pub fn is_full(cells: &Cells) -> bool {
    cells.iter().all(|s| *s != Square::Empty)
}
