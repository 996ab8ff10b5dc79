//! Win detection for tic-tac-toe.

use super::super::board::Cells;
use super::super::types::{Mark, Square};
use tracing::instrument;

/// The eight lines that win the game: rows, columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line fully held by `mark`, if any.
///
/// Only `mark` is inspected; lines held by the other mark are ignored.
#[instrument(skip(cells))]
pub fn winning_combo(cells: &Cells, mark: Mark) -> Option<[usize; 3]> {
    let held = Square::Occupied(mark);
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|&i| cells[i] == held))
}
