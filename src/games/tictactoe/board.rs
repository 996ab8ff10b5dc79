//! Board storage for tic-tac-toe.

use super::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Snapshot of all nine squares in row-major order (0-8).
pub type Cells = [Square; BOARD_SIZE];

/// 3x3 tic-tac-toe board.
///
/// Sole owner of square storage. The only write path is
/// [`BoardState::make_move`], which never panics and never overwrites.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardState {
    squares: Cells,
}

impl BoardState {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every square.
    ///
    /// The copy is independent: writing to it never touches the board.
    pub fn board(&self) -> Cells {
        self.squares
    }

    /// Gets the square at the given index, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Number of empty squares left.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Places `mark` at `index`.
    ///
    /// Returns `false` without touching the board when the index is
    /// outside 0-8 or the square is already occupied.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: i64, mark: Mark) -> bool {
        let Some(pos) = usize::try_from(index).ok().filter(|&i| self.is_empty(i)) else {
            debug!("Rejected placement");
            return false;
        };
        self.squares[pos] = Square::Occupied(mark);
        true
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; BOARD_SIZE];
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{pos}")?,
                    Square::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new();
        assert_eq!(board.board(), [Square::Empty; BOARD_SIZE]);
        assert_eq!(board.empty_count(), 9);
    }

    #[test]
    fn test_make_move_writes_empty_square() {
        let mut board = BoardState::new();
        assert!(board.make_move(4, Mark::X));
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::X)));
        assert_eq!(board.empty_count(), 8);
    }

    #[test]
    fn test_make_move_rejects_occupied_square() {
        let mut board = BoardState::new();
        assert!(board.make_move(0, Mark::X));
        assert!(!board.make_move(0, Mark::O));
        assert_eq!(board.get(0), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_make_move_rejects_out_of_range() {
        let mut board = BoardState::new();
        assert!(!board.make_move(-1, Mark::X));
        assert!(!board.make_move(9, Mark::X));
        assert!(!board.make_move(i64::MAX, Mark::O));
        assert!(!board.make_move(i64::MIN, Mark::O));
        assert_eq!(board.empty_count(), 9);
    }

    #[test]
    fn test_board_returns_independent_copy() {
        let mut board = BoardState::new();
        let mut snapshot = board.board();
        snapshot[3] = Square::Occupied(Mark::O);
        assert!(board.is_empty(3));
        assert!(board.make_move(3, Mark::X));
        assert_eq!(snapshot[3], Square::Occupied(Mark::O));
    }

    #[test]
    fn test_reset_clears_all_squares() {
        let mut board = BoardState::new();
        for i in 0..9 {
            assert!(board.make_move(i, Mark::X));
        }
        board.reset();
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_display() {
        let mut board = BoardState::new();
        board.make_move(0, Mark::X);
        board.make_move(4, Mark::O);
        assert_eq!(board.to_string(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }
}
