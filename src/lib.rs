//! Strictly Tic-Tac-Toe - pure game logic for a two-player 3x3 game
//!
//! The core is a board that accepts single-square writes and an engine
//! that runs turns, detects wins and ties, and reports every outcome as
//! a plain value. Rendering and input live with the host.
//!
//! # Architecture
//!
//! - **Board**: nine squares, written only through an occupancy check
//! - **Rules**: winning lines and full-board detection over a snapshot
//! - **Engine**: players, turn order, phase, and turn results
//! - **Session**: registry of independent engines for multi-game hosts
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, TurnOutcome};
//!
//! let mut engine = GameEngine::default();
//! for index in [0, 3, 1, 4] {
//!     engine.play_turn(index);
//! }
//! let result = engine.play_turn(2);
//! assert_eq!(result.status(), "Player X wins!");
//! assert_eq!(*result.combo(), Some([0, 1, 2]));
//! assert_eq!(*engine.play_turn(8).outcome(), TurnOutcome::AlreadyOver);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod driver;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal driver
pub use driver::{Input, OutputFormat, run};

// Crate-level exports - Session management
pub use session::{SessionError, SessionId, SessionRegistry};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, BoardState, Cells, EngineError, GameEngine, Mark, Phase, Player, Position,
    Square, TurnOutcome, TurnResult,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    BalancedMarks, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    TurnMatchesBoard,
};
pub use games::tictactoe::rules::{WINNING_LINES, is_full, winning_combo};
