//! Tic-tac-toe: board storage, rules and the turn engine.

mod board;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod turn;
mod types;

pub use board::{BOARD_SIZE, BoardState, Cells};
pub use engine::{GameEngine, Phase};
pub use error::EngineError;
pub use position::Position;
pub use turn::{TurnOutcome, TurnResult};
pub use types::{Mark, Player, Square};
