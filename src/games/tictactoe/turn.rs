//! Result values reported by the engine after each call.
//!
//! Every outcome is data. A rejected move, a move after the game ended,
//! a win and a tie are all ordinary [`TurnResult`]s for the caller to
//! branch on.

use super::types::{Mark, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What happened on a call into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The game had already ended; nothing changed.
    AlreadyOver,
    /// Index out of range or square occupied; nothing changed.
    InvalidMove,
    /// The mover completed a line.
    Won(Mark),
    /// The board filled with no line completed.
    Tie,
    /// The move was accepted and the given mark plays next.
    NextTurn(Mark),
    /// The game was reset to its initial condition.
    Reset,
}

impl TurnOutcome {
    /// True for outcomes that end the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnOutcome::Won(_) | TurnOutcome::Tie)
    }
}

/// Status report for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TurnResult {
    /// Structured outcome.
    outcome: TurnOutcome,
    /// Human-readable status line.
    status: String,
    /// Winning indices, present only for [`TurnOutcome::Won`].
    combo: Option<[usize; 3]>,
}

impl TurnResult {
    pub(super) fn already_over() -> Self {
        Self::plain(TurnOutcome::AlreadyOver, "Game is already over.")
    }

    pub(super) fn invalid_move() -> Self {
        Self::plain(TurnOutcome::InvalidMove, "Invalid move.")
    }

    pub(super) fn won(winner: &Player, combo: [usize; 3]) -> Self {
        Self {
            outcome: TurnOutcome::Won(*winner.mark()),
            status: format!("{} wins!", winner.name()),
            combo: Some(combo),
        }
    }

    pub(super) fn tie() -> Self {
        Self::plain(TurnOutcome::Tie, "It's a tie!")
    }

    pub(super) fn next_turn(next: &Player) -> Self {
        Self::plain(
            TurnOutcome::NextTurn(*next.mark()),
            format!("{}'s turn.", next.name()),
        )
    }

    pub(super) fn reset(first: &Player) -> Self {
        Self::plain(
            TurnOutcome::Reset,
            format!("Game reset. {} starts.", first.name()),
        )
    }

    fn plain(outcome: TurnOutcome, status: impl Into<String>) -> Self {
        Self {
            outcome,
            status: status.into(),
            combo: None,
        }
    }

    /// True when the call changed the board or the turn.
    pub fn is_accepted(&self) -> bool {
        !matches!(
            self.outcome,
            TurnOutcome::AlreadyOver | TurnOutcome::InvalidMove
        )
    }
}

impl std::fmt::Display for TurnResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status)
    }
}
