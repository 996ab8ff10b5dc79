//! Turn and outcome engine for tic-tac-toe.
//!
//! A [`GameEngine`] is one self-contained session: two players, a board,
//! whose turn it is and whether the game has ended. Hosts construct and
//! own as many engines as they need; nothing here is global.
//!
//! The engine is synchronous and takes `&mut self` for every mutation.
//! A host that shares an engine across threads must serialize calls
//! itself, for example one engine per lock (see
//! [`SessionRegistry`](crate::SessionRegistry)).

use super::board::{BoardState, Cells};
use super::error::EngineError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::position::Position;
use super::rules::{is_full, winning_combo};
use super::turn::TurnResult;
use super::types::{Mark, Player};
use crate::config::GameConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Phase of a game session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// A win or tie has been reached; only reset changes state.
    Over,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: BoardState,
    pub(crate) players: [Player; 2],
    pub(crate) active: usize,
    pub(crate) phase: Phase,
}

impl GameEngine {
    /// Creates an engine for two players. Player A moves first.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateMark`] if both players hold the same mark.
    #[instrument(skip_all, fields(player_a = %player_a, player_b = %player_b))]
    pub fn new(player_a: Player, player_b: Player) -> Result<Self, EngineError> {
        if player_a.mark() == player_b.mark() {
            warn!("Players share a mark");
            return Err(EngineError::DuplicateMark {
                first: player_a.name().clone(),
                second: player_b.name().clone(),
                mark: *player_a.mark(),
            });
        }
        Ok(Self::with_players(player_a, player_b))
    }

    /// Creates an engine from configured player names.
    pub fn from_config(config: &GameConfig) -> Self {
        let (a, b) = config.players();
        Self::with_players(a, b)
    }

    fn with_players(player_a: Player, player_b: Player) -> Self {
        Self {
            board: BoardState::new(),
            players: [player_a, player_b],
            active: 0,
            phase: Phase::InProgress,
        }
    }

    /// Plays the active player's mark at `index` (0-8).
    ///
    /// Outcomes, in order of evaluation:
    /// - game already over: nothing changes
    /// - index out of range or square taken: nothing changes, same player to move
    /// - mover completes a line: game over, `combo` holds the line
    /// - board full: game over as a tie
    /// - otherwise: the other player becomes active
    ///
    /// Only the mover's mark is checked for a line. That is sufficient
    /// because exactly one square is placed per call and the check runs
    /// right after it, so the opponent cannot have completed a line
    /// unnoticed. Multi-square moves or undo would break this and need
    /// a check over both marks.
    #[instrument(skip(self), fields(mark = %self.active_player().mark(), phase = %self.phase))]
    pub fn play_turn(&mut self, index: i64) -> TurnResult {
        if self.phase == Phase::Over {
            debug!("Move attempted after game over");
            return TurnResult::already_over();
        }

        let mark = *self.active_player().mark();
        if !self.board.make_move(index, mark) {
            debug!("Invalid move");
            return TurnResult::invalid_move();
        }

        let cells = self.board.board();
        let result = if let Some(combo) = winning_combo(&cells, mark) {
            self.phase = Phase::Over;
            info!(winner = %self.active_player(), ?combo, "Game won");
            TurnResult::won(self.active_player(), combo)
        } else if is_full(&cells) {
            self.phase = Phase::Over;
            info!("Game tied");
            TurnResult::tie()
        } else {
            self.active = 1 - self.active;
            debug!(next = %self.active_player(), "Move accepted");
            TurnResult::next_turn(self.active_player())
        };

        self.check_invariants();
        result
    }

    /// Plays at a named position.
    pub fn play_position(&mut self, position: Position) -> TurnResult {
        self.play_turn(position.into())
    }

    /// Clears the board and hands the first move back to player A.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> TurnResult {
        self.board.reset();
        self.active = 0;
        self.phase = Phase::InProgress;
        info!(first = %self.players[0], "Game reset");
        TurnResult::reset(&self.players[0])
    }

    /// Returns the player allowed to move next.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Returns a copy of the board.
    pub fn current_board(&self) -> Cells {
        self.board.board()
    }

    /// Returns the board for rendering.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns both players, A first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player holding `mark`.
    pub fn player_with(&self, mark: Mark) -> Option<&Player> {
        self.players.iter().find(|p| *p.mark() == mark)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once a win or tie has been reached.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Positions still open for play. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        match self.phase {
            Phase::InProgress => Position::valid_moves(&self.board),
            Phase::Over => Vec::new(),
        }
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let result = EngineInvariants::check_all(self);
        if let Err(violations) = &result {
            for violation in violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "Engine invariants violated: {result:?}");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
