//! Registry of independent game sessions.
//!
//! Each session is its own [`GameEngine`]. The registry serializes every
//! call behind one lock, so hosts running several games can share it
//! across threads.

use crate::config::GameConfig;
use crate::games::tictactoe::{Cells, GameEngine, Player, TurnResult};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Errors from registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// A session with this id already exists.
    #[display("Session {_0} already exists")]
    AlreadyExists(#[error(not(source))] SessionId),
    /// No session with this id.
    #[display("Session {_0} not found")]
    NotFound(#[error(not(source))] SessionId),
    /// A thread panicked while holding the registry lock.
    #[display("Session registry lock poisoned")]
    Poisoned,
}

/// Shared map of game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<SessionId, GameEngine>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, GameEngine>>, SessionError> {
        self.sessions.lock().map_err(|_| {
            warn!("Session registry lock poisoned");
            SessionError::Poisoned
        })
    }

    fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameEngine) -> T,
    ) -> Result<T, SessionError> {
        let mut sessions = self.lock()?;
        match sessions.get_mut(id) {
            Some(engine) => Ok(f(engine)),
            None => {
                debug!(session_id = id, "Session not found");
                Err(SessionError::NotFound(id.to_string()))
            }
        }
    }

    /// Creates a new session with the configured players.
    #[instrument(skip_all)]
    pub fn create(
        &self,
        id: impl Into<SessionId>,
        config: &GameConfig,
    ) -> Result<SessionId, SessionError> {
        let id = id.into();
        let mut sessions = self.lock()?;

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        sessions.insert(id.clone(), GameEngine::from_config(config));
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Plays a turn in the given session.
    #[instrument(skip(self))]
    pub fn play_turn(&self, id: &str, index: i64) -> Result<TurnResult, SessionError> {
        self.with_session(id, |engine| engine.play_turn(index))
    }

    /// Resets the given session.
    #[instrument(skip(self))]
    pub fn reset(&self, id: &str) -> Result<TurnResult, SessionError> {
        self.with_session(id, GameEngine::reset_game)
    }

    /// Returns a copy of the session's board.
    pub fn board(&self, id: &str) -> Result<Cells, SessionError> {
        self.with_session(id, |engine| engine.current_board())
    }

    /// Returns the session's active player.
    pub fn active_player(&self, id: &str) -> Result<Player, SessionError> {
        self.with_session(id, |engine| engine.active_player().clone())
    }

    /// Removes a session, returning its final state.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<GameEngine, SessionError> {
        let removed = self.lock()?.remove(id);
        removed.ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Number of live sessions.
    pub fn len(&self) -> Result<usize, SessionError> {
        Ok(self.lock()?.len())
    }

    /// True when no sessions exist.
    pub fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.lock()?.is_empty())
    }
}
