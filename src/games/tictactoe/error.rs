//! Engine construction errors.

use super::types::Mark;
use derive_more::{Display, Error};

/// Error building a [`GameEngine`](super::GameEngine).
///
/// Gameplay never produces this; it only guards construction.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Both players were given the same mark.
    #[display("Players {first} and {second} both use mark {mark}")]
    DuplicateMark {
        /// Name of player A.
        first: String,
        /// Name of player B.
        second: String,
        /// The shared mark.
        mark: Mark,
    },
}
