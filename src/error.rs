//! Error types for game operations.

use thiserror::Error;

/// Errors from driving a round through its phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round is not in the phase this operation needs.
    #[error("invalid round phase for this operation")]
    InvalidPhase,
    /// No player sits at this position.
    #[error("player not found")]
    PlayerNotFound,
    /// The round was set up without any players.
    #[error("no players at the table")]
    NoPlayers,
    /// The player has already stood, busted or run out of cards.
    #[error("player has already finished this round")]
    PlayerFinished,
}

/// Errors from playing a round at a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError<E> {
    /// The choice prompt failed. Fatal for the game.
    #[error("choice prompt failed: {0}")]
    Prompt(E),
    /// A phase was driven out of order.
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Errors from the scripted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// A choice was requested after the script ran out.
    #[error("no scripted choice left for player {0}")]
    Exhausted(usize),
}
