use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::Seat;

/// Everything here is recoverable at the request boundary: a rejected
/// operation with an explanatory message, never process termination.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid input! Input should be 9 comma separated chars, each '-', 'X', or 'O'")]
    MalformedBoard,

    #[error("Not your turn. It is {}'s turn to play an '{}'!", .0, .0.mark())]
    NotYourTurn(Seat),

    #[error("Invalid move!")]
    IllegalMove,

    #[error("Game state is inconsistent")]
    InconsistentState,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl GameError {
    /// Wire-safe discriminant used by the HTTP layer in error bodies.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::MalformedBoard => ErrorKind::MalformedBoard,
            GameError::NotYourTurn(_) => ErrorKind::NotYourTurn,
            GameError::IllegalMove => ErrorKind::IllegalMove,
            GameError::InconsistentState => ErrorKind::InconsistentState,
            GameError::NotFound(_) => ErrorKind::NotFound,
            GameError::Conflict(_) => ErrorKind::Conflict,
            GameError::Storage(_) => ErrorKind::Storage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    MalformedBoard,
    NotYourTurn,
    IllegalMove,
    InconsistentState,
    NotFound,
    Conflict,
    Storage,
}
