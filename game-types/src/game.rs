use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::{Board, Mark};

pub type GameId = Uuid;
pub type UserId = Uuid;

/// Which side of the game a user occupies. Player 1 always plays X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    Player1,
    Player2,
}

impl Seat {
    pub fn mark(self) -> Mark {
        match self {
            Seat::Player1 => Mark::X,
            Seat::Player2 => Mark::O,
        }
    }

    pub fn of_mark(mark: Mark) -> Seat {
        match mark {
            Mark::X => Seat::Player1,
            Mark::O => Seat::Player2,
        }
    }

    pub fn opponent(self) -> Seat {
        match self {
            Seat::Player1 => Seat::Player2,
            Seat::Player2 => Seat::Player1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player1 => write!(f, "player 1"),
            Seat::Player2 => write!(f, "player 2"),
        }
    }
}

/// Terminal states have no outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub player1: UserId,
    pub player2: UserId,
    pub board: Board,
    pub moves: u8,
    pub status: GameStatus,
}

impl Game {
    /// A fresh game: empty board, zero moves, X (player 1) to open.
    pub fn new(id: GameId, player1: UserId, player2: UserId) -> Self {
        Self {
            id,
            player1,
            player2,
            board: Board::EMPTY,
            moves: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.status {
            GameStatus::Won(seat) => Some(seat),
            _ => None,
        }
    }

    /// The mark due to play, derived purely from the move count.
    pub fn to_move(&self) -> Mark {
        Mark::to_move(self.moves)
    }

    pub fn user_at(&self, seat: Seat) -> UserId {
        match seat {
            Seat::Player1 => self.player1,
            Seat::Player2 => self.player2,
        }
    }

    pub fn seat_of(&self, user_id: UserId) -> Option<Seat> {
        if user_id == self.player1 {
            Some(Seat::Player1)
        } else if user_id == self.player2 {
            Some(Seat::Player2)
        } else {
            None
        }
    }
}
