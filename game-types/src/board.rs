use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::GameError;

/// One of the two player symbols occupying a cell. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Which mark is due to play given how many moves have been made.
    /// The turn is derived from the move count alone; no "next player"
    /// field is stored anywhere.
    pub fn to_move(move_count: u8) -> Mark {
        if move_count % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The 8 winning lines, 1-indexed cell positions (row-major, 1 = top-left).
const WIN_LINES: [(usize, usize, usize); 8] = [
    (1, 2, 3),
    (4, 5, 6),
    (7, 8, 9),
    (1, 4, 7),
    (2, 5, 8),
    (3, 6, 9),
    (1, 5, 9),
    (3, 5, 7),
];

/// Immutable 9-cell board. Serialized for transport as a comma-separated
/// string of `-`, `X`, `O` tokens, position 0 = top-left, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    pub const EMPTY: Board = Board { cells: [None; 9] };

    pub fn new(cells: [Option<Mark>; 9]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    pub fn count(&self, mark: Mark) -> u8 {
        self.cells.iter().filter(|c| **c == Some(mark)).count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// True iff any of the 8 lines is fully occupied by `mark`.
    pub fn has_winning_line(&self, mark: Mark) -> bool {
        WIN_LINES.iter().any(|&(a, b, c)| {
            self.cells[a - 1] == Some(mark)
                && self.cells[b - 1] == Some(mark)
                && self.cells[c - 1] == Some(mark)
        })
    }

    /// True iff no cell is empty and neither mark has a winning line.
    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.has_winning_line(Mark::X) && !self.has_winning_line(Mark::O)
    }

    /// The winning mark, if any. A board where both marks hold a line is
    /// unreachable under move validation; it surfaces as
    /// `InconsistentState` rather than silently preferring one winner.
    pub fn winner(&self) -> Result<Option<Mark>, GameError> {
        let x = self.has_winning_line(Mark::X);
        let o = self.has_winning_line(Mark::O);
        match (x, o) {
            (true, true) => Err(GameError::InconsistentState),
            (true, false) => Ok(Some(Mark::X)),
            (false, true) => Ok(Some(Mark::O)),
            (false, false) => Ok(None),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = raw.split(',').collect();
        if tokens.len() != 9 {
            return Err(GameError::MalformedBoard);
        }
        let mut cells = [None; 9];
        for (i, token) in tokens.iter().enumerate() {
            cells[i] = match *token {
                "-" => None,
                "X" => Some(Mark::X),
                "O" => Some(Mark::O),
                _ => return Err(GameError::MalformedBoard),
            };
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match cell {
                None => write!(f, "-")?,
                Some(mark) => write!(f, "{}", mark)?,
            }
        }
        Ok(())
    }
}

// Boards travel on the wire in their string form.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
