use game_types::{Board, GameError, Mark, Seat};

/// Contextual info attached to an accepted move, for caller messaging only.
/// It never feeds back into game-state logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnHint {
    /// The board just filled up; the game is about to end without a winner.
    DrawPending,
    /// The named seat is due to play next.
    NextTurn(Seat),
}

impl TurnHint {
    pub fn message(&self) -> String {
        match self {
            TurnHint::DrawPending => "It is a draw! Game Over".to_string(),
            TurnHint::NextTurn(seat) => format!("It is {}'s turn now", seat),
        }
    }
}

/// An accepted board transition: the parsed proposed board, the mark the
/// transition placed, and a hint for the response message.
#[derive(Debug, Clone)]
pub struct MoveReport {
    pub board: Board,
    pub placed: Mark,
    pub hint: TurnHint,
}

/// Decides whether a proposed board is a legal single move from the
/// previous state. Whose turn it was is reconstructed purely from board
/// content; there is no player authentication and no stored turn field.
pub struct MoveValidator;

impl MoveValidator {
    /// Rules are applied in order and the first failing rule wins:
    /// malformed input, then turn parity, then the single-cell diff.
    pub fn validate(
        previous: &Board,
        proposed: &str,
        move_count: u8,
    ) -> Result<MoveReport, GameError> {
        let board: Board = proposed.parse()?;

        // dX decides which mark produced the board: X goes first, so a
        // legal board has dX = 1 right after an X move and dX = 0 right
        // after an O move. Anything else is a skipped turn or garbage.
        let dx = i16::from(board.count(Mark::X)) - i16::from(board.count(Mark::O));
        let placed = match dx {
            1 => Mark::X,
            0 => Mark::O,
            2 => return Err(GameError::NotYourTurn(Seat::Player2)),
            -1 => return Err(GameError::NotYourTurn(Seat::Player1)),
            _ => return Err(GameError::MalformedBoard),
        };

        // Exactly one previously-empty cell may change; occupied cells are
        // frozen.
        let mut differences = 0;
        for index in 0..9 {
            if previous.cell(index) != board.cell(index) {
                if previous.cell(index).is_some() {
                    return Err(GameError::IllegalMove);
                }
                differences += 1;
            }
        }
        if differences != 1 {
            return Err(GameError::IllegalMove);
        }

        // The mark implied by dX must agree with the stored move count. A
        // mismatch means the persisted record is corrupt, not that the
        // caller misplayed.
        if placed != Mark::to_move(move_count) {
            return Err(GameError::InconsistentState);
        }

        let hint = if board.is_full() {
            TurnHint::DrawPending
        } else {
            TurnHint::NextTurn(Seat::of_mark(placed.opponent()))
        };

        Ok(MoveReport {
            board,
            placed,
            hint,
        })
    }
}
