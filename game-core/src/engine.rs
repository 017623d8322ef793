use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use game_types::{Game, GameError, GameStatus, Mark, Seat, User};

use crate::events::EventSink;
use crate::repository::GameRepository;
use crate::validation::MoveValidator;

/// Orchestrates the game state machine: validate move, apply, detect the
/// terminal state, emit outcomes. Holds no mutable state of its own; every
/// call operates on the snapshot it is given and writes back through the
/// repository.
pub struct GameEngine {
    games: Arc<dyn GameRepository>,
    sink: Arc<dyn EventSink>,
}

impl GameEngine {
    pub fn new(games: Arc<dyn GameRepository>, sink: Arc<dyn EventSink>) -> Self {
        Self { games, sink }
    }

    /// Creates and persists a new game with an empty board.
    pub async fn create_game(&self, user1: &User, user2: &User) -> Result<Game, GameError> {
        let game = Game::new(Uuid::new_v4(), user1.id, user2.id);
        self.games.save(&game).await?;
        info!(game_id = %game.id, player1 = %user1.name, player2 = %user2.name, "game created");
        Ok(game)
    }

    pub async fn load_game(&self, game_id: Uuid) -> Result<Game, GameError> {
        self.games
            .load(game_id)
            .await?
            .ok_or(GameError::NotFound("Game"))
    }

    pub async fn games_for_user(&self, user_id: Uuid) -> Result<Vec<Game>, GameError> {
        Ok(self.games.find_games_for_user(user_id).await?)
    }

    /// Deletes an unfinished game. Finished games are immutable history and
    /// cannot be cancelled.
    pub async fn cancel_game(&self, game: &Game) -> Result<(), GameError> {
        if game.is_over() {
            return Err(GameError::Conflict(
                "Game is already over, therefore cannot be deleted!".to_string(),
            ));
        }
        self.games.delete(game.id).await?;
        info!(game_id = %game.id, "game cancelled");
        Ok(())
    }

    /// Applies a proposed board to the game.
    ///
    /// Rejected moves are cheap and side-effect-free: the unchanged game
    /// comes back with a human-readable reason, nothing is persisted and no
    /// scores are recorded. Only corrupted state (`InconsistentState`) and
    /// collaborator failures surface as errors.
    pub async fn apply_move(
        &self,
        game: Game,
        proposed: &str,
    ) -> Result<(Game, String), GameError> {
        // Terminal games accept no transitions; replaying a move against
        // one is an idempotent no-op.
        match game.status {
            GameStatus::Won(Seat::Player1) => {
                return Ok((game, "Game already over! Player 1 won".to_string()));
            }
            GameStatus::Won(Seat::Player2) => {
                return Ok((game, "Game already over! Player 2 won".to_string()));
            }
            GameStatus::Draw => {
                return Ok((game, "Game already over! It is a draw".to_string()));
            }
            GameStatus::InProgress => {}
        }

        let report = match MoveValidator::validate(&game.board, proposed, game.moves) {
            Ok(report) => report,
            Err(err @ (GameError::InconsistentState | GameError::Storage(_))) => {
                return Err(err);
            }
            Err(rejection) => return Ok((game, rejection.to_string())),
        };

        // Reconstruct the mark that just played from the move count,
        // independently of the validator's dX math.
        let mark = Mark::to_move(game.moves);

        // winner() already rejects a board where both marks hold a line. A
        // line held by the mark that did not just move means the previous
        // state was terminal and should never have been in play.
        let winner = report.board.winner()?;
        if winner == Some(mark.opponent()) {
            return Err(GameError::InconsistentState);
        }

        let mut game = game;
        game.board = report.board;
        game.moves += 1;

        let message = if winner == Some(mark) {
            let seat = Seat::of_mark(mark);
            game.status = GameStatus::Won(seat);
            match seat {
                Seat::Player1 => "Player 1 won!".to_string(),
                Seat::Player2 => "Player 2 won!".to_string(),
            }
        } else if game.moves == 9 {
            game.status = GameStatus::Draw;
            "It is a draw!".to_string()
        } else {
            report.hint.message()
        };

        self.games.save(&game).await?;

        if game.is_over() {
            info!(game_id = %game.id, status = ?game.status, moves = game.moves, "game finished");
            self.emit_outcome(&game).await?;
        }

        Ok((game, message))
    }

    /// One score per player, then the fire-and-forget stat-refresh hook.
    async fn emit_outcome(&self, game: &Game) -> Result<(), GameError> {
        let today = Utc::now().date_naive();
        for seat in [Seat::Player1, Seat::Player2] {
            let won = game.winner() == Some(seat);
            let lost = game.winner() == Some(seat.opponent());
            self.sink
                .record_score(game.user_at(seat), today, won, lost)
                .await?;
        }
        self.sink.notify_game_finished(game.id).await?;
        Ok(())
    }
}
