use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::{games, prelude::*};
use game_types::{Game, GameStatus, Seat};

pub struct GameRepository {
    db: DatabaseConnection,
}

impl GameRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_game(model: games::Model) -> Result<Game> {
        let board = model
            .board
            .parse()
            .map_err(|err| anyhow!("corrupt board for game {}: {}", model.id, err))?;

        let status = match (model.game_over, model.winner.as_deref()) {
            (false, _) => GameStatus::InProgress,
            (true, None) => GameStatus::Draw,
            (true, Some("player1")) => GameStatus::Won(Seat::Player1),
            (true, Some("player2")) => GameStatus::Won(Seat::Player2),
            (true, Some(other)) => {
                return Err(anyhow!("corrupt winner column for game {}: {}", model.id, other))
            }
        };

        Ok(Game {
            id: model.id,
            player1: model.player1,
            player2: model.player2,
            board,
            moves: model.moves as u8,
            status,
        })
    }

    /// Every game on record, live and finished. Used for aggregate stats.
    pub async fn all(&self) -> Result<Vec<Game>> {
        let models = Games::find().all(&self.db).await?;
        models.into_iter().map(Self::model_to_game).collect()
    }

    fn game_to_model(game: &Game) -> games::ActiveModel {
        let (game_over, winner) = match game.status {
            GameStatus::InProgress => (false, None),
            GameStatus::Draw => (true, None),
            GameStatus::Won(Seat::Player1) => (true, Some("player1".to_string())),
            GameStatus::Won(Seat::Player2) => (true, Some("player2".to_string())),
        };

        games::ActiveModel {
            id: sea_orm::ActiveValue::Set(game.id),
            player1: sea_orm::ActiveValue::Set(game.player1),
            player2: sea_orm::ActiveValue::Set(game.player2),
            board: sea_orm::ActiveValue::Set(game.board.to_string()),
            moves: sea_orm::ActiveValue::Set(i32::from(game.moves)),
            game_over: sea_orm::ActiveValue::Set(game_over),
            winner: sea_orm::ActiveValue::Set(winner),
        }
    }
}

#[async_trait]
impl game_core::repository::GameRepository for GameRepository {
    async fn load(&self, game_id: Uuid) -> Result<Option<Game>> {
        let model = Games::find_by_id(game_id).one(&self.db).await?;
        model.map(Self::model_to_game).transpose()
    }

    async fn save(&self, game: &Game) -> Result<()> {
        let model = Self::game_to_model(game);
        let exists = Games::find_by_id(game.id).one(&self.db).await?.is_some();

        if exists {
            Games::update(model).exec(&self.db).await?;
        } else {
            Games::insert(model).exec(&self.db).await?;
        }
        Ok(())
    }

    async fn delete(&self, game_id: Uuid) -> Result<()> {
        Games::delete_by_id(game_id).exec(&self.db).await?;
        Ok(())
    }

    async fn find_games_for_user(&self, user_id: Uuid) -> Result<Vec<Game>> {
        let models = Games::find()
            .filter(
                Condition::any()
                    .add(games::Column::Player1.eq(user_id))
                    .add(games::Column::Player2.eq(user_id)),
            )
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::model_to_game).collect()
    }
}
