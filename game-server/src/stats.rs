use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use game_core::events::EventSink;
use game_core::ranking::ScoreBook;
use game_persistence::repositories::{GameRepository, ScoreRepository};

/// Cached average moves per finished game. Recomputed whenever a game
/// reaches a terminal state, read on every stats request.
#[derive(Default)]
pub struct StatsCache {
    average_moves: RwLock<Option<f64>>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn average_moves(&self) -> Option<f64> {
        *self.average_moves.read().await
    }

    pub async fn set_average_moves(&self, value: Option<f64>) {
        *self.average_moves.write().await = value;
    }
}

/// The engine's outcome sink: scores go to the score table, and the
/// finished-game hook refreshes the cached aggregate.
pub struct ScoreSink {
    scores: Arc<ScoreRepository>,
    games: Arc<GameRepository>,
    cache: Arc<StatsCache>,
}

impl ScoreSink {
    pub fn new(
        scores: Arc<ScoreRepository>,
        games: Arc<GameRepository>,
        cache: Arc<StatsCache>,
    ) -> Self {
        Self {
            scores,
            games,
            cache,
        }
    }
}

#[async_trait]
impl EventSink for ScoreSink {
    async fn record_score(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        won: bool,
        lost: bool,
    ) -> Result<()> {
        self.scores.insert(user_id, date, won, lost).await
    }

    async fn notify_game_finished(&self, game_id: Uuid) -> Result<()> {
        let games = self.games.all().await?;
        let average = ScoreBook::average_moves(&games);
        self.cache.set_average_moves(average).await;
        info!(game_id = %game_id, average_moves = ?average, "refreshed aggregate stats");
        Ok(())
    }
}
