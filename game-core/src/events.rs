use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// Outcome sink the engine fires when a game reaches a terminal state.
///
/// `record_score` is called exactly once per player per finished game;
/// `won` and `lost` both false denotes a draw for that player.
/// `notify_game_finished` is a fire-and-forget hint that aggregate
/// statistics should be recomputed; it is not a core responsibility and
/// implementors may ignore it.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn record_score(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        won: bool,
        lost: bool,
    ) -> Result<()>;

    async fn notify_game_finished(&self, game_id: Uuid) -> Result<()>;
}
