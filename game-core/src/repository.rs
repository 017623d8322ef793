use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use game_types::{Game, User};

/// Storage collaborator for game records. The engine treats every
/// `apply_move` as a read-modify-write critical section on one game id;
/// serializing concurrent submissions against the same game is the
/// implementor's responsibility (per-key locking or optimistic retry).
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn load(&self, game_id: Uuid) -> Result<Option<Game>>;
    /// Insert or update.
    async fn save(&self, game: &Game) -> Result<()>;
    async fn delete(&self, game_id: Uuid) -> Result<()>;
    async fn find_games_for_user(&self, user_id: Uuid) -> Result<Vec<Game>>;
}

/// Storage collaborator for user profiles. Names are the unique key.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn create(&self, user: &User) -> Result<()>;
}
