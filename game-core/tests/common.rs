use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use game_core::{EventSink, GameEngine, GameRepository};
use game_types::{Game, User};

/// In-memory game store backing engine tests.
#[derive(Default)]
pub struct MemoryGames {
    games: Mutex<HashMap<Uuid, Game>>,
}

#[async_trait]
impl GameRepository for MemoryGames {
    async fn load(&self, game_id: Uuid) -> Result<Option<Game>> {
        Ok(self.games.lock().unwrap().get(&game_id).cloned())
    }

    async fn save(&self, game: &Game) -> Result<()> {
        self.games.lock().unwrap().insert(game.id, game.clone());
        Ok(())
    }

    async fn delete(&self, game_id: Uuid) -> Result<()> {
        self.games.lock().unwrap().remove(&game_id);
        Ok(())
    }

    async fn find_games_for_user(&self, user_id: Uuid) -> Result<Vec<Game>> {
        Ok(self
            .games
            .lock()
            .unwrap()
            .values()
            .filter(|g| g.player1 == user_id || g.player2 == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedScore {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub won: bool,
    pub lost: bool,
}

/// Records every outcome the engine emits.
#[derive(Default)]
pub struct RecordingSink {
    pub scores: Mutex<Vec<RecordedScore>>,
    pub finished: Mutex<Vec<Uuid>>,
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn record_score(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        won: bool,
        lost: bool,
    ) -> Result<()> {
        self.scores.lock().unwrap().push(RecordedScore {
            user_id,
            date,
            won,
            lost,
        });
        Ok(())
    }

    async fn notify_game_finished(&self, game_id: Uuid) -> Result<()> {
        self.finished.lock().unwrap().push(game_id);
        Ok(())
    }
}

pub struct TestHarness {
    pub engine: GameEngine,
    pub games: Arc<MemoryGames>,
    pub sink: Arc<RecordingSink>,
    pub alice: User,
    pub bob: User,
}

pub fn create_test_harness() -> TestHarness {
    let games = Arc::new(MemoryGames::default());
    let sink = Arc::new(RecordingSink::default());
    let engine = GameEngine::new(games.clone(), sink.clone());
    TestHarness {
        engine,
        games,
        sink,
        alice: User::new("Alice", Some("alice@example.com".to_string()), true),
        bob: User::new("Bob", None, false),
    }
}
