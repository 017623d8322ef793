use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::UserId;

/// One immutable record per player per finished game. `won` and `lost` are
/// mutually exclusive; both false denotes a draw for that player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub id: Uuid,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub won: bool,
    pub lost: bool,
}

impl Score {
    pub fn new(user_id: UserId, date: NaiveDate, won: bool, lost: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            won,
            lost,
        }
    }
}

/// Derived on demand from the full score history, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub user_id: UserId,
    pub rank: u32,
    pub net_win_ratio: f64,
}
