use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ErrorKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: Option<String>,
    #[serde(default)]
    pub reminders: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameRequest {
    pub user_name1: String,
    pub user_name2: String,
}

/// A move is submitted as the full proposed board in wire form; the server
/// reconstructs whose move it was from the board content alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: String,
}

/// Outbound game state plus a human-readable message. Rejected moves come
/// back as the unchanged game with the rejection reason in `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub id: Uuid,
    pub user_name1: String,
    pub user_name2: String,
    pub board: String,
    pub game_over: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub user_name: String,
    pub date: String,
    pub won: bool,
    pub lost: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    pub user_name: String,
    pub rank: u32,
    pub net_win_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub error: String,
}
