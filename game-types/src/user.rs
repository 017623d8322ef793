use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User profile. The name is the unique key; games and scores reference
/// users by id, never by embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    /// Opt-in for the daily unfinished-game reminder sweep.
    pub reminders: bool,
}

impl User {
    pub fn new(name: impl Into<String>, email: Option<String>, reminders: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email,
            reminders,
        }
    }
}
