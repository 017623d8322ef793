use anyhow::Result;
use tracing::info;

use game_core::repository::GameRepository as _;
use game_persistence::repositories::{GameRepository, UserRepository};

/// Finds users who opted into reminders and still have a game in progress.
/// Delivery is the deployment's problem; the sweep records the reminder in
/// the log and returns how many users were due one.
pub async fn sweep(users: &UserRepository, games: &GameRepository) -> Result<usize> {
    let subscribers = users.find_reminder_subscribers().await?;
    let mut reminded = 0;

    for user in subscribers {
        let has_open_game = games
            .find_games_for_user(user.id)
            .await?
            .iter()
            .any(|game| !game.is_over());

        if has_open_game {
            info!(
                user = %user.name,
                email = ?user.email,
                "reminder: unfinished tic-tac-toe game waiting"
            );
            reminded += 1;
        }
    }

    Ok(reminded)
}
