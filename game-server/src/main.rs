use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

use game_core::engine::GameEngine;
use game_persistence::connection::connect_and_migrate;
use game_persistence::repositories::{GameRepository, ScoreRepository, UserRepository};
use game_server::stats::{ScoreSink, StatsCache};
use game_server::{config::Config, create_routes, reminders};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Tris server...");

    let config = Config::new();

    // Initialize database connection and run migrations
    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };

    let game_repository = Arc::new(GameRepository::new(db.clone()));
    let user_repository = Arc::new(UserRepository::new(db.clone()));
    let score_repository = Arc::new(ScoreRepository::new(db));
    let stats_cache = Arc::new(StatsCache::new());

    let sink = Arc::new(ScoreSink::new(
        score_repository.clone(),
        game_repository.clone(),
        stats_cache.clone(),
    ));
    let engine = Arc::new(GameEngine::new(game_repository.clone(), sink));

    let routes = create_routes(
        engine,
        user_repository.clone(),
        score_repository,
        stats_cache,
    );

    // Start reminder sweep task
    let sweep_users = user_repository.clone();
    let sweep_games = game_repository.clone();
    let sweep_interval = Duration::from_secs(config.reminder_interval_seconds);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_interval);
        loop {
            interval.tick().await;
            match reminders::sweep(&sweep_users, &sweep_games).await {
                Ok(reminded) => info!(reminded, "reminder sweep complete"),
                Err(e) => tracing::error!("Reminder sweep failed: {}", e),
            }
        }
    });

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        config
            .host
            .parse::<std::net::IpAddr>()
            .expect("Invalid HOST"),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())
                .expect("Failed to install SIGINT handler");
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler");

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
