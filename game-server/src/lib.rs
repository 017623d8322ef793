use std::sync::Arc;

use uuid::Uuid;
use warp::Filter;
use warp::http::StatusCode;

use game_core::engine::GameEngine;
use game_core::ranking::ScoreBook;
use game_core::repository::UserRepository as _;
use game_persistence::repositories::{ScoreRepository, UserRepository};
use game_types::{
    CreateUserRequest, ErrorKind, ErrorResponse, Game, GameError, GameResponse, GameStatus,
    MessageResponse, MoveRequest, NewGameRequest, RankingResponse, Score, ScoreResponse, Seat,
    User,
};

use crate::stats::StatsCache;

pub mod config;
pub mod reminders;
pub mod stats;

pub fn create_routes(
    engine: Arc<GameEngine>,
    users: Arc<UserRepository>,
    scores: Arc<ScoreRepository>,
    stats: Arc<StatsCache>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    // Clone for filters
    let engine_filter = warp::any().map({
        let engine = engine.clone();
        move || engine.clone()
    });

    let users_filter = warp::any().map({
        let users = users.clone();
        move || users.clone()
    });

    let scores_filter = warp::any().map({
        let scores = scores.clone();
        move || scores.clone()
    });

    let stats_filter = warp::any().map({
        let stats = stats.clone();
        move || stats.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let create_user = warp::path!("user")
        .and(warp::post())
        .and(warp::body::json())
        .and(users_filter.clone())
        .and_then(handle_create_user);

    let create_game = warp::path!("game")
        .and(warp::post())
        .and(warp::body::json())
        .and(engine_filter.clone())
        .and(users_filter.clone())
        .and_then(handle_create_game);

    // Must be composed before the Uuid routes so "user" is not parsed as an id.
    let user_games = warp::path!("game" / "user" / String)
        .and(warp::get())
        .and(engine_filter.clone())
        .and(users_filter.clone())
        .and_then(handle_user_games);

    let get_game = warp::path!("game" / Uuid)
        .and(warp::get())
        .and(engine_filter.clone())
        .and(users_filter.clone())
        .and_then(handle_get_game);

    let make_move = warp::path!("game" / Uuid)
        .and(warp::put())
        .and(warp::body::json())
        .and(engine_filter.clone())
        .and(users_filter.clone())
        .and_then(handle_make_move);

    let cancel_game = warp::path!("game" / Uuid / "cancel")
        .and(warp::post())
        .and(engine_filter.clone())
        .and_then(handle_cancel_game);

    let all_scores = warp::path!("scores")
        .and(warp::get())
        .and(scores_filter.clone())
        .and(users_filter.clone())
        .and_then(handle_all_scores);

    let user_ranking = warp::path!("scores" / "user" / String / "ranking")
        .and(warp::get())
        .and(scores_filter.clone())
        .and(users_filter.clone())
        .and_then(handle_user_ranking);

    let user_scores = warp::path!("scores" / "user" / String)
        .and(warp::get())
        .and(scores_filter.clone())
        .and(users_filter.clone())
        .and_then(handle_user_scores);

    let average_moves = warp::path!("games" / "average_moves")
        .and(warp::get())
        .and(stats_filter.clone())
        .and_then(handle_average_moves);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "PUT"]);

    health
        .or(create_user)
        .or(create_game)
        .or(user_games)
        .or(cancel_game)
        .or(get_game)
        .or(make_move)
        .or(user_ranking)
        .or(user_scores)
        .or(all_scores)
        .or(average_moves)
        .with(cors)
        .with(warp::log("tris"))
}

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

fn json_reply<T: serde::Serialize>(value: &T, status: StatusCode) -> JsonReply {
    warp::reply::with_status(warp::reply::json(value), status)
}

fn error_reply(err: GameError) -> JsonReply {
    let status = match err.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::MalformedBoard | ErrorKind::NotYourTurn | ErrorKind::IllegalMove => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::InconsistentState | ErrorKind::Storage => {
            tracing::error!(error = %err, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    json_reply(
        &ErrorResponse {
            kind: err.kind(),
            error: err.to_string(),
        },
        status,
    )
}

/// Resolves the player names a game response embeds. A dangling player id
/// means the record is corrupt, not that the caller asked for a missing
/// resource.
async fn player_names(users: &UserRepository, game: &Game) -> Result<(User, User), GameError> {
    let player1 = users
        .find_by_id(game.player1)
        .await?
        .ok_or(GameError::InconsistentState)?;
    let player2 = users
        .find_by_id(game.player2)
        .await?
        .ok_or(GameError::InconsistentState)?;
    Ok((player1, player2))
}

fn turn_message(game: &Game, player1: &User, player2: &User) -> String {
    match game.status {
        GameStatus::Won(Seat::Player1) => "Game already over! Player 1 won".to_string(),
        GameStatus::Won(Seat::Player2) => "Game already over! Player 2 won".to_string(),
        GameStatus::Draw => "Game already over! It is a draw".to_string(),
        GameStatus::InProgress => {
            if game.moves % 2 == 0 {
                format!("It is player1 {} to make a move!", player1.name)
            } else {
                format!("It is player2 {} to make a move!", player2.name)
            }
        }
    }
}

fn game_response(game: &Game, player1: &User, player2: &User, message: String) -> GameResponse {
    GameResponse {
        id: game.id,
        user_name1: player1.name.clone(),
        user_name2: player2.name.clone(),
        board: game.board.to_string(),
        game_over: game.is_over(),
        message,
    }
}

fn score_response(score: &Score, user: &User) -> ScoreResponse {
    ScoreResponse {
        user_name: user.name.clone(),
        date: score.date.to_string(),
        won: score.won,
        lost: score.lost,
    }
}

async fn handle_create_user(
    request: CreateUserRequest,
    users: Arc<UserRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let existing = match users.find_by_name(&request.name).await {
        Ok(existing) => existing,
        Err(err) => return Ok(error_reply(err.into())),
    };
    if existing.is_some() {
        return Ok(error_reply(GameError::Conflict(
            "A User with that name already exists!".to_string(),
        )));
    }

    let user = User::new(&request.name, request.email, request.reminders);
    if let Err(err) = users.create(&user).await {
        return Ok(error_reply(err.into()));
    }

    Ok(json_reply(
        &MessageResponse {
            message: format!("User {} created!", user.name),
        },
        StatusCode::CREATED,
    ))
}

async fn handle_create_game(
    request: NewGameRequest,
    engine: Arc<GameEngine>,
    users: Arc<UserRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let found = async {
        let user1 = users
            .find_by_name(&request.user_name1)
            .await?
            .ok_or(GameError::NotFound("User1"))?;
        let user2 = users
            .find_by_name(&request.user_name2)
            .await?
            .ok_or(GameError::NotFound("User2"))?;
        Ok::<_, GameError>((user1, user2))
    }
    .await;

    let (user1, user2) = match found {
        Ok(pair) => pair,
        Err(err) => return Ok(error_reply(err)),
    };

    match engine.create_game(&user1, &user2).await {
        Ok(game) => Ok(json_reply(
            &game_response(
                &game,
                &user1,
                &user2,
                "Have fun playing Tic Tac Toe!".to_string(),
            ),
            StatusCode::CREATED,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_get_game(
    game_id: Uuid,
    engine: Arc<GameEngine>,
    users: Arc<UserRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = async {
        let game = engine.load_game(game_id).await?;
        let (player1, player2) = player_names(&users, &game).await?;
        let message = turn_message(&game, &player1, &player2);
        Ok::<_, GameError>(game_response(&game, &player1, &player2, message))
    }
    .await;

    match result {
        Ok(response) => Ok(json_reply(&response, StatusCode::OK)),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_make_move(
    game_id: Uuid,
    request: MoveRequest,
    engine: Arc<GameEngine>,
    users: Arc<UserRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = async {
        let game = engine.load_game(game_id).await?;
        let (game, message) = engine.apply_move(game, &request.board).await?;
        let (player1, player2) = player_names(&users, &game).await?;
        Ok::<_, GameError>(game_response(&game, &player1, &player2, message))
    }
    .await;

    match result {
        Ok(response) => Ok(json_reply(&response, StatusCode::OK)),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_cancel_game(
    game_id: Uuid,
    engine: Arc<GameEngine>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = async {
        let game = engine.load_game(game_id).await?;
        engine.cancel_game(&game).await
    }
    .await;

    match result {
        Ok(()) => Ok(json_reply(
            &MessageResponse {
                message: format!("Game {} has been deleted!", game_id),
            },
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_user_games(
    user_name: String,
    engine: Arc<GameEngine>,
    users: Arc<UserRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = async {
        let user = users
            .find_by_name(&user_name)
            .await?
            .ok_or(GameError::NotFound("User"))?;

        let mut responses = Vec::new();
        for game in engine.games_for_user(user.id).await? {
            let (player1, player2) = player_names(&users, &game).await?;
            let message = turn_message(&game, &player1, &player2);
            responses.push(game_response(&game, &player1, &player2, message));
        }
        Ok::<_, GameError>(responses)
    }
    .await;

    match result {
        Ok(responses) => Ok(json_reply(&responses, StatusCode::OK)),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_all_scores(
    scores: Arc<ScoreRepository>,
    users: Arc<UserRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match score_history(&scores, &users, None).await {
        Ok(responses) => Ok(json_reply(&responses, StatusCode::OK)),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_user_scores(
    user_name: String,
    scores: Arc<ScoreRepository>,
    users: Arc<UserRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = async {
        let user = users
            .find_by_name(&user_name)
            .await?
            .ok_or(GameError::NotFound("User"))?;
        score_history(&scores, &users, Some(user)).await
    }
    .await;

    match result {
        Ok(responses) => Ok(json_reply(&responses, StatusCode::OK)),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn score_history(
    scores: &ScoreRepository,
    users: &UserRepository,
    only: Option<User>,
) -> Result<Vec<ScoreResponse>, GameError> {
    let records = match &only {
        Some(user) => scores.for_user(user.id).await?,
        None => scores.all().await?,
    };

    let mut responses = Vec::with_capacity(records.len());
    for record in records {
        let user = match &only {
            Some(user) => user.clone(),
            None => users
                .find_by_id(record.user_id)
                .await?
                .ok_or(GameError::InconsistentState)?,
        };
        responses.push(score_response(&record, &user));
    }
    Ok(responses)
}

async fn handle_user_ranking(
    user_name: String,
    scores: Arc<ScoreRepository>,
    users: Arc<UserRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let result = async {
        let user = users
            .find_by_name(&user_name)
            .await?
            .ok_or(GameError::NotFound("User"))?;

        let history = scores.all().await?;
        let entry = ScoreBook::rankings(&history)
            .into_iter()
            .find(|entry| entry.user_id == user.id)
            .ok_or(GameError::NotFound("Ranking"))?;

        Ok::<_, GameError>(RankingResponse {
            user_name: user.name,
            rank: entry.rank,
            net_win_ratio: entry.net_win_ratio,
        })
    }
    .await;

    match result {
        Ok(response) => Ok(json_reply(&response, StatusCode::OK)),
        Err(err) => Ok(error_reply(err)),
    }
}

async fn handle_average_moves(
    stats: Arc<StatsCache>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let message = match stats.average_moves().await {
        Some(average) => format!("The average moves made in finished games is {:.2}", average),
        None => "Still computing this stat.".to_string(),
    };

    Ok(json_reply(&MessageResponse { message }, StatusCode::OK))
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::stats::ScoreSink;
    use game_persistence::repositories::GameRepository;
    use migration::{Migrator, MigratorTrait};
    use warp::Reply;
    use warp::filters::BoxedFilter;

    async fn create_test_app() -> BoxedFilter<(impl Reply + 'static,)> {
        let db = game_persistence::connection::connect_to_memory_database()
            .await
            .unwrap();
        Migrator::up(&db, None).await.unwrap();

        let games = Arc::new(GameRepository::new(db.clone()));
        let users = Arc::new(UserRepository::new(db.clone()));
        let scores = Arc::new(ScoreRepository::new(db));
        let stats = Arc::new(StatsCache::new());

        let sink = Arc::new(ScoreSink::new(scores.clone(), games.clone(), stats.clone()));
        let engine = Arc::new(GameEngine::new(games, sink));

        create_routes(engine, users, scores, stats).boxed()
    }

    async fn register_user(app: &BoxedFilter<(impl Reply + 'static,)>, name: &str) {
        let response = warp::test::request()
            .method("POST")
            .path("/user")
            .json(&CreateUserRequest {
                name: name.to_string(),
                email: None,
                reminders: false,
            })
            .reply(app)
            .await;
        assert_eq!(response.status(), 201);
    }

    async fn start_game(
        app: &BoxedFilter<(impl Reply + 'static,)>,
        user1: &str,
        user2: &str,
    ) -> GameResponse {
        let response = warp::test::request()
            .method("POST")
            .path("/game")
            .json(&NewGameRequest {
                user_name1: user1.to_string(),
                user_name2: user2.to_string(),
            })
            .reply(app)
            .await;
        assert_eq!(response.status(), 201);
        serde_json::from_slice(response.body()).expect("Should parse GameResponse")
    }

    async fn submit_board(
        app: &BoxedFilter<(impl Reply + 'static,)>,
        game_id: Uuid,
        board: &str,
    ) -> GameResponse {
        let response = warp::test::request()
            .method("PUT")
            .path(&format!("/game/{}", game_id))
            .json(&MoveRequest {
                board: board.to_string(),
            })
            .reply(app)
            .await;
        assert_eq!(response.status(), 200);
        serde_json::from_slice(response.body()).expect("Should parse GameResponse")
    }

    /// Drives a game to a player 1 win in five moves.
    async fn play_to_player1_win(
        app: &BoxedFilter<(impl Reply + 'static,)>,
        game_id: Uuid,
    ) -> GameResponse {
        submit_board(app, game_id, "X,-,-,-,-,-,-,-,-").await;
        submit_board(app, game_id, "X,-,-,O,-,-,-,-,-").await;
        submit_board(app, game_id, "X,X,-,O,-,-,-,-,-").await;
        submit_board(app, game_id, "X,X,-,O,O,-,-,-,-").await;
        submit_board(app, game_id, "X,X,X,O,O,-,-,-,-").await
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "OK");
    }

    #[tokio::test]
    async fn test_create_user_and_duplicate_conflict() {
        let app = create_test_app().await;

        register_user(&app, "alice").await;

        let response = warp::test::request()
            .method("POST")
            .path("/user")
            .json(&CreateUserRequest {
                name: "alice".to_string(),
                email: None,
                reminders: false,
            })
            .reply(&app)
            .await;

        assert_eq!(response.status(), 409);
        let error: ErrorResponse =
            serde_json::from_slice(response.body()).expect("Should parse ErrorResponse");
        assert_eq!(error.error, "A User with that name already exists!");
    }

    #[tokio::test]
    async fn test_create_game_unknown_user() {
        let app = create_test_app().await;
        register_user(&app, "alice").await;

        let response = warp::test::request()
            .method("POST")
            .path("/game")
            .json(&NewGameRequest {
                user_name1: "alice".to_string(),
                user_name2: "nobody".to_string(),
            })
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_get_game_reports_turn() {
        let app = create_test_app().await;
        register_user(&app, "alice").await;
        register_user(&app, "bob").await;
        let game = start_game(&app, "alice", "bob").await;

        let response = warp::test::request()
            .method("GET")
            .path(&format!("/game/{}", game.id))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let state: GameResponse =
            serde_json::from_slice(response.body()).expect("Should parse GameResponse");
        assert_eq!(state.message, "It is player1 alice to make a move!");
        assert_eq!(state.board, "-,-,-,-,-,-,-,-,-");
        assert!(!state.game_over);
    }

    #[tokio::test]
    async fn test_get_missing_game_is_404() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path(&format!("/game/{}", Uuid::new_v4()))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_move_flow_to_win() {
        let app = create_test_app().await;
        register_user(&app, "alice").await;
        register_user(&app, "bob").await;
        let game = start_game(&app, "alice", "bob").await;

        let first = submit_board(&app, game.id, "X,-,-,-,-,-,-,-,-").await;
        assert_eq!(first.message, "It is player 2's turn now");
        assert!(!first.game_over);

        submit_board(&app, game.id, "X,-,-,O,-,-,-,-,-").await;
        submit_board(&app, game.id, "X,X,-,O,-,-,-,-,-").await;
        submit_board(&app, game.id, "X,X,-,O,O,-,-,-,-").await;
        let last = submit_board(&app, game.id, "X,X,X,O,O,-,-,-,-").await;

        assert_eq!(last.message, "Player 1 won!");
        assert!(last.game_over);

        // Replaying against the finished game is an idempotent no-op.
        let replay = submit_board(&app, game.id, "X,X,X,O,O,O,-,-,-").await;
        assert_eq!(replay.message, "Game already over! Player 1 won");
        assert_eq!(replay.board, "X,X,X,O,O,-,-,-,-");
    }

    #[tokio::test]
    async fn test_rejected_move_leaves_game_unchanged() {
        let app = create_test_app().await;
        register_user(&app, "alice").await;
        register_user(&app, "bob").await;
        let game = start_game(&app, "alice", "bob").await;

        // O cannot open the game.
        let rejected = submit_board(&app, game.id, "O,-,-,-,-,-,-,-,-").await;
        assert_eq!(
            rejected.message,
            "Not your turn. It is player 1's turn to play an 'X'!"
        );
        assert_eq!(rejected.board, "-,-,-,-,-,-,-,-,-");
        assert!(!rejected.game_over);
    }

    #[tokio::test]
    async fn test_cancel_game() {
        let app = create_test_app().await;
        register_user(&app, "alice").await;
        register_user(&app, "bob").await;
        let game = start_game(&app, "alice", "bob").await;

        let response = warp::test::request()
            .method("POST")
            .path(&format!("/game/{}/cancel", game.id))
            .reply(&app)
            .await;
        assert_eq!(response.status(), 200);
        let body: MessageResponse =
            serde_json::from_slice(response.body()).expect("Should parse MessageResponse");
        assert_eq!(body.message, format!("Game {} has been deleted!", game.id));

        // The record is gone.
        let response = warp::test::request()
            .method("GET")
            .path(&format!("/game/{}", game.id))
            .reply(&app)
            .await;
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_cancel_finished_game_conflicts() {
        let app = create_test_app().await;
        register_user(&app, "alice").await;
        register_user(&app, "bob").await;
        let game = start_game(&app, "alice", "bob").await;
        play_to_player1_win(&app, game.id).await;

        let response = warp::test::request()
            .method("POST")
            .path(&format!("/game/{}/cancel", game.id))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 409);
        let error: ErrorResponse =
            serde_json::from_slice(response.body()).expect("Should parse ErrorResponse");
        assert_eq!(
            error.error,
            "Game is already over, therefore cannot be deleted!"
        );
    }

    #[tokio::test]
    async fn test_user_games_listing() {
        let app = create_test_app().await;
        register_user(&app, "alice").await;
        register_user(&app, "bob").await;
        register_user(&app, "carol").await;
        start_game(&app, "alice", "bob").await;
        start_game(&app, "carol", "alice").await;

        let response = warp::test::request()
            .method("GET")
            .path("/game/user/alice")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let games: Vec<GameResponse> =
            serde_json::from_slice(response.body()).expect("Should parse GameResponses");
        assert_eq!(games.len(), 2);

        let response = warp::test::request()
            .method("GET")
            .path("/game/user/nobody")
            .reply(&app)
            .await;
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_scores_and_ranking_after_finished_game() {
        let app = create_test_app().await;
        register_user(&app, "alice").await;
        register_user(&app, "bob").await;
        let game = start_game(&app, "alice", "bob").await;
        play_to_player1_win(&app, game.id).await;

        // One score per player.
        let response = warp::test::request()
            .method("GET")
            .path("/scores")
            .reply(&app)
            .await;
        assert_eq!(response.status(), 200);
        let scores: Vec<ScoreResponse> =
            serde_json::from_slice(response.body()).expect("Should parse ScoreResponses");
        assert_eq!(scores.len(), 2);

        let response = warp::test::request()
            .method("GET")
            .path("/scores/user/alice")
            .reply(&app)
            .await;
        let alice_scores: Vec<ScoreResponse> =
            serde_json::from_slice(response.body()).expect("Should parse ScoreResponses");
        assert_eq!(alice_scores.len(), 1);
        assert!(alice_scores[0].won);
        assert!(!alice_scores[0].lost);

        // The winner ranks first with a perfect net win ratio.
        let response = warp::test::request()
            .method("GET")
            .path("/scores/user/alice/ranking")
            .reply(&app)
            .await;
        assert_eq!(response.status(), 200);
        let ranking: RankingResponse =
            serde_json::from_slice(response.body()).expect("Should parse RankingResponse");
        assert_eq!(ranking.rank, 1);
        assert_eq!(ranking.net_win_ratio, 1.0);

        let response = warp::test::request()
            .method("GET")
            .path("/scores/user/bob/ranking")
            .reply(&app)
            .await;
        let ranking: RankingResponse =
            serde_json::from_slice(response.body()).expect("Should parse RankingResponse");
        assert_eq!(ranking.rank, 2);
        assert_eq!(ranking.net_win_ratio, -1.0);
    }

    #[tokio::test]
    async fn test_ranking_without_history_is_404() {
        let app = create_test_app().await;
        register_user(&app, "alice").await;

        let response = warp::test::request()
            .method("GET")
            .path("/scores/user/alice/ranking")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_average_moves_stat() {
        let app = create_test_app().await;
        register_user(&app, "alice").await;
        register_user(&app, "bob").await;

        // Nothing finished yet: the placeholder.
        let response = warp::test::request()
            .method("GET")
            .path("/games/average_moves")
            .reply(&app)
            .await;
        let body: MessageResponse =
            serde_json::from_slice(response.body()).expect("Should parse MessageResponse");
        assert_eq!(body.message, "Still computing this stat.");

        let game = start_game(&app, "alice", "bob").await;
        play_to_player1_win(&app, game.id).await;

        let response = warp::test::request()
            .method("GET")
            .path("/games/average_moves")
            .reply(&app)
            .await;
        let body: MessageResponse =
            serde_json::from_slice(response.body()).expect("Should parse MessageResponse");
        assert_eq!(
            body.message,
            "The average moves made in finished games is 5.00"
        );
    }
}
