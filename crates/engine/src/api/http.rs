//! HTTP routes.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use wordgrid_domain::{GameId, PlayerId};
use wordgrid_shared::{
    DeleteRequest, ErrorResponse, GameResponse, NewGameRequest, PlayRequest, PlayResponse,
};

use super::wire;
use crate::app::App;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::play::PlayError;
use crate::use_cases::session::{CreateGameError, DeleteGameError};
use crate::use_cases::word::SelectWordError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/new", get(new_game).post(new_game))
        .route("/game/submit", post(submit_play))
        .route("/game/delete", post(delete_game))
}

async fn health() -> &'static str {
    "OK"
}

/// Start a game. The body is optional; without one the configured pair sits.
async fn new_game(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<Json<GameResponse>, ApiError> {
    let request: NewGameRequest = if body.iter().all(u8::is_ascii_whitespace) {
        NewGameRequest::default()
    } else {
        decode(&body)?
    };

    let ids = match request.players_ids {
        Some(ids) => <[String; 2]>::try_from(ids)
            .map_err(|_| ApiError::BadRequest("playersIds must list exactly two players".into()))?,
        None => app.config.default_player_ids.clone(),
    };
    let [first, second] = ids;
    let players = [parse_player(first)?, parse_player(second)?];

    let game = app.use_cases.session.create_game.execute(players).await?;
    Ok(Json(wire::game_to_wire(&game)))
}

/// Submit a word. Accepted and rejected words both answer 200.
async fn submit_play(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<Json<PlayResponse>, ApiError> {
    let request: PlayRequest = decode(&body)?;
    let outcome = app
        .use_cases
        .play
        .submit
        .execute(wire::submission_from_wire(request))
        .await?;
    Ok(Json(wire::result_to_wire(outcome.into_result())))
}

async fn delete_game(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let request: DeleteRequest = decode(&body)?;
    let raw_id = request.game_id.trim();
    if raw_id.is_empty() {
        return Err(ApiError::BadRequest("gameId is required".into()));
    }
    let game_id: GameId = raw_id
        .parse()
        .map_err(|e: wordgrid_domain::DomainError| ApiError::BadRequest(e.to_string()))?;

    app.use_cases
        .session
        .delete_game
        .execute(&request.user_id, game_id)
        .await?;
    Ok(StatusCode::OK)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Invalid body: {e}")))
}

fn parse_player(id: String) -> Result<PlayerId, ApiError> {
    PlayerId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found"))).into_response()
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal error")),
                )
                    .into_response()
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        if e.is_not_found() {
            ApiError::NotFound
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<PlayError> for ApiError {
    fn from(e: PlayError) -> Self {
        match e {
            PlayError::MalformedInput(msg) => ApiError::BadRequest(msg),
            PlayError::NotFound(_) => ApiError::NotFound,
            PlayError::Persistence(_) | PlayError::ValidationTimeout(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<CreateGameError> for ApiError {
    fn from(e: CreateGameError) -> Self {
        match e {
            CreateGameError::InvalidPlayers(msg) => ApiError::BadRequest(msg),
            CreateGameError::Word(SelectWordError::Unresolved(_))
            | CreateGameError::Word(SelectWordError::Repo(_))
            | CreateGameError::Layout(_)
            | CreateGameError::Repo(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<DeleteGameError> for ApiError {
    fn from(e: DeleteGameError) -> Self {
        match e {
            DeleteGameError::NotFound(_) => ApiError::NotFound,
            DeleteGameError::Repo(e) => e.into(),
        }
    }
}
