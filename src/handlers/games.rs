use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};

use crate::errors::{AppError, Result};
use crate::models::game::{CreateGame, CreatedGame, Game, GamesList};
use crate::state::AppState;

// Ids that don't parse can't name a stored game, so they are simply not found
fn parse_id(raw: &str) -> Result<u64> {
    raw.parse().map_err(|_| {
        tracing::warn!("Rejecting non-numeric game id: {}", raw);
        AppError::NotFound
    })
}

pub async fn get_games(State(state): State<AppState>) -> Json<GamesList> {
    let games = state.store.list().await;
    tracing::info!("GET /games -> {} games", games.len());
    Json(GamesList { games })
}

pub async fn get_game_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Game>> {
    let id = parse_id(&id)?;

    match state.store.get_by_id(id).await {
        Ok(game) => {
            tracing::info!("GET /games/{} -> {}", id, game.title);
            Ok(Json(game))
        }
        Err(e) => {
            tracing::warn!("GET /games/{} -> {}", id, e);
            Err(e)
        }
    }
}

pub async fn create_game(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateGame>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedGame>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("POST /games body rejected: {}", rejection);
        AppError::from(rejection)
    })?;

    match state.store.create(payload).await {
        Ok(id) => {
            tracing::info!("POST /games -> created game {}", id);
            Ok((StatusCode::CREATED, Json(CreatedGame { id })))
        }
        Err(e) => {
            tracing::warn!("POST /games -> {}", e);
            Err(e)
        }
    }
}

pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Game>> {
    let id = parse_id(&id)?;

    match state.store.delete_by_id(id).await {
        Ok(game) => {
            tracing::info!("DELETE /games/{} -> removed {}", id, game.title);
            Ok(Json(game))
        }
        Err(e) => {
            tracing::warn!("DELETE /games/{} -> {}", id, e);
            Err(e)
        }
    }
}
