use axum::{routing::get, Router};

use crate::handlers::games;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // GET /games - List all games
        // POST /games - Create a new game
        .route("/", get(games::get_games).post(games::create_game))
        // GET /games/:id - Fetch one game
        // DELETE /games/:id - Remove a game and return it
        .route("/:id", get(games::get_game_by_id).delete(games::delete_game))
}
