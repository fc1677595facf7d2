use serde::{Deserialize, Serialize};
use validator::Validate;

// Stored game record, serialized exactly as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    pub title: String,
    pub genre: String,
}

// For creating new games. Absent, null and empty fields all count as missing.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateGame {
    #[validate(required, length(min = 1, message = "title is required"))]
    pub title: Option<String>,

    #[validate(required, length(min = 1, message = "genre is required"))]
    pub genre: Option<String>,
}

impl CreateGame {
    pub fn new(title: impl Into<String>, genre: impl Into<String>) -> Self {
        CreateGame {
            title: Some(title.into()),
            genre: Some(genre.into()),
        }
    }
}

// Response for GET /games
#[derive(Debug, Serialize, Deserialize)]
pub struct GamesList {
    pub games: Vec<Game>,
}

// Response for POST /games
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedGame {
    pub id: u64,
}
