//! In-memory game store.
//!
//! Records are kept in insertion order and ids are handed out sequentially
//! starting at 1. Ids are never reused until the store is cleared.

use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::errors::{AppError, Result};
use crate::models::game::{CreateGame, Game};

#[derive(Debug)]
struct Inner {
    games: Vec<Game>,
    next_id: u64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            games: Vec::new(),
            next_id: 1,
        }
    }
}

/// Cloneable handle to a shared in-memory collection of games.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    inner: Arc<RwLock<Inner>>,
}

impl GameStore {
    /// Create an empty store whose first id will be 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a game, returning its new id.
    ///
    /// Missing fields are rejected before the title is checked for
    /// duplicates. A rejected create leaves the store and the id sequence
    /// untouched.
    pub async fn create(&self, payload: CreateGame) -> Result<u64> {
        payload.validate()?;
        let (Some(title), Some(genre)) = (payload.title, payload.genre) else {
            return Err(AppError::IncompleteData);
        };

        let mut inner = self.inner.write().await;
        if inner.games.iter().any(|g| g.title == title) {
            return Err(AppError::TitleConflict);
        }

        let id = inner.next_id;
        inner.next_id += 1;
        inner.games.push(Game { id, title, genre });
        Ok(id)
    }

    /// All games in insertion order
    pub async fn list(&self) -> Vec<Game> {
        self.inner.read().await.games.clone()
    }

    pub async fn get_by_id(&self, id: u64) -> Result<Game> {
        self.inner
            .read()
            .await
            .games
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    /// Remove a game and hand it back to the caller
    pub async fn delete_by_id(&self, id: u64) -> Result<Game> {
        let mut inner = self.inner.write().await;
        let index = inner
            .games
            .iter()
            .position(|g| g.id == id)
            .ok_or(AppError::NotFound)?;
        Ok(inner.games.remove(index))
    }

    /// Drop every game and restart ids at 1. Setup utility, not routed.
    pub async fn clear(&self) {
        *self.inner.write().await = Inner::default();
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.games.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
