use axum::http::{Method, Uri};

use crate::errors::AppError;

pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::warn!("{} {} -> no such route", method, uri);
    AppError::NotFound
}

// Reported with its own message so it can't be confused with a title conflict
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::warn!("{} {} -> method not allowed", method, uri);
    AppError::MethodNotAllowed
}
