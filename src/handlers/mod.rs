pub mod fallback;
pub mod games;
pub mod health;
