//! Application state management.

use crate::db::DatabasePool;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database pool opened at startup.
    pub db: DatabasePool,
}

impl AppState {
    /// Creates the application state around an open database pool.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}
