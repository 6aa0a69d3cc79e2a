//! Database error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("deck not found: {0}")]
    DeckNotFound(String),

    #[error("unsupported collection schema version {found}, expected {expected}")]
    SchemaVersion { found: i32, expected: i32 },
}
