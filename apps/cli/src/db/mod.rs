//! Local SQLite card collection.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{Deck, DeckRepository, NewNote, Note, NoteRepository, SqliteCollection};
