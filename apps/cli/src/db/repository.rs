//! Repository pattern for collection access.

use crate::db::error::DbError;
use crate::db::schema::{SCHEMA, SCHEMA_VERSION};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use uuid::Uuid;

type Result<T> = std::result::Result<T, DbError>;

/// A named deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub note_count: usize,
}

/// A stored card.
#[derive(Debug, Clone)]
pub struct Note {
    pub id: i64,
    pub guid: String,
    pub deck_id: i64,
    pub front: String,
    pub back: String,
    pub tags: Vec<String>,
    pub created_at: String,
}

/// A card about to be stored.
#[derive(Debug, Clone)]
pub struct NewNote<'a> {
    pub front: &'a str,
    pub back: &'a str,
    pub tags: &'a [String],
}

/// Repository for deck operations.
pub trait DeckRepository {
    fn get_deck(&self, name: &str) -> Result<Option<Deck>>;
    fn get_or_create_deck(&self, name: &str) -> Result<Deck>;
    fn list_decks(&self) -> Result<Vec<Deck>>;
}

/// Repository for note operations.
pub trait NoteRepository {
    fn notes_in_deck(&self, deck_id: i64) -> Result<Vec<Note>>;
    fn add_note(&self, deck_id: i64, note: &NewNote<'_>) -> Result<i64>;
}

/// SQLite implementation of repositories.
pub struct SqliteCollection {
    conn: Connection,
}

impl SqliteCollection {
    /// Open collection at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let collection = Self { conn };
        collection.initialize()?;
        Ok(collection)
    }

    /// Open in-memory collection (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let collection = Self { conn };
        collection.initialize()?;
        Ok(collection)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        let version: Option<i32> = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
        match version {
            None => {
                self.conn.execute(
                    "INSERT INTO schema_version (version) VALUES (?1)",
                    params![SCHEMA_VERSION],
                )?;
            }
            Some(v) if v == SCHEMA_VERSION => {}
            Some(found) => {
                return Err(DbError::SchemaVersion {
                    found,
                    expected: SCHEMA_VERSION,
                })
            }
        }
        Ok(())
    }

    fn row_to_note(row: &rusqlite::Row) -> rusqlite::Result<Note> {
        let tags: String = row.get(5)?;
        Ok(Note {
            id: row.get(0)?,
            guid: row.get(1)?,
            deck_id: row.get(2)?,
            front: row.get(3)?,
            back: row.get(4)?,
            tags: tags.split_whitespace().map(str::to_string).collect(),
            created_at: row.get(6)?,
        })
    }
}

/// Tags are stored space separated with a space on each side, so a single
/// tag can be matched with `LIKE '% tag %'`.
fn join_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!(" {} ", tags.join(" "))
    }
}

impl DeckRepository for SqliteCollection {
    fn get_deck(&self, name: &str) -> Result<Option<Deck>> {
        self.conn
            .query_row(
                "SELECT d.id, d.name, COUNT(n.id) FROM decks d
                 LEFT JOIN notes n ON n.deck_id = d.id
                 WHERE d.name = ?1
                 GROUP BY d.id",
                params![name],
                |row| {
                    Ok(Deck {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        note_count: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    fn get_or_create_deck(&self, name: &str) -> Result<Deck> {
        self.conn.execute(
            "INSERT OR IGNORE INTO decks (name, created_at) VALUES (?1, ?2)",
            params![name, Utc::now().to_rfc3339()],
        )?;
        self.get_deck(name)?
            .ok_or_else(|| DbError::DeckNotFound(name.to_string()))
    }

    fn list_decks(&self) -> Result<Vec<Deck>> {
        let mut stmt = self.conn.prepare(
            "SELECT d.id, d.name, COUNT(n.id) FROM decks d
             LEFT JOIN notes n ON n.deck_id = d.id
             GROUP BY d.id
             ORDER BY d.name",
        )?;

        let decks = stmt
            .query_map([], |row| {
                Ok(Deck {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    note_count: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(decks)
    }
}

impl NoteRepository for SqliteCollection {
    fn notes_in_deck(&self, deck_id: i64) -> Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, guid, deck_id, front, back, tags, created_at FROM notes WHERE deck_id = ?1 ORDER BY id",
        )?;

        let notes = stmt
            .query_map(params![deck_id], Self::row_to_note)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(notes)
    }

    fn add_note(&self, deck_id: i64, note: &NewNote<'_>) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO notes (guid, deck_id, front, back, tags, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                Uuid::new_v4().to_string(),
                deck_id,
                note.front,
                note.back,
                join_tags(note.tags),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }
}
