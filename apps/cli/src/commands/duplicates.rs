//! `duplicates`: boards that appear in a deck with more than one solution.

use crate::cli::DuplicatesArgs;
use crate::config::collection_path;
use crate::db::{DbError, DeckRepository, NoteRepository, SqliteCollection};
use anyhow::{Context, Result};
use chesscard_core::CardFingerprint;
use std::collections::{BTreeMap, BTreeSet};

/// One board and the distinct backs it was stored with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub board: String,
    pub backs: Vec<String>,
}

/// Group a deck's cards by board and keep boards with several different backs.
pub fn find_duplicates<R>(repo: &R, deck_name: &str) -> Result<Vec<DuplicateGroup>>
where
    R: DeckRepository + NoteRepository,
{
    let deck = repo
        .get_deck(deck_name)?
        .ok_or_else(|| DbError::DeckNotFound(deck_name.to_string()))?;

    let mut by_board: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for note in repo.notes_in_deck(deck.id)? {
        let fingerprint = CardFingerprint::from_fields(&note.front, &note.back)
            .with_context(|| format!("unrecognized card {}", note.guid))?;
        by_board
            .entry(fingerprint.board)
            .or_default()
            .insert(fingerprint.back);
    }

    Ok(by_board
        .into_iter()
        .filter(|(_, backs)| backs.len() > 1)
        .map(|(board, backs)| DuplicateGroup {
            board,
            backs: backs.into_iter().collect(),
        })
        .collect())
}

pub fn run(args: DuplicatesArgs) -> Result<()> {
    let path = collection_path(&args.collection)?;
    let collection = SqliteCollection::open(&path)
        .with_context(|| format!("failed to open collection {}", path.display()))?;

    let groups = find_duplicates(&collection, &args.deck_name)?;
    if groups.is_empty() {
        println!("No duplicate boards in {:?}", args.deck_name);
        return Ok(());
    }
    for group in &groups {
        println!("{}", group.board);
        for back in &group.backs {
            println!("  - {back}");
        }
        println!();
    }
    println!("{} board{} with more than one card", groups.len(), if groups.len() == 1 { "" } else { "s" });
    Ok(())
}
