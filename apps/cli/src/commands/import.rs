//! Batch import of puzzles into the collection.

use crate::config::ImportOptions;
use crate::db::{DeckRepository, NewNote, NoteRepository};
use anyhow::{Context, Result};
use chesscard_core::{build_card, CardFingerprint, DeckBatch, Difficulty, DuplicateIndex};

/// What happened to one deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOutcome {
    pub deck_name: String,
    pub difficulty: Difficulty,
    pub created: usize,
    pub duplicates: usize,
    pub failed: usize,
}

/// Add every batch to its deck, skipping cards the deck already has.
pub fn import_batches<R>(repo: &R, batches: Vec<DeckBatch>, options: &ImportOptions) -> Result<Vec<DeckOutcome>>
where
    R: DeckRepository + NoteRepository,
{
    batches
        .into_iter()
        .map(|batch| import_batch(repo, batch, options))
        .collect()
}

fn import_batch<R>(repo: &R, batch: DeckBatch, options: &ImportOptions) -> Result<DeckOutcome>
where
    R: DeckRepository + NoteRepository,
{
    let deck = repo
        .get_or_create_deck(&batch.deck_name)
        .with_context(|| format!("failed to open deck {:?}", batch.deck_name))?;

    // One pass over the existing cards so that re-running on a partly
    // transcribed file only adds the new puzzles.
    let existing = repo.notes_in_deck(deck.id)?;
    let mut index = DuplicateIndex::from_fields(
        existing.iter().map(|note| (note.front.as_str(), note.back.as_str())),
    )
    .with_context(|| format!("unrecognized card in deck {:?}", deck.name))?;
    tracing::debug!(deck = %deck.name, existing = index.len(), "indexed existing cards");

    let mut outcome = DeckOutcome {
        deck_name: deck.name.clone(),
        difficulty: batch.difficulty,
        created: 0,
        duplicates: 0,
        failed: 0,
    };
    let mut colors = options.palette.cycle();

    for puzzle in &batch.puzzles {
        let style = options.style(colors.next().unwrap_or_default());
        let card = match build_card(puzzle, &style) {
            Ok(card) => card,
            Err(e) if options.strict => {
                return Err(e).with_context(|| format!("puzzle {}", puzzle.key));
            }
            Err(e) => {
                tracing::error!(puzzle = %puzzle.key, "skipping puzzle: {e}");
                outcome.failed += 1;
                continue;
            }
        };

        if !index.insert(CardFingerprint::from(&card)) {
            tracing::debug!(puzzle = %puzzle.key, "card already exists");
            outcome.duplicates += 1;
            continue;
        }

        repo.add_note(
            deck.id,
            &NewNote {
                front: &card.front,
                back: &card.back,
                tags: &card.tags,
            },
        )?;
        outcome.created += 1;
    }

    Ok(outcome)
}
