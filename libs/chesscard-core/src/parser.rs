//! YAML puzzle file loader.
//!
//! # Format
//! ```yaml
//! card1:
//!   description: "Position 12"
//!   fen: 6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1
//!   instructions: Mate in one
//!   solution: 1. Rd8#
//!   difficulty: easy
//!   tag: back-rank mate
//! ```
//!
//! Entry names are free-form. `fen`, `solution` and `tag` are required for a
//! card to be made; `instructions`, `description` and `difficulty` are optional.
//! Files are usually filled in gradually, so incomplete entries are counted and
//! skipped rather than rejected.

use crate::error::ParseError;
use crate::types::{Difficulty, PuzzleRecord};
use serde::Deserialize;
use serde_yaml::Value;

/// One entry as written in the file, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPuzzle {
    fen: Option<String>,
    solution: Option<String>,
    instructions: Option<String>,
    description: Option<String>,
    difficulty: Option<String>,
    tag: Option<String>,
}

impl RawPuzzle {
    fn from_value(key: &str, value: Value) -> Result<Self, ParseError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        if !value.is_mapping() {
            return Err(ParseError::InvalidEntry {
                key: key.to_string(),
                message: "expected a mapping of puzzle fields".to_string(),
            });
        }
        serde_yaml::from_value(value).map_err(|e| ParseError::InvalidEntry {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

/// Outcome of scanning a puzzle file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of entries in the file, complete or not.
    pub total: usize,
    /// Complete puzzles, in file order.
    pub records: Vec<PuzzleRecord>,
    pub solution_without_fen: usize,
    pub fen_without_solution: usize,
    /// Complete puzzles skipped for lacking a tag, by description or entry name.
    pub missing_tag: Vec<String>,
}

/// Puzzles that share a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckBatch {
    pub deck_name: String,
    pub difficulty: Difficulty,
    pub puzzles: Vec<PuzzleRecord>,
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => format!("{other:?}"),
    }
}

/// Parse YAML content into puzzle records.
pub fn parse(content: &str) -> Result<ScanReport, ParseError> {
    if content.trim().is_empty() {
        return Ok(ScanReport::default());
    }

    let entries = match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(entries) => entries,
        Value::Null => return Ok(ScanReport::default()),
        _ => return Err(ParseError::NotAMapping),
    };

    let mut report = ScanReport {
        total: entries.len(),
        ..ScanReport::default()
    };

    for (key, value) in entries {
        let key = key_to_string(&key);
        let raw = RawPuzzle::from_value(&key, value)?;

        let (fen, solution) = match (present(raw.fen), present(raw.solution)) {
            (Some(fen), Some(solution)) => (fen, solution),
            (None, Some(_)) => {
                report.solution_without_fen += 1;
                continue;
            }
            (Some(_), None) => {
                report.fen_without_solution += 1;
                continue;
            }
            (None, None) => continue,
        };

        let description = present(raw.description);
        let Some(tag) = present(raw.tag) else {
            report
                .missing_tag
                .push(description.clone().unwrap_or_else(|| key.clone()));
            continue;
        };

        let difficulty = match present(raw.difficulty) {
            Some(value) => Difficulty::parse_lenient(&key, &value)?,
            None => Difficulty::default(),
        };

        report.records.push(PuzzleRecord {
            key,
            fen,
            instructions: present(raw.instructions),
            solution,
            description,
            difficulty,
            tags: tag.split_whitespace().map(str::to_string).collect(),
        });
    }

    Ok(report)
}

/// Group records into decks by difficulty, in order of first appearance.
pub fn plan_decks(deck_name: &str, records: Vec<PuzzleRecord>) -> Vec<DeckBatch> {
    let mut batches: Vec<DeckBatch> = Vec::new();
    for record in records {
        match batches.iter_mut().find(|b| b.difficulty == record.difficulty) {
            Some(batch) => batch.puzzles.push(record),
            None => batches.push(DeckBatch {
                deck_name: record.difficulty.deck_name(deck_name),
                difficulty: record.difficulty,
                puzzles: vec![record],
            }),
        }
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FEN: &str = "6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1";

    #[test]
    fn parse_single_puzzle() {
        let input = format!(
            "card1:\n  description: Back rank\n  fen: {FEN}\n  solution: 1. Rd8#\n  tag: mate back-rank\n"
        );
        let report = parse(&input).unwrap();
        assert_eq!(report.total, 1);
        assert_eq!(report.records.len(), 1);
        let record = &report.records[0];
        assert_eq!(record.key, "card1");
        assert_eq!(record.fen, FEN);
        assert_eq!(record.solution, "1. Rd8#");
        assert_eq!(record.description.as_deref(), Some("Back rank"));
        assert_eq!(record.instructions, None);
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert_eq!(record.tags, vec!["mate", "back-rank"]);
    }

    #[test]
    fn incomplete_entries_are_counted() {
        let input = format!(
            "a:\n  fen: {FEN}\n  tag: t\n\
             b:\n  solution: 1. Rd8#\n  tag: t\n\
             c:\n  solution: 1. Rd8#\n  tag: t\n\
             d:\n  fen:\n  solution:\n\
             e:\n"
        );
        let report = parse(&input).unwrap();
        assert_eq!(report.total, 5);
        assert!(report.records.is_empty());
        assert_eq!(report.fen_without_solution, 1);
        assert_eq!(report.solution_without_fen, 2);
    }

    #[test]
    fn blank_values_count_as_missing() {
        let input = format!("a:\n  fen: {FEN}\n  solution: \"  \"\n  tag: t\n");
        let report = parse(&input).unwrap();
        assert_eq!(report.fen_without_solution, 1);
    }

    #[test]
    fn untagged_puzzles_are_skipped() {
        let input = format!(
            "a:\n  description: Position 3\n  fen: {FEN}\n  solution: x\n\
             b:\n  fen: {FEN}\n  solution: y\n"
        );
        let report = parse(&input).unwrap();
        assert!(report.records.is_empty());
        assert_eq!(report.missing_tag, vec!["Position 3", "b"]);
    }

    #[test]
    fn difficulty_is_parsed() {
        let input = format!("a:\n  fen: {FEN}\n  solution: x\n  tag: t\n  difficulty: ' Hard '\n");
        let report = parse(&input).unwrap();
        assert_eq!(report.records[0].difficulty, Difficulty::Hard);
    }

    #[test]
    fn reject_unknown_difficulty() {
        let input = format!("a:\n  fen: {FEN}\n  solution: x\n  tag: t\n  difficulty: medium\n");
        assert!(matches!(
            parse(&input),
            Err(ParseError::InvalidDifficulty { ref key, ref value }) if key == "a" && value == "medium"
        ));
    }

    #[test]
    fn reject_non_mapping_document() {
        assert!(matches!(parse("- a\n- b\n"), Err(ParseError::NotAMapping)));
        assert!(matches!(parse("a: 3\n"), Err(ParseError::InvalidEntry { .. })));
    }

    #[test]
    fn parse_empty_content() {
        assert_eq!(parse("").unwrap(), ScanReport::default());
        assert_eq!(parse("  \n").unwrap(), ScanReport::default());
    }

    #[test]
    fn decks_follow_first_appearance() {
        let input = format!(
            "a:\n  fen: {FEN}\n  solution: x\n  tag: t\n  difficulty: hard\n\
             b:\n  fen: {FEN}\n  solution: y\n  tag: t\n\
             c:\n  fen: {FEN}\n  solution: z\n  tag: t\n  difficulty: hard\n"
        );
        let batches = plan_decks("Tactics", parse(&input).unwrap().records);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].deck_name, "Hard: Tactics");
        assert_eq!(batches[0].puzzles.len(), 2);
        assert_eq!(batches[1].deck_name, "Tactics");
        assert_eq!(batches[1].puzzles[0].solution, "y");
    }
}
