//! Card assembly: board and instructions on the front, solution on the back.

use crate::board::{default_instructions, render_board, BoardStyle};
use crate::error::{FormatError, Result};
use crate::fingerprint::{board_identity, BOARD_DELIMITER};
use crate::markup::convert_ordered_list;
use crate::types::{PuzzleRecord, RenderedCard};

/// Build the card for one puzzle.
pub fn build_card(puzzle: &PuzzleRecord, style: &BoardStyle) -> Result<RenderedCard> {
    let board = render_board(&puzzle.fen, style)?;
    let instructions = match &puzzle.instructions {
        Some(text) => text.clone(),
        None => default_instructions(&puzzle.fen)?,
    };

    let front = format!("{}<br><hr3><i>{}</i></hr3>", board.svg, instructions);
    // The front must read back to the same board once it is in the collection.
    if board_identity(&front)? != board.identity {
        return Err(FormatError::DelimiterCount {
            delimiter: BOARD_DELIMITER,
            found: front.matches(BOARD_DELIMITER).count(),
        }
        .into());
    }

    let mut back = format!("<b>{}</b>", convert_ordered_list(&puzzle.solution)?);
    if let Some(description) = &puzzle.description {
        back.push_str("<hr>");
        back.push_str(description);
    }

    Ok(RenderedCard {
        front,
        back,
        board_identity: board.identity,
        tags: puzzle.tags.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fingerprint::CardFingerprint;
    use crate::types::Difficulty;
    use pretty_assertions::assert_eq;

    fn puzzle(solution: &str) -> PuzzleRecord {
        PuzzleRecord {
            key: "card1".to_string(),
            fen: "6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1".to_string(),
            instructions: None,
            solution: solution.to_string(),
            description: None,
            difficulty: Difficulty::Easy,
            tags: vec!["mate".to_string()],
        }
    }

    #[test]
    fn front_has_board_and_default_instructions() {
        let card = build_card(&puzzle("1. Rd8#"), &BoardStyle::default()).unwrap();
        assert!(card.front.starts_with("<svg "));
        assert!(card.front.ends_with("</svg><br><hr3><i>White to move</i></hr3>"));
        assert_eq!(board_identity(&card.front).unwrap(), card.board_identity);
    }

    #[test]
    fn explicit_instructions_win() {
        let mut p = puzzle("1. Rd8#");
        p.instructions = Some("Mate in one".to_string());
        let card = build_card(&p, &BoardStyle::default()).unwrap();
        assert!(card.front.ends_with("<i>Mate in one</i></hr3>"));
    }

    #[test]
    fn back_has_solution_and_description() {
        let mut p = puzzle("(A) Rd8# (B) anything else fails");
        p.description = Some("Position 7".to_string());
        let card = build_card(&p, &BoardStyle::default()).unwrap();
        assert_eq!(
            card.back,
            r#"<b><ol type="A"><li> Rd8# </li><li> anything else fails</li></ol></b><hr>Position 7"#
        );
        assert_eq!(card.tags, vec!["mate"]);
    }

    #[test]
    fn fingerprint_from_stored_fields_matches() {
        let card = build_card(&puzzle("1. Rd8#"), &BoardStyle::default()).unwrap();
        let stored = CardFingerprint::from_fields(&card.front, &card.back).unwrap();
        assert_eq!(CardFingerprint::from(&card), stored);
    }

    #[test]
    fn malformed_list_is_reported() {
        let err = build_card(&puzzle("(B) x (C) y"), &BoardStyle::default()).unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::ListStart { found: 'B' })));
    }

    #[test]
    fn instructions_containing_the_delimiter_are_rejected() {
        let mut p = puzzle("1. Rd8#");
        p.instructions = Some("White to move and prevent mate".to_string());
        let err = build_card(&p, &BoardStyle::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::DelimiterCount { found: 3, .. })
        ));
    }
}
