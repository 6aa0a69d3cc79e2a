//! Duplicate detection for rendered cards.
//!
//! Two cards are the same card when they show the same board and their backs
//! agree after accents are folded away. The board is read back out of the
//! front markup because the collection only stores field text, and the SVG
//! around the board is not byte-stable between renders.

use crate::error::FormatError;
use crate::types::RenderedCard;
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Substring that appears exactly twice in a front, around the ASCII board.
pub const BOARD_DELIMITER: &str = "pre";

static ACCENT_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:([A-Za-z])(?:acute|grave|circ|uml|tilde|cedil|ring|slash|caron)|(szlig|aelig|AElig|oelig|OElig));")
        .expect("entity pattern is valid")
});

/// Pull the board identity out of a card front.
///
/// The front must contain [`BOARD_DELIMITER`] exactly twice, once in `<pre>`
/// and once in `</pre>`. The identity is the text between them, without the
/// `>` that closes the opening tag and the `</` that starts the closing one.
pub fn board_identity(front: &str) -> Result<&str, FormatError> {
    let parts: Vec<&str> = front.split(BOARD_DELIMITER).collect();
    if parts.len() != 3 {
        return Err(FormatError::DelimiterCount {
            delimiter: BOARD_DELIMITER,
            found: parts.len() - 1,
        });
    }

    let mut inner = parts[1].chars();
    inner.next();
    inner.next_back();
    inner.next_back();
    Ok(inner.as_str())
}

/// Fold accented letters to plain ASCII so that `café`, `cafe` and
/// `caf&eacute;` compare equal.
///
/// Characters without an ASCII letter equivalent (chess glyphs, punctuation,
/// symbols) are kept as they are. Folding twice gives the same result.
pub fn strip_accents(text: &str) -> String {
    // Folding can expose a new entity (`&&eacute;acute;`), so repeat until
    // nothing changes. Each pass removes an entity or a non-ASCII character.
    let mut current = fold_once(text);
    loop {
        let next = fold_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn fold_once(text: &str) -> String {
    let decoded = ACCENT_ENTITY.replace_all(text, |caps: &Captures<'_>| {
        if let Some(letter) = caps.get(1) {
            return letter.as_str().to_string();
        }
        match caps.get(2).map(|m| m.as_str()) {
            Some("szlig") => "ss",
            Some("aelig") => "ae",
            Some("AElig") => "AE",
            Some("oelig") => "oe",
            Some("OElig") => "OE",
            _ => "",
        }
        .to_string()
    });

    let mut folded = String::with_capacity(decoded.len());
    for c in decoded.chars() {
        if c.is_ascii() {
            folded.push(c);
            continue;
        }
        match deunicode::deunicode_char(c) {
            Some("") => {}
            Some(ascii) if c.is_alphabetic() && ascii.chars().all(|a| a.is_ascii_alphabetic()) => {
                folded.push_str(ascii);
            }
            _ => folded.push(c),
        }
    }
    folded
}

/// Identity of a card for exact-match duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardFingerprint {
    pub board: String,
    pub back: String,
}

impl CardFingerprint {
    /// Fingerprint from a board identity and raw back text.
    pub fn new(board: impl Into<String>, back: &str) -> Self {
        Self {
            board: board.into(),
            back: strip_accents(back),
        }
    }

    /// Fingerprint of a stored card, given its two fields.
    pub fn from_fields(front: &str, back: &str) -> Result<Self, FormatError> {
        Ok(Self::new(board_identity(front)?, back))
    }
}

impl From<&RenderedCard> for CardFingerprint {
    fn from(card: &RenderedCard) -> Self {
        Self::new(card.board_identity.as_str(), &card.back)
    }
}

/// Set of fingerprints already present in a deck.
#[derive(Debug, Clone, Default)]
pub struct DuplicateIndex {
    seen: HashSet<CardFingerprint>,
}

impl DuplicateIndex {
    /// Index existing cards given as `(front, back)` field pairs.
    pub fn from_fields<'a, I>(cards: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let seen = cards
            .into_iter()
            .map(|(front, back)| CardFingerprint::from_fields(front, back))
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self { seen })
    }

    pub fn contains(&self, fingerprint: &CardFingerprint) -> bool {
        self.seen.contains(fingerprint)
    }

    /// Record a fingerprint. Returns `false` if it was already present.
    pub fn insert(&mut self, fingerprint: CardFingerprint) -> bool {
        self.seen.insert(fingerprint)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{render_board, BoardStyle};
    use crate::types::Palette;
    use pretty_assertions::assert_eq;

    const FEN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

    #[test]
    fn identity_is_between_the_delimiters() {
        let front = "<svg><desc><pre>r . k\n. . .</pre></desc></svg><br><hr3><i>White to move</i></hr3>";
        assert_eq!(board_identity(front).unwrap(), "r . k\n. . .");
    }

    #[test]
    fn identity_survives_markup_drift() {
        let a = r#"<svg><desc><pre>. K .</pre></desc><path d="M0 0"/></svg>"#;
        let b = r#"<svg><desc><pre>. K .</pre></desc><path d="M0 0"></path></svg>"#;
        assert_eq!(board_identity(a).unwrap(), board_identity(b).unwrap());
    }

    #[test]
    fn identity_of_rendered_board() {
        let board = render_board(FEN, &BoardStyle::default()).unwrap();
        let front = format!("{}<br><hr3><i>White to move</i></hr3>", board.svg);
        assert_eq!(board_identity(&front).unwrap(), board.identity);
    }

    #[test]
    fn wrong_delimiter_count_is_reported() {
        assert_eq!(
            board_identity("<svg></svg>"),
            Err(FormatError::DelimiterCount {
                delimiter: BOARD_DELIMITER,
                found: 0,
            })
        );
        assert_eq!(
            board_identity("<pre>x</pre> preview"),
            Err(FormatError::DelimiterCount {
                delimiter: BOARD_DELIMITER,
                found: 3,
            })
        );
    }

    #[test]
    fn short_segment_gives_empty_identity() {
        assert_eq!(board_identity("pre>pre").unwrap(), "");
    }

    #[test]
    fn accents_are_folded() {
        assert_eq!(strip_accents("café"), strip_accents("cafe"));
        assert_eq!(strip_accents("café"), "cafe");
        assert_eq!(strip_accents("caf&eacute;"), "cafe");
        assert_eq!(strip_accents("Fran&ccedil;ois Philidor"), "Francois Philidor");
        assert_eq!(strip_accents("Stra&szlig;e"), "Strasse");
    }

    #[test]
    fn markup_and_symbols_are_kept() {
        assert_eq!(strip_accents("<b>1. Qxf7# &amp; ½</b>"), "<b>1. Qxf7# &amp; ½</b>");
        assert_eq!(strip_accents("\u{2654} wins"), "\u{2654} wins");
    }

    #[test]
    fn folding_is_idempotent() {
        for text in [
            "Réti — Alekhine",
            "caf&eacute;",
            "Nimzowitsch",
            "Smyslov ½–½",
            "&\u{e9}acute;",
            "&&eacute;acute;",
        ] {
            let once = strip_accents(text);
            assert_eq!(strip_accents(&once), once);
        }
    }

    #[test]
    fn entities_exposed_by_folding_are_decoded() {
        assert_eq!(strip_accents("&\u{e9}acute;"), "e");
        assert_eq!(strip_accents("&&eacute;acute;"), "e");
    }

    #[test]
    fn fingerprints_ignore_render_differences() {
        let green = BoardStyle {
            colors: Palette::Green.scheme().unwrap(),
            ..BoardStyle::default()
        };
        let pink = BoardStyle {
            colors: Palette::Pink.scheme().unwrap(),
            size: Some(380),
            ..BoardStyle::default()
        };
        let a = render_board(FEN, &green).unwrap();
        let b = render_board(FEN, &pink).unwrap();
        assert_ne!(a.svg, b.svg);

        let first = CardFingerprint::from_fields(&a.svg, "<b>Qxf7# Légal</b>").unwrap();
        let second = CardFingerprint::from_fields(&b.svg, "<b>Qxf7# L&eacute;gal</b>").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn index_tracks_seen_cards() {
        let mut index =
            DuplicateIndex::from_fields([("<pre>a</pre>", "x"), ("<pre>b</pre>", "y")]).unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.contains(&CardFingerprint::new("a", "x")));
        assert!(!index.insert(CardFingerprint::new("b", "y")));
        assert!(index.insert(CardFingerprint::new("c", "z")));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn index_rejects_unrecognized_fronts() {
        assert!(DuplicateIndex::from_fields([("plain text", "x")]).is_err());
    }
}
