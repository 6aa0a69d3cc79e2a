//! Core library for turning chess puzzles into flashcards.
//!
//! Provides:
//! - YAML puzzle file loader
//! - FEN to SVG board renderer
//! - Lettered list markup for solutions
//! - Card fingerprints for duplicate detection
//! - Shared types (PuzzleRecord, RenderedCard, ColorScheme, etc.)

pub mod board;
pub mod card;
pub mod error;
pub mod fingerprint;
pub mod markup;
pub mod parser;
pub mod template;
pub mod types;

pub use board::{default_instructions, render_board, side_to_move, BoardStyle, RenderedBoard};
pub use card::build_card;
pub use error::{Error, FormatError, ParseError, RenderError, Result};
pub use fingerprint::{board_identity, strip_accents, CardFingerprint, DuplicateIndex, BOARD_DELIMITER};
pub use markup::convert_ordered_list;
pub use parser::{parse, plan_decks, DeckBatch, ScanReport};
pub use template::render_template;
pub use types::{ColorCycle, ColorScheme, Difficulty, Palette, PuzzleRecord, RenderedCard};
