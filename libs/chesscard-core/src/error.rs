//! Error types for chesscard-core.

use thiserror::Error;

/// Result type alias using the umbrella [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Malformed text that the card pipeline refuses to guess about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected (A) for first list item, got ({found})")]
    ListStart { found: char },

    #[error("unable to split the following string at ({marker}):\n  {text}")]
    ListMarker { marker: char, text: String },

    #[error("expected to find {delimiter:?} twice in rendered card, got {found}")]
    DelimiterCount { delimiter: &'static str, found: usize },
}

/// Errors that can occur while loading a puzzle file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected a mapping of puzzle entries at the top level")]
    NotAMapping,

    #[error("entry {key}: {message}")]
    InvalidEntry { key: String, message: String },

    #[error("entry {key}: expected difficulty to be easy/hard, got {value}")]
    InvalidDifficulty { key: String, value: String },
}

/// Errors that can occur while drawing a board.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid FEN {fen:?}: {source}")]
    InvalidFen {
        fen: String,
        #[source]
        source: shakmaty::fen::ParseFenError,
    },

    #[error("invalid color {0:?}: expected six hex digits")]
    InvalidColor(String),
}

/// Any error from turning a puzzle into a card.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
