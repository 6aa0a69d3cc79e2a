//! Command-line argument parsing.

use chesscard_core::Palette;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Turn chess puzzles into flashcards
#[derive(Debug, Parser)]
#[command(name = "chess-cards")]
#[command(about = "Convert chess FENs and solution text into flashcards", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add the puzzles in a YAML file to the collection, skipping existing cards
    Build(BuildArgs),

    /// Write a blank puzzle file to fill in
    Template(TemplateArgs),

    /// List boards in a deck that have more than one distinct solution card
    Duplicates(DuplicatesArgs),

    /// Draw a single FEN to an SVG file
    Render(RenderArgs),

    /// Draw a sample board in a custom pair of square colors
    Colortest(ColortestArgs),
}

/// Where the card collection lives.
#[derive(Debug, Clone, Args)]
pub struct CollectionArgs {
    /// Write to the main collection, not the sandbox
    #[arg(short = 'r', long = "realthing")]
    pub real: bool,

    /// Explicit collection file (overrides --realthing)
    #[arg(long, env = "CHESS_CARDS_COLLECTION")]
    pub collection: Option<PathBuf>,
}

/// Board drawing options shared by `build` and `render`.
#[derive(Debug, Clone, Args)]
pub struct BoardArgs {
    /// Number of pixels for height/width of boards
    #[arg(short = 'n', long, default_value_t = 380)]
    pub numpixels: u32,

    /// Color scheme: blue, brown, gray, green, pink, purple or all
    #[arg(short = 'c', long = "colorscheme", default_value = "all")]
    pub palette: Palette,

    /// Print rank and file coordinates around the board
    #[arg(long)]
    pub coordinates: bool,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// YAML file containing FENs and solutions
    pub fen_file: PathBuf,

    /// Deck to write cards to (default: file name without extension)
    #[arg(short = 'd', long = "deckname")]
    pub deck_name: Option<String>,

    /// Abort on the first puzzle that cannot be turned into a card
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub board: BoardArgs,

    #[command(flatten)]
    pub collection: CollectionArgs,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// File to create; must not exist yet
    pub fen_file: PathBuf,

    /// Number of blank cards to write
    #[arg(short = 't', long, default_value_t = 10)]
    pub count: usize,
}

#[derive(Debug, Args)]
pub struct DuplicatesArgs {
    /// Deck to inspect
    #[arg(short = 'd', long = "deckname")]
    pub deck_name: String,

    #[command(flatten)]
    pub collection: CollectionArgs,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// FEN of the position to draw
    pub fen: String,

    /// Output file
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub board: BoardArgs,
}

#[derive(Debug, Args)]
pub struct ColortestArgs {
    /// Light square color, six hex digits
    pub light: String,

    /// Dark square color, six hex digits
    pub dark: String,

    /// Output file (default: colortest_<light>_<dark>.svg)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}
