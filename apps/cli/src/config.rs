//! Collection location and other run-time settings.

use crate::cli::{BoardArgs, CollectionArgs};
use anyhow::{Context, Result};
use chesscard_core::{BoardStyle, ColorScheme, Palette};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "chess-cards";
const COLLECTION_FILE: &str = "collection.db";

/// Default collection: a sandbox for trying out new decks, or the main one.
pub fn default_collection_path(real: bool) -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(if real { "main" } else { "sandbox" })
        .join(COLLECTION_FILE)
}

/// Resolve the collection file and make sure its directory exists.
pub fn collection_path(args: &CollectionArgs) -> Result<PathBuf> {
    let path = match &args.collection {
        Some(path) => path.clone(),
        None => default_collection_path(args.real),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(path)
}

/// Deck name used when none is given: the file name without its extension.
pub fn deck_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("default")
        .to_string()
}

/// Settings for turning puzzles into cards.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub size: Option<u32>,
    pub coordinates: bool,
    pub palette: Palette,
    pub strict: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            size: Some(380),
            coordinates: false,
            palette: Palette::All,
            strict: false,
        }
    }
}

impl ImportOptions {
    pub fn from_args(board: &BoardArgs, strict: bool) -> Self {
        Self {
            size: Some(board.numpixels),
            coordinates: board.coordinates,
            palette: board.palette,
            strict,
        }
    }

    /// Board style for one card.
    pub fn style(&self, colors: ColorScheme) -> BoardStyle {
        BoardStyle {
            size: self.size,
            coordinates: self.coordinates,
            colors,
        }
    }
}
