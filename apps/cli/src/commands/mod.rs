//! Subcommand implementations.

pub mod build;
pub mod duplicates;
pub mod import;
pub mod render;
pub mod template;

pub use duplicates::{find_duplicates, DuplicateGroup};
pub use import::{import_batches, DeckOutcome};
