//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chess_cards::db::SqliteCollection;

pub const BACK_RANK: &str = "6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1";
pub const SCHOLARS: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";
pub const BLACK_TO_MOVE: &str = "6k1/8/8/8/8/8/r4PPP/6K1 b - - 0 1";

/// Fresh in-memory collection.
pub fn collection() -> SqliteCollection {
    SqliteCollection::open_in_memory().expect("in-memory collection")
}

/// One YAML puzzle entry.
pub fn entry(key: &str, fen: &str, solution: &str, extra: &[(&str, &str)]) -> String {
    let mut out = format!("{key}:\n  fen: \"{fen}\"\n  solution: \"{solution}\"\n  tag: tactics\n");
    for (field, value) in extra {
        out.push_str(&format!("  {field}: \"{value}\"\n"));
    }
    out
}

/// A small puzzle file: two easy puzzles, one hard, one unfinished stub.
pub fn sample_file() -> String {
    [
        entry("card1", BACK_RANK, "1. Rd8#", &[("description", "Back rank")]),
        entry("card2", SCHOLARS, "(A) Qxf7# (B) Bxf7+ is slower", &[]),
        entry("card3", BLACK_TO_MOVE, "1... Ra1#", &[("difficulty", "hard")]),
        "card4:\n  fen:\n  solution:\n".to_string(),
    ]
    .concat()
}
