//! Blank puzzle file templates.

use std::fmt::Write;

/// Fields written for every stub, in order.
const FIELDS: [&str; 5] = ["fen", "instructions", "solution", "difficulty", "tag"];

/// A puzzle file with `count` empty entries named `card1` to `cardN`.
pub fn render_template(count: usize) -> String {
    let mut out = String::new();
    for n in 1..=count {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "card{n}:");
        out.push_str("  description: \"Position :\"\n");
        for field in FIELDS {
            let _ = writeln!(out, "  {field}:");
        }
        out.push('\n');
    }
    out
}
