//! Core types shared by the loader, renderer and card builder.

use crate::error::{ParseError, RenderError};
use std::fmt;
use std::str::FromStr;

/// Puzzle difficulty. Hard puzzles go to their own deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }

    /// Parse a difficulty written by hand: whitespace and case are ignored.
    pub fn parse_lenient(key: &str, value: &str) -> Result<Self, ParseError> {
        match value.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "hard" => Ok(Self::Hard),
            other => Err(ParseError::InvalidDifficulty {
                key: key.to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Deck that puzzles of this difficulty are filed under.
    pub fn deck_name(&self, base: &str) -> String {
        match self {
            Self::Easy => base.to_string(),
            Self::Hard => format!("Hard: {base}"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete puzzle entry from the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRecord {
    /// Entry name in the input file. Not used on the card.
    pub key: String,
    pub fen: String,
    pub instructions: Option<String>,
    pub solution: String,
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

/// Light and dark square colors, as six hex digits without `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorScheme {
    pub light: String,
    pub dark: String,
}

impl ColorScheme {
    /// Build a scheme from user input, accepting an optional leading `#`.
    pub fn custom(light: &str, dark: &str) -> Result<Self, RenderError> {
        Ok(Self {
            light: parse_hex_color(light)?,
            dark: parse_hex_color(dark)?,
        })
    }

    fn from_static(light: &str, dark: &str) -> Self {
        Self {
            light: light.to_string(),
            dark: dark.to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::from_static("ffce9e", "d18b47")
    }
}

fn parse_hex_color(value: &str) -> Result<String, RenderError> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(hex.to_ascii_lowercase())
    } else {
        Err(RenderError::InvalidColor(value.to_string()))
    }
}

/// Named board palettes, or all of them in rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Palette {
    Blue,
    Brown,
    Gray,
    Green,
    Pink,
    Purple,
    #[default]
    All,
}

impl Palette {
    /// Every single-scheme palette, in rotation order.
    pub const NAMED: [Palette; 6] = [
        Self::Blue,
        Self::Brown,
        Self::Gray,
        Self::Green,
        Self::Pink,
        Self::Purple,
    ];

    /// Get the palette name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Brown => "brown",
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::All => "all",
        }
    }

    /// Colors of a single palette. `All` has no single scheme.
    pub fn scheme(&self) -> Option<ColorScheme> {
        let (light, dark) = match self {
            Self::Blue => ("eeeed2", "6188b5"),
            Self::Brown => ("f0d9b5", "b58863"),
            Self::Gray => ("c8c8c8", "939393"),
            Self::Green => ("eeeed2", "769656"),
            Self::Pink => ("eeeed2", "f27372"),
            Self::Purple => ("eeeed2", "c0a2c7"),
            Self::All => return None,
        };
        Some(ColorScheme::from_static(light, dark))
    }

    /// Schemes to rotate through when rendering a deck.
    pub fn schemes(&self) -> Vec<ColorScheme> {
        match self.scheme() {
            Some(scheme) => vec![scheme],
            None => Self::NAMED.iter().filter_map(Palette::scheme).collect(),
        }
    }

    /// Start a fresh rotation.
    pub fn cycle(&self) -> ColorCycle {
        ColorCycle::new(self.schemes())
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            other => Self::NAMED
                .into_iter()
                .find(|p| p.as_str() == other)
                .ok_or_else(|| format!("unknown color scheme: {other}")),
        }
    }
}

/// Endless round-robin over a list of color schemes.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    schemes: Vec<ColorScheme>,
    next: usize,
}

impl ColorCycle {
    pub fn new(schemes: Vec<ColorScheme>) -> Self {
        let schemes = if schemes.is_empty() {
            vec![ColorScheme::default()]
        } else {
            schemes
        };
        Self { schemes, next: 0 }
    }
}

impl Iterator for ColorCycle {
    type Item = ColorScheme;

    fn next(&mut self) -> Option<Self::Item> {
        let scheme = self.schemes[self.next % self.schemes.len()].clone();
        self.next += 1;
        Some(scheme)
    }
}

/// Card text ready for the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub front: String,
    pub back: String,
    /// ASCII board the front was drawn from.
    pub board_identity: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_is_lenient() {
        assert_eq!(Difficulty::parse_lenient("c", " Hard\n").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::parse_lenient("c", "EASY").unwrap(), Difficulty::Easy);
        assert!(matches!(
            Difficulty::parse_lenient("c", "medium"),
            Err(ParseError::InvalidDifficulty { .. })
        ));
    }

    #[test]
    fn hard_puzzles_get_their_own_deck() {
        assert_eq!(Difficulty::Easy.deck_name("Tactics"), "Tactics");
        assert_eq!(Difficulty::Hard.deck_name("Tactics"), "Hard: Tactics");
    }

    #[test]
    fn cycle_wraps_around() {
        let mut cycle = Palette::All.cycle();
        let first = cycle.next().unwrap();
        for _ in 0..5 {
            cycle.next();
        }
        assert_eq!(cycle.next().unwrap(), first);
    }

    #[test]
    fn single_palette_repeats() {
        let mut cycle = Palette::Green.cycle();
        let green = Palette::Green.scheme().unwrap();
        assert_eq!(cycle.next().unwrap(), green);
        assert_eq!(cycle.next().unwrap(), green);
    }

    #[test]
    fn palette_from_str() {
        assert_eq!("Purple".parse::<Palette>().unwrap(), Palette::Purple);
        assert_eq!("all".parse::<Palette>().unwrap(), Palette::All);
        assert!("teal".parse::<Palette>().is_err());
    }

    #[test]
    fn custom_colors_are_validated() {
        let scheme = ColorScheme::custom("#EEEED2", "769656").unwrap();
        assert_eq!(scheme.light, "eeeed2");
        assert!(ColorScheme::custom("blue", "769656").is_err());
    }
}
