//! FEN to SVG board diagrams.
//!
//! The diagram embeds the plain ASCII board in `<desc><pre>...</pre></desc>`.
//! That text is the only part of the markup guaranteed to stay the same between
//! renders, so duplicate detection keys on it (see [`crate::fingerprint`]).

use crate::error::RenderError;
use crate::types::ColorScheme;
use shakmaty::fen::Fen;
use shakmaty::{Board, Color, Piece, Role, Setup, Square};
use std::fmt::Write;

const SQUARE_SIZE: u32 = 45;
const COORDINATE_MARGIN: u32 = 20;
const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// How a board should be drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardStyle {
    /// Pixel width and height. `None` leaves the SVG to scale freely.
    pub size: Option<u32>,
    pub coordinates: bool,
    pub colors: ColorScheme,
}

/// SVG markup plus the stable identity of the position it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBoard {
    pub svg: String,
    /// ASCII board, rank 8 first, `.` for empty squares.
    pub identity: String,
}

fn parse_setup(fen: &str) -> Result<Setup, RenderError> {
    Fen::from_ascii(fen.trim().as_bytes())
        .map(Fen::into_setup)
        .map_err(|source| RenderError::InvalidFen {
            fen: fen.to_string(),
            source,
        })
}

/// Side to move in a FEN, as "White" or "Black".
pub fn side_to_move(fen: &str) -> Result<&'static str, RenderError> {
    Ok(match parse_setup(fen)?.turn {
        Color::White => "White",
        Color::Black => "Black",
    })
}

/// Instructions used when a puzzle does not give its own.
pub fn default_instructions(fen: &str) -> Result<String, RenderError> {
    Ok(format!("{} to move", side_to_move(fen)?))
}

/// Render a FEN as an SVG diagram.
pub fn render_board(fen: &str, style: &BoardStyle) -> Result<RenderedBoard, RenderError> {
    let setup = parse_setup(fen)?;
    let identity = ascii_board(&setup.board);
    let svg = draw_svg(&setup.board, &identity, style);
    Ok(RenderedBoard { svg, identity })
}

fn square_at(file: u32, rank: u32) -> Square {
    Square::new(rank * 8 + file)
}

/// Plain text board: one line per rank from 8 down to 1.
pub fn ascii_board(board: &Board) -> String {
    (0..8u32)
        .rev()
        .map(|rank| {
            (0..8u32)
                .map(|file| board.piece_at(square_at(file, rank)).map_or('.', Piece::char).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn glyph(piece: Piece) -> char {
    match (piece.color, piece.role) {
        (Color::White, Role::King) => '\u{2654}',
        (Color::White, Role::Queen) => '\u{2655}',
        (Color::White, Role::Rook) => '\u{2656}',
        (Color::White, Role::Bishop) => '\u{2657}',
        (Color::White, Role::Knight) => '\u{2658}',
        (Color::White, Role::Pawn) => '\u{2659}',
        (Color::Black, Role::King) => '\u{265A}',
        (Color::Black, Role::Queen) => '\u{265B}',
        (Color::Black, Role::Rook) => '\u{265C}',
        (Color::Black, Role::Bishop) => '\u{265D}',
        (Color::Black, Role::Knight) => '\u{265E}',
        (Color::Black, Role::Pawn) => '\u{265F}',
    }
}

fn draw_svg(board: &Board, identity: &str, style: &BoardStyle) -> String {
    let margin = if style.coordinates { COORDINATE_MARGIN } else { 0 };
    let extent = 8 * SQUARE_SIZE + 2 * margin;

    // Writing to a String cannot fail.
    let mut svg = String::new();
    svg.push_str("<svg ");
    if let Some(size) = style.size {
        let _ = write!(svg, r#"width="{size}" height="{size}" "#);
    }
    let _ = write!(
        svg,
        r#"xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="0 0 {extent} {extent}">"#
    );
    let _ = write!(svg, "<desc><pre>{identity}</pre></desc>");

    for rank in 0..8u32 {
        for file in 0..8u32 {
            let x = margin + file * SQUARE_SIZE;
            let y = margin + (7 - rank) * SQUARE_SIZE;
            let fill = if (file + rank) % 2 == 0 {
                &style.colors.dark
            } else {
                &style.colors.light
            };
            let _ = write!(
                svg,
                "<rect x=\"{x}\" y=\"{y}\" width=\"{SQUARE_SIZE}\" height=\"{SQUARE_SIZE}\" fill=\"#{fill}\"/>"
            );
            if let Some(piece) = board.piece_at(square_at(file, rank)) {
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{}" font-size="38" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                    x + SQUARE_SIZE / 2,
                    y + SQUARE_SIZE / 2,
                    glyph(piece)
                );
            }
        }
    }

    if style.coordinates {
        for (i, file) in FILES.iter().enumerate() {
            let x = margin + i as u32 * SQUARE_SIZE + SQUARE_SIZE / 2;
            for y in [margin / 2, extent - margin / 2] {
                let _ = write!(
                    svg,
                    r#"<text x="{x}" y="{y}" font-size="14" text-anchor="middle" dominant-baseline="central">{file}</text>"#
                );
            }
        }
        for rank in 0..8u32 {
            let y = margin + (7 - rank) * SQUARE_SIZE + SQUARE_SIZE / 2;
            for x in [margin / 2, extent - margin / 2] {
                let _ = write!(
                    svg,
                    r#"<text x="{x}" y="{y}" font-size="14" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                    rank + 1
                );
            }
        }
    }

    svg.push_str("</svg>");
    svg
}
