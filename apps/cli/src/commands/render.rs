//! `render` and `colortest`: single boards written to SVG files.

use crate::cli::{ColortestArgs, RenderArgs};
use anyhow::{Context, Result};
use chesscard_core::{render_board, BoardStyle, ColorScheme};
use std::fs;
use std::path::{Path, PathBuf};

/// Position shown by `colortest`: enough pieces on both square colors to judge contrast.
const COLORTEST_FEN: &str = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP2BPPP/R2QKB1R w KQ - 0 8";

fn write_svg(fen: &str, style: &BoardStyle, path: &Path) -> Result<()> {
    let board = render_board(fen, style)?;
    fs::write(path, board.svg).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

pub fn run(args: RenderArgs) -> Result<()> {
    let colors = args.board.palette.scheme().unwrap_or_default();
    let style = BoardStyle {
        size: Some(args.board.numpixels),
        coordinates: args.board.coordinates,
        colors,
    };
    write_svg(&args.fen, &style, &args.output)
}

/// File `colortest` writes to when no output is given.
pub fn colortest_path(scheme: &ColorScheme) -> PathBuf {
    PathBuf::from(format!("colortest_{}_{}.svg", scheme.light, scheme.dark))
}

pub fn run_colortest(args: ColortestArgs) -> Result<()> {
    let colors = ColorScheme::custom(&args.light, &args.dark)?;
    let output = args.output.unwrap_or_else(|| colortest_path(&colors));
    let style = BoardStyle {
        size: None,
        coordinates: true,
        colors,
    };
    write_svg(COLORTEST_FEN, &style, &output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colortest_file_name() {
        let scheme = ColorScheme::custom("#EEEED2", "769656").unwrap();
        assert_eq!(colortest_path(&scheme), PathBuf::from("colortest_eeeed2_769656.svg"));
    }

    #[test]
    fn colortest_position_is_valid() {
        assert!(render_board(COLORTEST_FEN, &BoardStyle::default()).is_ok());
    }
}
