//! `template`: write a blank puzzle file.

use crate::cli::TemplateArgs;
use anyhow::{bail, Context, Result};
use chesscard_core::render_template;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Create `path` holding `count` blank stubs. Never overwrites.
pub fn write_template(path: &Path, count: usize) -> Result<()> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("file {} already exists; cannot overwrite with a template", path.display())
        }
        Err(e) => return Err(e).with_context(|| format!("failed to create {}", path.display())),
    };
    file.write_all(render_template(count).as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn run(args: TemplateArgs) -> Result<()> {
    write_template(&args.fen_file, args.count)?;
    tracing::info!("wrote {} blank cards to {}", args.count, args.fen_file.display());
    Ok(())
}
