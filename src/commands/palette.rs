use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::file_parsers::pal::parse_palette;

/// Print one line per palette slot: index and 8-bit RGB channels.
pub fn show_palette(path: &Path) -> Result<()> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file {}", path.display()))?;
    let palette = parse_palette(&bytes).context("Failed to parse palette")?;

    // Use a buffered writer since we're dumping a lot of lines
    let mut stdout = BufWriter::new(io::stdout().lock());
    for (i, slot) in palette.iter().enumerate() {
        writeln!(stdout, "{i:3} : {:3} {:3} {:3}", slot.r, slot.g, slot.b)
            .context("Failed to write to stdout")?;
    }

    stdout.flush().context("Failed to flush stdout")
}
