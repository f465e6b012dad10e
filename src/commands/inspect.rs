use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::file_parsers::cmp::parse_header;

/// Print a one-line report of a CMP file's header fields.
///
/// The compressed payload is only described by the header, never read.
pub fn inspect_header(path: &Path) -> Result<()> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file {}", path.display()))?;
    let header = parse_header(&bytes).context("Failed to parse CMP header")?;

    let name = path.display().to_string();
    println!(
        "Name : {name:32} | File size : {:8} | Compression type : {} | Uncompressed size : {} | Palette size : {}",
        header.file_size, header.compression_type, header.uncompressed_size, header.palette_size
    );

    Ok(())
}
