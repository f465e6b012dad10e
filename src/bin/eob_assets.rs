use anyhow::{ensure, Result};
use clap::Parser;
use eob_tools::{
    commands::{extract::extract_archive, inspect::inspect_header, palette::show_palette},
    VERBOSE,
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::path::{Path, PathBuf};

/// A simple CLI tool that unpacks PAK asset archives, reports the headers of
/// CMP compressed images and dumps VGA palettes. Each input is dispatched on
/// its file extension.
#[derive(Parser, Debug)]
#[command(name = "eob_assets")]
#[clap(version)]
struct Cli {
    /// Asset files to process (.pak, .cmp or .pal; anything else is skipped)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Verbose printing of per-entry progress
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn process_file(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        Some("pak") => {
            eprintln!("Extracting archive: {}", path.display());
            extract_archive(path)
        }
        Some("cmp") => inspect_header(path),
        Some("pal") => show_palette(path),
        _ => {
            eprintln!("Skipping {}: not a .pak, .cmp or .pal file", path.display());
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    VERBOSE.set(cli.verbose).unwrap();

    // Every input file is independent of the others, so the batch can be
    // processed in parallel. Failures are reported per file.
    let failures = cli
        .files
        .par_iter()
        .filter(|path| match process_file(path) {
            Ok(()) => false,
            Err(e) => {
                eprintln!("Failed to process {}: {:?}", path.display(), e);
                true
            }
        })
        .count();

    ensure!(failures == 0, "{failures} input file(s) failed");
    Ok(())
}
