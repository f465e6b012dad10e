use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};

use crate::{
    file_parsers::pak::{parse_directory, resolve_extents},
    VERBOSE,
};

/// Destination directory for an archive's entries: `<file-name>_pieces`,
/// next to the archive itself.
fn pieces_dir(archive: &Path) -> PathBuf {
    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    archive.with_file_name(format!("{name}_pieces"))
}

/// Extract every entry of a PAK archive to its own file on disk.
///
/// Directory-level failures (truncated or malformed directory, out-of-order
/// offsets) abort the archive. Failures on a single entry are reported and
/// skipped so the remaining entries still get written, but the archive as a
/// whole is then reported as failed.
pub fn extract_archive(archive: &Path) -> Result<()> {
    let bytes = fs::read(archive)
        .with_context(|| format!("Failed to read archive {}", archive.display()))?;

    let entries = parse_directory(&bytes).context("Failed to parse archive directory")?;
    let extents =
        resolve_extents(&entries, bytes.len() as u64).context("Failed to resolve entry extents")?;

    let output_folder = pieces_dir(archive);
    fs::create_dir_all(&output_folder).context("Failed to create output folder")?;

    let mut skipped = 0usize;
    for extent in &extents {
        let payload = match bytes.get(extent.start as usize..extent.end() as usize) {
            Some(payload) => payload,
            None => {
                eprintln!(
                    "Failed to extract entry {}: payload ends past end of file",
                    extent.name
                );
                skipped += 1;
                continue;
            }
        };

        // Rooted names would escape the pieces directory if joined as-is;
        // they are kept relative to it like every other name.
        let out_filename = output_folder.join(extent.name.trim_start_matches('/'));
        let written = fs::create_dir_all(out_filename.parent().unwrap())
            .context("Failed to create folder")
            .and_then(|()| fs::write(&out_filename, payload).context("Failed to write file"));
        match written {
            Ok(()) => {
                if VERBOSE.get().copied().unwrap_or(false) {
                    eprintln!("Extracted entry: {}", extent.name);
                }
            }
            Err(e) => {
                eprintln!("Failed to extract entry {}: {:?}", extent.name, e);
                skipped += 1;
            }
        }
    }

    ensure!(
        skipped == 0,
        "{skipped} of {} entries could not be extracted",
        extents.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Directory block followed by payloads, offsets pointing at each one.
    fn archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let dir_len: usize = entries.iter().map(|(name, _)| 4 + name.len() + 1).sum();

        let mut out = Vec::new();
        let mut payload_pos = dir_len;
        for (name, payload) in entries {
            out.extend_from_slice(&(payload_pos as u32).to_le_bytes());
            out.extend_from_slice(name.as_bytes());
            out.push(0);
            payload_pos += payload.len();
        }
        for (_, payload) in entries {
            out.extend_from_slice(payload);
        }
        out
    }

    #[test]
    fn test_extracts_one_file_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("level1.pak");
        fs::write(
            &archive_path,
            archive(&[
                ("intro.cmp", b"squashed pixels"),
                ("maps/floor1.maz", b"walls"),
                ("sound.adl", b""),
            ]),
        )
        .unwrap();

        extract_archive(&archive_path).unwrap();

        let pieces = dir.path().join("level1.pak_pieces");
        assert_eq!(
            fs::read(pieces.join("intro.cmp")).unwrap(),
            b"squashed pixels"
        );
        assert_eq!(fs::read(pieces.join("maps/floor1.maz")).unwrap(), b"walls");
        assert_eq!(fs::read(pieces.join("sound.adl")).unwrap(), b"");
    }

    #[test]
    fn test_rooted_entry_name_stays_in_pieces_dir() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("evil.pak");
        let escape_target = dir.path().join("escaped.bin");
        // An absolute entry name must not be taken as an output path itself.
        let rooted = escape_target.display().to_string();
        fs::write(
            &archive_path,
            archive(&[(rooted.as_str(), b"should stay inside")]),
        )
        .unwrap();

        extract_archive(&archive_path).unwrap();

        assert!(!escape_target.exists());
        let inside = dir
            .path()
            .join("evil.pak_pieces")
            .join(rooted.trim_start_matches('/'));
        assert_eq!(fs::read(inside).unwrap(), b"should stay inside");
    }

    #[test]
    fn test_truncated_directory_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("broken.pak");
        // Offset field followed by a name with no terminator before EOF.
        let mut bytes = 100u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"unfinished name");
        fs::write(&archive_path, bytes).unwrap();

        assert!(extract_archive(&archive_path).is_err());
        assert!(!dir.path().join("broken.pak_pieces").exists());
    }

    #[test]
    fn test_bad_entry_does_not_abort_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("clash.pak");
        // "maps" cannot be written as a file once "maps/floor1.maz" has made
        // it a directory; the remaining entries must still be extracted.
        fs::write(
            &archive_path,
            archive(&[
                ("maps/floor1.maz", b"walls"),
                ("maps", b"clobbered"),
                ("font.fnt", b"glyphs"),
            ]),
        )
        .unwrap();

        assert!(extract_archive(&archive_path).is_err());

        let pieces = dir.path().join("clash.pak_pieces");
        assert_eq!(fs::read(pieces.join("maps/floor1.maz")).unwrap(), b"walls");
        assert_eq!(fs::read(pieces.join("font.fnt")).unwrap(), b"glyphs");
    }
}
