use nom::number::complete::le_u32;

use super::types::{DirectoryEntry, ResolvedExtent};
use crate::file_parsers::FormatError;

/// Parse the directory block at the head of a PAK archive.
///
/// The directory carries no record count and no length field. It is one
/// contiguous run of `(u32 LE offset, NUL-terminated name)` records spanning
/// `[0, offset[0])`: parsing stops as soon as the next offset field would
/// start at or past the first payload. Only the first offset participates in
/// that check; later offsets are validated by [`resolve_extents`] instead.
pub fn parse_directory(bytes: &[u8]) -> Result<Vec<DirectoryEntry>, FormatError> {
    let mut entries = Vec::new();
    let mut rest = bytes;

    loop {
        let pos = (bytes.len() - rest.len()) as u64;
        if let Some(first) = entries.first().map(|e: &DirectoryEntry| e.offset) {
            if pos + 4 >= u64::from(first) {
                break;
            }
        }

        let (after_offset, offset) =
            le_u32::<_, nom::error::Error<&[u8]>>(rest).map_err(|_| FormatError::Truncated {
                offset: pos,
                needed: "4-byte entry offset",
            })?;

        // A first offset of 4 or less leaves no room in [0, offset) for even
        // one complete record: the archive has an empty directory.
        if entries.is_empty() && pos + 4 >= u64::from(offset) {
            return Ok(entries);
        }

        let name_pos = pos + 4;
        let raw_name = match after_offset.iter().position(|&b| b == 0) {
            Some(nul) => &after_offset[..nul],
            // Ran off the end of the input without seeing a terminator.
            None => {
                return Err(FormatError::Truncated {
                    offset: name_pos + after_offset.len() as u64,
                    needed: "NUL name terminator",
                })
            }
        };
        if !raw_name.is_ascii() {
            return Err(FormatError::MalformedName { offset: name_pos });
        }
        let name = String::from_utf8_lossy(raw_name).into_owned();

        entries.push(DirectoryEntry { name, offset });
        rest = &after_offset[raw_name.len() + 1..]; // step past the NUL too
    }

    Ok(entries)
}

/// Compute each entry's payload range from consecutive offsets.
///
/// Entry `i` spans `[offset[i], offset[i+1])`; the last entry spans
/// `[offset[last], file_size)`. Offsets must be non-decreasing -- an earlier
/// offset past a later one would give a negative length, which is rejected
/// rather than clamped or left to wrap.
pub fn resolve_extents(
    entries: &[DirectoryEntry],
    file_size: u64,
) -> Result<Vec<ResolvedExtent>, FormatError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let start = u64::from(entry.offset);
            let end = match entries.get(i + 1) {
                Some(next) => u64::from(next.offset),
                None => file_size,
            };
            if end < start {
                return Err(FormatError::InvalidExtent {
                    name: entry.name.clone(),
                    start,
                    end,
                });
            }
            Ok(ResolvedExtent {
                name: entry.name.clone(),
                start,
                length: end - start,
            })
        })
        .collect()
}
