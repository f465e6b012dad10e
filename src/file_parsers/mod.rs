pub mod cmp;
pub mod pak;
pub mod pal;

use thiserror::Error;

/// Structural failures shared by the binary asset formats.
///
/// These are file-scoped: one bad input never affects the rest of a batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer bytes were available than the format requires at this position.
    #[error("truncated input at byte {offset} while reading {needed}")]
    Truncated { offset: u64, needed: &'static str },

    /// A directory name field contained bytes outside the ASCII range.
    #[error("entry name at byte {offset} contains non-ASCII bytes")]
    MalformedName { offset: u64 },

    /// Consecutive directory offsets were out of order, so the computed
    /// extent would have negative length.
    #[error("entry {name:?} spans [{start}, {end}), which is not a valid extent")]
    InvalidExtent { name: String, start: u64, end: u64 },
}
