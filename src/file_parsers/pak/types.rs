/// One record of the inline directory at the head of a PAK archive.
///
/// Entries are kept in file order; the order determines where each payload
/// ends, so it is never reshuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    /// Absolute byte offset of this entry's payload within the archive.
    pub offset: u32,
}

/// The byte range one entry's payload occupies within the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExtent {
    pub name: String,
    pub start: u64,
    pub length: u64,
}

impl ResolvedExtent {
    pub fn end(&self) -> u64 {
        self.start + self.length
    }
}
