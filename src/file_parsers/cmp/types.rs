/// The fixed 10-byte header of a CMP compressed-image container.
///
/// Only the header is decoded; the compressed payload that follows it is
/// left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmpHeader {
    pub file_size: u16,
    pub compression_type: u16,
    pub uncompressed_size: u32,
    pub palette_size: u16,
}
