use nom::{
    number::complete::{le_u16, le_u32},
    IResult,
};

use super::types::CmpHeader;
use crate::file_parsers::FormatError;

// Parser for the fixed header layout
fn header(input: &[u8]) -> IResult<&[u8], CmpHeader> {
    let (input, file_size) = le_u16(input)?;
    let (input, compression_type) = le_u16(input)?;
    let (input, uncompressed_size) = le_u32(input)?;
    let (input, palette_size) = le_u16(input)?;

    Ok((
        input,
        CmpHeader {
            file_size,
            compression_type,
            uncompressed_size,
            palette_size,
        },
    ))
}

/// Decode the 10-byte CMP header from the front of `bytes`.
pub fn parse_header(bytes: &[u8]) -> Result<CmpHeader, FormatError> {
    match header(bytes) {
        Ok((_, parsed)) => Ok(parsed),
        Err(_) => Err(FormatError::Truncated {
            offset: bytes.len() as u64,
            needed: "10-byte CMP header",
        }),
    }
}
