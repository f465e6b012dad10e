use super::types::Rgb;
use crate::file_parsers::FormatError;

// 6-bit DAC value to the full 8-bit range
fn scale_6bit(v: u8) -> u8 {
    (u16::from(v & 0x3f) * 255 / 63) as u8
}

/// Decode a VGA palette: consecutive 3-byte R, G, B triplets, one per slot.
///
/// Only the low 6 bits of each byte are significant (the VGA DAC range);
/// channels are scaled up to 8 bits. A trailing partial triplet means the
/// file was cut short.
pub fn parse_palette(bytes: &[u8]) -> Result<Vec<Rgb>, FormatError> {
    let triplets = bytes.chunks_exact(3);
    if !triplets.remainder().is_empty() {
        return Err(FormatError::Truncated {
            offset: (bytes.len() - bytes.len() % 3) as u64,
            needed: "3-byte palette triplet",
        });
    }

    Ok(triplets
        .map(|triplet| Rgb {
            r: scale_6bit(triplet[0]),
            g: scale_6bit(triplet[1]),
            b: scale_6bit(triplet[2]),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_triplets() {
        let bytes = [0x3f, 0x00, 0x00, 0x00, 0x20, 0x3f];

        let palette = parse_palette(&bytes).unwrap();
        assert_eq!(
            palette,
            vec![
                Rgb { r: 255, g: 0, b: 0 },
                Rgb {
                    r: 0,
                    g: 129,
                    b: 255,
                },
            ]
        );
    }

    #[test]
    fn test_high_bits_ignored() {
        // Only the DAC's low 6 bits count: 0xff and 0x3f are the same value.
        let palette = parse_palette(&[0xff, 0x7f, 0x3f]).unwrap();
        assert_eq!(
            palette,
            vec![Rgb {
                r: 255,
                g: 255,
                b: 255,
            }]
        );
    }

    #[test]
    fn test_full_vga_palette() {
        let palette = parse_palette(&[0u8; 768]).unwrap();
        assert_eq!(palette.len(), 256);
        assert!(palette.iter().all(|slot| *slot == Rgb { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn test_partial_triplet() {
        let err = parse_palette(&[0x3f, 0x00, 0x00, 0x15]).unwrap_err();
        assert_eq!(
            err,
            FormatError::Truncated {
                offset: 3,
                needed: "3-byte palette triplet",
            }
        );
    }
}
