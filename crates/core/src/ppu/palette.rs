//! Monochrome palette resolution.
//!
//! A palette register packs four 2-bit shade assignments, one per raw
//! intensity level, least-significant pair first. Decoding turns a
//! register byte into a lookup table from raw intensity to one of the
//! four display shades.

/// The four display shades, ordered lightest to darkest, as ARGB8888.
///
/// Both the background and the sprite surfaces draw from this table;
/// sprite transparency is expressed as [`TRANSPARENT`], never as a
/// shade.
pub const SHADES: [u32; 4] = [
    0xFFFFFFFF, // White
    0xFFAAAAAA, // Light gray
    0xFF555555, // Dark gray
    0xFF000000, // Black
];

/// The all-zero pixel marking "no sprite pixel here".
pub const TRANSPARENT: u32 = 0x00000000;

/// Decode a palette register byte into a raw-intensity -> shade table.
///
/// Entry `i` is bits `(2i, 2i+1)` of the byte. Any byte value is valid;
/// the identity palette is `0b1110_0100`.
#[inline]
pub fn decode_palette(byte: u8) -> [u8; 4] {
    [
        byte & 0x03,
        (byte >> 2) & 0x03,
        (byte >> 4) & 0x03,
        (byte >> 6) & 0x03,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_palette_identity() {
        assert_eq!(decode_palette(0b1110_0100), [0, 1, 2, 3]);
    }

    #[test]
    fn test_decode_palette_extremes() {
        assert_eq!(decode_palette(0x00), [0, 0, 0, 0]);
        assert_eq!(decode_palette(0xFF), [3, 3, 3, 3]);
    }

    #[test]
    fn test_decode_palette_single_fields() {
        assert_eq!(decode_palette(0b0000_0100), [0, 1, 0, 0]);
        assert_eq!(decode_palette(0b0000_1000), [0, 2, 0, 0]);
        assert_eq!(decode_palette(0b0000_1100), [0, 3, 0, 0]);
        assert_eq!(decode_palette(0b1100_0000), [0, 0, 0, 3]);
    }

    #[test]
    fn test_shades_are_opaque_and_ordered() {
        for shade in SHADES {
            assert_eq!(shade & 0xFF00_0000, 0xFF00_0000);
            assert_ne!(shade, TRANSPARENT);
        }
        // Lightest to darkest in the green channel
        for pair in SHADES.windows(2) {
            assert!(((pair[0] >> 8) & 0xFF) > ((pair[1] >> 8) & 0xFF));
        }
    }
}
