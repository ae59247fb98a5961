//! 2bpp planar tile-row decoding.
//!
//! Pattern memory stores each 8x8 tile as 16 bytes with interleaved
//! bitplanes: two bytes per row, the low plane first. Bit 7 of each
//! plane byte is the leftmost pixel, bit 0 the rightmost, and the two
//! plane bits combine into a 2-bit intensity:
//!
//! ```text
//! low  plane: 0 1 0 1 0 1 0 1
//! high plane: 0 0 1 1 0 0 1 1
//! intensity:  0 1 2 3 0 1 2 3
//! ```

/// Decode one tile row (two bit-plane bytes) into 8 raw intensities.
///
/// Every byte pair is valid; each output value is in 0..=3. The same
/// decoder serves background and sprite tiles, only the accessor that
/// supplied the bytes differs.
#[inline]
pub fn decode_row(low: u8, high: u8) -> [u8; 8] {
    let mut row = [0u8; 8];
    for (x, level) in row.iter_mut().enumerate() {
        let bit = 7 - x;
        let lo_bit = (low >> bit) & 1;
        let hi_bit = (high >> bit) & 1;
        *level = (hi_bit << 1) | lo_bit;
    }
    row
}
