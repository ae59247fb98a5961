//! Read-only contract between the LCD core and the memory collaborator.
//!
//! The LCD core never owns tile-pattern memory, the tile map, OAM or
//! the control registers; it only reads them through this trait. The
//! instruction engine and the register store sit behind it, which
//! keeps the renderer testable against a plain in-memory mock.
//!
//! Writes to the tile-pattern/attribute region are signalled out of
//! band: the owner of the memory calls [`crate::Lcd::invalidate_tiles`]
//! after any such write.

/// Number of entries in the sprite attribute table.
pub const OAM_SPRITES: usize = 40;

/// One sprite attribute entry, as stored in the attribute table.
///
/// Screen position is `(x - 8, y - 16)`; the offsets let sprites be
/// partially clipped at the screen edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteEntry {
    pub y: u8,
    pub x: u8,
    pub tile: u8,
    pub attr: u8,
}

// Attribute bits
const ATTR_BG_PRIORITY: u8 = 0x80;
const ATTR_FLIP_Y: u8 = 0x40;
const ATTR_FLIP_X: u8 = 0x20;
const ATTR_PALETTE: u8 = 0x10;

impl SpriteEntry {
    /// Build an entry from its four raw attribute-table bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            y: bytes[0],
            x: bytes[1],
            tile: bytes[2],
            attr: bytes[3],
        }
    }

    /// Topmost screen line this sprite touches (may be negative when
    /// the sprite is clipped at the top edge).
    pub fn screen_top(&self) -> i16 {
        self.y as i16 - 16
    }

    /// Leftmost screen column this sprite touches (may be negative
    /// when the sprite is clipped at the left edge).
    pub fn screen_left(&self) -> i16 {
        self.x as i16 - 8
    }

    /// Background wins over this sprite wherever the background's raw
    /// intensity is non-zero.
    pub fn behind_background(&self) -> bool {
        self.attr & ATTR_BG_PRIORITY != 0
    }

    pub fn flip_y(&self) -> bool {
        self.attr & ATTR_FLIP_Y != 0
    }

    pub fn flip_x(&self) -> bool {
        self.attr & ATTR_FLIP_X != 0
    }

    /// Selects the second sprite palette register when set.
    pub fn uses_palette_1(&self) -> bool {
        self.attr & ATTR_PALETTE != 0
    }
}

/// Read accessors the LCD core needs from the memory collaborator.
///
/// All methods are total: coordinates are pre-wrapped by the caller,
/// sprite indices are bounded by [`OAM_SPRITES`], and every register
/// byte value is valid.
pub trait VideoMemory {
    /// Background tile index at a cell of the 32x32 tile grid.
    fn tile_at(&self, grid_x: u8, grid_y: u8) -> u8;

    /// The two bit-plane bytes of one background tile row.
    fn bg_tile_row(&self, tile: u8, row: u8) -> (u8, u8);

    /// The two bit-plane bytes of one sprite tile row.
    fn obj_tile_row(&self, tile: u8, row: u8) -> (u8, u8);

    /// Sprite attribute entry `n`, `n` in `[0, OAM_SPRITES)`.
    fn sprite(&self, n: usize) -> SpriteEntry;

    /// Whether sprite display is globally enabled.
    fn sprites_enabled(&self) -> bool;

    fn scroll_x(&self) -> u8;
    fn scroll_y(&self) -> u8;

    fn bg_palette(&self) -> u8;
    fn obj_palette_0(&self) -> u8;
    fn obj_palette_1(&self) -> u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_entry_from_bytes() {
        let entry = SpriteEntry::from_bytes([16, 8, 0x42, 0xB0]);
        assert_eq!(entry.y, 16);
        assert_eq!(entry.x, 8);
        assert_eq!(entry.tile, 0x42);
        assert_eq!(entry.attr, 0xB0);
    }

    #[test]
    fn test_sprite_entry_screen_position() {
        let entry = SpriteEntry::from_bytes([16, 8, 0, 0]);
        assert_eq!(entry.screen_top(), 0);
        assert_eq!(entry.screen_left(), 0);

        // Clipped at the top-left corner
        let clipped = SpriteEntry::from_bytes([10, 4, 0, 0]);
        assert_eq!(clipped.screen_top(), -6);
        assert_eq!(clipped.screen_left(), -4);

        // y=0/x=0 conventionally hides a sprite entirely
        let hidden = SpriteEntry::from_bytes([0, 0, 0, 0]);
        assert_eq!(hidden.screen_top(), -16);
        assert_eq!(hidden.screen_left(), -8);
    }

    #[test]
    fn test_sprite_entry_attribute_bits() {
        let entry = SpriteEntry::from_bytes([0, 0, 0, 0b1111_0000]);
        assert!(entry.behind_background());
        assert!(entry.flip_y());
        assert!(entry.flip_x());
        assert!(entry.uses_palette_1());

        let plain = SpriteEntry::from_bytes([0, 0, 0, 0b0000_1111]);
        assert!(!plain.behind_background());
        assert!(!plain.flip_y());
        assert!(!plain.flip_x());
        assert!(!plain.uses_palette_1());
    }
}
