//! Game Boy LCD video core: scanline background and sprite rendering.
//!
//! This crate turns tile-pattern memory, the tile map, the sprite
//! attribute table and a handful of scroll/palette registers into two
//! 160x144 pixel surfaces, one scanline at a time, matching the
//! original hardware's rasterization rules. The instruction engine,
//! the memory-mapped register store and the display sink live outside
//! this crate; memory is reached only through the read-only
//! [`VideoMemory`] contract.

mod cache;
mod lcd;
mod memory;
mod scroll;
mod surface;

pub use cache::{TileRowCache, TileSource};
pub use lcd::{Lcd, HEIGHT, WIDTH};
pub use memory::{SpriteEntry, VideoMemory, OAM_SPRITES};
pub use scroll::{wrap, Wrapped};
pub use surface::Surface;

#[derive(thiserror::Error, Debug)]
pub enum LcdError {
    #[error("incompatible save state: bad '{0}' surface")]
    IncompatibleState(&'static str),
    #[error("malformed save state")]
    MalformedState(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcd_creation() {
        let lcd = Lcd::new();
        assert_eq!(lcd.bg().width(), WIDTH);
        assert_eq!(lcd.bg().height(), HEIGHT);
        assert_eq!(lcd.obj().width(), WIDTH);
        assert_eq!(lcd.obj().height(), HEIGHT);
    }

    #[test]
    fn test_error_display() {
        let err = LcdError::IncompatibleState("background");
        assert!(err.to_string().contains("background"));
    }
}
