//! Scroll/grid coordinate mapping.
//!
//! Background space is a 32x32 tile torus (256x256 pixels). A scroll
//! register plus a screen offset maps onto it with plain modulo-256
//! arithmetic, which is what produces the hardware's wrap-around
//! scrolling, including the discontinuity at the 256-pixel boundary.
//! The same mapping serves the X axis (SCX) and the Y axis (SCY).

/// A screen offset resolved into background space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapped {
    /// `(scroll + offset) mod 256`
    pub coord: u8,
    /// Tile-grid index, `coord / 8`, in `[0, 32)`
    pub tile: u8,
    /// Offset within the tile, `coord mod 8`
    pub fine: u8,
}

/// Map a scroll register value and a screen offset into background space.
#[inline]
pub fn wrap(scroll: u8, offset: u8) -> Wrapped {
    let coord = scroll.wrapping_add(offset);
    Wrapped {
        coord,
        tile: coord / 8,
        fine: coord % 8,
    }
}
