//! Reusable building blocks for tile-based monochrome video hardware.
//!
//! The LCD core is built from two pure primitives that never touch
//! memory or registers themselves: the 2bpp tile-row decoder and the
//! palette-byte resolver. Both are total functions over their byte
//! inputs, which keeps the rendering pipeline free of error handling.

pub mod palette;
pub mod tile;

pub use palette::{decode_palette, SHADES, TRANSPARENT};
pub use tile::decode_row;
