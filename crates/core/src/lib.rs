//! Core video primitives shared by the LCD rendering core.

pub mod logging;
pub mod ppu;
pub mod renderer;
pub mod types {
    use serde::{Deserialize, Serialize};

    /// A rectangular ARGB8888 pixel buffer in row-major order.
    ///
    /// A pixel value of 0 (fully transparent black) is reserved for
    /// "nothing drawn here"; opaque pixels always carry 0xFF in the
    /// alpha byte.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Frame {
        pub width: u32,
        pub height: u32,
        pub pixels: Vec<u32>,
    }

    impl Frame {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![0; (width * height) as usize],
            }
        }
    }
}
