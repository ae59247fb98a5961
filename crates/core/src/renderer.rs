//! Common renderer trait for software pixel surfaces.
//!
//! Every surface the video core produces follows the same pattern:
//!
//! ```text
//! Video core (state) -> Renderer trait -> software implementation
//! ```
//!
//! The trait keeps the framebuffer behind a uniform interface so a
//! display sink (window, headless capture, test harness) never needs
//! to know which surface it is handed.

use crate::types::Frame;

/// Uniform interface over a rendered pixel surface.
pub trait Renderer: Send {
    /// Get the current framebuffer (read-only)
    fn get_frame(&self) -> &Frame;

    /// Clear the framebuffer with a solid color
    ///
    /// # Arguments
    /// * `color` - ARGB8888 color value (0xAARRGGBB)
    fn clear(&mut self, color: u32);

    /// Reset the renderer to its initial state
    fn reset(&mut self);

    /// Get the name of this renderer (for debugging/UI)
    fn name(&self) -> &str;

    /// Check if this renderer uses hardware acceleration
    ///
    /// Always `false` for the CPU-based surfaces in this workspace.
    fn is_hardware_accelerated(&self) -> bool {
        false
    }

    /// Resize the renderer to new dimensions
    ///
    /// The renderer recreates its framebuffer and any per-pixel side
    /// buffers at the new size.
    fn resize(&mut self, width: u32, height: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRenderer {
        frame: Frame,
    }

    impl MockRenderer {
        fn new(width: u32, height: u32) -> Self {
            Self {
                frame: Frame::new(width, height),
            }
        }
    }

    impl Renderer for MockRenderer {
        fn get_frame(&self) -> &Frame {
            &self.frame
        }

        fn clear(&mut self, color: u32) {
            for pixel in &mut self.frame.pixels {
                *pixel = color;
            }
        }

        fn reset(&mut self) {
            self.clear(0);
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.frame = Frame::new(width, height);
        }

        fn name(&self) -> &str {
            "Mock Renderer"
        }
    }

    #[test]
    fn test_renderer_creation() {
        let renderer = MockRenderer::new(160, 144);
        assert_eq!(renderer.get_frame().width, 160);
        assert_eq!(renderer.get_frame().height, 144);
        assert_eq!(renderer.name(), "Mock Renderer");
        assert!(!renderer.is_hardware_accelerated());
    }

    #[test]
    fn test_renderer_clear_and_reset() {
        let mut renderer = MockRenderer::new(160, 144);
        renderer.clear(0xFFAAAAAA);
        assert!(renderer.get_frame().pixels.iter().all(|&p| p == 0xFFAAAAAA));

        renderer.reset();
        assert!(renderer.get_frame().pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_renderer_resize() {
        let mut renderer = MockRenderer::new(160, 144);
        renderer.resize(320, 288);

        let frame = renderer.get_frame();
        assert_eq!(frame.width, 320);
        assert_eq!(frame.height, 288);
        assert_eq!(frame.pixels.len(), 320 * 288);
    }
}
