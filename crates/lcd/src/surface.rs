//! Pixel surfaces owned by the compositor.
//!
//! The LCD core writes into two independent 160x144 surfaces, one for
//! the background and one for sprites, and hands both to the display
//! sink untouched. The background surface keeps a parallel plane of
//! raw (pre-palette) intensities: sprite BG-priority resolution is
//! defined on raw intensity 0 vs non-zero, so the shade alone is not
//! enough to decide it.

use dmg_core::renderer::Renderer;
use dmg_core::types::Frame;

/// One pixel surface plus its raw-intensity plane.
///
/// Writes are unconditional overwrites; all clipping happens in the
/// line renderers. A write outside the surface extents is a
/// programming error, not a runtime condition.
#[derive(Debug, Clone)]
pub struct Surface {
    frame: Frame,
    /// Raw intensity (0..=3) per pixel, parallel to `frame.pixels`.
    levels: Vec<u8>,
    name: &'static str,
}

impl Surface {
    pub fn new(width: u32, height: u32, name: &'static str) -> Self {
        Self {
            frame: Frame::new(width, height),
            levels: vec![0; (width * height) as usize],
            name,
        }
    }

    pub fn width(&self) -> u32 {
        self.frame.width
    }

    pub fn height(&self) -> u32 {
        self.frame.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.frame.width && y < self.frame.height,
            "pixel ({}, {}) outside {}x{} surface",
            x,
            y,
            self.frame.width,
            self.frame.height
        );
        (y * self.frame.width + x) as usize
    }

    /// Overwrite one pixel with a shade and its raw intensity.
    #[inline]
    pub fn write_pixel(&mut self, x: u32, y: u32, color: u32, level: u8) {
        let idx = self.index(x, y);
        self.frame.pixels[idx] = color;
        self.levels[idx] = level;
    }

    /// Read one pixel's ARGB value.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.frame.pixels[self.index(x, y)]
    }

    /// Read one pixel's raw (pre-palette) intensity.
    #[inline]
    pub fn level(&self, x: u32, y: u32) -> u8 {
        self.levels[self.index(x, y)]
    }

    /// Reset every pixel to the all-zero (transparent) value.
    pub fn clear_all(&mut self) {
        self.frame.pixels.fill(0);
        self.levels.fill(0);
    }

    /// Reset one row to the all-zero (transparent) value.
    pub fn clear_row(&mut self, y: u32) {
        let start = self.index(0, y);
        let end = start + self.frame.width as usize;
        self.frame.pixels[start..end].fill(0);
        self.levels[start..end].fill(0);
    }

    pub(crate) fn pixels(&self) -> &[u32] {
        &self.frame.pixels
    }

    pub(crate) fn levels(&self) -> &[u8] {
        &self.levels
    }

    pub(crate) fn restore(&mut self, pixels: Vec<u32>, levels: Vec<u8>) {
        self.frame.pixels = pixels;
        self.levels = levels;
    }
}

impl Renderer for Surface {
    fn get_frame(&self) -> &Frame {
        &self.frame
    }

    fn clear(&mut self, color: u32) {
        self.frame.pixels.fill(color);
        // A uniform fill carries no tile data behind it
        self.levels.fill(0);
    }

    fn reset(&mut self) {
        self.clear_all();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.frame = Frame::new(width, height);
        self.levels = vec![0; (width * height) as usize];
    }

    fn name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_creation() {
        let surface = Surface::new(160, 144, "Background Surface");
        assert_eq!(surface.width(), 160);
        assert_eq!(surface.height(), 144);
        assert_eq!(surface.name(), "Background Surface");
        assert!(!surface.is_hardware_accelerated());
        assert_eq!(surface.pixel(0, 0), 0);
        assert_eq!(surface.level(0, 0), 0);
    }

    #[test]
    fn test_surface_write_read() {
        let mut surface = Surface::new(160, 144, "Background Surface");

        surface.write_pixel(0, 0, 0xFF000000, 3);
        surface.write_pixel(159, 143, 0xFFAAAAAA, 1);

        assert_eq!(surface.pixel(0, 0), 0xFF000000);
        assert_eq!(surface.level(0, 0), 3);
        assert_eq!(surface.pixel(159, 143), 0xFFAAAAAA);
        assert_eq!(surface.level(159, 143), 1);
        // Neighbors untouched
        assert_eq!(surface.pixel(1, 0), 0);
        assert_eq!(surface.level(1, 0), 0);
    }

    #[test]
    fn test_surface_clear_all() {
        let mut surface = Surface::new(160, 144, "Sprite Surface");
        surface.write_pixel(10, 10, 0xFF555555, 2);

        surface.clear_all();

        assert_eq!(surface.pixel(10, 10), 0);
        assert_eq!(surface.level(10, 10), 0);
    }

    #[test]
    fn test_surface_clear_row() {
        let mut surface = Surface::new(160, 144, "Sprite Surface");
        surface.write_pixel(5, 7, 0xFF000000, 3);
        surface.write_pixel(5, 8, 0xFF000000, 3);

        surface.clear_row(7);

        assert_eq!(surface.pixel(5, 7), 0);
        assert_eq!(surface.level(5, 7), 0);
        // Other rows keep their pixels
        assert_eq!(surface.pixel(5, 8), 0xFF000000);
        assert_eq!(surface.level(5, 8), 3);
    }

    #[test]
    fn test_surface_renderer_clear_and_reset() {
        let mut surface = Surface::new(160, 144, "Background Surface");
        surface.clear(0xFFFFFFFF);
        assert!(surface.get_frame().pixels.iter().all(|&p| p == 0xFFFFFFFF));

        surface.reset();
        assert!(surface.get_frame().pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_surface_resize() {
        let mut surface = Surface::new(160, 144, "Background Surface");
        surface.resize(320, 288);
        assert_eq!(surface.get_frame().width, 320);
        assert_eq!(surface.get_frame().height, 288);
        assert_eq!(surface.get_frame().pixels.len(), 320 * 288);
        assert_eq!(surface.level(319, 287), 0);
    }
}
