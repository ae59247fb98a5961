//! Scanline rendering for the 160x144 monochrome LCD.
//!
//! The timing driver calls line rendering once per simulated raster
//! line, in increasing order. Each line pass reads the collaborator's
//! registers fresh, resolves tiles through the row cache, and writes
//! through the two compositor surfaces. Background for a line must be
//! rendered before its sprite pass: sprite BG-priority resolution
//! reads the background's raw intensities for that same line.

use dmg_core::logging::{log, LogCategory, LogLevel};
use dmg_core::ppu::{decode_palette, SHADES, TRANSPARENT};
use serde::Deserialize;

use crate::cache::{TileRowCache, TileSource};
use crate::memory::{VideoMemory, OAM_SPRITES};
use crate::scroll::wrap;
use crate::surface::Surface;
use crate::LcdError;

/// Wire form of one serialized surface inside a save state.
#[derive(Debug, Deserialize)]
struct SurfaceState {
    pixels: Vec<u32>,
    levels: Vec<u8>,
}

/// Visible display width in pixels.
pub const WIDTH: u32 = 160;
/// Visible display height in pixels.
pub const HEIGHT: u32 = 144;

/// The LCD rendering core.
///
/// Owns the background and sprite surfaces and the tile-row cache.
/// Tile data, the attribute table and the control registers stay with
/// the memory collaborator, passed by shared reference per call.
pub struct Lcd {
    bg: Surface,
    obj: Surface,
    cache: TileRowCache,
}

impl Default for Lcd {
    fn default() -> Self {
        Self::new()
    }
}

impl Lcd {
    pub fn new() -> Self {
        Self {
            bg: Surface::new(WIDTH, HEIGHT, "Background Surface"),
            obj: Surface::new(WIDTH, HEIGHT, "Sprite Surface"),
            cache: TileRowCache::new(),
        }
    }

    /// The background surface, for display hand-off.
    pub fn bg(&self) -> &Surface {
        &self.bg
    }

    /// The sprite surface, for display hand-off.
    pub fn obj(&self) -> &Surface {
        &self.obj
    }

    /// Drop all cached tile rows.
    ///
    /// The memory owner calls this after any write to the
    /// tile-pattern/attribute region; the next row lookup recomputes
    /// from the new bytes.
    pub fn invalidate_tiles(&mut self) {
        self.cache.invalidate();
    }

    /// Reset both surfaces to all-zero pixels.
    ///
    /// Run before a full redraw so stale sprite pixels do not persist.
    pub fn clear_frame(&mut self) {
        log(LogCategory::Lcd, LogLevel::Trace, || {
            "lcd: clearing both surfaces".to_string()
        });
        self.bg.clear_all();
        self.obj.clear_all();
    }

    /// Render one background line into the background surface.
    ///
    /// Lines outside `[0, 144)` are no-ops; the raster driver sweeps
    /// through the vertical blanking lines 144..=153 as well.
    pub fn draw_bg_line<M: VideoMemory>(&mut self, mem: &M, line: u8) {
        if line as u32 >= HEIGHT {
            return;
        }

        let y = wrap(mem.scroll_y(), line);
        let scroll_x = mem.scroll_x();
        let palette = decode_palette(mem.bg_palette());

        for screen_x in 0..WIDTH as u8 {
            let x = wrap(scroll_x, screen_x);
            let tile = mem.tile_at(x.tile, y.tile);
            let row = self
                .cache
                .get_row(tile, y.fine, TileSource::Background, || {
                    mem.bg_tile_row(tile, y.fine)
                });

            let level = row[x.fine as usize];
            let shade = SHADES[palette[level as usize] as usize];
            self.bg.write_pixel(screen_x as u32, line as u32, shade, level);
        }
    }

    /// Render one sprite line into the sprite surface.
    ///
    /// The row is cleared first so a re-render never keeps stale
    /// pixels, then the 40 attribute entries are walked in table
    /// order. Among overlapping sprites the first-drawn opaque pixel
    /// wins: later entries skip pixels already claimed this pass.
    pub fn draw_obj_line<M: VideoMemory>(&mut self, mem: &M, line: u8) {
        if line as u32 >= HEIGHT {
            return;
        }

        self.obj.clear_row(line as u32);
        if !mem.sprites_enabled() {
            return;
        }

        let palettes = [
            decode_palette(mem.obj_palette_0()),
            decode_palette(mem.obj_palette_1()),
        ];
        let screen_y = line as i16;

        for n in 0..OAM_SPRITES {
            let sprite = mem.sprite(n);
            let top = sprite.screen_top();
            if screen_y < top || screen_y >= top + 8 {
                continue;
            }

            let mut row_in_tile = (screen_y - top) as u8;
            if sprite.flip_y() {
                row_in_tile = 7 - row_in_tile;
            }

            let mut row = self
                .cache
                .get_row(sprite.tile, row_in_tile, TileSource::Sprite, || {
                    mem.obj_tile_row(sprite.tile, row_in_tile)
                });
            if sprite.flip_x() {
                row.reverse();
            }

            let palette = &palettes[sprite.uses_palette_1() as usize];
            let left = sprite.screen_left();

            for (c, &level) in row.iter().enumerate() {
                let x = left + c as i16;
                if !(0..WIDTH as i16).contains(&x) {
                    continue;
                }
                // Intensity 0 is transparent regardless of palette
                if level == 0 {
                    continue;
                }
                let x = x as u32;
                if self.obj.pixel(x, line as u32) != TRANSPARENT {
                    continue;
                }
                // BG-priority: background wins wherever its raw
                // intensity is non-zero
                if sprite.behind_background() && self.bg.level(x, line as u32) != 0 {
                    continue;
                }

                let shade = SHADES[palette[level as usize] as usize];
                self.obj.write_pixel(x, line as u32, shade, level);
            }
        }
    }

    /// Render one full line: background first, then sprites.
    pub fn draw_line<M: VideoMemory>(&mut self, mem: &M, line: u8) {
        self.draw_bg_line(mem, line);
        self.draw_obj_line(mem, line);
    }

    /// Redraw the whole frame: clear both surfaces, then render all
    /// 144 visible lines.
    pub fn draw_frame<M: VideoMemory>(&mut self, mem: &M) {
        self.clear_frame();
        for line in 0..HEIGHT as u8 {
            self.draw_line(mem, line);
        }
    }

    /// Serialize both surfaces for save states.
    pub fn save_state(&self) -> serde_json::Value {
        serde_json::json!({
            "component": "lcd",
            "version": 1,
            "width": WIDTH,
            "height": HEIGHT,
            "background": {
                "pixels": self.bg.pixels(),
                "levels": self.bg.levels(),
            },
            "sprites": {
                "pixels": self.obj.pixels(),
                "levels": self.obj.levels(),
            },
        })
    }

    /// Restore both surfaces from a save state.
    ///
    /// Fails without touching the surfaces when the snapshot does not
    /// describe a 160x144 display.
    pub fn load_state(&mut self, v: &serde_json::Value) -> Result<(), LcdError> {
        let bg = Self::surface_state(v, "background")?;
        let obj = Self::surface_state(v, "sprites")?;

        self.bg.restore(bg.pixels, bg.levels);
        self.obj.restore(obj.pixels, obj.levels);
        Ok(())
    }

    fn surface_state(v: &serde_json::Value, key: &'static str) -> Result<SurfaceState, LcdError> {
        let entry = v.get(key).ok_or(LcdError::IncompatibleState(key))?;
        let state: SurfaceState = serde_json::from_value(entry.clone())?;

        let expected = (WIDTH * HEIGHT) as usize;
        if state.pixels.len() != expected || state.levels.len() != expected {
            return Err(LcdError::IncompatibleState(key));
        }
        Ok(state)
    }
}
