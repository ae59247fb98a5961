//! Tile-row cache with coarse write invalidation.
//!
//! Decoding a tile row is cheap but happens up to 160 times per
//! scanline, and the same rows recur across lines and frames. The
//! cache memoizes decoded rows keyed by (tile, row, source table) and
//! is dropped wholesale whenever the memory collaborator reports a
//! write anywhere in the tile-pattern/attribute region. No partial
//! tracking: rewrites during active rendering are rare, and a full
//! rebuild costs little relative to a frame.

use std::collections::HashMap;

use dmg_core::logging::{log, LogCategory, LogLevel};
use dmg_core::ppu::decode_row;

/// Which pattern table a cached row was decoded from.
///
/// Background and sprite rows may come from different accessors for
/// the same tile index, so the source is part of the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileSource {
    Background,
    Sprite,
}

/// Memoized decoded tile rows.
#[derive(Debug, Default)]
pub struct TileRowCache {
    rows: HashMap<(u8, u8, TileSource), [u8; 8]>,
}

impl TileRowCache {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Fetch a decoded row, computing and storing it on a miss.
    ///
    /// `fetch` supplies the two raw bit-plane bytes and is only
    /// invoked when the key is absent.
    pub fn get_row<F>(&mut self, tile: u8, row: u8, source: TileSource, fetch: F) -> [u8; 8]
    where
        F: FnOnce() -> (u8, u8),
    {
        debug_assert!(row < 8, "tile row out of range: {}", row);
        *self.rows.entry((tile, row, source)).or_insert_with(|| {
            let (low, high) = fetch();
            decode_row(low, high)
        })
    }

    /// Drop every cached row.
    ///
    /// Called on any reported write to tile-pattern/attribute memory;
    /// subsequent lookups recompute lazily and therefore observe the
    /// new bytes.
    pub fn invalidate(&mut self) {
        if !self.rows.is_empty() {
            let dropped = self.rows.len();
            log(LogCategory::Cache, LogLevel::Debug, || {
                format!("cache: pattern memory written, dropping {} rows", dropped)
            });
        }
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
