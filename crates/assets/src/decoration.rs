use std::collections::HashMap;

use serde::Deserialize;

use crate::TextureId;

/// Pixel size of one sprite-sheet tile.
const TILE_PIXELS: f32 = 16.0;
/// Sheet width in pixels.
const SHEET_WIDTH: f32 = 256.0;
/// Sheet height in pixels (two banks of 16 rows).
const SHEET_HEIGHT: f32 = 512.0;

/// Size and sprite rectangle of a free-standing decoration.
///
/// `width`/`height` are in block units; the `tex_*` fields are offsets and
/// extents in normalized sheet coordinates, relative to the tile origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationStats {
    /// Footprint width in blocks.
    pub width: f32,
    /// Height in blocks.
    pub height: f32,
    /// Left edge of the opaque pixels inside the tile.
    pub tex_left: f32,
    /// Top edge of the opaque pixels inside the tile.
    pub tex_top: f32,
    /// Width of the opaque pixels.
    pub tex_width: f32,
    /// Height of the opaque pixels.
    pub tex_height: f32,
}

impl DecorationStats {
    /// Derive stats from the opaque pixel rectangle of a 16x16 tile.
    pub fn from_pixels(x: u8, y: u8, width: u8, height: u8) -> Self {
        Self {
            width: f32::from(width) / TILE_PIXELS,
            height: f32::from(height) / TILE_PIXELS,
            tex_left: f32::from(x) / SHEET_WIDTH,
            tex_top: f32::from(y) / SHEET_HEIGHT,
            tex_width: f32::from(width) / SHEET_WIDTH,
            tex_height: f32::from(height) / SHEET_HEIGHT,
        }
    }
}

/// One entry of `decorations.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct DecorationDefinition {
    /// Tile index in the normal bank.
    pub texture: TextureId,
    /// Left pixel column of the opaque area.
    pub x: u8,
    /// Top pixel row of the opaque area.
    pub y: u8,
    /// Opaque width in pixels.
    pub width: u8,
    /// Opaque height in pixels.
    pub height: u8,
}

/// Decoration stats keyed by texture id modulo 256, so normal and
/// highlighted banks share entries.
#[derive(Debug, Clone, Default)]
pub struct DecorationTable {
    entries: HashMap<TextureId, DecorationStats>,
}

impl DecorationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from parsed definitions.
    pub fn from_definitions(defs: impl IntoIterator<Item = DecorationDefinition>) -> Self {
        let mut table = Self::new();
        for def in defs {
            table.insert(
                def.texture,
                DecorationStats::from_pixels(def.x, def.y, def.width, def.height),
            );
        }
        table
    }

    /// Register stats for a texture.
    pub fn insert(&mut self, texture: TextureId, stats: DecorationStats) {
        self.entries.insert(texture % 256, stats);
    }

    /// Stats for a texture in either bank.
    pub fn get(&self, texture: TextureId) -> Option<&DecorationStats> {
        self.entries.get(&(texture % 256))
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
