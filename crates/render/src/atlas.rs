//! Sprite-sheet coordinate math.
//!
//! The terrain sheet is 16 tiles wide and 32 tiles tall: rows 0..16 hold the
//! normal sprites and rows 16..32 repeat them with the highlight tint.

/// One tile width in normalized U.
pub const TEX16: f32 = 1.0 / 16.0;
/// One tile height in normalized V (half a tile width).
pub const TEX32: f32 = 1.0 / 32.0;
/// Half a tile height in normalized V.
pub const TEX64: f32 = 1.0 / 64.0;
/// A quarter tile height in normalized V.
pub const TEX128: f32 = 1.0 / 128.0;
/// One sprite pixel in normalized U.
pub const TEX256: f32 = 1.0 / 256.0;
/// One sprite pixel in normalized V.
pub const TEX512: f32 = 1.0 / 512.0;

/// Tile offset of the highlighted bank.
pub const HIGHLIGHT_BANK: i32 = 256;

/// Left edge of a tile in normalized U.
#[inline]
pub fn tile_u(tile: i32) -> f32 {
    tile.rem_euclid(16) as f32 / 16.0
}

/// Top edge of a tile in normalized V.
#[inline]
pub fn tile_v(tile: i32) -> f32 {
    tile.div_euclid(16) as f32 / 32.0
}

/// Top-left corner of a tile.
#[inline]
pub fn tile_origin(tile: i32) -> [f32; 2] {
    [tile_u(tile), tile_v(tile)]
}

/// A rectangle on the sheet in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRegion {
    /// Left edge.
    pub u: f32,
    /// Top edge.
    pub v: f32,
    /// Width.
    pub du: f32,
    /// Height.
    pub dv: f32,
}

impl AtlasRegion {
    /// Region starting at `(u, v)` with the given extent.
    pub const fn new(u: f32, v: f32, du: f32, dv: f32) -> Self {
        Self { u, v, du, dv }
    }

    /// The full rectangle of a tile.
    pub fn tile(tile: i32) -> Self {
        let [u, v] = tile_origin(tile);
        Self::new(u, v, TEX16, TEX32)
    }

    /// A sub-rectangle of a tile addressed in sprite pixels.
    pub fn pixels(tile: i32, rect: PixelRect) -> Self {
        let [u, v] = tile_origin(tile);
        Self::new(
            u + TEX256 * f32::from(rect.x),
            v + TEX512 * f32::from(rect.y),
            TEX256 * f32::from(rect.width),
            TEX512 * f32::from(rect.height),
        )
    }
}

/// Sub-rectangle of a 16x16 sprite, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Width in pixels.
    pub width: u8,
    /// Height in pixels.
    pub height: u8,
    /// Left pixel column.
    pub x: u8,
    /// Top pixel row.
    pub y: u8,
}

impl PixelRect {
    /// The whole sprite.
    pub const FULL: PixelRect = PixelRect::new(16, 16, 0, 0);

    /// Rectangle of `width` x `height` pixels starting at `(x, y)`.
    pub const fn new(width: u8, height: u8, x: u8, y: u8) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_map_into_both_banks() {
        assert_eq!(tile_origin(0), [0.0, 0.0]);
        assert_eq!(tile_origin(17), [1.0 / 16.0, 1.0 / 32.0]);
        assert_eq!(tile_origin(255), [15.0 / 16.0, 15.0 / 32.0]);
        assert_eq!(tile_origin(1 + HIGHLIGHT_BANK), [1.0 / 16.0, 0.5]);
    }

    #[test]
    fn pixel_regions_stay_inside_the_tile() {
        let full = AtlasRegion::pixels(5, PixelRect::FULL);
        assert_eq!(full, AtlasRegion::tile(5));

        let slat = AtlasRegion::pixels(4, PixelRect::new(16, 3, 0, 5));
        assert_eq!(slat.u, tile_u(4));
        assert_eq!(slat.v, 5.0 * TEX512);
        assert_eq!(slat.dv, 3.0 * TEX512);
    }
}
