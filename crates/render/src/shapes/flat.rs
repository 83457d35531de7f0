//! Thin and planar shapes: wall planes, floor overlays, rails, plates, portals.

use chunkray_world::Direction;

use super::BlockContext;
use crate::atlas::TEX64;
use crate::painter::Painter;

pub(super) fn ladder(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let (t, x, y, z) = (ctx.texture, ctx.x, ctx.y, ctx.z);
    match ctx.meta {
        2 => painter.west_east(t, x, y, z + 1.0 - TEX64),
        3 => painter.west_east(t, x, y, z + TEX64),
        4 => painter.north_south(t, x + 1.0 - TEX64, y, z),
        _ => painter.north_south(t, x + TEX64, y, z),
    }
}

/// Vines cover any combination of the four walls, one bit each.
///
/// A ceiling plane is added for bare vines (no wall bits) and for wall vines
/// hanging under a solid block.
pub(super) fn vine(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let (t, x, y, z) = (ctx.texture, ctx.x, ctx.y, ctx.z);
    let data = ctx.meta;
    if data & 1 != 0 {
        painter.west_east(t, x, y, z + 1.0 - TEX64);
    }
    if data & 2 != 0 {
        painter.north_south(t, x + TEX64, y, z);
    }
    if data & 4 != 0 {
        painter.west_east(t, x, y, z + TEX64);
    }
    if data & 8 != 0 {
        painter.north_south(t, x + 1.0 - TEX64, y, z);
    }
    let on_wall = data & 0xF != 0;
    if data == 0 || (on_wall && ctx.catalog.is_solid(ctx.neighbor(Direction::Up))) {
        painter.horizontal(t, [x - 0.5, z - 0.5], [x + 0.5, z + 0.5], y + 0.45);
    }
}

/// Flat overlay just above the floor (redstone wire, repeaters).
pub(super) fn floor(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    painter.top_down(ctx.texture, ctx.x, ctx.y + TEX64, ctx.z);
}

/// Rails with curves; curved pieces use the sprite one row up.
pub(super) fn minecart_tracks(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let data = ctx.meta;
    let t = if data > 0x5 { ctx.texture - 16 } else { ctx.texture };
    let (x, y, z) = (ctx.x, ctx.y + TEX64, ctx.z);
    match data {
        0x0 | 0x8 => painter.top_down_rotated(t, x, y, z, 1),
        0x2..=0x5 => rail_slope(painter, t, ctx, data),
        0x6 => painter.top_down_rotated(t, x, y, z, 3),
        0x7 => painter.top_down_rotated(t, x, y, z, 2),
        0x9 => painter.top_down_rotated(t, x, y, z, 0),
        _ => painter.top_down(t, x, y, z),
    }
}

/// Straight rails; bit 3 marks a powered rail, lit one row down.
pub(super) fn simple_rail(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let powered = ctx.meta >> 3 > 0;
    let t = if powered { ctx.texture + 16 } else { ctx.texture };
    let data = ctx.meta & 0x7;
    let (x, y, z) = (ctx.x, ctx.y + TEX64, ctx.z);
    match data {
        0x0 => painter.top_down_rotated(t, x, y, z, 1),
        0x2..=0x5 => rail_slope(painter, t, ctx, data),
        _ => painter.top_down(t, x, y, z),
    }
}

/// Ascending rail piece running corner to corner through the block.
fn rail_slope(painter: &mut Painter<'_>, t: i32, ctx: &BlockContext<'_>, data: u8) {
    let (x, y, z) = (ctx.x, ctx.y, ctx.z);
    let (lo, hi) = (y - 0.5, y + 0.5);
    let corners = match data {
        0x2 => [[x - 0.5, lo, z + 0.5], [x - 0.5, lo, z - 0.5], [x + 0.5, hi, z + 0.5], [x + 0.5, hi, z - 0.5]],
        0x3 => [[x - 0.5, hi, z + 0.5], [x - 0.5, hi, z - 0.5], [x + 0.5, lo, z + 0.5], [x + 0.5, lo, z - 0.5]],
        0x4 => [[x - 0.5, hi, z - 0.5], [x + 0.5, hi, z - 0.5], [x - 0.5, lo, z + 0.5], [x + 0.5, lo, z + 0.5]],
        _ => [[x - 0.5, lo, z - 0.5], [x + 0.5, lo, z - 0.5], [x - 0.5, hi, z + 0.5], [x + 0.5, hi, z + 0.5]],
    };
    painter.arbitrary_rect(t, corners);
}

pub(super) fn pressure_plate(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    low_box(painter, ctx, 0.4, 0.45, 0.5, 0.05);
}

/// Snow layer: a wider, taller plate.
pub(super) fn thin_slice(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    low_box(painter, ctx, 0.48, 0.38, 0.48, 0.1);
}

/// Square slab of half-width `radius` with its top `top_drop` below the block
/// centre and sides rising `height` from `side_drop` below it.
fn low_box(
    p: &mut Painter<'_>,
    ctx: &BlockContext<'_>,
    radius: f32,
    top_drop: f32,
    side_drop: f32,
    height: f32,
) {
    let (t, x, y, z) = (ctx.texture, ctx.x, ctx.y, ctx.z);
    let (x1, x2, z1, z2) = (x + radius, x - radius, z + radius, z - radius);
    p.horizontal(t, [x1, z1], [x2, z2], y - top_drop);
    let bottom = y - side_drop;
    p.vertical(t, [x1, z1], [x1, z2], bottom, height);
    p.vertical(t, [x2, z1], [x2, z2], bottom, height);
    p.vertical(t, [x1, z1], [x2, z1], bottom, height);
    p.vertical(t, [x1, z2], [x2, z2], bottom, height);
}

/// Portal sheet: two planes, oriented by whichever axis the frame runs along.
pub(super) fn portal(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let (t, x, y, z) = (ctx.texture, ctx.x, ctx.y, ctx.z);
    let spans_x = ctx.neighbor(Direction::North) == Some(ctx.id)
        || ctx.neighbor(Direction::South) == Some(ctx.id);
    if spans_x {
        painter.vertical(t, [x - 0.5, z - 0.3], [x + 0.5, z - 0.3], y - 0.5, 1.0);
        painter.vertical(t, [x - 0.5, z + 0.3], [x + 0.5, z + 0.3], y - 0.5, 1.0);
    } else {
        painter.vertical(t, [x - 0.3, z - 0.5], [x - 0.3, z + 0.5], y - 0.5, 1.0);
        painter.vertical(t, [x + 0.3, z - 0.5], [x + 0.3, z + 0.5], y - 0.5, 1.0);
    }
}
