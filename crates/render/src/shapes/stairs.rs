use super::BlockContext;
use crate::atlas::{tile_origin, TEX16, TEX32, TEX64};
use crate::painter::Painter;

/// Two-step stairs. Metadata 0/1 ascend along X, 2/3 along Z; 0 and 2 mirror
/// the step toward the negative side.
pub(super) fn stairs(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let (t, x, y, z) = (ctx.texture, ctx.x, ctx.y, ctx.z);
    let data = ctx.meta;
    let swap = data == 0 || data == 2;
    if data == 0 || data == 1 {
        side_along_x(painter, t, x, y, z + 0.05, swap);
        side_along_x(painter, t, x, y, z + 0.95, swap);
        let back = if swap { x + 0.94 } else { x + 0.06 };
        painter.north_south_scaled(t, back, y, z, 0.5, 0.45);
        painter.top_down_scaled(t, x, y, z, 0.45);
        surface_along_x(painter, t, x, y, z, swap);
    } else {
        side_along_z(painter, t, x + 0.05, y, z, swap);
        side_along_z(painter, t, x + 0.95, y, z, swap);
        let back = if swap { z + 0.94 } else { z + 0.06 };
        painter.west_east_scaled(t, x, y, back, 0.5, 0.45);
        painter.top_down_scaled(t, x, y, z, 0.45);
        surface_along_z(painter, t, x, y, z, swap);
    }
}

/// L-shaped profile on the -Z side of a stair climbing along X.
fn side_along_x(p: &mut Painter<'_>, t: i32, x: f32, y: f32, z: f32, swap: bool) {
    let [u, v] = tile_origin(t);
    let off = if swap { -0.5 } else { 0.5 };
    let face = z - 0.5;
    p.strip([
        ([u, v + TEX32], [x + off, y - 0.5, face]),
        ([u, v + TEX64], [x + off, y, face]),
        ([u + TEX16, v + TEX32], [x - off, y - 0.5, face]),
        ([u + TEX32, v + TEX64], [x, y, face]),
        ([u + TEX16, v], [x - off, y + 0.5, face]),
        ([u + TEX32, v], [x, y + 0.5, face]),
    ]);
}

/// L-shaped profile on the -X side of a stair climbing along Z.
fn side_along_z(p: &mut Painter<'_>, t: i32, x: f32, y: f32, z: f32, swap: bool) {
    let [u, v] = tile_origin(t);
    let off = if swap { -0.5 } else { 0.5 };
    let face = x - 0.5;
    p.strip([
        ([u, v + TEX32], [face, y - 0.5, z + off]),
        ([u, v + TEX64], [face, y, z + off]),
        ([u + TEX16, v + TEX32], [face, y - 0.5, z - off]),
        ([u + TEX32, v + TEX64], [face, y, z]),
        ([u + TEX16, v], [face, y + 0.5, z - off]),
        ([u + TEX32, v], [face, y + 0.5, z]),
    ]);
}

/// Treads and risers of a stair climbing along X.
fn surface_along_x(p: &mut Painter<'_>, t: i32, x: f32, y: f32, z: f32, swap: bool) {
    let [u, v] = tile_origin(t);
    let off = if swap { -0.5 } else { 0.5 };
    let (z1, z2) = (z + 0.5, z - 0.5);
    // Lower tread.
    p.strip([
        ([u, v], [x + off, y, z1]),
        ([u + TEX16, v], [x + off, y, z2]),
        ([u, v + TEX64], [x, y, z1]),
        ([u + TEX16, v + TEX64], [x, y, z2]),
    ]);
    // Lower riser.
    p.strip([
        ([u, v + TEX64], [x + off, y, z1]),
        ([u + TEX16, v + TEX64], [x + off, y, z2]),
        ([u, v + TEX32], [x + off, y - 0.5, z1]),
        ([u + TEX16, v + TEX32], [x + off, y - 0.5, z2]),
    ]);
    // Upper tread.
    p.strip([
        ([u, v + TEX64], [x, y + 0.5, z1]),
        ([u + TEX16, v + TEX64], [x, y + 0.5, z2]),
        ([u, v + TEX32], [x - off, y + 0.5, z1]),
        ([u + TEX16, v + TEX32], [x - off, y + 0.5, z2]),
    ]);
    // Upper riser.
    p.strip([
        ([u, v], [x, y + 0.5, z1]),
        ([u + TEX16, v], [x, y + 0.5, z2]),
        ([u, v + TEX64], [x, y, z1]),
        ([u + TEX16, v + TEX64], [x, y, z2]),
    ]);
}

/// Treads and risers of a stair climbing along Z.
fn surface_along_z(p: &mut Painter<'_>, t: i32, x: f32, y: f32, z: f32, swap: bool) {
    let [u, v] = tile_origin(t);
    let off = if swap { -0.5 } else { 0.5 };
    let (x1, x2) = (x + 0.5, x - 0.5);
    p.strip([
        ([u, v], [x1, y, z + off]),
        ([u + TEX16, v], [x2, y, z + off]),
        ([u, v + TEX64], [x1, y, z]),
        ([u + TEX16, v + TEX64], [x2, y, z]),
    ]);
    p.strip([
        ([u, v + TEX64], [x1, y, z + off]),
        ([u + TEX16, v + TEX64], [x2, y, z + off]),
        ([u, v + TEX32], [x1, y - 0.5, z + off]),
        ([u + TEX16, v + TEX32], [x2, y - 0.5, z + off]),
    ]);
    p.strip([
        ([u, v + TEX64], [x1, y + 0.5, z]),
        ([u + TEX16, v + TEX64], [x2, y + 0.5, z]),
        ([u, v + TEX32], [x1, y + 0.5, z - off]),
        ([u + TEX16, v + TEX32], [x2, y + 0.5, z - off]),
    ]);
    p.strip([
        ([u, v], [x1, y + 0.5, z]),
        ([u + TEX16, v], [x2, y + 0.5, z]),
        ([u, v + TEX64], [x1, y, z]),
        ([u + TEX16, v + TEX64], [x2, y, z]),
    ]);
}
