//! Free-standing sprites sized from the decoration table.

use chunkray_world::BLOCK_COBBLESTONE;
use glam::Vec3;

use super::BlockContext;
use crate::atlas::{tile_origin, AtlasRegion, TEX16, TEX32, TEX64};
use crate::painter::{pivot, Painter, Xz};

/// Rotation applied to a rectangular decoration about its base.
#[derive(Debug, Clone, Copy)]
struct Tilt {
    degrees: f32,
    axis: Vec3,
    /// Base position relative to the block centre before rotating.
    offset: Xz,
}

impl Tilt {
    const fn about_x(degrees: f32, offset: Xz) -> Self {
        Self {
            degrees,
            axis: Vec3::X,
            offset,
        }
    }

    const fn about_z(degrees: f32, offset: Xz) -> Self {
        Self {
            degrees,
            axis: Vec3::Z,
            offset,
        }
    }
}

pub(super) fn torch(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let tilt = match ctx.meta & 0xF {
        1 => Some(Tilt::about_z(-30.0, [-0.6, 0.0])),
        2 => Some(Tilt::about_z(30.0, [0.6, 0.0])),
        3 => Some(Tilt::about_x(30.0, [0.0, -0.6])),
        4 => Some(Tilt::about_x(-30.0, [0.0, 0.6])),
        _ => None,
    };
    rect_decoration(ctx, painter, ctx.texture, ctx.y, tilt);
}

/// Lever: a cobblestone base against its wall or floor plus the tilted handle.
pub(super) fn lever(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let thrown = ctx.meta & 0x8 != 0;
    let facing = ctx.meta & 0x7;
    if let Some(cobble) = ctx.catalog.get(BLOCK_COBBLESTONE).texture {
        lever_base(ctx, painter, i32::from(cobble) + ctx.tex_offset, facing);
    }

    let raised = ctx.y + 1.0;
    let (level, tilt) = match (thrown, facing) {
        (true, 1) => (raised, Tilt::about_z(-135.0, [0.6, 0.0])),
        (true, 2) => (raised, Tilt::about_z(135.0, [-0.6, 0.0])),
        (true, 3) => (raised, Tilt::about_x(135.0, [0.0, 0.6])),
        (true, 4) => (raised, Tilt::about_x(-135.0, [0.0, -0.6])),
        (true, 5) => (ctx.y, Tilt::about_x(-45.0, [0.0, 0.0])),
        (true, 6) => (ctx.y, Tilt::about_z(45.0, [0.0, 0.0])),
        (false, 1) => (ctx.y, Tilt::about_z(-45.0, [-0.6, 0.0])),
        (false, 2) => (ctx.y, Tilt::about_z(45.0, [0.6, 0.0])),
        (false, 3) => (ctx.y, Tilt::about_x(45.0, [0.0, -0.6])),
        (false, 4) => (ctx.y, Tilt::about_x(-45.0, [0.0, 0.6])),
        (false, 5) => (ctx.y, Tilt::about_x(45.0, [0.0, 0.0])),
        (false, 6) => (ctx.y, Tilt::about_z(-45.0, [0.0, 0.0])),
        _ => return,
    };
    rect_decoration(ctx, painter, ctx.texture, level, Some(tilt));
}

fn lever_base(ctx: &BlockContext<'_>, p: &mut Painter<'_>, cobble: i32, facing: u8) {
    const HEIGHT: f32 = 0.15;
    const LENGTH: f32 = 0.2;
    const WIDTH: f32 = 0.15;
    let (x, y, z) = (ctx.x, ctx.y, ctx.z);
    let (bottom, tall) = (y - LENGTH, LENGTH * 2.0);
    match facing {
        1 | 2 => {
            let wall = if facing == 1 { x - 0.5 } else { x + 0.5 };
            let front = if facing == 1 { wall + HEIGHT } else { wall - HEIGHT };
            p.vertical(cobble, [wall, z + WIDTH], [front, z + WIDTH], bottom, tall);
            p.vertical(cobble, [wall, z - WIDTH], [front, z - WIDTH], bottom, tall);
            p.vertical(cobble, [front, z + WIDTH], [front, z - WIDTH], bottom, tall);
            p.horizontal(cobble, [wall, z - WIDTH], [front, z + WIDTH], y - LENGTH);
            p.horizontal(cobble, [wall, z - WIDTH], [front, z + WIDTH], y + LENGTH);
        }
        3 | 4 => {
            let wall = if facing == 3 { z - 0.5 } else { z + 0.5 };
            let front = if facing == 3 { wall + HEIGHT } else { wall - HEIGHT };
            p.vertical(cobble, [x - WIDTH, wall], [x - WIDTH, front], bottom, tall);
            p.vertical(cobble, [x + WIDTH, wall], [x + WIDTH, front], bottom, tall);
            p.vertical(cobble, [x - WIDTH, front], [x + WIDTH, front], bottom, tall);
            p.horizontal(cobble, [x - WIDTH, wall], [x + WIDTH, front], y - LENGTH);
            p.horizontal(cobble, [x - WIDTH, wall], [x + WIDTH, front], y + LENGTH);
        }
        5 => {
            let floor = y - 0.5;
            p.vertical(cobble, [x - WIDTH, z + LENGTH], [x - WIDTH, z - LENGTH], floor, HEIGHT);
            p.vertical(cobble, [x + WIDTH, z + LENGTH], [x + WIDTH, z - LENGTH], floor, HEIGHT);
            p.vertical(cobble, [x - WIDTH, z + LENGTH], [x + WIDTH, z + LENGTH], floor, HEIGHT);
            p.vertical(cobble, [x + WIDTH, z - LENGTH], [x - WIDTH, z - LENGTH], floor, HEIGHT);
            p.horizontal(cobble, [x - WIDTH, z - LENGTH], [x + WIDTH, z + LENGTH], floor + HEIGHT);
        }
        _ => {
            let floor = y - 0.5;
            p.vertical(cobble, [x - LENGTH, z + WIDTH], [x - LENGTH, z - WIDTH], floor, HEIGHT);
            p.vertical(cobble, [x + LENGTH, z + WIDTH], [x + LENGTH, z - WIDTH], floor, HEIGHT);
            p.vertical(cobble, [x - LENGTH, z + WIDTH], [x + LENGTH, z + WIDTH], floor, HEIGHT);
            p.vertical(cobble, [x + LENGTH, z - WIDTH], [x - LENGTH, z - WIDTH], floor, HEIGHT);
            p.horizontal(cobble, [x - LENGTH, z - WIDTH], [x + LENGTH, z + WIDTH], floor + HEIGHT);
        }
    }
}

/// Two crossed planes (flowers, saplings, grass).
pub(super) fn cross(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let Some(stats) = ctx.decoration(ctx.texture) else {
        return;
    };
    let [u, v] = tile_origin(ctx.texture);
    let region = AtlasRegion::new(u + stats.tex_left, v + stats.tex_top, stats.tex_width, stats.tex_height);
    let half = stats.width / 2.0;
    let (x, y, z) = (ctx.x, ctx.y - 0.5, ctx.z);
    let top = y + stats.height;
    painter.region_vertical(region, [x - half, top, z - half], [x + half, y, z + half]);
    painter.region_vertical(region, [x + half, top, z - half], [x - half, y, z + half]);
}

/// Box-shaped sprite standing on the floor of the block at height `level`,
/// optionally tilted about its base.
fn rect_decoration(
    ctx: &BlockContext<'_>,
    painter: &mut Painter<'_>,
    texture: i32,
    level: f32,
    tilt: Option<Tilt>,
) {
    let Some(stats) = ctx.decoration(texture) else {
        return;
    };
    let [u, v] = tile_origin(texture);
    let sides = AtlasRegion::new(u + stats.tex_left, v + stats.tex_top, stats.tex_width, stats.tex_height);
    let cap = AtlasRegion {
        dv: if stats.height > stats.width {
            stats.tex_width / 2.0
        } else {
            stats.tex_height
        },
        ..sides
    };
    let half = stats.width / 2.0;
    let base = level - 0.5;
    match tilt {
        Some(tilt) => {
            let transform = pivot([ctx.x, base, ctx.z], tilt.degrees, tilt.axis);
            let mut local = painter.transformed(transform);
            upright_box(&mut local, sides, cap, tilt.offset, 0.0, half, stats.height);
        }
        None => upright_box(painter, sides, cap, [ctx.x, ctx.z], base, half, stats.height),
    }
}

fn upright_box(
    p: &mut Painter<'_>,
    sides: AtlasRegion,
    cap: AtlasRegion,
    [x, z]: Xz,
    y: f32,
    half: f32,
    height: f32,
) {
    let top = y + height;
    p.region_vertical(sides, [x - half, top, z - half], [x + half, y, z - half]);
    p.region_vertical(sides, [x - half, top, z + half], [x + half, y, z + half]);
    p.region_vertical(sides, [x + half, top, z - half], [x + half, y, z + half]);
    p.region_vertical(sides, [x - half, top, z + half], [x - half, y, z - half]);
    p.region_horizontal(cap, [x - half, z - half], [x + half, z + half], top);
}

/// Crops: four planes in a hash pattern, sprite chosen by growth stage.
pub(super) fn crops(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let [u, v] = tile_origin(ctx.texture);
    // Growth stages sit to the left of the ripe sprite in the same row.
    let bu = u - TEX16 * (7.0 - f32::from(ctx.meta));
    let (eu, ev) = (bu + TEX16, v + TEX32);
    let (x, y, z) = (ctx.x - 0.5, ctx.y - 0.5, ctx.z - 0.5);
    let near = 7.0 / 16.0;
    let far = 9.0 / 16.0;

    painter.quad([
        ([bu, v], [x + far + TEX64, y + 1.0, z]),
        ([eu, v], [x + far + TEX64, y + 1.0, z + 1.0]),
        ([eu, ev], [x + far - TEX64, y, z + 1.0]),
        ([bu, ev], [x + far - TEX64, y, z]),
    ]);
    painter.quad([
        ([bu, v], [x + near + TEX64, y + 1.0, z + 1.0]),
        ([eu, v], [x + near + TEX64, y + 1.0, z]),
        ([eu, ev], [x + near - TEX64, y, z]),
        ([bu, ev], [x + near - TEX64, y, z + 1.0]),
    ]);
    painter.quad([
        ([bu, v], [x + 1.0, y + 1.0, z + far + TEX64]),
        ([eu, v], [x, y + 1.0, z + far + TEX64]),
        ([eu, ev], [x, y, z + far - TEX64]),
        ([bu, ev], [x + 1.0, y, z + far - TEX64]),
    ]);
    painter.quad([
        ([bu, v], [x, y + 1.0, z + near + TEX64]),
        ([eu, v], [x + 1.0, y + 1.0, z + near + TEX64]),
        ([eu, ev], [x + 1.0, y, z + near - TEX64]),
        ([bu, ev], [x, y, z + near - TEX64]),
    ]);
}
