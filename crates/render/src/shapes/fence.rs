//! Shapes that connect to their horizontal neighbors.

use chunkray_world::{BlockId, Direction, BLOCK_FENCE, BLOCK_IRON_BARS};
use glam::Vec3;

use super::BlockContext;
use crate::atlas::PixelRect;
use crate::painter::{pivot, Painter};

/// Bottom of the lower slat, relative to the block centre.
const SLAT_START: f32 = -0.125;
const SLAT_HEIGHT: f32 = 0.1875;
/// Distance from the lower slat to the upper one.
const TOP_SLAT_OFFSET: f32 = 0.375;
const POST: f32 = 0.125;
const POST_HALF: f32 = 0.0625;

const SLAT_SIDE: PixelRect = PixelRect::new(16, 3, 0, 5);
const SLAT_EDGE: PixelRect = PixelRect::new(2, 16, 14, 0);

/// Fence post, with slats toward -X and -Z neighbors that are fences.
///
/// Slats toward +X and +Z belong to the neighbor on that side, so each shared
/// connection is drawn once.
pub(super) fn fence(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let (t, x, y, z) = (ctx.texture, ctx.x, ctx.y, ctx.z);
    let post_side = PixelRect::new(4, 16, 6, 0);
    painter.vertical_rect(t, [x + POST, z + POST], [x + POST, z - POST], y - 0.5, 1.0, post_side);
    painter.vertical_rect(t, [x + POST, z - POST], [x - POST, z - POST], y - 0.5, 1.0, post_side);
    painter.vertical_rect(t, [x - POST, z - POST], [x - POST, z + POST], y - 0.5, 1.0, post_side);
    painter.vertical_rect(t, [x - POST, z + POST], [x + POST, z + POST], y - 0.5, 1.0, post_side);
    painter.horizontal_rect(
        t,
        [x + POST, z + POST],
        [x - POST, z - POST],
        y + 0.5,
        PixelRect::new(4, 4, 6, 6),
        false,
    );

    let slat_start = y + SLAT_START;
    if ctx.neighbor(Direction::North) == Some(BLOCK_FENCE) {
        for base in [slat_start, slat_start + TOP_SLAT_OFFSET] {
            let (near, far) = (x - POST, x - 1.0 + POST);
            painter.vertical_rect(t, [near, z + POST_HALF], [far, z + POST_HALF], base, SLAT_HEIGHT, SLAT_SIDE);
            painter.vertical_rect(t, [near, z - POST_HALF], [far, z - POST_HALF], base, SLAT_HEIGHT, SLAT_SIDE);
            for level in [base, base + SLAT_HEIGHT] {
                painter.horizontal_rect(t, [near, z + POST_HALF], [far, z - POST_HALF], level, SLAT_EDGE, false);
            }
        }
    }
    if ctx.neighbor(Direction::East) == Some(BLOCK_FENCE) {
        for base in [slat_start, slat_start + TOP_SLAT_OFFSET] {
            let (near, far) = (z - POST, z - 1.0 + POST);
            painter.vertical_rect(t, [x + POST_HALF, near], [x + POST_HALF, far], base, SLAT_HEIGHT, SLAT_SIDE);
            painter.vertical_rect(t, [x - POST_HALF, near], [x - POST_HALF, far], base, SLAT_HEIGHT, SLAT_SIDE);
            for level in [base, base + SLAT_HEIGHT] {
                painter.horizontal_rect(t, [x + POST_HALF, near], [x - POST_HALF, far], level, SLAT_EDGE, true);
            }
        }
    }
}

/// Fence gate drawn facing along X and rotated into place. Bits 0-1 give the
/// facing, bit 2 the open state.
pub(super) fn fence_gate(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let t = ctx.texture;
    let open = ctx.meta & 0x4 != 0;
    let (degrees, first, second) = match ctx.meta & 0x3 {
        1 => (270.0, Direction::West, Direction::East),
        2 => (180.0, Direction::North, Direction::South),
        3 => (90.0, Direction::East, Direction::West),
        _ => (0.0, Direction::South, Direction::North),
    };
    let is_fence = |direction| ctx.neighbor(direction) == Some(BLOCK_FENCE);
    let (fence_1, fence_2) = (is_fence(first), is_fence(second));

    let mut local = painter.transformed(pivot([ctx.x, ctx.y, ctx.z], degrees, Vec3::Y));
    gate_post(&mut local, t, 1.0);
    if fence_1 {
        gate_connector(&mut local, t, 1.0);
    }
    gate_post(&mut local, t, -1.0);
    if fence_2 {
        gate_connector(&mut local, t, -1.0);
    }
    if open {
        open_wing(&mut local, t, 1.0);
        open_wing(&mut local, t, -1.0);
    } else {
        closed_gate(&mut local, t);
    }
}

const GATE_POST_INNER: f32 = 0.375;
const GATE_POST_OUTER: f32 = 0.5;
const GATE_POST_Z: f32 = 0.0625;
const GATE_POST_BOTTOM: f32 = -0.1875;
const GATE_POST_HEIGHT: f32 = 0.6875;
const GATE_MIDDLE_WIDTH: f32 = 0.125;
const GATE_MIDDLE_DEPTH: f32 = 0.0625;
const GATE_MIDDLE_BOTTOM: f32 = SLAT_START + SLAT_HEIGHT;
const GATE_MIDDLE_HEIGHT: f32 = SLAT_START + TOP_SLAT_OFFSET - GATE_MIDDLE_BOTTOM;

const GATE_SLAT_SIDE: PixelRect = PixelRect::new(6, 3, 5, 7);
const GATE_SLAT_EDGE: PixelRect = PixelRect::new(6, 2, 5, 7);
const GATE_MIDDLE: PixelRect = PixelRect::new(2, 3, 7, 5);

/// Post on the `side` (+1 or -1) end of the gate.
fn gate_post(p: &mut Painter<'_>, t: i32, side: f32) {
    let (inner, outer) = (side * GATE_POST_INNER, side * GATE_POST_OUTER);
    let pz = GATE_POST_Z;
    let rect = PixelRect::new(2, 11, 7, 0);
    let (bottom, height) = (GATE_POST_BOTTOM, GATE_POST_HEIGHT);
    p.vertical_rect(t, [inner, pz], [outer, pz], bottom, height, rect);
    p.vertical_rect(t, [inner, -pz], [outer, -pz], bottom, height, rect);
    p.vertical_rect(t, [inner, pz], [inner, -pz], bottom, height, rect);
    p.vertical_rect(t, [outer, pz], [outer, -pz], bottom, height, rect);
    let cap = PixelRect::new(2, 2, 7, 7);
    p.horizontal_rect(t, [inner, pz], [outer, -pz], bottom, cap, false);
    p.horizontal_rect(t, [inner, pz], [outer, -pz], bottom + height, cap, false);
}

/// Slats from the `side` post out to an adjoining fence.
fn gate_connector(p: &mut Painter<'_>, t: i32, side: f32) {
    let start = side * GATE_POST_OUTER;
    let end = side * (GATE_POST_OUTER + 0.5 - POST);
    let pz = GATE_POST_Z;
    for base in [SLAT_START, SLAT_START + TOP_SLAT_OFFSET] {
        p.vertical_rect(t, [start, pz], [end, pz], base, SLAT_HEIGHT, GATE_SLAT_SIDE);
        p.vertical_rect(t, [start, -pz], [end, -pz], base, SLAT_HEIGHT, GATE_SLAT_SIDE);
        p.horizontal_rect(t, [start, pz], [end, -pz], base, GATE_SLAT_EDGE, true);
        p.horizontal_rect(t, [start, pz], [end, -pz], base + SLAT_HEIGHT, GATE_SLAT_EDGE, true);
    }
}

/// One half of an open gate, swung out along +Z from the `side` post.
fn open_wing(p: &mut Painter<'_>, t: i32, side: f32) {
    let (inner, outer) = (side * GATE_POST_INNER, side * GATE_POST_OUTER);
    let pz = GATE_POST_Z;
    for base in [SLAT_START, SLAT_START + TOP_SLAT_OFFSET] {
        p.vertical_rect(t, [inner, pz], [inner, 0.5], base, SLAT_HEIGHT, GATE_SLAT_SIDE);
        p.vertical_rect(t, [outer, pz], [outer, 0.5], base, SLAT_HEIGHT, GATE_SLAT_SIDE);
        p.horizontal_rect(t, [inner, pz], [outer, 0.5], base, GATE_SLAT_EDGE, true);
        p.horizontal_rect(t, [inner, pz], [outer, 0.5], base + SLAT_HEIGHT, GATE_SLAT_EDGE, false);
    }
    let back = 0.5 - GATE_MIDDLE_WIDTH;
    let (bottom, height) = (GATE_MIDDLE_BOTTOM, GATE_MIDDLE_HEIGHT);
    p.vertical_rect(t, [inner, 0.5], [inner, back], bottom, height, GATE_MIDDLE);
    p.vertical_rect(t, [outer, 0.5], [outer, back], bottom, height, GATE_MIDDLE);
    p.vertical_rect(t, [inner, back], [outer, back], bottom, height, GATE_MIDDLE);
    p.vertical_rect(
        t,
        [inner, 0.5],
        [outer, 0.5],
        SLAT_START,
        SLAT_HEIGHT + TOP_SLAT_OFFSET,
        PixelRect::new(2, 9, 7, 0),
    );
}

/// Closed gate: two bars between the posts and a short middle brace.
fn closed_gate(p: &mut Painter<'_>, t: i32) {
    let (inner, pz) = (GATE_POST_INNER, GATE_POST_Z);
    let side = PixelRect::new(12, 3, 2, 7);
    let edge = PixelRect::new(12, 2, 2, 3);
    for base in [SLAT_START, SLAT_START + TOP_SLAT_OFFSET] {
        p.vertical_rect(t, [inner, pz], [-inner, pz], base, SLAT_HEIGHT, side);
        p.vertical_rect(t, [inner, -pz], [-inner, -pz], base, SLAT_HEIGHT, side);
        p.horizontal_rect(t, [inner, pz], [-inner, -pz], base, edge, true);
        p.horizontal_rect(t, [inner, pz], [-inner, -pz], base + SLAT_HEIGHT, edge, true);
    }
    let (mw, md) = (GATE_MIDDLE_WIDTH, GATE_MIDDLE_DEPTH);
    let (bottom, height) = (GATE_MIDDLE_BOTTOM, GATE_MIDDLE_HEIGHT);
    let face = PixelRect::new(4, 3, 6, 5);
    p.vertical_rect(t, [mw, pz], [-mw, pz], bottom, height, face);
    p.vertical_rect(t, [mw, -pz], [-mw, -pz], bottom, height, face);
    p.vertical_rect(t, [mw, md], [mw, -md], bottom, height, GATE_MIDDLE);
    p.vertical_rect(t, [-mw, md], [-mw, -md], bottom, height, GATE_MIDDLE);
}

/// Glass panes and iron bars: an arm toward every side holding the same block
/// or a solid one, or a full cross when nothing is adjacent.
pub(super) fn solid_pane(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    const TOP: f32 = 0.0625;
    let (t, x, y, z) = (ctx.texture, ctx.x, ctx.y, ctx.z);
    let (row_1, row_2) = if ctx.id == BLOCK_IRON_BARS { (2, 3) } else { (0, 15) };

    let joins = |neighbor: Option<BlockId>| neighbor == Some(ctx.id) || ctx.catalog.is_solid(neighbor);
    let mut north = joins(ctx.neighbor(Direction::North));
    let mut south = joins(ctx.neighbor(Direction::South));
    let mut west = joins(ctx.neighbor(Direction::West));
    let mut east = joins(ctx.neighbor(Direction::East));
    if !(north || south || west || east) {
        (north, south, west, east) = (true, true, true, true);
    }

    let half_arm = PixelRect::new(8, 16, 8, 0);
    let rim_1 = PixelRect::new(1, 7, row_1, 0);
    let rim_2 = PixelRect::new(1, 7, row_2, 0);
    let (bottom, top) = (y - 0.5, y + 0.5);

    if north && south {
        painter.vertical(t, [x - 0.5, z], [x + 0.5, z], bottom, 1.0);
    } else {
        if north {
            painter.vertical_rect(t, [x, z], [x - 0.5, z], bottom, 1.0, half_arm);
        }
        if south {
            painter.vertical_rect(t, [x, z], [x + 0.5, z], bottom, 1.0, half_arm);
        }
    }
    if north {
        painter.horizontal_rect(t, [x - 0.5, z + TOP], [x - TOP, z], top, rim_1, false);
        painter.horizontal_rect(t, [x - 0.5, z - TOP], [x - TOP, z], top, rim_2, false);
    }
    if south {
        painter.horizontal_rect(t, [x + 0.5, z + TOP], [x + TOP, z], top, rim_1, false);
        painter.horizontal_rect(t, [x + 0.5, z - TOP], [x + TOP, z], top, rim_2, false);
    }

    if west && east {
        painter.vertical(t, [x, z - 0.5], [x, z + 0.5], bottom, 1.0);
    } else {
        if west {
            painter.vertical_rect(t, [x, z], [x, z + 0.5], bottom, 1.0, half_arm);
        }
        if east {
            painter.vertical_rect(t, [x, z], [x, z - 0.5], bottom, 1.0, half_arm);
        }
    }
    if west {
        painter.horizontal_rect(t, [x + TOP, z + 0.5], [x, z + TOP], top, rim_1, true);
        painter.horizontal_rect(t, [x - TOP, z + 0.5], [x, z + TOP], top, rim_2, true);
    }
    if east {
        painter.horizontal_rect(t, [x + TOP, z - 0.5], [x, z - TOP], top, rim_1, true);
        painter.horizontal_rect(t, [x - TOP, z - 0.5], [x, z - TOP], top, rim_2, true);
    }

    painter.horizontal_rect(t, [x + TOP, z + TOP], [x - TOP, z], top, PixelRect::new(1, 2, row_1, 7), false);
    painter.horizontal_rect(t, [x + TOP, z - TOP], [x - TOP, z], top, PixelRect::new(1, 2, row_2, 7), false);
}

#[cfg(test)]
mod tests {
    use chunkray_assets::{BlockCatalog, BlockType, DecorationTable, ShapeKind};
    use chunkray_world::{ChunkBuilder, BLOCK_STONE};

    use super::*;
    use crate::mesh::MeshBuffers;
    use crate::shapes::testing::draw;
    use crate::visibility::FaceMask;

    const GLASS_PANE: BlockId = 102;
    const FENCE_GATE: BlockId = 107;

    fn catalog() -> BlockCatalog {
        BlockCatalog::new(vec![
            BlockType::cube(BLOCK_STONE, "stone", 1),
            BlockType::new(BLOCK_FENCE, "fence", false, ShapeKind::Fence, Some(4)),
            BlockType::new(FENCE_GATE, "fence_gate", false, ShapeKind::FenceGate, Some(4)),
            BlockType::new(GLASS_PANE, "glass_pane", false, ShapeKind::SolidPane, Some(49)),
            BlockType::new(BLOCK_IRON_BARS, "iron_bars", false, ShapeKind::SolidPane, Some(85)),
        ])
        .expect("catalog")
    }

    fn mesh_at(setup: impl FnOnce(&mut ChunkBuilder)) -> MeshBuffers {
        draw(&catalog(), &DecorationTable::new(), setup, (5, 5, 5), FaceMask::all())
    }

    #[test]
    fn lone_fence_is_a_plain_post() {
        let mesh = mesh_at(|b| {
            b.set_block(5, 5, 5, BLOCK_FENCE, 0);
        });
        assert_eq!(mesh.quad_count(), 5);
    }

    #[test]
    fn solid_neighbors_do_not_grow_connectors() {
        let mesh = mesh_at(|b| {
            b.set_block(5, 5, 5, BLOCK_FENCE, 0);
            b.set_block(4, 5, 5, BLOCK_STONE, 0);
            b.set_block(5, 5, 4, BLOCK_STONE, 0);
        });
        assert_eq!(mesh.quad_count(), 5);
    }

    #[test]
    fn fence_neighbors_toward_negative_axes_get_slats() {
        let west_only = mesh_at(|b| {
            b.set_block(5, 5, 5, BLOCK_FENCE, 0);
            b.set_block(4, 5, 5, BLOCK_FENCE, 0);
        });
        assert_eq!(west_only.quad_count(), 5 + 8);

        let both = mesh_at(|b| {
            b.set_block(5, 5, 5, BLOCK_FENCE, 0);
            b.set_block(4, 5, 5, BLOCK_FENCE, 0);
            b.set_block(5, 5, 4, BLOCK_FENCE, 0);
        });
        assert_eq!(both.quad_count(), 5 + 16);

        let positive = mesh_at(|b| {
            b.set_block(5, 5, 5, BLOCK_FENCE, 0);
            b.set_block(6, 5, 5, BLOCK_FENCE, 0);
            b.set_block(5, 5, 6, BLOCK_FENCE, 0);
        });
        assert_eq!(positive.quad_count(), 5);
    }

    #[test]
    fn gate_connects_to_fences_on_its_axis() {
        let closed = mesh_at(|b| {
            b.set_block(5, 5, 5, FENCE_GATE, 0);
        });
        assert_eq!(closed.quad_count(), 2 * 6 + 8 + 4);

        let linked = mesh_at(|b| {
            b.set_block(5, 5, 5, FENCE_GATE, 0);
            b.set_block(6, 5, 5, BLOCK_FENCE, 0);
        });
        assert_eq!(linked.quad_count(), 2 * 6 + 8 + 8 + 4);

        let open = mesh_at(|b| {
            b.set_block(5, 5, 5, FENCE_GATE, 0b0100);
        });
        assert_eq!(open.quad_count(), 2 * 6 + 2 * (8 + 4));
    }

    #[test]
    fn isolated_pane_draws_a_full_cross() {
        let mesh = mesh_at(|b| {
            b.set_block(5, 5, 5, GLASS_PANE, 0);
        });
        // Two full planes, eight rim strips and two centre caps.
        assert_eq!(mesh.quad_count(), 2 + 8 + 2);
    }

    #[test]
    fn pane_arms_follow_panes_and_solids() {
        let mesh = mesh_at(|b| {
            b.set_block(5, 5, 5, GLASS_PANE, 0);
            b.set_block(4, 5, 5, GLASS_PANE, 0);
            b.set_block(5, 5, 6, BLOCK_STONE, 0);
        });
        // Half arms north and west, two rims each, two centre caps.
        assert_eq!(mesh.quad_count(), 2 + 4 + 2);
    }
}
