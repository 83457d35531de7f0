//! Beds, pistons and cake: shapes built from atlas regions rather than whole
//! sprites.

use chunkray_world::BLOCK_STICKY_PISTON;
use glam::{Mat4, Vec3};

use super::BlockContext;
use crate::atlas::{tile_u, tile_v, AtlasRegion, TEX128, TEX16, TEX256, TEX512, TEX64};
use crate::painter::{pivot, Painter};

/// Bed half. Bit 3 marks the head; bits 0-1 give the facing.
pub(super) fn bed(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    const PART: f32 = 0.49;
    const FULL: f32 = 0.5;
    const HEIGHT: f32 = 0.5625;
    const TEX_HEIGHT: f32 = TEX256 / 2.0 * 9.0;

    let head = ctx.meta & 0x8 != 0;
    let t = if head { ctx.texture } else { ctx.texture - 1 };
    let degrees = match ctx.meta & 0x3 {
        0 => 180.0,
        1 => 90.0,
        3 => -90.0,
        _ => 0.0,
    };
    let mut local = painter.transformed(pivot([ctx.x, ctx.y, ctx.z], degrees, Vec3::Y));

    let side = AtlasRegion::new(tile_u(t + 16), tile_v(t + 32) - TEX_HEIGHT, TEX16, TEX_HEIGHT);
    let (end, first_z, second_z, end_z) = if head {
        let end = AtlasRegion::new(tile_u(t + 17), tile_v(t + 33) - TEX_HEIGHT, TEX16, TEX_HEIGHT);
        (end, FULL, -PART, -PART)
    } else {
        let end = AtlasRegion::new(tile_u(t + 15), tile_v(t + 31) - TEX_HEIGHT, TEX16, TEX_HEIGHT);
        (end, PART, -FULL, PART)
    };
    let top = HEIGHT - FULL;

    local.horizontal(t, [PART, first_z], [-PART, second_z], top);
    local.region_vertical(side, [PART, top, first_z], [PART, -FULL, second_z]);
    local.region_vertical(side, [-PART, top, first_z], [-PART, -FULL, second_z]);
    local.region_vertical(end, [PART, top, end_z], [-PART, -FULL, end_z]);
}

/// Piston rotation from the low three data bits. The model faces +Z.
fn piston_pivot(ctx: &BlockContext<'_>) -> Mat4 {
    let origin = [ctx.x, ctx.y, ctx.z];
    match ctx.meta & 0x7 {
        1 => pivot(origin, -90.0, Vec3::X),
        2 => pivot(origin, 180.0, Vec3::Y),
        4 => pivot(origin, -90.0, Vec3::Y),
        5 => pivot(origin, 90.0, Vec3::Y),
        _ => Mat4::from_translation(Vec3::from(origin)),
    }
}

/// Piston base. A retracted piston also draws its head; an extended one
/// shows its inner plate and leaves the head to the neighboring block.
pub(super) fn piston_body(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let t = ctx.texture;
    let extended = ctx.meta & 0x8 != 0;
    let mut local = painter.transformed(piston_pivot(ctx));

    let side = AtlasRegion::new(tile_u(t), tile_v(t) + TEX128, TEX16, TEX128 * 3.0);
    local.region_horizontal(side, [-0.49, 0.25], [0.49, -0.49], 0.49);
    local.region_horizontal(side, [-0.49, 0.25], [0.49, -0.49], -0.49);
    local.region_vertical(side, [-0.49, 0.49, 0.25], [-0.49, -0.49, -0.49]);
    local.region_vertical(side, [0.49, 0.49, 0.25], [0.49, -0.49, -0.49]);
    local.vertical(t + 1, [-0.49, -0.49], [0.49, -0.49], -0.49, 0.98);

    if extended {
        local.vertical(t + 2, [-0.49, 0.25], [0.49, 0.25], -0.49, 0.98);
    } else {
        piston_head_local(&mut local, t - 1, true, ctx.id == BLOCK_STICKY_PISTON);
    }
}

/// Free-standing piston head, as left by an extended piston. Bit 3 marks a
/// sticky head.
pub(super) fn piston_head(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let mut local = painter.transformed(piston_pivot(ctx));
    piston_head_local(&mut local, ctx.texture, false, ctx.meta & 0x8 != 0);
}

/// Head geometry in piston space. `t` is the plain (non-sticky) face sprite;
/// the sticky face sits one slot before it. An `attached` head belongs to a
/// retracted body and skips its back plate and arm.
fn piston_head_local(p: &mut Painter<'_>, t: i32, attached: bool, sticky: bool) {
    let side = AtlasRegion::new(tile_u(t + 1), tile_v(t + 1), TEX16, TEX128);
    p.region_horizontal_rotated(side, [-0.49, 0.25], [0.49, 0.49], 0.49);
    p.region_horizontal_rotated(side, [-0.49, 0.25], [0.49, 0.49], -0.49);
    p.region_vertical_rotated(side, [-0.49, 0.49, 0.25], [-0.49, -0.49, 0.49]);
    p.region_vertical_rotated(side, [0.49, 0.49, 0.25], [0.49, -0.49, 0.49]);

    if !attached {
        p.vertical(t, [-0.49, 0.25], [0.49, 0.25], -0.49, 0.98);
        p.region_horizontal(side, [-0.125, 0.25], [0.125, -0.75], 0.125);
        p.region_horizontal(side, [-0.125, 0.25], [0.125, -0.75], -0.125);
        p.region_vertical(side, [-0.125, 0.125, 0.25], [-0.125, -0.125, -0.75]);
        p.region_vertical(side, [0.125, 0.125, 0.25], [0.125, -0.125, -0.75]);
    }

    let front = if sticky { t - 1 } else { t };
    p.vertical(front, [-0.49, 0.49], [0.49, 0.49], -0.49, 0.98);
}

/// Cake, eaten from the -X side one sixth per bite.
pub(super) fn cake(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    const WIDTH: f32 = 0.875;
    const HALF: f32 = WIDTH / 2.0;
    const BOTTOM: f32 = -0.49;
    const FACE_WIDTH: f32 = TEX256 * 14.0;
    const FACE_DEPTH: f32 = TEX512 * 14.0;

    let t = ctx.texture;
    let bites = ctx.meta.min(6);
    let remaining = f32::from(6 - bites) / 6.0;
    let side = |tile: i32| AtlasRegion::new(tile_u(tile) + TEX256, tile_v(tile) + TEX64, FACE_WIDTH, TEX64);

    let top = AtlasRegion::new(tile_u(t) + TEX256, tile_v(t) + TEX512, FACE_WIDTH, FACE_DEPTH * remaining);
    let bottom = AtlasRegion::new(tile_u(t + 3) + TEX256, tile_v(t + 3) + TEX512, FACE_WIDTH, FACE_DEPTH * remaining);
    let edge = side(t + 1);
    let far = if bites == 0 { edge } else { side(t + 2) };
    let cut = HALF - remaining * WIDTH;

    let mut local = painter.transformed(Mat4::from_translation(Vec3::new(ctx.x, ctx.y, ctx.z)));
    local.region_vertical(edge, [HALF, 0.0, HALF], [HALF, BOTTOM, -HALF]);
    local.region_vertical(far, [cut, 0.0, HALF], [cut, BOTTOM, -HALF]);

    let partial = AtlasRegion { du: FACE_WIDTH * remaining, ..edge };
    local.region_vertical(partial, [HALF, 0.0, HALF], [cut, BOTTOM, HALF]);
    local.region_vertical(partial, [HALF, 0.0, -HALF], [cut, BOTTOM, -HALF]);

    local.region_horizontal(bottom, [HALF, HALF], [cut, -HALF], BOTTOM);
    local.region_horizontal(top, [HALF, HALF], [cut, -HALF], 0.0);
}

#[cfg(test)]
mod tests {
    use chunkray_assets::{BlockCatalog, BlockType, DecorationTable, ShapeKind};
    use chunkray_world::BlockId;

    use super::*;
    use crate::atlas::tile_origin;
    use crate::mesh::MeshBuffers;
    use crate::shapes::testing::draw;
    use crate::visibility::FaceMask;

    const BED: BlockId = 26;
    const PISTON: BlockId = 33;
    const PISTON_HEAD: BlockId = 34;
    const CAKE: BlockId = 92;

    fn catalog() -> BlockCatalog {
        BlockCatalog::new(vec![
            BlockType::new(BED, "bed", false, ShapeKind::Bed, Some(135)),
            BlockType::new(PISTON, "piston", false, ShapeKind::PistonBody, Some(108)),
            BlockType::new(BLOCK_STICKY_PISTON, "sticky_piston", false, ShapeKind::PistonBody, Some(108)),
            BlockType::new(PISTON_HEAD, "piston_head", false, ShapeKind::PistonHead, Some(107)),
            BlockType::new(CAKE, "cake", false, ShapeKind::Cake, Some(121)),
        ])
        .expect("catalog")
    }

    fn mesh(id: BlockId, meta: u8) -> MeshBuffers {
        draw(
            &catalog(),
            &DecorationTable::new(),
            |b| {
                b.set_block(4, 20, 4, id, meta);
            },
            (4, 20, 4),
            FaceMask::all(),
        )
    }

    fn uses_tile(mesh: &MeshBuffers, tile: i32) -> bool {
        let origin = tile_origin(tile);
        mesh.vertices
            .iter()
            .any(|v| (v.uv[0] - origin[0]).abs() < 1e-6 && (v.uv[1] - origin[1]).abs() < 1e-6)
    }

    #[test]
    fn bed_halves_use_adjacent_sprites() {
        let head = mesh(BED, 0b1000);
        let foot = mesh(BED, 0);
        assert_eq!(head.quad_count(), 4);
        assert_eq!(foot.quad_count(), 4);
        assert!(uses_tile(&head, 135));
        assert!(uses_tile(&foot, 134));
    }

    #[test]
    fn bed_top_sits_above_the_midline() {
        let head = mesh(BED, 0b1010);
        let top = head.vertices.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert!((top - 20.0625).abs() < 1e-5);
    }

    #[test]
    fn retracted_piston_draws_its_head() {
        assert_eq!(mesh(PISTON, 3).quad_count(), 5 + 5);
        assert_eq!(mesh(PISTON, 0b1011).quad_count(), 6);
    }

    #[test]
    fn sticky_piston_face_comes_from_the_previous_slot() {
        assert!(uses_tile(&mesh(PISTON, 3), 107));
        assert!(!uses_tile(&mesh(PISTON, 3), 106));
        assert!(uses_tile(&mesh(BLOCK_STICKY_PISTON, 3), 106));
    }

    #[test]
    fn loose_head_has_arm_and_back_plate() {
        let plain = mesh(PISTON_HEAD, 3);
        assert_eq!(plain.quad_count(), 10);
        assert!(!uses_tile(&plain, 106));
        assert!(uses_tile(&mesh(PISTON_HEAD, 0b1011), 106));
    }

    #[test]
    fn upward_piston_faces_the_sky() {
        let up = mesh(PISTON, 0b0001);
        let up_plate = up
            .vertices
            .iter()
            .filter(|v| (v.position[1] - 20.49).abs() < 1e-4)
            .count();
        assert!(up_plate >= 4);
    }

    #[test]
    fn cake_shrinks_with_bites() {
        let whole = mesh(CAKE, 0);
        assert_eq!(whole.quad_count(), 6);
        let min_x = |m: &MeshBuffers| m.vertices.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        assert!((min_x(&whole) - (4.0 - 0.4375)).abs() < 1e-5);
        let half = mesh(CAKE, 3);
        assert!((min_x(&half) - 4.0).abs() < 1e-5);
    }
}
