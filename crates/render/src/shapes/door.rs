use chunkray_world::{BlockMeta, Direction};
use glam::Vec3;

use super::BlockContext;
use crate::atlas::{AtlasRegion, TEX32};
use crate::painter::{pivot, Painter};

/// Wall a door half is drawn against.
///
/// Bits 0-1 give the hinge direction and bit 2 the swung state; a swung door
/// turns one quarter clockwise from its closed position.
pub(crate) fn door_face(meta: BlockMeta) -> Direction {
    let swung = meta & 0x4 != 0;
    match (meta & 0x3, swung) {
        (0, false) | (3, true) => Direction::North,
        (0, true) | (1, false) => Direction::East,
        (1, true) | (2, false) => Direction::South,
        _ => Direction::West,
    }
}

/// Single plane door half; the top half uses the sprite one row up.
pub(super) fn door(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let t = if ctx.meta & 0x8 != 0 {
        ctx.texture - 16
    } else {
        ctx.texture
    };
    let (x, y, z) = (ctx.x, ctx.y, ctx.z);
    match door_face(ctx.meta) {
        Direction::North => painter.north_south(t, x, y, z),
        Direction::East => painter.west_east(t, x, y, z),
        Direction::South => painter.north_south(t, x + 1.0, y, z),
        _ => painter.west_east(t, x, y, z + 1.0),
    }
}

/// Trapdoor: a thin slab on the floor, or swung up against the wall named
/// by bits 0-1 when bit 2 is set.
pub(super) fn trapdoor(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    const THICKNESS: f32 = 0.1;
    const INSET: f32 = 0.02;
    let t = ctx.texture;
    let swung = ctx.meta & 0x4 != 0;
    let (degrees, axis) = match (swung, ctx.meta & 0x3) {
        (false, _) => (0.0, Vec3::Y),
        (true, 0) => (-90.0, Vec3::X),
        (true, 1) => (90.0, Vec3::X),
        (true, 2) => (90.0, Vec3::Z),
        (true, _) => (-90.0, Vec3::Z),
    };
    let mut local = painter.transformed(pivot([ctx.x, ctx.y, ctx.z], degrees, axis));

    let edge = 0.5 - INSET;
    let bottom = -0.5 + INSET;
    let top = bottom + THICKNESS;
    local.horizontal(t, [edge, edge], [-edge, -edge], top);

    let rim = AtlasRegion {
        dv: TEX32 * THICKNESS,
        ..AtlasRegion::tile(t)
    };
    local.region_vertical(rim, [edge, bottom, edge], [-edge, top, edge]);
    local.region_vertical(rim, [edge, bottom, edge], [edge, top, -edge]);
    local.region_vertical(rim, [-edge, bottom, -edge], [-edge, top, edge]);
    local.region_vertical(rim, [-edge, bottom, -edge], [edge, top, -edge]);
}

#[cfg(test)]
mod tests {
    use chunkray_assets::{BlockCatalog, BlockType, DecorationTable, ShapeKind};

    use super::*;
    use crate::atlas::tile_origin;
    use crate::shapes::testing::draw;
    use crate::visibility::FaceMask;

    #[test]
    fn door_truth_table() {
        assert_eq!(door_face(0b0000), Direction::North);
        assert_eq!(door_face(0b0100), Direction::East);
        assert_eq!(door_face(0b0001), Direction::East);
        assert_eq!(door_face(0b0101), Direction::South);
        assert_eq!(door_face(0b0010), Direction::South);
        assert_eq!(door_face(0b0110), Direction::West);
        assert_eq!(door_face(0b0011), Direction::West);
        assert_eq!(door_face(0b0111), Direction::North);
        assert_eq!(door_face(0b1000), Direction::North);
    }

    fn catalog() -> BlockCatalog {
        BlockCatalog::new(vec![
            BlockType::new(64, "wooden_door", false, ShapeKind::Door, Some(97)),
            BlockType::new(96, "trapdoor", false, ShapeKind::Trapdoor, Some(84)),
        ])
        .expect("catalog")
    }

    #[test]
    fn closed_door_draws_on_the_north_wall() {
        let mesh = draw(
            &catalog(),
            &DecorationTable::new(),
            |b| {
                b.set_block(3, 3, 3, 64, 0);
            },
            (3, 3, 3),
            FaceMask::all(),
        );
        assert_eq!(mesh.quad_count(), 1);
        assert!(mesh.vertices.iter().all(|v| v.position[0] == 2.5));

        let swung = draw(
            &catalog(),
            &DecorationTable::new(),
            |b| {
                b.set_block(3, 3, 3, 64, 0b1100);
            },
            (3, 3, 3),
            FaceMask::all(),
        );
        assert!(swung.vertices.iter().all(|v| v.position[2] == 2.5));
        assert_eq!(swung.vertices[0].uv, tile_origin(97 - 16));
    }

    #[test]
    fn swung_trapdoor_stands_upright() {
        let flat = draw(
            &catalog(),
            &DecorationTable::new(),
            |b| {
                b.set_block(3, 3, 3, 96, 0);
            },
            (3, 3, 3),
            FaceMask::all(),
        );
        assert_eq!(flat.quad_count(), 5);
        let flat_height = flat.vertices.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert!(flat_height < 2.7);

        let swung = draw(
            &catalog(),
            &DecorationTable::new(),
            |b| {
                b.set_block(3, 3, 3, 96, 0b0100);
            },
            (3, 3, 3),
            FaceMask::all(),
        );
        let top = swung.vertices.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert!(top > 3.4);
    }
}
