use chunkray_assets::{
    AbsoluteDirection, BlockType, RelativeDirection, ShapeKind, TEX_HUGE_MUSHROOM_PORES,
    TEX_HUGE_MUSHROOM_STEM,
};
use chunkray_world::{BlockMeta, Direction};

use super::BlockContext;
use crate::painter::Painter;

/// Sprite for each face of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FaceTextures {
    pub north: i32,
    pub south: i32,
    pub west: i32,
    pub east: i32,
    pub top: i32,
    pub bottom: i32,
}

impl FaceTextures {
    fn uniform(texture: i32) -> Self {
        Self {
            north: texture,
            south: texture,
            west: texture,
            east: texture,
            top: texture,
            bottom: texture,
        }
    }
}

/// Per-face sprites for a cube-like block.
///
/// Starts from the resolved `texture`, applies the huge-mushroom table for
/// that family, then the facing-relative overrides. Table and override
/// sprites are shifted by `tex_offset`.
pub(crate) fn face_textures(
    block: &BlockType,
    meta: BlockMeta,
    texture: i32,
    tex_offset: i32,
) -> FaceTextures {
    let mut faces = FaceTextures::uniform(texture);
    if block.shape == ShapeKind::HugeMushroom {
        huge_mushroom(&mut faces, meta, tex_offset);
    }
    if block.texture_by_direction.is_some() {
        let slot = |rel| block.direction_texture(rel).map(|t| i32::from(t) + tex_offset);
        let forward = slot(RelativeDirection::Forward);
        let backward = slot(RelativeDirection::Backward);
        let sides = slot(RelativeDirection::Sides);
        let (north, south, west, east) = match block.facing(meta) {
            AbsoluteDirection::North => (forward, backward, sides, sides),
            AbsoluteDirection::South => (backward, forward, sides, sides),
            AbsoluteDirection::West => (sides, sides, forward, backward),
            AbsoluteDirection::East => (sides, sides, backward, forward),
        };
        faces.north = north.unwrap_or(faces.north);
        faces.south = south.unwrap_or(faces.south);
        faces.west = west.unwrap_or(faces.west);
        faces.east = east.unwrap_or(faces.east);
        faces.top = slot(RelativeDirection::Top).unwrap_or(faces.top);
        faces.bottom = slot(RelativeDirection::Bottom).unwrap_or(faces.bottom);
    }
    faces
}

/// Apply the huge-mushroom face table; faces it leaves alone keep the cap skin.
fn huge_mushroom(faces: &mut FaceTextures, meta: BlockMeta, tex_offset: i32) {
    let pores = i32::from(TEX_HUGE_MUSHROOM_PORES) + tex_offset;
    let stem = i32::from(TEX_HUGE_MUSHROOM_STEM) + tex_offset;
    // (north, south, west, east) faces showing pores.
    let inner = match meta {
        1 => (false, true, true, false),
        2 => (true, true, true, false),
        3 => (true, false, true, false),
        4 => (false, true, true, true),
        5 => (true, true, true, true),
        6 => (true, false, true, true),
        7 => (false, true, false, true),
        8 => (true, true, false, true),
        9 => (true, false, false, true),
        10 => {
            *faces = FaceTextures {
                top: pores,
                bottom: pores,
                ..FaceTextures::uniform(stem)
            };
            return;
        }
        _ => {
            *faces = FaceTextures::uniform(pores);
            return;
        }
    };
    let (north, south, west, east) = inner;
    let pick = |show: bool, current: i32| if show { pores } else { current };
    faces.north = pick(north, faces.north);
    faces.south = pick(south, faces.south);
    faces.west = pick(west, faces.west);
    faces.east = pick(east, faces.east);
    faces.bottom = pores;
}

/// Full cube with per-face sprites and culling.
pub(super) fn cube(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    let t = face_textures(ctx.block, ctx.meta, ctx.texture, ctx.tex_offset);
    let (x, y, z) = (ctx.x, ctx.y, ctx.z);
    let faces = ctx.faces;
    if faces.shows(Direction::East) {
        painter.west_east(t.east, x, y, z);
    }
    if faces.shows(Direction::West) {
        painter.west_east(t.west, x, y, z + 1.0);
    }
    if faces.shows(Direction::Down) {
        painter.top_down(t.bottom, x, y, z);
    }
    if faces.shows(Direction::Up) {
        painter.top_down(t.top, x, y + 1.0, z);
    }
    if faces.shows(Direction::North) {
        painter.north_south(t.north, x, y, z);
    }
    if faces.shows(Direction::South) {
        painter.north_south(t.south, x + 1.0, y, z);
    }
}

/// Slab: bottom half of a cube. The top is drawn whenever the block is.
pub(super) fn half_height(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    const SIDE: f32 = 0.495;
    let (t, x, y, z) = (ctx.texture, ctx.x, ctx.y, ctx.z);
    let faces = ctx.faces;
    if faces.shows(Direction::East) {
        painter.west_east_scaled(t, x, y, z, 0.0, SIDE);
    }
    if faces.shows(Direction::West) {
        painter.west_east_scaled(t, x, y, z + 1.0, 0.0, SIDE);
    }
    if faces.shows(Direction::Down) {
        painter.top_down(t, x, y, z);
    }
    painter.top_down(t, x, y + 0.5, z);
    if faces.shows(Direction::North) {
        painter.north_south_scaled(t, x, y, z, 0.0, SIDE);
    }
    if faces.shows(Direction::South) {
        painter.north_south_scaled(t, x + 1.0, y, z, 0.0, SIDE);
    }
}

#[cfg(test)]
mod tests {
    use chunkray_assets::{BlockCatalog, DecorationTable};
    use chunkray_world::BLOCK_STONE;

    use super::*;
    use crate::shapes::testing::draw;
    use crate::visibility::FaceMask;

    fn mushroom() -> BlockType {
        BlockType::new(99, "huge_brown_mushroom", true, ShapeKind::HugeMushroom, Some(126))
    }

    #[test]
    fn mushroom_table_covers_caps_and_stems() {
        let pores = i32::from(TEX_HUGE_MUSHROOM_PORES);
        let stem = i32::from(TEX_HUGE_MUSHROOM_STEM);

        let corner = face_textures(&mushroom(), 1, 126, 0);
        assert_eq!((corner.north, corner.south, corner.west, corner.east), (126, pores, pores, 126));
        assert_eq!((corner.top, corner.bottom), (126, pores));

        let stalk = face_textures(&mushroom(), 10, 126, 0);
        assert_eq!((stalk.north, stalk.east, stalk.top), (stem, stem, pores));

        for meta in [0, 11, 15] {
            assert_eq!(face_textures(&mushroom(), meta, 126, 0), FaceTextures::uniform(pores));
        }
    }

    #[test]
    fn facing_rotates_direction_slots() {
        let furnace = BlockType::cube(61, "furnace", 45)
            .with_direction_textures([
                (RelativeDirection::Forward, 44),
                (RelativeDirection::Sides, 45),
                (RelativeDirection::Backward, 45),
                (RelativeDirection::Top, 62),
            ])
            .with_facings([
                (2, AbsoluteDirection::East),
                (3, AbsoluteDirection::West),
                (5, AbsoluteDirection::South),
            ]);

        let north = face_textures(&furnace, 0, 45, 0);
        assert_eq!((north.north, north.top, north.bottom), (44, 62, 45));
        assert_eq!(face_textures(&furnace, 5, 45, 0).south, 44);
        assert_eq!(face_textures(&furnace, 3, 45, 0).west, 44);
        let east = face_textures(&furnace, 2, 45, 256);
        assert_eq!((east.east, east.west, east.north), (300, 301, 301));
    }

    #[test]
    fn one_exposed_face_emits_one_quad() {
        let catalog = BlockCatalog::new(vec![BlockType::cube(BLOCK_STONE, "stone", 1)]).expect("catalog");
        let mesh = draw(
            &catalog,
            &DecorationTable::new(),
            |b| {
                b.set_block(3, 3, 3, BLOCK_STONE, 0);
            },
            (3, 3, 3),
            FaceMask::UP,
        );
        assert_eq!(mesh.quad_count(), 1);
        assert!(mesh.vertices.iter().all(|v| v.position[1] == 3.5));
    }

    #[test]
    fn slab_top_is_drawn_even_when_hidden() {
        let catalog = BlockCatalog::new(vec![BlockType::new(
            44,
            "slab",
            false,
            ShapeKind::HalfHeight,
            Some(6),
        )])
        .expect("catalog");
        let mesh = draw(
            &catalog,
            &DecorationTable::new(),
            |b| {
                b.set_block(3, 3, 3, 44, 0);
            },
            (3, 3, 3),
            FaceMask::NORTH,
        );
        assert_eq!(mesh.quad_count(), 2);
        assert!(mesh.vertices.iter().any(|v| v.position[1] == 3.0));
    }
}
