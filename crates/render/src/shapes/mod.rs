//! Geometry generators, one per [`ShapeKind`] family.

mod cube;
mod decoration;
mod door;
mod fence;
mod flat;
mod furniture;
mod sign;
mod stairs;

use chunkray_assets::{BlockCatalog, BlockType, DecorationStats, DecorationTable, ShapeKind, TextureId};
use chunkray_world::{Adjacency, BlockId, BlockMeta, ChunkLookup, Direction};

use crate::painter::Painter;
use crate::visibility::FaceMask;

pub(crate) use cube::{face_textures, FaceTextures};
pub(crate) use door::door_face;

/// Everything a generator needs to draw one block.
pub(crate) struct BlockContext<'a> {
    pub adjacency: Adjacency<'a, dyn ChunkLookup + 'a>,
    pub catalog: &'a BlockCatalog,
    pub decorations: &'a DecorationTable,
    pub block: &'a BlockType,
    pub id: BlockId,
    pub meta: BlockMeta,
    /// Chunk-local coordinates.
    pub local: (usize, usize, usize),
    /// World-space block centre.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Resolved sprite, already shifted into the highlight bank when needed.
    pub texture: i32,
    /// Bank offset applied to `texture` (0 or the highlight bank).
    pub tex_offset: i32,
    pub faces: FaceMask,
}

impl BlockContext<'_> {
    /// Id of the neighboring block, `None` when it is not loaded.
    pub fn neighbor(&self, direction: Direction) -> Option<BlockId> {
        let (x, y, z) = self.local;
        self.adjacency.neighbor(direction, x, y, z)
    }

    /// Decoration stats for a sprite in either bank.
    pub fn decoration(&self, texture: i32) -> Option<&DecorationStats> {
        let key = TextureId::try_from(texture.rem_euclid(256)).ok()?;
        self.decorations.get(key)
    }
}

/// Emit the geometry for one block.
pub(crate) fn draw_block(ctx: &BlockContext<'_>, painter: &mut Painter<'_>) {
    match ctx.block.shape {
        ShapeKind::Cube | ShapeKind::Water | ShapeKind::HugeMushroom => cube::cube(ctx, painter),
        ShapeKind::HalfHeight => cube::half_height(ctx, painter),
        ShapeKind::Torch => decoration::torch(ctx, painter),
        ShapeKind::Lever => decoration::lever(ctx, painter),
        ShapeKind::Sapling | ShapeKind::DecorationCross => decoration::cross(ctx, painter),
        ShapeKind::Crops => decoration::crops(ctx, painter),
        ShapeKind::Ladder => flat::ladder(ctx, painter),
        ShapeKind::Vine => flat::vine(ctx, painter),
        ShapeKind::Floor => flat::floor(ctx, painter),
        ShapeKind::MinecartTracks => flat::minecart_tracks(ctx, painter),
        ShapeKind::SimpleRail => flat::simple_rail(ctx, painter),
        ShapeKind::PressurePlate => flat::pressure_plate(ctx, painter),
        ShapeKind::ThinSlice => flat::thin_slice(ctx, painter),
        ShapeKind::Portal => flat::portal(ctx, painter),
        ShapeKind::Stairs => stairs::stairs(ctx, painter),
        ShapeKind::Door => door::door(ctx, painter),
        ShapeKind::Trapdoor => door::trapdoor(ctx, painter),
        ShapeKind::Fence => fence::fence(ctx, painter),
        ShapeKind::FenceGate => fence::fence_gate(ctx, painter),
        ShapeKind::SolidPane => fence::solid_pane(ctx, painter),
        ShapeKind::Signpost => sign::signpost(ctx, painter),
        ShapeKind::WallSign => sign::wall_sign(ctx, painter),
        ShapeKind::Button => sign::button(ctx, painter),
        ShapeKind::Bed => furniture::bed(ctx, painter),
        ShapeKind::PistonBody => furniture::piston_body(ctx, painter),
        ShapeKind::PistonHead => furniture::piston_head(ctx, painter),
        ShapeKind::Cake => furniture::cake(ctx, painter),
    }
}
