//! Full-chunk scan producing one pass worth of geometry.

use chunkray_assets::{BlockCatalog, DecorationTable, PaintingTable, ShapeKind};
use chunkray_world::{
    Adjacency, Chunk, ChunkLookup, BLOCK_AIR, BLOCK_TORCH, CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z,
};

use crate::atlas::HIGHLIGHT_BANK;
use crate::mesh::{MeshBuffers, MeshBuilder};
use crate::painter::Painter;
use crate::shapes::{draw_block, BlockContext};
use crate::visibility::{exposed_faces, resolve_texture, FaceMask, OreSelection, RenderOptions, RenderPass};

/// Chebyshev radius searched for torches when highlighting explored areas.
const EXPLORED_RADIUS: i32 = 3;

/// Shared read-only inputs for meshing.
#[derive(Clone, Copy)]
pub struct MeshContext<'a> {
    /// Neighbor chunk source for cross-border lookups.
    pub level: &'a dyn ChunkLookup,
    /// Block rendering rules.
    pub catalog: &'a BlockCatalog,
    /// Decoration sizes keyed by sprite.
    pub decorations: &'a DecorationTable,
    /// Painting motives.
    pub paintings: &'a PaintingTable,
}

impl<'a> MeshContext<'a> {
    /// Bundle the lookups one meshing call needs.
    pub fn new(
        level: &'a dyn ChunkLookup,
        catalog: &'a BlockCatalog,
        decorations: &'a DecorationTable,
        paintings: &'a PaintingTable,
    ) -> Self {
        Self {
            level,
            catalog,
            decorations,
            paintings,
        }
    }
}

/// Mesh every block of `chunk` that belongs to `pass`.
///
/// Options the pass does not honour are ignored, so callers can pass the
/// global toggles unchanged.
pub fn mesh_chunk(
    chunk: &Chunk,
    ctx: &MeshContext<'_>,
    pass: RenderPass,
    options: RenderOptions,
    selection: &OreSelection,
) -> MeshBuffers {
    let options = options.for_pass(pass);
    let transparent = pass == RenderPass::Transparent;
    let adjacency: Adjacency<'_, dyn ChunkLookup + '_> = Adjacency::new(chunk, ctx.level);
    let (origin_x, origin_z) = chunk.position().origin();
    let mut mesh = MeshBuilder::new();

    for x in 0..CHUNK_SIZE_X {
        for z in 0..CHUNK_SIZE_Z {
            for y in 0..CHUNK_SIZE_Y {
                let id = chunk.block_id(x, y, z);
                if id == BLOCK_AIR {
                    continue;
                }
                let block = ctx.catalog.get(id);

                let faces = if pass == RenderPass::Selected {
                    if !selection.contains(id) {
                        continue;
                    }
                    FaceMask::all()
                } else {
                    if block.solid == transparent {
                        continue;
                    }
                    exposed_faces(&adjacency, ctx.catalog, id, (x, y, z), transparent, options.force_bedrock)
                };
                if block.shape == ShapeKind::Water && !options.force_water {
                    continue;
                }
                if faces.is_empty() {
                    continue;
                }

                let meta = chunk.block_meta(x, y, z);
                let Some(mut texture) = resolve_texture(block, meta) else {
                    continue;
                };
                let mut tex_offset = 0;
                if options.highlight_explored
                    && adjacency.has_block_within(x, y, z, EXPLORED_RADIUS, BLOCK_TORCH)
                {
                    texture += HIGHLIGHT_BANK;
                    tex_offset = HIGHLIGHT_BANK;
                }

                let block_ctx = BlockContext {
                    adjacency,
                    catalog: ctx.catalog,
                    decorations: ctx.decorations,
                    block,
                    id,
                    meta,
                    local: (x, y, z),
                    x: origin_x + x as f32,
                    y: y as f32,
                    z: origin_z + z as f32,
                    texture,
                    tex_offset,
                    faces,
                };
                draw_block(&block_ctx, &mut Painter::new(&mut mesh));
            }
        }
    }
    mesh.finish()
}

#[cfg(test)]
mod tests {
    use chunkray_assets::{BlockType, DecorationTable, PaintingTable};
    use chunkray_world::{
        ChunkBuilder, ChunkPos, Level, BLOCK_BEDROCK, BLOCK_GLASS, BLOCK_STONE, BLOCK_WATER, BLOCK_DIAMOND_ORE,
    };

    use super::*;
    use crate::atlas::{tile_origin, TEX32};

    fn catalog() -> BlockCatalog {
        BlockCatalog::new(vec![
            BlockType::cube(BLOCK_STONE, "stone", 1),
            BlockType::cube(BLOCK_BEDROCK, "bedrock", 17),
            BlockType::cube(BLOCK_DIAMOND_ORE, "diamond_ore", 50),
            BlockType::new(BLOCK_GLASS, "glass", false, ShapeKind::Cube, Some(49)),
            BlockType::new(BLOCK_WATER, "water", false, ShapeKind::Water, Some(205)),
            BlockType::new(BLOCK_TORCH, "torch", false, ShapeKind::Torch, Some(80)),
        ])
        .expect("catalog")
    }

    struct Fixture {
        catalog: BlockCatalog,
        decorations: DecorationTable,
        paintings: PaintingTable,
        level: Level,
    }

    impl Fixture {
        fn new(chunks: impl IntoIterator<Item = Chunk>) -> Self {
            Self {
                catalog: catalog(),
                decorations: DecorationTable::new(),
                paintings: PaintingTable::classic(),
                level: chunks.into_iter().collect(),
            }
        }

        fn mesh(&self, pos: ChunkPos, pass: RenderPass, options: RenderOptions, selection: &OreSelection) -> MeshBuffers {
            let ctx = MeshContext::new(&self.level, &self.catalog, &self.decorations, &self.paintings);
            let chunk = self.level.get(pos).expect("chunk loaded");
            mesh_chunk(chunk, &ctx, pass, options, selection)
        }
    }

    fn chunk_with(setup: impl FnOnce(&mut ChunkBuilder)) -> Chunk {
        let mut builder = ChunkBuilder::new(ChunkPos::new(0, 0));
        setup(&mut builder);
        builder.build()
    }

    fn stone_cube(builder: &mut ChunkBuilder) {
        builder.fill((4, 10, 4), (6, 12, 6), BLOCK_STONE);
    }

    const ORIGIN: ChunkPos = ChunkPos::new(0, 0);

    #[test]
    fn air_never_emits_geometry() {
        let fixture = Fixture::new([chunk_with(|_| {})]);
        for pass in [RenderPass::Opaque, RenderPass::Transparent, RenderPass::Selected] {
            let mesh = fixture.mesh(ORIGIN, pass, RenderOptions::default(), &OreSelection::new());
            assert!(mesh.is_empty());
        }
    }

    #[test]
    fn enclosed_block_has_no_faces() {
        let fixture = Fixture::new([chunk_with(stone_cube)]);
        let mesh = fixture.mesh(ORIGIN, RenderPass::Opaque, RenderOptions::default(), &OreSelection::new());
        // A 3x3x3 cube shows 9 faces per side and nothing from its centre.
        assert_eq!(mesh.quad_count(), 6 * 9);
    }

    #[test]
    fn single_opening_shows_one_face() {
        let fixture = Fixture::new([chunk_with(|b| {
            stone_cube(b);
            b.set_block(5, 11, 5, BLOCK_DIAMOND_ORE, 0);
            b.set_block(6, 11, 5, BLOCK_GLASS, 0);
        })]);
        let selection = OreSelection::new();
        let mesh = fixture.mesh(ORIGIN, RenderPass::Opaque, RenderOptions::default(), &selection);
        let ore_uv = tile_origin(50);
        let ore_vertices: Vec<_> = mesh
            .vertices
            .iter()
            .filter(|v| (v.uv[0] - ore_uv[0]).abs() < 1e-6 && (v.uv[1] - ore_uv[1]).abs() < 1e-6)
            .collect();
        assert_eq!(ore_vertices.len(), 1);
        assert!((ore_vertices[0].position[0] - 5.5).abs() < 1e-6);
    }

    #[test]
    fn selected_blocks_draw_every_face() {
        let fixture = Fixture::new([chunk_with(|b| {
            stone_cube(b);
            b.set_block(5, 11, 5, BLOCK_DIAMOND_ORE, 0);
        })]);
        let selection: OreSelection = [BLOCK_DIAMOND_ORE].into_iter().collect();
        let mesh = fixture.mesh(ORIGIN, RenderPass::Selected, RenderOptions::default(), &selection);
        assert_eq!(mesh.quad_count(), 6);

        let nothing = fixture.mesh(ORIGIN, RenderPass::Selected, RenderOptions::default(), &OreSelection::new());
        assert!(nothing.is_empty());
    }

    #[test]
    fn passes_split_by_solidity() {
        let fixture = Fixture::new([chunk_with(|b| {
            b.set_block(2, 2, 2, BLOCK_GLASS, 0);
        })]);
        let options = RenderOptions::default();
        let selection = OreSelection::new();
        assert!(fixture.mesh(ORIGIN, RenderPass::Opaque, options, &selection).is_empty());
        assert_eq!(fixture.mesh(ORIGIN, RenderPass::Transparent, options, &selection).quad_count(), 6);
    }

    #[test]
    fn water_needs_forcing_in_the_transparent_pass() {
        let fixture = Fixture::new([chunk_with(|b| {
            b.set_block(2, 2, 2, BLOCK_WATER, 0);
        })]);
        let selection = OreSelection::new();
        let forced = RenderOptions {
            force_water: true,
            ..RenderOptions::default()
        };
        assert!(fixture
            .mesh(ORIGIN, RenderPass::Transparent, RenderOptions::default(), &selection)
            .is_empty());
        assert_eq!(fixture.mesh(ORIGIN, RenderPass::Transparent, forced, &selection).quad_count(), 6);
    }

    #[test]
    fn forced_bedrock_culls_only_against_bedrock() {
        let fixture = Fixture::new([chunk_with(|b| {
            b.set_block(3, 3, 3, BLOCK_BEDROCK, 0);
            b.set_block(4, 3, 3, BLOCK_BEDROCK, 0);
            b.set_block(3, 4, 3, BLOCK_STONE, 0);
        })]);
        let selection = OreSelection::new();
        let forced = RenderOptions {
            force_bedrock: true,
            ..RenderOptions::default()
        };
        let plain = fixture.mesh(ORIGIN, RenderPass::Opaque, RenderOptions::default(), &selection);
        let with_bedrock = fixture.mesh(ORIGIN, RenderPass::Opaque, forced, &selection);
        // The stone above still culls the bedrock top unless bedrock is forced.
        assert_eq!(with_bedrock.quad_count(), plain.quad_count() + 1);
    }

    #[test]
    fn explored_blocks_use_the_highlight_bank() {
        let fixture = Fixture::new([chunk_with(|b| {
            b.set_block(8, 8, 8, BLOCK_STONE, 0);
            b.set_block(8, 8, 11, BLOCK_TORCH, 5);
            b.set_block(1, 8, 1, BLOCK_STONE, 0);
        })]);
        let options = RenderOptions {
            highlight_explored: true,
            ..RenderOptions::default()
        };
        let mesh = fixture.mesh(ORIGIN, RenderPass::Opaque, options, &OreSelection::new());
        let mut near = mesh.vertices.iter().filter(|v| v.position[0] > 7.0 && v.position[0] < 9.0);
        assert!(near.clone().count() > 0);
        assert!(near.all(|v| v.uv[1] >= 8.0 * TEX32 * 2.0));
        let mut far = mesh.vertices.iter().filter(|v| v.position[0] < 2.0);
        assert!(far.clone().count() > 0);
        assert!(far.all(|v| v.uv[1] < 0.5));
    }

    #[test]
    fn neighbor_chunk_hides_the_border_face() {
        let left = {
            let mut b = ChunkBuilder::new(ChunkPos::new(-1, 0));
            b.set_block(15, 5, 5, BLOCK_STONE, 0);
            b.build()
        };
        let right = chunk_with(|b| {
            b.set_block(0, 5, 5, BLOCK_STONE, 0);
        });
        let alone = Fixture::new([right.clone()]);
        let joined = Fixture::new([left, right]);
        let selection = OreSelection::new();
        let options = RenderOptions::default();
        assert_eq!(alone.mesh(ORIGIN, RenderPass::Opaque, options, &selection).quad_count(), 6);
        assert_eq!(joined.mesh(ORIGIN, RenderPass::Opaque, options, &selection).quad_count(), 5);
    }
}
