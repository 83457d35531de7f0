//! Property tests for face culling of full cubes.

use std::collections::HashSet;

use chunkray_assets::{BlockCatalog, BlockType, DecorationTable, PaintingTable};
use chunkray_render::{mesh_chunk, MeshContext, OreSelection, RenderOptions, RenderPass};
use chunkray_world::{ChunkBuilder, ChunkPos, Level, BLOCK_GLASS, BLOCK_STONE};
use proptest::prelude::*;

const BASE_Y: usize = 40;

fn catalog() -> BlockCatalog {
    let mut glass = BlockType::cube(BLOCK_GLASS, "glass", 49);
    glass.solid = false;
    BlockCatalog::new(vec![BlockType::cube(BLOCK_STONE, "stone", 1), glass]).expect("catalog")
}

/// Faces of `cells` not shared with another member of the set.
fn open_faces(cells: &HashSet<(i32, i32, i32)>) -> usize {
    const OFFSETS: [(i32, i32, i32); 6] = [(1, 0, 0), (-1, 0, 0), (0, 1, 0), (0, -1, 0), (0, 0, 1), (0, 0, -1)];
    cells
        .iter()
        .map(|&(x, y, z)| {
            OFFSETS
                .iter()
                .filter(|(dx, dy, dz)| !cells.contains(&(x + dx, y + dy, z + dz)))
                .count()
        })
        .sum()
}

fn cell() -> impl Strategy<Value = (i32, i32, i32)> {
    (0i32..5, 0i32..5, 0i32..5)
}

proptest! {
    /// Property: an isolated chunk's opaque pass draws exactly one quad per
    /// stone face that does not touch other stone.
    #[test]
    fn opaque_quads_match_open_faces(cells in prop::collection::hash_set(cell(), 1..40)) {
        let mut builder = ChunkBuilder::new(ChunkPos::new(0, 0));
        for &(x, y, z) in &cells {
            builder.set_block(x as usize, BASE_Y + y as usize, z as usize, BLOCK_STONE, 0);
        }
        let level: Level = [builder.build()].into_iter().collect();
        let catalog = catalog();
        let decorations = DecorationTable::new();
        let paintings = PaintingTable::classic();
        let ctx = MeshContext::new(&level, &catalog, &decorations, &paintings);
        let chunk = level.get(ChunkPos::new(0, 0)).expect("loaded");

        let opaque = mesh_chunk(chunk, &ctx, RenderPass::Opaque, RenderOptions::default(), &OreSelection::new());
        prop_assert_eq!(opaque.quad_count(), open_faces(&cells));

        let transparent = mesh_chunk(chunk, &ctx, RenderPass::Transparent, RenderOptions::default(), &OreSelection::new());
        prop_assert!(transparent.is_empty());
    }

    /// Property: swapping solid for non-solid blocks moves the same faces
    /// from the opaque pass to the transparent pass.
    #[test]
    fn glass_culls_like_stone_in_its_own_pass(cells in prop::collection::hash_set(cell(), 1..40)) {
        let mut builder = ChunkBuilder::new(ChunkPos::new(3, -2));
        for &(x, y, z) in &cells {
            builder.set_block(4 + x as usize, BASE_Y + y as usize, 4 + z as usize, BLOCK_GLASS, 0);
        }
        let level: Level = [builder.build()].into_iter().collect();
        let catalog = catalog();
        let decorations = DecorationTable::new();
        let paintings = PaintingTable::classic();
        let ctx = MeshContext::new(&level, &catalog, &decorations, &paintings);
        let chunk = level.get(ChunkPos::new(3, -2)).expect("loaded");

        let transparent = mesh_chunk(chunk, &ctx, RenderPass::Transparent, RenderOptions::default(), &OreSelection::new());
        prop_assert_eq!(transparent.quad_count(), open_faces(&cells));
        let opaque = mesh_chunk(chunk, &ctx, RenderPass::Opaque, RenderOptions::default(), &OreSelection::new());
        prop_assert!(opaque.is_empty());
    }
}
