//! Small generated world used when no save is supplied.

use chunkray_world::{
    BlockId, Chunk, ChunkBuilder, ChunkPos, Level, PaintingPlacement, BLOCK_BEDROCK, BLOCK_COAL_ORE,
    BLOCK_DIAMOND_ORE, BLOCK_DIRT, BLOCK_FENCE, BLOCK_GOLD_ORE, BLOCK_IRON_ORE, BLOCK_STONE,
    BLOCK_TORCH, BLOCK_WATER, CHUNK_SIZE_X, CHUNK_SIZE_Z,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

const BLOCK_GRASS: BlockId = 2;
const BLOCK_GLASS_PANE: BlockId = 102;

const STONE_TOP: usize = 48;
const SURFACE: usize = 52;

/// Ore, veins per chunk, highest Y.
const ORES: [(BlockId, usize, usize); 4] = [
    (BLOCK_COAL_ORE, 20, STONE_TOP),
    (BLOCK_IRON_ORE, 10, 40),
    (BLOCK_GOLD_ORE, 4, 24),
    (BLOCK_DIAMOND_ORE, 2, 14),
];

/// Build every chunk within `radius` of the origin.
pub fn demo_level(radius: i32, seed: u64) -> Level {
    let mut level = Level::new();
    for cx in -radius..=radius {
        for cz in -radius..=radius {
            level.insert(demo_chunk(ChunkPos::new(cx, cz), seed));
        }
    }
    debug!(chunks = level.len(), radius, "generated demo level");
    level
}

fn chunk_seed(pos: ChunkPos, seed: u64) -> u64 {
    seed ^ (u64::from(pos.x as u32) << 32) ^ u64::from(pos.z as u32)
}

/// Layered terrain with scattered ore, a torch-lit cave pocket and, at the
/// origin, a handful of decorative blocks.
pub fn demo_chunk(pos: ChunkPos, seed: u64) -> Chunk {
    let mut rng = StdRng::seed_from_u64(chunk_seed(pos, seed));
    let mut b = ChunkBuilder::new(pos);

    b.fill((0, 0, 0), (15, 0, 15), BLOCK_BEDROCK);
    b.fill((0, 1, 0), (15, STONE_TOP, 15), BLOCK_STONE);
    for x in 0..CHUNK_SIZE_X {
        for z in 0..CHUNK_SIZE_Z {
            for y in 1..4 {
                if rng.gen_bool(0.4) {
                    b.set_block(x, y, z, BLOCK_BEDROCK, 0);
                }
            }
        }
    }
    b.fill((0, STONE_TOP + 1, 0), (15, SURFACE - 1, 15), BLOCK_DIRT);
    b.fill((0, SURFACE, 0), (15, SURFACE, 15), BLOCK_GRASS);

    for (ore, veins, max_y) in ORES {
        for _ in 0..veins {
            let x = rng.gen_range(0..CHUNK_SIZE_X);
            let y = rng.gen_range(4..=max_y);
            let z = rng.gen_range(0..CHUNK_SIZE_Z);
            b.set_block(x, y, z, ore, 0);
        }
    }

    let (cave_x, cave_y, cave_z) = (rng.gen_range(4..12), rng.gen_range(12..30), rng.gen_range(4..12));
    b.fill((cave_x - 2, cave_y, cave_z - 2), (cave_x + 2, cave_y + 3, cave_z + 2), 0);
    b.set_block(cave_x, cave_y, cave_z, BLOCK_TORCH, 5);

    if pos == ChunkPos::new(0, 0) {
        b.fill((2, SURFACE, 2), (4, SURFACE, 4), BLOCK_WATER);
        for x in 6..12 {
            b.set_block(x, SURFACE + 1, 3, BLOCK_FENCE, 0);
        }
        for z in 6..9 {
            b.set_block(8, SURFACE + 1, z, BLOCK_GLASS_PANE, 0);
        }
        b.set_block(12, SURFACE + 1, 12, BLOCK_STONE, 0);
        b.add_painting(PaintingPlacement::new((12, SURFACE as i32 + 1, 13), 2, "Kebab"));
    }
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = demo_chunk(ChunkPos::new(2, -1), 7);
        let b = demo_chunk(ChunkPos::new(2, -1), 7);
        let c = demo_chunk(ChunkPos::new(2, -1), 8);
        assert_eq!(a.block_ids(), b.block_ids());
        assert_ne!(a.block_ids(), c.block_ids());
    }

    #[test]
    fn columns_are_capped_and_floored() {
        let chunk = demo_chunk(ChunkPos::new(1, 1), 3);
        for x in 0..CHUNK_SIZE_X {
            for z in 0..CHUNK_SIZE_Z {
                assert_eq!(chunk.block_id(x, 0, z), BLOCK_BEDROCK);
                assert_eq!(chunk.block_id(x, SURFACE + 2, z), 0);
            }
        }
    }

    #[test]
    fn level_covers_the_radius() {
        let level = demo_level(1, 0);
        assert_eq!(level.len(), 9);
        assert!(level.contains(ChunkPos::new(-1, 1)));
        assert_eq!(level.get(ChunkPos::new(0, 0)).map(|c| c.paintings().len()), Some(1));
    }
}
