use std::fmt;

use thiserror::Error;

use crate::PaintingPlacement;

/// Chunk width (X axis) in blocks.
pub const CHUNK_SIZE_X: usize = 16;
/// Chunk height (Y axis) in blocks.
pub const CHUNK_SIZE_Y: usize = 128;
/// Chunk depth (Z axis) in blocks.
pub const CHUNK_SIZE_Z: usize = 16;
/// Total block count per chunk.
pub const CHUNK_VOLUME: usize = CHUNK_SIZE_X * CHUNK_SIZE_Y * CHUNK_SIZE_Z;
/// Byte length of the nibble-packed metadata array.
pub const CHUNK_META_BYTES: usize = CHUNK_VOLUME / 2;
/// Highest valid local Y coordinate.
pub const MAX_Y: usize = CHUNK_SIZE_Y - 1;

/// Block identifier referencing the catalog.
pub type BlockId = u16;
/// Four-bit per-block metadata value.
pub type BlockMeta = u8;

/// Reserved ID for air.
pub const BLOCK_AIR: BlockId = 0;
/// ID for stone.
pub const BLOCK_STONE: BlockId = 1;
/// ID for dirt.
pub const BLOCK_DIRT: BlockId = 3;
/// ID for cobblestone (lever bases borrow its texture).
pub const BLOCK_COBBLESTONE: BlockId = 4;
/// ID for saplings.
pub const BLOCK_SAPLING: BlockId = 6;
/// ID for bedrock.
pub const BLOCK_BEDROCK: BlockId = 7;
/// ID for still water.
pub const BLOCK_WATER: BlockId = 9;
/// ID for glass.
pub const BLOCK_GLASS: BlockId = 20;
/// ID for sticky pistons.
pub const BLOCK_STICKY_PISTON: BlockId = 29;
/// ID for coal ore.
pub const BLOCK_COAL_ORE: BlockId = 16;
/// ID for iron ore.
pub const BLOCK_IRON_ORE: BlockId = 15;
/// ID for gold ore.
pub const BLOCK_GOLD_ORE: BlockId = 14;
/// ID for diamond ore.
pub const BLOCK_DIAMOND_ORE: BlockId = 56;
/// ID for torches.
pub const BLOCK_TORCH: BlockId = 50;
/// ID for wooden fences.
pub const BLOCK_FENCE: BlockId = 85;
/// ID for iron bars.
pub const BLOCK_IRON_BARS: BlockId = 101;

/// Chunk-local position (X, Y, Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl LocalPos {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Convert to a linear index (Y fastest, then Z, then X).
    pub fn index(self) -> usize {
        debug_assert!(self.x < CHUNK_SIZE_X);
        debug_assert!(self.y < CHUNK_SIZE_Y);
        debug_assert!(self.z < CHUNK_SIZE_Z);
        self.y + self.z * CHUNK_SIZE_Y + self.x * CHUNK_SIZE_Y * CHUNK_SIZE_Z
    }
}

/// Chunk coordinate (X,Z) in chunk space.
/// Implements Ord for deterministic iteration in BTreeMap/BTreeSet (sorts by x, then z).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Offset this position by whole chunks.
    pub const fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// World-space X/Z of the chunk's local origin.
    pub fn origin(self) -> (f32, f32) {
        (
            (self.x * CHUNK_SIZE_X as i32) as f32,
            (self.z * CHUNK_SIZE_Z as i32) as f32,
        )
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Rejected raw chunk payloads.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkDataError {
    /// Block id array has the wrong length.
    #[error("chunk {pos} block array has {actual} entries, expected {CHUNK_VOLUME}")]
    BlockLength { pos: ChunkPos, actual: usize },
    /// Metadata array has the wrong length.
    #[error("chunk {pos} metadata array has {actual} bytes, expected {CHUNK_META_BYTES}")]
    MetaLength { pos: ChunkPos, actual: usize },
}

/// A 16x128x16 column of blocks. Read-only once built.
#[derive(Clone)]
pub struct Chunk {
    position: ChunkPos,
    block_ids: Vec<BlockId>,
    block_meta: Vec<u8>,
    paintings: Vec<PaintingPlacement>,
}

impl Chunk {
    /// Wrap decoded arrays, validating their lengths.
    pub fn from_raw(
        position: ChunkPos,
        block_ids: Vec<BlockId>,
        block_meta: Vec<u8>,
        paintings: Vec<PaintingPlacement>,
    ) -> Result<Self, ChunkDataError> {
        if block_ids.len() != CHUNK_VOLUME {
            return Err(ChunkDataError::BlockLength {
                pos: position,
                actual: block_ids.len(),
            });
        }
        if block_meta.len() != CHUNK_META_BYTES {
            return Err(ChunkDataError::MetaLength {
                pos: position,
                actual: block_meta.len(),
            });
        }
        Ok(Self {
            position,
            block_ids,
            block_meta,
            paintings,
        })
    }

    pub fn position(&self) -> ChunkPos {
        self.position
    }

    /// Block id at local coordinates. Coordinates must be in range.
    #[inline]
    pub fn block_id(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.block_ids[LocalPos::new(x, y, z).index()]
    }

    /// Block id by precomputed linear offset.
    #[inline]
    pub fn block_id_at(&self, offset: usize) -> BlockId {
        self.block_ids[offset]
    }

    /// Four-bit metadata at local coordinates. Coordinates must be in range.
    #[inline]
    pub fn block_meta(&self, x: usize, y: usize, z: usize) -> BlockMeta {
        let offset = LocalPos::new(x, y, z).index();
        let byte = self.block_meta[offset / 2];
        if offset % 2 == 0 {
            byte & 0xF
        } else {
            (byte >> 4) & 0xF
        }
    }

    /// Painting entities attached to this chunk.
    pub fn paintings(&self) -> &[PaintingPlacement] {
        &self.paintings
    }

    /// Raw block id slice in linear order.
    pub fn block_ids(&self) -> &[BlockId] {
        &self.block_ids
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk")
            .field("position", &self.position)
            .field("paintings", &self.paintings.len())
            .finish_non_exhaustive()
    }
}

/// Mutable staging area used while decoding or synthesizing a chunk.
#[derive(Clone)]
pub struct ChunkBuilder {
    position: ChunkPos,
    block_ids: Vec<BlockId>,
    block_meta: Vec<u8>,
    paintings: Vec<PaintingPlacement>,
}

impl ChunkBuilder {
    /// Start from an all-air column.
    pub fn new(position: ChunkPos) -> Self {
        Self {
            position,
            block_ids: vec![BLOCK_AIR; CHUNK_VOLUME],
            block_meta: vec![0; CHUNK_META_BYTES],
            paintings: Vec::new(),
        }
    }

    /// Set both id and metadata for a block.
    pub fn set_block(&mut self, x: usize, y: usize, z: usize, id: BlockId, meta: BlockMeta) -> &mut Self {
        self.block_ids[LocalPos::new(x, y, z).index()] = id;
        self.set_meta(x, y, z, meta)
    }

    /// Overwrite the metadata nibble for a block.
    pub fn set_meta(&mut self, x: usize, y: usize, z: usize, meta: BlockMeta) -> &mut Self {
        let offset = LocalPos::new(x, y, z).index();
        let byte = &mut self.block_meta[offset / 2];
        if offset % 2 == 0 {
            *byte = (*byte & 0xF0) | (meta & 0xF);
        } else {
            *byte = (*byte & 0x0F) | ((meta & 0xF) << 4);
        }
        self
    }

    /// Fill an inclusive box with one block id.
    pub fn fill(
        &mut self,
        min: (usize, usize, usize),
        max: (usize, usize, usize),
        id: BlockId,
    ) -> &mut Self {
        for x in min.0..=max.0 {
            for y in min.1..=max.1 {
                for z in min.2..=max.2 {
                    self.set_block(x, y, z, id, 0);
                }
            }
        }
        self
    }

    pub fn add_painting(&mut self, painting: PaintingPlacement) -> &mut Self {
        self.paintings.push(painting);
        self
    }

    pub fn build(self) -> Chunk {
        Chunk {
            position: self.position,
            block_ids: self.block_ids,
            block_meta: self.block_meta,
            paintings: self.paintings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_pos_index_is_y_fastest() {
        assert_eq!(LocalPos::new(0, 0, 0).index(), 0);
        assert_eq!(LocalPos::new(0, 1, 0).index(), 1);
        assert_eq!(LocalPos::new(0, 0, 1).index(), 128);
        assert_eq!(LocalPos::new(1, 0, 0).index(), 2048);
        assert_eq!(LocalPos::new(15, 127, 15).index(), CHUNK_VOLUME - 1);
    }

    #[test]
    fn test_meta_nibbles_follow_offset_parity() {
        let mut meta = vec![0u8; CHUNK_META_BYTES];
        // offset 0 (even) and offset 1 (odd) share byte 0
        meta[0] = 0xA5;
        let chunk = Chunk::from_raw(ChunkPos::new(0, 0), vec![0; CHUNK_VOLUME], meta, Vec::new())
            .expect("valid lengths");
        assert_eq!(chunk.block_meta(0, 0, 0), 0x5);
        assert_eq!(chunk.block_meta(0, 1, 0), 0xA);
        assert_eq!(chunk.block_meta(0, 2, 0), 0);
    }

    #[test]
    fn test_builder_meta_does_not_clobber_sibling_nibble() {
        let mut builder = ChunkBuilder::new(ChunkPos::new(0, 0));
        builder.set_block(3, 10, 4, BLOCK_STONE, 0xC);
        builder.set_block(3, 11, 4, BLOCK_STONE, 0x3);
        let chunk = builder.build();
        assert_eq!(chunk.block_meta(3, 10, 4), 0xC);
        assert_eq!(chunk.block_meta(3, 11, 4), 0x3);
        assert_eq!(chunk.block_id(3, 10, 4), BLOCK_STONE);
        assert_eq!(chunk.block_id(3, 12, 4), BLOCK_AIR);
    }

    #[test]
    fn test_from_raw_rejects_bad_lengths() {
        let pos = ChunkPos::new(2, -1);
        let err = Chunk::from_raw(pos, vec![0; 10], vec![0; CHUNK_META_BYTES], Vec::new())
            .unwrap_err();
        assert_eq!(err, ChunkDataError::BlockLength { pos, actual: 10 });

        let err = Chunk::from_raw(pos, vec![0; CHUNK_VOLUME], vec![0; 3], Vec::new()).unwrap_err();
        assert_eq!(err, ChunkDataError::MetaLength { pos, actual: 3 });
    }

    #[test]
    fn test_chunk_pos_origin_and_display() {
        let pos = ChunkPos::new(-2, 3);
        assert_eq!(pos.origin(), (-32.0, 48.0));
        assert_eq!(pos.to_string(), "(-2, 3)");
        assert_eq!(pos.offset(1, -1), ChunkPos::new(-1, 2));
    }
}
