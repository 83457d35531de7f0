use crate::{BlockId, Chunk, ChunkLookup, CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z, MAX_Y};

/// Numeric stand-in for a neighbor that could not be resolved.
pub const SENTINEL_UNKNOWN: i32 = -1;

/// The six neighbor directions, in the classic world orientation
/// (north is -X, east is -Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// -X
    North,
    /// +X
    South,
    /// -Z
    East,
    /// +Z
    West,
    /// +Y
    Up,
    /// -Y
    Down,
}

impl Direction {
    /// All directions, horizontal first.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// The four horizontal directions.
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit offset (dx, dy, dz).
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (-1, 0, 0),
            Direction::South => (1, 0, 0),
            Direction::East => (0, 0, -1),
            Direction::West => (0, 0, 1),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Neighbor resolution for one chunk, crossing into siblings through the level.
pub struct Adjacency<'a, L: ChunkLookup + ?Sized> {
    chunk: &'a Chunk,
    level: &'a L,
}

impl<'a, L: ChunkLookup + ?Sized> Clone for Adjacency<'a, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, L: ChunkLookup + ?Sized> Copy for Adjacency<'a, L> {}

impl<'a, L: ChunkLookup + ?Sized> Adjacency<'a, L> {
    pub fn new(chunk: &'a Chunk, level: &'a L) -> Self {
        Self { chunk, level }
    }

    pub fn chunk(&self) -> &'a Chunk {
        self.chunk
    }

    /// Id of the block next to local `(x, y, z)` in `direction`.
    ///
    /// Returns `None` when the neighbor lies in a chunk that is not loaded, or
    /// above/below the column.
    pub fn neighbor(&self, direction: Direction, x: usize, y: usize, z: usize) -> Option<BlockId> {
        let (dx, dy, dz) = direction.offset();
        self.block_at(x as i32 + dx, y as i32 + dy, z as i32 + dz)
    }

    /// Like [`Adjacency::neighbor`], with unknown mapped to [`SENTINEL_UNKNOWN`].
    pub fn neighbor_raw(&self, direction: Direction, x: usize, y: usize, z: usize) -> i32 {
        self.neighbor(direction, x, y, z)
            .map_or(SENTINEL_UNKNOWN, i32::from)
    }

    /// Block id at chunk-relative coordinates that may spill into adjacent
    /// chunks on X/Z.
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> Option<BlockId> {
        if y < 0 || y > MAX_Y as i32 {
            return None;
        }
        let (cdx, lx) = split_axis(x, CHUNK_SIZE_X as i32);
        let (cdz, lz) = split_axis(z, CHUNK_SIZE_Z as i32);
        let chunk = if cdx == 0 && cdz == 0 {
            self.chunk
        } else {
            self.level.chunk(self.chunk.position().offset(cdx, cdz))?
        };
        Some(chunk.block_id(lx, y as usize, lz))
    }

    /// True when any block within Chebyshev distance `radius` of `(x, y, z)`
    /// has id `target`. Y is clamped to the column; unloaded chunks are skipped.
    pub fn has_block_within(&self, x: usize, y: usize, z: usize, radius: i32, target: BlockId) -> bool {
        let (x, y, z) = (x as i32, y as i32, z as i32);
        let min_y = (y - radius).max(0);
        let max_y = (y + radius).min(CHUNK_SIZE_Y as i32 - 1);
        for tx in x - radius..=x + radius {
            for ty in min_y..=max_y {
                for tz in z - radius..=z + radius {
                    if self.block_at(tx, ty, tz) == Some(target) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Split a chunk-relative coordinate into (chunk delta, local coordinate).
fn split_axis(value: i32, size: i32) -> (i32, usize) {
    (value.div_euclid(size), value.rem_euclid(size) as usize)
}
