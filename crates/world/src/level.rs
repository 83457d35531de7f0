use std::collections::BTreeMap;

use crate::{Chunk, ChunkPos};

/// Read access to loaded chunks by position.
///
/// Neighbor lookups go through this seam so chunks never hold references to
/// each other or to their owner. A `None` answer means "not loaded" and is a
/// normal outcome.
pub trait ChunkLookup {
    fn chunk(&self, pos: ChunkPos) -> Option<&Chunk>;
}

impl<T: ChunkLookup + ?Sized> ChunkLookup for &T {
    fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        (**self).chunk(pos)
    }
}

impl ChunkLookup for BTreeMap<ChunkPos, Chunk> {
    fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.get(&pos)
    }
}

impl ChunkLookup for std::collections::HashMap<ChunkPos, Chunk> {
    fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.get(&pos)
    }
}

/// Arena owning every loaded chunk of a world.
/// Uses BTreeMap for deterministic iteration order.
#[derive(Debug, Default)]
pub struct Level {
    chunks: BTreeMap<ChunkPos, Chunk>,
}

impl Level {
    pub fn new() -> Self {
        Self {
            chunks: BTreeMap::new(),
        }
    }

    /// Number of resident chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true when no chunks are currently loaded.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Add a chunk, returning any chunk previously stored at that position.
    pub fn insert(&mut self, chunk: Chunk) -> Option<Chunk> {
        let pos = chunk.position();
        let replaced = self.chunks.insert(pos, chunk);
        tracing::debug!(%pos, replaced = replaced.is_some(), "chunk loaded");
        replaced
    }

    /// Unload a chunk.
    pub fn remove(&mut self, pos: ChunkPos) -> Option<Chunk> {
        let removed = self.chunks.remove(&pos);
        if removed.is_some() {
            tracing::debug!(%pos, "chunk unloaded");
        }
        removed
    }

    /// Drop every chunk (world reload).
    pub fn clear(&mut self) {
        tracing::debug!(count = self.chunks.len(), "level cleared");
        self.chunks.clear();
    }

    /// Attempt to fetch a chunk immutably.
    pub fn get(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    pub fn contains(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }

    /// Iterate over loaded chunk positions in sorted order.
    pub fn positions(&self) -> impl Iterator<Item = ChunkPos> + '_ {
        self.chunks.keys().copied()
    }

    /// Iterate over loaded chunks in position order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> + '_ {
        self.chunks.values()
    }
}

impl ChunkLookup for Level {
    fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.get(pos)
    }
}

impl FromIterator<Chunk> for Level {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Self {
        let mut level = Level::new();
        for chunk in iter {
            level.insert(chunk);
        }
        level
    }
}
