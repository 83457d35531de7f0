use std::collections::HashMap;

use chunkray_world::ChunkPos;
use tracing::debug;

use crate::{mesh_chunk, mesh_paintings, MeshBuffers, MeshContext, OreSelection, RenderOptions, RenderPass};

/// One of the three cached batches kept per chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshSlot {
    /// Solid geometry.
    Opaque,
    /// Non-solid geometry, drawn after the opaque batch.
    Transparent,
    /// Highlighted ore blocks.
    Selected,
}

impl MeshSlot {
    /// Slots in replay order.
    pub const ALL: [MeshSlot; 3] = [MeshSlot::Opaque, MeshSlot::Transparent, MeshSlot::Selected];

    /// The pass that fills this slot.
    pub fn pass(self) -> RenderPass {
        match self {
            MeshSlot::Opaque => RenderPass::Opaque,
            MeshSlot::Transparent => RenderPass::Transparent,
            MeshSlot::Selected => RenderPass::Selected,
        }
    }

    /// Dirty bit guarding this slot.
    pub fn flag(self) -> DirtyFlags {
        match self {
            MeshSlot::Opaque => DirtyFlags::OPAQUE,
            MeshSlot::Transparent => DirtyFlags::TRANSPARENT,
            MeshSlot::Selected => DirtyFlags::SELECTED,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// Per-slot invalidation bits.
    pub struct DirtyFlags: u8 {
        const OPAQUE = 0b0000_0001;
        const TRANSPARENT = 0b0000_0010;
        const SELECTED = 0b0000_0100;
    }
}

struct CacheEntry {
    dirty: DirtyFlags,
    batches: [MeshBuffers; 3],
    paintings: Option<MeshBuffers>,
}

impl CacheEntry {
    fn new() -> Self {
        Self {
            dirty: DirtyFlags::all(),
            batches: [MeshBuffers::empty(), MeshBuffers::empty(), MeshBuffers::empty()],
            paintings: None,
        }
    }
}

/// Mesh cache keyed by chunk position.
///
/// Slots start dirty and are rebuilt in full the next time they are requested.
/// The cache never decides on its own when to invalidate; callers mark slots
/// dirty when render options or the ore selection change.
#[derive(Default)]
pub struct ChunkMeshCache {
    entries: HashMap<ChunkPos, CacheEntry>,
    rebuilds: usize,
}

impl ChunkMeshCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            rebuilds: 0,
        }
    }

    /// Batch for `slot` of the chunk at `pos`, rebuilding it first when dirty.
    ///
    /// Returns `None` when the chunk is not loaded.
    pub fn mesh(
        &mut self,
        ctx: &MeshContext<'_>,
        pos: ChunkPos,
        slot: MeshSlot,
        options: RenderOptions,
        selection: &OreSelection,
    ) -> Option<&MeshBuffers> {
        let chunk = ctx.level.chunk(pos)?;
        let entry = self.entries.entry(pos).or_insert_with(CacheEntry::new);
        if entry.dirty.contains(slot.flag()) {
            let mesh = mesh_chunk(chunk, ctx, slot.pass(), options, selection);
            debug!(chunk = %pos, ?slot, quads = mesh.quad_count(), "rebuilt chunk mesh");
            entry.batches[slot.index()] = mesh;
            entry.dirty.remove(slot.flag());
            self.rebuilds += 1;
        }
        Some(&entry.batches[slot.index()])
    }

    /// Painting batch for the chunk at `pos`, built once per cached chunk.
    pub fn paintings(&mut self, ctx: &MeshContext<'_>, pos: ChunkPos) -> Option<&MeshBuffers> {
        let chunk = ctx.level.chunk(pos)?;
        let entry = self.entries.entry(pos).or_insert_with(CacheEntry::new);
        Some(
            entry
                .paintings
                .get_or_insert_with(|| mesh_paintings(chunk, ctx.paintings)),
        )
    }

    /// Invalidate `flags` for one chunk.
    pub fn mark_dirty(&mut self, pos: ChunkPos, flags: DirtyFlags) {
        if let Some(entry) = self.entries.get_mut(&pos) {
            entry.dirty.insert(flags);
        }
    }

    /// Invalidate `flags` for every cached chunk.
    pub fn mark_all_dirty(&mut self, flags: DirtyFlags) {
        for entry in self.entries.values_mut() {
            entry.dirty.insert(flags);
        }
    }

    /// True when the next request for `slot` at `pos` will rebuild.
    pub fn is_dirty(&self, pos: ChunkPos, slot: MeshSlot) -> bool {
        self.entries
            .get(&pos)
            .map_or(true, |entry| entry.dirty.contains(slot.flag()))
    }

    /// Drop every batch of an unloaded chunk.
    pub fn evict(&mut self, pos: ChunkPos) -> bool {
        let removed = self.entries.remove(&pos).is_some();
        if removed {
            debug!(chunk = %pos, "evicted chunk meshes");
        }
        removed
    }

    /// Drop everything, e.g. on world reload.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total number of slot rebuilds performed so far.
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }

    /// Number of chunks with cache entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
