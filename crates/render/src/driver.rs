use std::path::Path;

use anyhow::{Context, Result};
use chunkray_assets::{BlockCatalog, DecorationTable, PaintingTable};
use chunkray_testkit::{ChunkMeshMetric, MeshMetricSink};
use chunkray_world::{ChunkPos, Level};
use tracing::info;

use crate::{ChunkMeshCache, MeshContext, MeshHash, MeshSlot, OreSelection, RenderOptions};

/// Mesh stats for one slot of one chunk.
#[derive(Debug, Clone)]
pub struct ChunkMeshStat {
    /// Chunk the batch was built for.
    pub position: ChunkPos,
    /// Which cached batch the numbers describe.
    pub slot: MeshSlot,
    /// Number of quads in the batch.
    pub quads: usize,
    /// Number of triangles generated for the batch.
    pub triangles: usize,
    /// Whether the request rebuilt the batch rather than hitting the cache.
    pub rebuilt: bool,
    /// Digest of the batch buffers.
    pub hash: MeshHash,
}

/// Walks every loaded chunk and refreshes its cached batches.
pub struct ChunkMeshDriver<'a> {
    level: &'a Level,
    cache: &'a mut ChunkMeshCache,
    ctx: MeshContext<'a>,
}

impl<'a> ChunkMeshDriver<'a> {
    /// Create a new driver spanning level/cache/asset tables.
    pub fn new(
        level: &'a Level,
        cache: &'a mut ChunkMeshCache,
        catalog: &'a BlockCatalog,
        decorations: &'a DecorationTable,
        paintings: &'a PaintingTable,
    ) -> Self {
        Self {
            level,
            cache,
            ctx: MeshContext::new(level, catalog, decorations, paintings),
        }
    }

    /// Request every slot of every chunk, in replay order, and return stats.
    pub fn process(&mut self, options: RenderOptions, selection: &OreSelection) -> Vec<ChunkMeshStat> {
        let mut stats = Vec::new();
        for pos in self.level.positions() {
            for slot in MeshSlot::ALL {
                let rebuilt = self.cache.is_dirty(pos, slot);
                if let Some(mesh) = self.cache.mesh(&self.ctx, pos, slot, options, selection) {
                    stats.push(ChunkMeshStat {
                        position: pos,
                        slot,
                        quads: mesh.quad_count(),
                        triangles: mesh.triangle_count(),
                        rebuilt,
                        hash: mesh.hash,
                    });
                }
            }
        }
        let rebuilt = stats.iter().filter(|stat| stat.rebuilt).count();
        info!(chunks = self.level.len(), batches = stats.len(), rebuilt, "meshed level");
        stats
    }

    /// Flatten stats into the report rows written by `--mesh-metrics`.
    pub fn stats_to_metrics(stats: &[ChunkMeshStat]) -> Vec<ChunkMeshMetric> {
        stats
            .iter()
            .map(|stat| ChunkMeshMetric {
                chunk: [stat.position.x, stat.position.z],
                slot: slot_label(stat.slot).to_string(),
                quads: stat.quads,
                triangles: stat.triangles,
                hash: stat.hash.to_hex(),
            })
            .collect()
    }

    /// Write the metrics report for `stats` to `path`.
    pub fn write_metrics_to_file<P: AsRef<Path>>(stats: &[ChunkMeshStat], path: P) -> Result<()> {
        let path = path.as_ref();
        let metrics = Self::stats_to_metrics(stats);
        let mut sink = MeshMetricSink::create(path)?;
        sink.write(&metrics)
            .with_context(|| format!("Failed to write mesh metrics to {}", path.display()))?;
        Ok(())
    }
}

fn slot_label(slot: MeshSlot) -> &'static str {
    match slot {
        MeshSlot::Opaque => "opaque",
        MeshSlot::Transparent => "transparent",
        MeshSlot::Selected => "selected",
    }
}
