#![warn(missing_docs)]
//! Metric sinks and golden-file helpers shared by the mesher's tests and the
//! `--mesh-metrics` report.

mod snapshot;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use snapshot::*;

/// Quad and triangle totals for one cached batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMeshMetric {
    /// Chunk position as `[x, z]`.
    pub chunk: [i32; 2],
    /// Cache slot label (`opaque`, `transparent`, `selected`).
    pub slot: String,
    /// Quad count for the batch.
    pub quads: usize,
    /// Triangle count for the batch.
    pub triangles: usize,
    /// Hex blake3 digest of the batch.
    pub hash: String,
}

/// JSON report of per-batch mesh metrics.
pub struct MeshMetricSink {
    file: File,
}

impl MeshMetricSink {
    /// Open `path` for writing, creating missing directories.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create metrics directory {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create metrics file {}", path.display()))?;
        Ok(Self { file })
    }

    /// Write `metrics` as one pretty-printed JSON array.
    pub fn write(&mut self, metrics: &[ChunkMeshMetric]) -> Result<()> {
        let json = serde_json::to_string_pretty(metrics)?;
        self.file.write_all(json.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}

/// Load metrics previously written by [`MeshMetricSink`].
pub fn read_mesh_metrics<P: AsRef<Path>>(path: P) -> Result<Vec<ChunkMeshMetric>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read metrics {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse metrics {}", path.display()))
}
