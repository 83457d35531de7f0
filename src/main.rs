//! chunkray - X-ray chunk mesher
//!
//! Builds a demo world, meshes every chunk through the cached passes and
//! reports per-slot statistics.

mod config;
mod demo;

use anyhow::Result;
use chunkray_assets::PaintingTable;
use chunkray_render::{
    ChunkMeshCache, ChunkMeshDriver, ChunkMeshStat, DirtyFlags, MeshContext, MeshSlot,
};
use config::{ViewerConfig, DEFAULT_CONFIG_PATH};
use std::{env, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // WARN by default; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting chunkray v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let mut config = ViewerConfig::load_from_path(&cli.config);
    if let Some(path) = cli.blocks {
        config.blocks_path = path;
    }
    if let Some(path) = cli.mesh_metrics {
        config.mesh_metrics_path = Some(path);
    }

    let (catalog, decorations) = config::load_assets(&config)?;
    let paintings = PaintingTable::classic();
    let selection = config.ore_selection(&catalog);
    let level = demo::demo_level(config.demo_radius, config.demo_seed);
    info!(
        blocks = catalog.len(),
        chunks = level.len(),
        selected = selection.len(),
        "assets and demo world ready"
    );

    let mut cache = ChunkMeshCache::new();
    let stats = {
        let mut driver = ChunkMeshDriver::new(&level, &mut cache, &catalog, &decorations, &paintings);
        let first = driver.process(config.render, &selection);
        // Second frame: every batch should come straight from the cache.
        let replay = driver.process(config.render, &selection);
        let hits = replay.iter().filter(|stat| !stat.rebuilt).count();
        info!(hits, total = replay.len(), "cache replay");
        first
    };

    let ctx = MeshContext::new(&level, &catalog, &decorations, &paintings);
    let painting_quads: usize = level
        .positions()
        .filter_map(|pos| cache.paintings(&ctx, pos).map(|mesh| mesh.quad_count()))
        .sum();

    // A selection change only invalidates the highlight slot.
    cache.mark_all_dirty(DirtyFlags::SELECTED);
    info!(rebuilds = cache.rebuild_count(), "selection slot invalidated");

    print_summary(&stats);
    println!("Paintings: {painting_quads} quads");

    if let Some(path) = &config.mesh_metrics_path {
        ChunkMeshDriver::write_metrics_to_file(&stats, path)?;
        info!(path = %path.display(), "mesh metrics written");
    }
    Ok(())
}

fn print_summary(stats: &[ChunkMeshStat]) {
    for slot in MeshSlot::ALL {
        let (batches, quads) = stats
            .iter()
            .filter(|stat| stat.slot == slot)
            .fold((0, 0), |(batches, quads), stat| (batches + 1, quads + stat.quads));
        println!("{slot:?}: {quads} quads across {batches} chunks");
    }
}

struct CliOptions {
    config: PathBuf,
    blocks: Option<PathBuf>,
    mesh_metrics: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            blocks: None,
            mesh_metrics: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = PathBuf::from(path);
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--blocks" => {
                    if let Some(path) = args.next() {
                        opts.blocks = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--blocks requires a file path");
                    }
                }
                "--mesh-metrics" => {
                    if let Some(path) = args.next() {
                        opts.mesh_metrics = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--mesh-metrics requires a file path");
                    }
                }
                other => tracing::warn!(arg = other, "ignoring unknown argument"),
            }
        }
        opts
    }
}
