use anyhow::{Context, Result};
use chunkray_assets::{catalog_from_file, decorations_from_file, BlockCatalog, DecorationTable};
use chunkray_render::{OreSelection, RenderOptions};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/chunkray.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Block catalog JSON.
    pub blocks_path: PathBuf,
    /// Decoration stats JSON.
    pub decorations_path: PathBuf,
    /// Where to write per-slot mesh metrics, if anywhere.
    pub mesh_metrics_path: Option<PathBuf>,
    /// Chunk radius of the generated demo world around the origin.
    pub demo_radius: i32,
    /// Seed for the demo world's ore scatter.
    pub demo_seed: u64,
    pub render: RenderOptions,
    /// Block names drawn by the selection pass.
    pub selected_ores: Vec<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            blocks_path: PathBuf::from("config/blocks.json"),
            decorations_path: PathBuf::from("config/decorations.json"),
            mesh_metrics_path: None,
            demo_radius: 1,
            demo_seed: 0x5eed,
            render: RenderOptions::default(),
            selected_ores: vec!["diamond_ore".into(), "gold_ore".into()],
        }
    }
}

impl ViewerConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ViewerConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    ViewerConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH) || err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!("Viewer config not found at {}. Using defaults", path.display());
                }
                ViewerConfig::default()
            }
        }
    }

    /// Resolve the configured ore names against the catalog.
    ///
    /// Names the catalog does not know are reported and dropped.
    pub fn ore_selection(&self, catalog: &BlockCatalog) -> OreSelection {
        self.selected_ores
            .iter()
            .filter_map(|name| {
                let id = catalog.id_by_name(name);
                if id.is_none() {
                    warn!(name = %name, "selected ore is not in the block catalog");
                }
                id
            })
            .collect()
    }
}

/// Load the block catalog and decoration table named by `config`.
pub fn load_assets(config: &ViewerConfig) -> Result<(BlockCatalog, DecorationTable)> {
    let catalog = catalog_from_file(&config.blocks_path)
        .with_context(|| format!("Failed to load block catalog {}", config.blocks_path.display()))?;
    let decorations = decorations_from_file(&config.decorations_path).with_context(|| {
        format!(
            "Failed to load decoration stats {}",
            config.decorations_path.display()
        )
    })?;
    Ok((catalog, decorations))
}
