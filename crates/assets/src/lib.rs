#![warn(missing_docs)]
//! Block catalog, decoration stats and painting tables for the mesher.

mod block;
mod catalog;
mod decoration;
mod loader;
mod painting;

pub use block::{AbsoluteDirection, BlockType, RelativeDirection, ShapeKind, TextureId};
pub use catalog::{BlockCatalog, MAX_BLOCK_IDS, UNKNOWN_TEXTURE};
pub use decoration::{DecorationDefinition, DecorationStats, DecorationTable};
pub use loader::{catalog_from_file, catalog_from_str, decorations_from_file, decorations_from_str};
pub use painting::{PaintingInfo, PaintingTable};

use thiserror::Error;

/// Sprite for the pores face of huge mushrooms.
pub const TEX_HUGE_MUSHROOM_PORES: TextureId = 142;
/// Sprite for the stem face of huge mushrooms.
pub const TEX_HUGE_MUSHROOM_STEM: TextureId = 141;

/// Errors emitted during pack loading.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wrap IO errors when reading packs.
    #[error("failed to read asset pack: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse asset pack: {0}")]
    Parse(#[from] serde_json::Error),
    /// Structurally valid JSON describing an impossible table.
    #[error("invalid asset pack: {0}")]
    Invalid(String),
}

/// Parse a JSON string into a list of block types.
pub fn load_blocks_from_str(input: &str) -> Result<Vec<BlockType>, AssetError> {
    Ok(serde_json::from_str(input)?)
}
