//! Per-pass face culling and texture resolution.

use std::collections::BTreeSet;

use chunkray_assets::{BlockCatalog, BlockType};
use chunkray_world::{
    Adjacency, BlockId, BlockMeta, ChunkLookup, Direction, BLOCK_AIR, BLOCK_BEDROCK, MAX_Y,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Mutually exclusive geometry generation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderPass {
    /// Solid blocks, culled against solid neighbors.
    Opaque,
    /// Non-solid blocks, culled against non-solid neighbors.
    Transparent,
    /// Only blocks in the ore selection, all six faces.
    Selected,
}

/// Render toggles supplied with every mesh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Draw bedrock faces wherever the neighbor is not bedrock.
    pub force_bedrock: bool,
    /// Draw water blocks in the transparent pass.
    pub force_water: bool,
    /// Shift blocks near torches into the highlighted texture bank.
    pub highlight_explored: bool,
}

impl RenderOptions {
    /// The subset of options a pass honours.
    ///
    /// Bedrock forcing only affects the opaque pass, water forcing only the
    /// transparent pass, and the selection pass ignores every option.
    pub fn for_pass(self, pass: RenderPass) -> Self {
        match pass {
            RenderPass::Opaque => Self {
                force_water: false,
                ..self
            },
            RenderPass::Transparent => Self {
                force_bedrock: false,
                ..self
            },
            RenderPass::Selected => Self::default(),
        }
    }
}

/// Block ids drawn by the selection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OreSelection {
    ids: BTreeSet<BlockId>,
}

impl OreSelection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id; returns false when it was already selected.
    pub fn insert(&mut self, id: BlockId) -> bool {
        self.ids.insert(id)
    }

    /// Remove an id; returns false when it was not selected.
    pub fn remove(&mut self, id: BlockId) -> bool {
        self.ids.remove(&id)
    }

    /// Whether `id` is selected.
    #[inline]
    pub fn contains(&self, id: BlockId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<BlockId> for OreSelection {
    fn from_iter<I: IntoIterator<Item = BlockId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// Faces of a block that are exposed for the current pass.
    pub struct FaceMask: u8 {
        /// -X
        const NORTH = 0b0000_0001;
        /// +X
        const SOUTH = 0b0000_0010;
        /// -Z
        const EAST = 0b0000_0100;
        /// +Z
        const WEST = 0b0000_1000;
        /// +Y
        const UP = 0b0001_0000;
        /// -Y
        const DOWN = 0b0010_0000;
    }
}

impl FaceMask {
    /// The flag for a single direction.
    pub const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::NORTH,
            Direction::South => Self::SOUTH,
            Direction::East => Self::EAST,
            Direction::West => Self::WEST,
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
        }
    }

    /// Whether the face toward `direction` is exposed.
    #[inline]
    pub fn shows(self, direction: Direction) -> bool {
        self.contains(Self::from_direction(direction))
    }
}

/// Whether a neighbor leaves the shared face visible in the given pass.
///
/// Unloaded neighbors and air always expose; ids missing from the catalog
/// expose only in the transparent pass.
pub fn exposes(catalog: &BlockCatalog, neighbor: Option<BlockId>, transparent: bool) -> bool {
    match neighbor {
        None | Some(BLOCK_AIR) => true,
        Some(id) => match catalog.lookup(id) {
            Some(block) => block.solid == transparent,
            None => transparent,
        },
    }
}

/// Compute the exposed faces of the block at local `(x, y, z)`.
///
/// The top face is only tested below the ceiling and the bottom face only
/// above the floor; at the column limits those faces stay hidden.
pub(crate) fn exposed_faces<L: ChunkLookup + ?Sized>(
    adjacency: &Adjacency<'_, L>,
    catalog: &BlockCatalog,
    id: BlockId,
    (x, y, z): (usize, usize, usize),
    transparent: bool,
    force_bedrock: bool,
) -> FaceMask {
    let bedrock_rule = force_bedrock && id == BLOCK_BEDROCK;
    let mut faces = FaceMask::empty();
    for direction in Direction::ALL {
        match direction {
            Direction::Up if y >= MAX_Y => continue,
            Direction::Down if y == 0 => continue,
            _ => {}
        }
        let neighbor = adjacency.neighbor(direction, x, y, z);
        let exposed = if bedrock_rule {
            neighbor != Some(BLOCK_BEDROCK)
        } else {
            exposes(catalog, neighbor, transparent)
        };
        if exposed {
            faces |= FaceMask::from_direction(direction);
        }
    }
    faces
}

/// The sprite a block draws with, after applying its metadata texture map.
///
/// Returns `None` for blocks that are never drawn. Metadata values missing
/// from the map are reported and the base sprite is kept.
pub(crate) fn resolve_texture(block: &BlockType, meta: BlockMeta) -> Option<i32> {
    let mut tile = i32::from(block.texture?);
    if let Some(by_data) = &block.texture_by_data {
        let data = meta & block.data_mask();
        match by_data.get(&data) {
            Some(&texture) => tile = i32::from(texture),
            None => warn!(block = %block.name, data, "unknown data value for block"),
        }
    }
    Some(tile)
}
