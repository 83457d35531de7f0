use std::collections::HashMap;

use chunkray_world::{BlockId, BLOCK_AIR};

use crate::{AssetError, BlockType, ShapeKind, TextureId};

/// Number of addressable block ids.
pub const MAX_BLOCK_IDS: usize = 4096;
/// Sprite used for ids missing from the catalog.
pub const UNKNOWN_TEXTURE: TextureId = 253;

/// Immutable id to [`BlockType`] table, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct BlockCatalog {
    slots: Vec<Option<BlockType>>,
    by_name: HashMap<String, BlockId>,
    unknown: BlockType,
}

impl BlockCatalog {
    /// Build a catalog, rejecting duplicate or out-of-range ids.
    pub fn new(types: Vec<BlockType>) -> Result<Self, AssetError> {
        let mut slots: Vec<Option<BlockType>> = vec![None; MAX_BLOCK_IDS];
        let mut by_name = HashMap::with_capacity(types.len());
        for block in types {
            let index = usize::from(block.id);
            if index >= MAX_BLOCK_IDS || block.id == BLOCK_AIR {
                return Err(AssetError::Invalid(format!(
                    "block '{}' has unusable id {}",
                    block.name, block.id
                )));
            }
            if let Some(existing) = &slots[index] {
                return Err(AssetError::Invalid(format!(
                    "blocks '{}' and '{}' share id {}",
                    existing.name, block.name, block.id
                )));
            }
            by_name.insert(block.name.clone(), block.id);
            slots[index] = Some(block);
        }
        Ok(Self {
            slots,
            by_name,
            unknown: BlockType::new(
                BlockId::MAX,
                "unknown",
                true,
                ShapeKind::Cube,
                Some(UNKNOWN_TEXTURE),
            ),
        })
    }

    /// Descriptor for `id`, if the catalog defines one.
    #[inline]
    pub fn lookup(&self, id: BlockId) -> Option<&BlockType> {
        self.slots.get(usize::from(id)).and_then(Option::as_ref)
    }

    /// Descriptor for `id`, substituting the generic unknown block.
    #[inline]
    pub fn get(&self, id: BlockId) -> &BlockType {
        self.lookup(id).unwrap_or(&self.unknown)
    }

    /// The stand-in descriptor for undefined ids.
    pub fn unknown(&self) -> &BlockType {
        &self.unknown
    }

    /// Solidity of a neighbor id; air, unresolved and undefined ids are not solid.
    pub fn is_solid(&self, id: Option<BlockId>) -> bool {
        match id {
            Some(id) if id != BLOCK_AIR => self.lookup(id).is_some_and(|block| block.solid),
            _ => false,
        }
    }

    /// Resolve an id by its descriptor name.
    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    /// Number of defined block types.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True when no block types are defined.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate over defined descriptors in id order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockType> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }
}
