use std::collections::BTreeMap;

use chunkray_world::{BlockId, BlockMeta};
use serde::{Deserialize, Serialize};

/// Index of a tile in the terrain sprite sheet.
pub type TextureId = u16;

/// Geometry family used to draw a block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Full cube with per-face textures.
    #[default]
    Cube,
    /// Full cube that is skipped unless water rendering is forced.
    Water,
    /// Full cube textured from the huge-mushroom face table.
    HugeMushroom,
    /// Bottom half of a cube (slabs).
    HalfHeight,
    /// Wall or floor torch.
    Torch,
    /// Sapling cross; only the low two metadata bits select its texture.
    Sapling,
    /// Two crossed planes (flowers, grass, webs).
    DecorationCross,
    /// Four-plane growth-stage crops.
    Crops,
    /// Flat plane against a wall.
    Ladder,
    /// Flat plane on the floor (redstone wire, repeaters).
    Floor,
    /// Rails including curves.
    MinecartTracks,
    /// Straight-only rails with a powered flag.
    SimpleRail,
    /// Thin floor plate.
    PressurePlate,
    /// Single-plane door half.
    Door,
    /// Two-step stairs.
    Stairs,
    /// Free-standing sign on a post.
    Signpost,
    /// Sign attached to a wall.
    WallSign,
    /// Fence post with connectors.
    Fence,
    /// Fence gate, open or closed.
    FenceGate,
    /// Lever with cobblestone base.
    Lever,
    /// Small wall button.
    Button,
    /// Nether portal sheet.
    Portal,
    /// Thin floor layer (snow).
    ThinSlice,
    /// Bed half.
    Bed,
    /// Trapdoor, flat or swung up.
    Trapdoor,
    /// Piston base.
    PistonBody,
    /// Free-standing piston head.
    PistonHead,
    /// Cake with bites taken.
    Cake,
    /// Vines on any combination of walls.
    Vine,
    /// Glass panes and iron bars.
    SolidPane,
}

/// Face slot named relative to the block's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeDirection {
    /// The face the block points toward.
    Forward,
    /// The face opposite forward.
    Backward,
    /// Both faces perpendicular to forward.
    Sides,
    /// The +Y face.
    Top,
    /// The -Y face.
    Bottom,
}

/// Absolute horizontal facing (north is -X, east is -Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsoluteDirection {
    /// Facing -X.
    #[default]
    North,
    /// Facing +X.
    South,
    /// Facing -Z.
    East,
    /// Facing +Z.
    West,
}

/// Rendering rules for one block id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockType {
    /// Numeric id in the world's block array.
    pub id: BlockId,
    /// Human-readable identifier (e.g., "stone").
    pub name: String,
    /// Solid blocks draw in the opaque pass, the rest in the transparent pass.
    #[serde(default = "default_solid")]
    pub solid: bool,
    /// Geometry family.
    #[serde(default)]
    pub shape: ShapeKind,
    /// Base sprite; `None` means the block is never drawn.
    #[serde(default)]
    pub texture: Option<TextureId>,
    /// Metadata value to sprite overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_by_data: Option<BTreeMap<BlockMeta, TextureId>>,
    /// Facing-relative sprite overrides for cube faces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_by_direction: Option<BTreeMap<RelativeDirection, TextureId>>,
    /// Metadata value to facing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction_by_data: Option<BTreeMap<BlockMeta, AbsoluteDirection>>,
}

fn default_solid() -> bool {
    true
}

impl BlockType {
    /// Construct a descriptor without any texture maps.
    pub fn new(
        id: BlockId,
        name: impl Into<String>,
        solid: bool,
        shape: ShapeKind,
        texture: Option<TextureId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            solid,
            shape,
            texture,
            texture_by_data: None,
            texture_by_direction: None,
            direction_by_data: None,
        }
    }

    /// Helper for tests that need a plain solid cube.
    pub fn cube(id: BlockId, name: &str, texture: TextureId) -> Self {
        Self::new(id, name, true, ShapeKind::Cube, Some(texture))
    }

    /// Attach a metadata to texture map.
    pub fn with_data_textures(
        mut self,
        entries: impl IntoIterator<Item = (BlockMeta, TextureId)>,
    ) -> Self {
        self.texture_by_data = Some(entries.into_iter().collect());
        self
    }

    /// Attach a facing-relative texture map.
    pub fn with_direction_textures(
        mut self,
        entries: impl IntoIterator<Item = (RelativeDirection, TextureId)>,
    ) -> Self {
        self.texture_by_direction = Some(entries.into_iter().collect());
        self
    }

    /// Attach a metadata to facing map.
    pub fn with_facings(
        mut self,
        entries: impl IntoIterator<Item = (BlockMeta, AbsoluteDirection)>,
    ) -> Self {
        self.direction_by_data = Some(entries.into_iter().collect());
        self
    }

    /// Mask applied to metadata before consulting `texture_by_data`.
    pub fn data_mask(&self) -> BlockMeta {
        if self.shape == ShapeKind::Sapling {
            0x3
        } else {
            0xF
        }
    }

    /// Facing encoded by `meta`, north when unmapped.
    pub fn facing(&self, meta: BlockMeta) -> AbsoluteDirection {
        self.direction_by_data
            .as_ref()
            .and_then(|map| map.get(&meta).copied())
            .unwrap_or_default()
    }

    /// Facing-relative override, if any.
    pub fn direction_texture(&self, slot: RelativeDirection) -> Option<TextureId> {
        self.texture_by_direction
            .as_ref()
            .and_then(|map| map.get(&slot).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sapling_masks_two_bits() {
        let sapling = BlockType::new(6, "sapling", false, ShapeKind::Sapling, Some(15));
        let wool = BlockType::cube(35, "wool", 64);
        assert_eq!(sapling.data_mask(), 0x3);
        assert_eq!(wool.data_mask(), 0xF);
    }

    #[test]
    fn facing_defaults_to_north() {
        let furnace = BlockType::cube(61, "furnace", 45)
            .with_facings([(2, AbsoluteDirection::East), (5, AbsoluteDirection::South)]);
        assert_eq!(furnace.facing(2), AbsoluteDirection::East);
        assert_eq!(furnace.facing(5), AbsoluteDirection::South);
        assert_eq!(furnace.facing(0), AbsoluteDirection::North);
        assert_eq!(BlockType::cube(1, "stone", 1).facing(3), AbsoluteDirection::North);
    }

    #[test]
    fn definition_defaults_to_solid_cube() {
        let block: BlockType =
            serde_json::from_str(r#"{"id": 1, "name": "stone", "texture": 1}"#).expect("parse");
        assert!(block.solid);
        assert_eq!(block.shape, ShapeKind::Cube);
        assert!(block.texture_by_data.is_none());

        let log: BlockType = serde_json::from_str(
            r#"{"id": 17, "name": "log", "texture": 20,
                "texture_by_data": {"1": 116},
                "texture_by_direction": {"top": 21, "bottom": 21},
                "direction_by_data": {"2": "east"}}"#,
        )
        .expect("parse maps");
        assert_eq!(log.texture_by_data.as_ref().and_then(|m| m.get(&1)), Some(&116));
        assert_eq!(log.direction_texture(RelativeDirection::Top), Some(21));
        assert_eq!(log.facing(2), AbsoluteDirection::East);
    }
}
