use serde::{Deserialize, Serialize};

/// A painting entity hung on a wall, carried alongside the block grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintingPlacement {
    /// World X of the block the painting hangs in.
    pub tile_x: i32,
    /// World Y of the block the painting hangs in.
    pub tile_y: i32,
    /// World Z of the block the painting hangs in.
    pub tile_z: i32,
    /// Facing: 0 east, 1 north, 2 west, 3 south.
    pub direction: u8,
    /// Motive name as stored in the save (matched case-insensitively).
    pub name: String,
}

impl PaintingPlacement {
    pub fn new(tile: (i32, i32, i32), direction: u8, name: impl Into<String>) -> Self {
        Self {
            tile_x: tile.0,
            tile_y: tile.1,
            tile_z: tile.2,
            direction,
            name: name.into(),
        }
    }
}
