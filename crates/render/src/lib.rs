#![warn(missing_docs)]
//! Chunk meshing for the X-ray viewer: face culling, per-family block shapes,
//! the painting overlay and a three-slot mesh cache.
//!
//! Everything here produces plain vertex/index buffers; uploading and drawing
//! them is left to the embedding renderer.

mod atlas;
mod cache;
mod driver;
mod mesh;
mod painter;
mod paintings;
mod scan;
mod shapes;
mod visibility;

pub use atlas::{
    tile_origin, tile_u, tile_v, AtlasRegion, PixelRect, HIGHLIGHT_BANK, TEX128, TEX16, TEX256, TEX32,
    TEX512, TEX64,
};
pub use cache::{ChunkMeshCache, DirtyFlags, MeshSlot};
pub use driver::{ChunkMeshDriver, ChunkMeshStat};
pub use mesh::{MeshBuffers, MeshHash, MeshVertex};
pub use paintings::mesh_paintings;
pub use scan::{mesh_chunk, MeshContext};
pub use visibility::{exposes, FaceMask, OreSelection, RenderOptions, RenderPass};
