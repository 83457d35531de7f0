//! Read-only chunk columns, the level arena that owns them, and neighbor
//! resolution across chunk seams.

mod adjacency;
mod chunk;
mod level;
mod painting;

pub use adjacency::*;
pub use chunk::*;
pub use level::*;
pub use painting::*;
