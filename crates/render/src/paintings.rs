//! Painting overlay. UVs address the painting sheet rather than the terrain
//! atlas, so the batch is drawn with its own texture.

use chunkray_assets::PaintingTable;
use chunkray_world::Chunk;
use tracing::warn;

use crate::atlas::{AtlasRegion, TEX16, TEX32};
use crate::mesh::{MeshBuffers, MeshBuilder};
use crate::painter::Painter;

/// Mesh every painting hung in `chunk`.
///
/// Paintings with an unknown motive are reported and skipped.
pub fn mesh_paintings(chunk: &Chunk, table: &PaintingTable) -> MeshBuffers {
    let mut mesh = MeshBuilder::new();
    let mut painter = Painter::new(&mut mesh);
    let back = table.back();

    for painting in chunk.paintings() {
        let Some(info) = table.get(&painting.name) else {
            warn!(name = %painting.name, chunk = %chunk.position(), "unknown painting name");
            continue;
        };
        let tile_x = painting.tile_x as f32;
        let tile_z = painting.tile_z as f32;
        let top = painting.tile_y as f32 + 0.5 + info.center_y;
        let bottom = top - info.size_y;

        // Start corner of the front face, its back-plate counterpart and the
        // axis the painting extends along.
        let (start, rear, (dx, dz)) = match painting.direction {
            0 => {
                let start = [tile_x + 0.5 + info.center_x, tile_z - 0.5 - TEX16];
                (start, [start[0], start[1] + TEX32], (-1.0, 0.0))
            }
            1 => {
                let start = [tile_x - 0.5 - TEX16, tile_z - 0.5 - info.center_x];
                (start, [start[0] + TEX32, start[1]], (0.0, 1.0))
            }
            2 => {
                let start = [tile_x - 0.5 - info.center_x, tile_z + 0.5 + TEX16];
                (start, [start[0], start[1] - TEX32], (1.0, 0.0))
            }
            _ => {
                let start = [tile_x + 0.5 + TEX16, tile_z + 0.5 + info.center_x];
                (start, [start[0] - TEX32, start[1]], (0.0, -1.0))
            }
        };
        let along = |[x, z]: [f32; 2]| [x + dx * info.size_x, z + dz * info.size_x];
        let (start_end, rear_end) = (along(start), along(rear));

        let face = AtlasRegion::new(info.offset_x, info.offset_y, info.tex_width, info.tex_height);
        let plate = AtlasRegion::new(back.offset_x, back.offset_y, info.tex_width, info.tex_height);

        painter.region_vertical(face, [start[0], top, start[1]], [start_end[0], bottom, start_end[1]]);
        painter.region_vertical(plate, [rear[0], top, rear[1]], [rear_end[0], bottom, rear_end[1]]);
        painter.region_vertical(plate, [start[0], top, start[1]], [rear[0], bottom, rear[1]]);
        painter.region_vertical(plate, [start_end[0], top, start_end[1]], [rear_end[0], bottom, rear_end[1]]);
        painter.region_horizontal(plate, start, rear_end, bottom);
        painter.region_horizontal(plate, start, rear_end, top);
    }
    mesh.finish()
}

#[cfg(test)]
mod tests {
    use chunkray_world::{ChunkBuilder, ChunkPos, PaintingPlacement};

    use super::*;

    fn chunk_with(paintings: Vec<PaintingPlacement>) -> Chunk {
        let mut builder = ChunkBuilder::new(ChunkPos::new(1, 2));
        for painting in paintings {
            builder.add_painting(painting);
        }
        builder.build()
    }

    #[test]
    fn unknown_motives_are_skipped() {
        let chunk = chunk_with(vec![PaintingPlacement::new((20, 64, 40), 0, "NotAPainting")]);
        assert!(mesh_paintings(&chunk, &PaintingTable::classic()).is_empty());
    }

    #[test]
    fn known_motive_emits_a_closed_slab() {
        let chunk = chunk_with(vec![
            PaintingPlacement::new((20, 64, 40), 0, "Kebab"),
            PaintingPlacement::new((21, 64, 40), 1, "nope"),
        ]);
        let mesh = mesh_paintings(&chunk, &PaintingTable::classic());
        assert_eq!(mesh.quad_count(), 6);
    }

    #[test]
    fn face_spans_the_motive_size() {
        let table = PaintingTable::classic();
        let info = *table.get("Skeleton").expect("classic motive");
        let chunk = chunk_with(vec![PaintingPlacement::new((20, 64, 40), 2, "skeleton")]);
        let mesh = mesh_paintings(&chunk, &table);

        let face = &mesh.vertices[..4];
        let xs = face.iter().map(|v| v.position[0]);
        let width = xs.clone().fold(f32::MIN, f32::max) - xs.fold(f32::MAX, f32::min);
        assert!((width - info.size_x).abs() < 1e-5);
        let ys = face.iter().map(|v| v.position[1]);
        let height = ys.clone().fold(f32::MIN, f32::max) - ys.fold(f32::MAX, f32::min);
        assert!((height - info.size_y).abs() < 1e-5);
        assert!(face.iter().all(|v| (v.position[2] - (40.5 + TEX16)).abs() < 1e-5));
    }
}
